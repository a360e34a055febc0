//! Board state: grid occupancy, placed vessels and attack history.

use alloc::vec::Vec;
use core::fmt;

use crate::common::{AttackOutcome, GameError};
use crate::config::BOARD_SIZE;
use crate::coord::{Coordinate, Orientation};
use crate::vessel::Vessel;

/// Handle to a vessel placed on a particular board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VesselId(usize);

impl VesselId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Contents of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// Segment `segment` of `vessel` sits here; whether it was hit is
    /// tracked by the vessel itself.
    Occupied { vessel: VesselId, segment: usize },
    Missed,
}

/// Display-oriented view of a cell, with hit state resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Empty,
    Ship {
        vessel: VesselId,
        segment: usize,
        hit: bool,
    },
    Miss,
}

/// Read-only copy of a whole board.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    cells: [[CellView; BOARD_SIZE]; BOARD_SIZE],
}

impl Snapshot {
    /// View at `coord`, or `None` when off the grid.
    pub fn get(&self, coord: Coordinate) -> Option<CellView> {
        if coord.in_bounds() {
            Some(self.cells[coord.row][coord.col])
        } else {
            None
        }
    }

    pub fn rows(&self) -> &[[CellView; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Number of struck vessel segments.
    pub fn hits(&self) -> usize {
        self.count(|v| matches!(v, CellView::Ship { hit: true, .. }))
    }

    pub fn misses(&self) -> usize {
        self.count(|v| matches!(v, CellView::Miss))
    }

    fn count(&self, pred: impl Fn(&CellView) -> bool) -> usize {
        self.cells.iter().flatten().filter(|v| pred(*v)).count()
    }
}

impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Snapshot")?;
        for row in self.cells.iter() {
            for view in row.iter() {
                let ch = match view {
                    CellView::Empty => '.',
                    CellView::Miss => 'o',
                    CellView::Ship { hit: true, .. } => 'X',
                    CellView::Ship { hit: false, .. } => 'S',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A 10×10 grid owned by one combatant.
#[derive(Clone)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    vessels: Vec<Vessel>,
    missed: Vec<Coordinate>,
}

impl Board {
    /// Create an empty board (no vessels placed, nothing attacked).
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            vessels: Vec::new(),
            missed: Vec::new(),
        }
    }

    /// Check that a run of `length` cells from `origin` fits on the grid and
    /// touches only empty cells. Does not modify the board.
    pub fn check_placement(
        &self,
        length: usize,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        for i in 0..length {
            run_cell(origin, orientation, i)?;
        }
        for i in 0..length {
            let cell = run_cell(origin, orientation, i)?;
            if self.cells[cell.row][cell.col] != Cell::Empty {
                return Err(GameError::Collision(cell));
            }
        }
        Ok(())
    }

    /// Place `vessel` with its bow at `origin`, extending along `orientation`.
    ///
    /// The whole run is validated before any cell is written, so a failed
    /// placement leaves the board untouched.
    pub fn place_vessel(
        &mut self,
        vessel: Vessel,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<VesselId, GameError> {
        self.check_placement(vessel.length(), origin, orientation)?;

        let id = VesselId(self.vessels.len());
        for segment in 0..vessel.length() {
            let cell = run_cell(origin, orientation, segment)?;
            self.cells[cell.row][cell.col] = Cell::Occupied {
                vessel: id,
                segment,
            };
        }
        log::debug!(
            "placed {} (length {}) at {} {:?}",
            vessel.name(),
            vessel.length(),
            origin,
            orientation
        );
        self.vessels.push(vessel);
        Ok(id)
    }

    /// Resolve an incoming attack at `coord`.
    pub fn receive_attack(&mut self, coord: Coordinate) -> Result<AttackOutcome, GameError> {
        if !coord.in_bounds() {
            return Err(GameError::OutOfBounds(coord));
        }
        let outcome = match self.cells[coord.row][coord.col] {
            Cell::Missed => return Err(GameError::AlreadyAttacked(coord)),
            Cell::Occupied { vessel, segment } => {
                let target = &mut self.vessels[vessel.0];
                if target.is_segment_hit(segment) {
                    return Err(GameError::AlreadyAttacked(coord));
                }
                target.hit(segment)?;
                AttackOutcome::Hit
            }
            Cell::Empty => {
                self.cells[coord.row][coord.col] = Cell::Missed;
                self.missed.push(coord);
                AttackOutcome::Miss
            }
        };
        log::debug!("attack at {} resolved as {}", coord, outcome);
        Ok(outcome)
    }

    /// Contents of the cell at `coord`, or `None` when off the grid.
    pub fn cell(&self, coord: Coordinate) -> Option<Cell> {
        if coord.in_bounds() {
            Some(self.cells[coord.row][coord.col])
        } else {
            None
        }
    }

    /// Vessel occupying `coord`, if any. Off-grid, empty and missed cells
    /// all yield `None`.
    pub fn ship_at(&self, coord: Coordinate) -> Option<&Vessel> {
        match self.cell(coord)? {
            Cell::Occupied { vessel, .. } => self.vessel(vessel),
            Cell::Empty | Cell::Missed => None,
        }
    }

    pub fn vessel(&self, id: VesselId) -> Option<&Vessel> {
        self.vessels.get(id.0)
    }

    /// Vessels in placement order; `VesselId::index` indexes this slice.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Missed attacks in the order they happened.
    pub fn missed_attacks(&self) -> &[Coordinate] {
        &self.missed
    }

    /// `true` when at least one vessel is placed and every vessel is sunk.
    pub fn all_vessels_sunk(&self) -> bool {
        !self.vessels.is_empty() && self.vessels.iter().all(Vessel::is_sunk)
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut cells = [[CellView::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                cells[r][c] = match *cell {
                    Cell::Empty => CellView::Empty,
                    Cell::Missed => CellView::Miss,
                    Cell::Occupied { vessel, segment } => CellView::Ship {
                        vessel,
                        segment,
                        hit: self.vessels[vessel.0].is_segment_hit(segment),
                    },
                };
            }
        }
        Snapshot { cells }
    }
}

/// Cell `offset` steps along a placement run, checked against the grid.
fn run_cell(
    origin: Coordinate,
    orientation: Orientation,
    offset: usize,
) -> Result<Coordinate, GameError> {
    match orientation.step(origin, offset) {
        Some(cell) if cell.in_bounds() => Ok(cell),
        Some(cell) => Err(GameError::OutOfBounds(cell)),
        None => Err(GameError::OutOfBounds(origin)),
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  vessels: {:?},\n  missed: {:?},\n  grid: {:?}\n}}",
            self.vessels,
            self.missed,
            self.snapshot()
        )
    }
}

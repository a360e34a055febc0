//! A fixed-size set of board cells packed into a `u128`.
//!
//! The type is `no_std` friendly and avoids heap allocations. Cell `(r, c)`
//! maps to bit `r * BOARD_SIZE + c`.

use core::fmt;

use crate::config::{BOARD_SIZE, CELL_COUNT};
use crate::coord::Coordinate;

const _: () = assert!(CELL_COUNT <= u128::BITS as usize);

/// Set of in-grid coordinates.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellSet {
    bits: u128,
}

impl CellSet {
    #[inline]
    fn mask() -> u128 {
        if CELL_COUNT == u128::BITS as usize {
            !0
        } else {
            (1u128 << CELL_COUNT) - 1
        }
    }

    /// Create an empty set.
    #[inline]
    pub const fn new() -> Self {
        CellSet { bits: 0 }
    }

    /// Number of cells in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns `true` once every grid cell is present.
    pub fn is_full(&self) -> bool {
        self.bits == Self::mask()
    }

    /// Off-grid coordinates are never members.
    pub fn contains(&self, coord: Coordinate) -> bool {
        match coord.index() {
            Some(idx) => (self.bits >> idx) & 1 == 1,
            None => false,
        }
    }

    /// Adds `coord`; returns `false` when it was already present or off-grid.
    pub fn insert(&mut self, coord: Coordinate) -> bool {
        let Some(idx) = coord.index() else {
            return false;
        };
        let bit = 1u128 << idx;
        let fresh = self.bits & bit == 0;
        self.bits |= bit;
        fresh
    }
}

impl fmt::Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellSet ({} cells)", self.len())?;
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                let ch = if self.contains(Coordinate::new(r, c)) { '1' } else { '.' };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

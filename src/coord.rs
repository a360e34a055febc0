//! Grid coordinates and placement orientation.

use core::fmt;
use core::str::FromStr;

use crate::common::GameError;
use crate::config::BOARD_SIZE;

/// A `(row, col)` position, zero-indexed.
///
/// Components are unbounded so that callers can express positions off the
/// grid; boards reject them with [`GameError::OutOfBounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns `true` when the coordinate lies within `[0, BOARD_SIZE)²`.
    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Row-major cell index, or `None` when off the grid.
    pub fn index(&self) -> Option<usize> {
        if self.in_bounds() {
            Some(self.row * BOARD_SIZE + self.col)
        } else {
            None
        }
    }

    pub fn from_index(idx: usize) -> Self {
        Self::new(idx / BOARD_SIZE, idx % BOARD_SIZE)
    }

    /// Iterate over every in-grid coordinate in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE * BOARD_SIZE).map(Coordinate::from_index)
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Parses either `"row,col"` (zero-indexed) or board notation such as `"B3"`
/// (column letter `A`-`J`, one-based row).
impl FromStr for Coordinate {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some((r, c)) = s.split_once(',') {
            return Ok(Self::new(parse_index(r.trim())?, parse_index(c.trim())?));
        }

        let mut chars = s.chars();
        let col = chars
            .next()
            .filter(char::is_ascii_alphabetic)
            .map(|ch| (ch.to_ascii_uppercase() as u8 - b'A') as usize)
            .filter(|&col| col < BOARD_SIZE)
            .ok_or(GameError::InvalidCoordinate)?;
        let row = parse_index(chars.as_str())?;
        if row == 0 {
            return Err(GameError::InvalidCoordinate);
        }
        Ok(Self::new(row - 1, col))
    }
}

/// Unsigned decimal; rejects the leading `+` that `usize::from_str` allows.
fn parse_index(s: &str) -> Result<usize, GameError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GameError::InvalidCoordinate);
    }
    s.parse().map_err(|_| GameError::InvalidCoordinate)
}

/// Direction a vessel extends from its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Increasing column.
    Horizontal,
    /// Increasing row.
    Vertical,
}

impl Orientation {
    /// Cell `offset` steps from `origin`, or `None` on arithmetic overflow.
    pub fn step(self, origin: Coordinate, offset: usize) -> Option<Coordinate> {
        match self {
            Orientation::Horizontal => origin
                .col
                .checked_add(offset)
                .map(|col| Coordinate::new(origin.row, col)),
            Orientation::Vertical => origin
                .row
                .checked_add(offset)
                .map(|row| Coordinate::new(row, origin.col)),
        }
    }
}

impl FromStr for Orientation {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("horizontal") || s.eq_ignore_ascii_case("h") {
            Ok(Orientation::Horizontal)
        } else if s.eq_ignore_ascii_case("vertical") || s.eq_ignore_ascii_case("v") {
            Ok(Orientation::Vertical)
        } else {
            Err(GameError::InvalidOrientation)
        }
    }
}

//! Common types for the engine: attack outcomes and the error taxonomy.

use crate::coord::Coordinate;
use crate::game::Seat;

/// Result of an attack that resolved against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// Attack struck a previously untouched vessel segment.
    Hit,
    /// Attack landed on open water.
    Miss,
}

impl core::fmt::Display for AttackOutcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AttackOutcome::Hit => write!(f, "hit"),
            AttackOutcome::Miss => write!(f, "miss"),
        }
    }
}

/// Errors returned by vessel, board, combatant and game operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Vessel length must be at least one.
    InvalidLength(i64),
    /// Segment index outside `[0, length)`.
    OutOfRange { index: usize, length: usize },
    /// Combatant display name is empty or blank.
    InvalidName,
    /// Combatant kind was not recognised.
    InvalidKind,
    /// Orientation was not recognised.
    InvalidOrientation,
    /// Coordinate malformed, or missing where one is required.
    InvalidCoordinate,
    /// Coordinate (or part of a placement run) lies outside the grid.
    OutOfBounds(Coordinate),
    /// Placement run overlaps an occupied cell.
    Collision(Coordinate),
    /// Cell was already resolved by an earlier attack.
    AlreadyAttacked(Coordinate),
    /// Attack issued without a usable opponent.
    InvalidOpponent,
    /// Every cell has already been targeted by this combatant.
    NoTargetsLeft,
    /// Random placement gave up after too many attempts.
    PlacementExhausted,
    /// Operation not allowed in the current game phase.
    WrongPhase,
    /// A seat tried to start the game without any vessels.
    FleetIncomplete(Seat),
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidLength(len) => {
                write!(f, "Vessel length must be greater than zero (got {})", len)
            }
            GameError::OutOfRange { index, length } => {
                write!(f, "Segment {} is outside vessel of length {}", index, length)
            }
            GameError::InvalidName => write!(f, "Combatant name must be a non-empty string"),
            GameError::InvalidKind => {
                write!(f, "Combatant kind must be \"controlled\" or \"autonomous\"")
            }
            GameError::InvalidOrientation => {
                write!(f, "Orientation must be \"horizontal\" or \"vertical\"")
            }
            GameError::InvalidCoordinate => write!(f, "Coordinate must be a (row, col) pair"),
            GameError::OutOfBounds(c) => write!(f, "Coordinate {} is out of bounds", c),
            GameError::Collision(c) => write!(f, "Placement collides with a vessel at {}", c),
            GameError::AlreadyAttacked(c) => write!(f, "Coordinate {} was already attacked", c),
            GameError::InvalidOpponent => write!(f, "No valid opponent supplied"),
            GameError::NoTargetsLeft => write!(f, "Every coordinate has already been targeted"),
            GameError::PlacementExhausted => write!(f, "Unable to place vessel"),
            GameError::WrongPhase => write!(f, "Operation not allowed in the current phase"),
            GameError::FleetIncomplete(seat) => write!(f, "{:?} seat has no vessels placed", seat),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

// Target selection for autonomous combatants: uniform draws over the grid,
// skipping cells already targeted.

use rand::Rng;

use crate::cellset::CellSet;
use crate::common::GameError;
use crate::config::BOARD_SIZE;
use crate::coord::Coordinate;

/// Source of candidate attack coordinates.
///
/// Every `rand::Rng` is a source drawing uniformly over the grid. Tests can
/// plug in their own implementation to force a deterministic sequence.
///
/// An implementation must eventually yield every in-grid cell. A source
/// that only repeats targeted or off-grid cells makes [`pick_untargeted`]
/// spin forever; it does not give up on its own.
pub trait TargetSource {
    /// Produce the next candidate. Candidates may repeat or fall off the
    /// grid; callers discard those and draw again.
    fn draw(&mut self) -> Coordinate;
}

impl<R: Rng + ?Sized> TargetSource for R {
    fn draw(&mut self) -> Coordinate {
        Coordinate::new(
            self.random_range(0..BOARD_SIZE),
            self.random_range(0..BOARD_SIZE),
        )
    }
}

/// Draw from `source` until it yields an in-grid cell not in `targeted`.
///
/// Fails with [`GameError::NoTargetsLeft`] when every cell is already taken.
pub fn pick_untargeted<S: TargetSource + ?Sized>(
    source: &mut S,
    targeted: &CellSet,
) -> Result<Coordinate, GameError> {
    if targeted.is_full() {
        return Err(GameError::NoTargetsLeft);
    }
    loop {
        let candidate = source.draw();
        if candidate.in_bounds() && !targeted.contains(candidate) {
            return Ok(candidate);
        }
        log::trace!("redrawing target, {} already used", candidate);
    }
}

//! Standard fleet and random placement for computer-controlled setup.

use alloc::vec::Vec;

use rand::Rng;

use crate::board::{Board, VesselId};
use crate::combatant::Combatant;
use crate::common::GameError;
use crate::config::{BOARD_SIZE, FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::coord::{Coordinate, Orientation};
use crate::vessel::Vessel;

/// Fresh vessels for the standard five-ship fleet, largest first.
pub fn standard_fleet() -> Result<Vec<Vessel>, GameError> {
    FLEET.iter().map(|spec| spec.build()).collect()
}

/// Returns a random origin and orientation where a vessel of `length` fits
/// on `board` without overlap.
pub fn random_placement<R: Rng + ?Sized>(
    board: &Board,
    length: usize,
    rng: &mut R,
) -> Result<(Coordinate, Orientation), GameError> {
    if length == 0 || length > BOARD_SIZE {
        return Err(GameError::PlacementExhausted);
    }
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let orient = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let (max_r, max_c) = match orient {
            Orientation::Horizontal => (BOARD_SIZE - 1, BOARD_SIZE - length),
            Orientation::Vertical => (BOARD_SIZE - length, BOARD_SIZE - 1),
        };
        let origin = Coordinate::new(rng.random_range(0..=max_r), rng.random_range(0..=max_c));
        if board.check_placement(length, origin, orient).is_ok() {
            return Ok((origin, orient));
        }
    }
    Err(GameError::PlacementExhausted)
}

/// Place `vessel` on `combatant`'s board at a random free position.
pub fn place_randomly<R: Rng + ?Sized>(
    combatant: &mut Combatant,
    vessel: Vessel,
    rng: &mut R,
) -> Result<VesselId, GameError> {
    let (origin, orient) = random_placement(combatant.board(), vessel.length(), rng)?;
    combatant.place_vessel(vessel, origin, orient)
}

/// Place every vessel of `fleet` at random, in order.
pub fn place_fleet_randomly<R, I>(
    combatant: &mut Combatant,
    fleet: I,
    rng: &mut R,
) -> Result<Vec<VesselId>, GameError>
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = Vessel>,
{
    fleet
        .into_iter()
        .map(|vessel| place_randomly(combatant, vessel, rng))
        .collect()
}

use crate::vessel::VesselSpec;

/// Side length of every board.
pub const BOARD_SIZE: usize = 10;
/// Number of cells on a board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Number of vessels each combatant places.
pub const FLEET_SIZE: usize = 5;
/// The standard fleet, largest vessel first.
pub const FLEET: [VesselSpec; FLEET_SIZE] = [
    VesselSpec::new("Carrier", 5),
    VesselSpec::new("Battleship", 4),
    VesselSpec::new("Destroyer", 3),
    VesselSpec::new("Submarine", 3),
    VesselSpec::new("Patrol Boat", 2),
];

/// Total number of vessel segments in the standard fleet.
pub const FLEET_CELLS: usize = fleet_cells(&FLEET);

/// Upper bound on draws when placing a single vessel at random.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;

/// Name given to vessels created without one.
pub const DEFAULT_VESSEL_NAME: &str = "Unnamed Ship";

const fn fleet_cells(fleet: &[VesselSpec]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fleet.len() {
        total += fleet[i].length();
        i += 1;
    }
    total
}

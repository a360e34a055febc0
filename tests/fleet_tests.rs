use battleship_core::fleet::{
    place_fleet_randomly, place_randomly, random_placement, standard_fleet,
};
use battleship_core::{
    Board, Cell, Combatant, CombatantKind, Coordinate, GameError, Orientation, Vessel, BOARD_SIZE,
    FLEET, FLEET_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn c(row: usize, col: usize) -> Coordinate {
    Coordinate::new(row, col)
}

fn occupied(board: &Board) -> usize {
    Coordinate::all()
        .filter(|&coord| matches!(board.cell(coord), Some(Cell::Occupied { .. })))
        .count()
}

#[test]
fn test_fleet_cells_matches_fleet() {
    let total: usize = FLEET.iter().map(|spec| spec.length()).sum();
    assert_eq!(FLEET_CELLS, total);
}

#[test]
fn test_unplaceable_lengths_exhaust() {
    let board = Board::new();
    let mut rng = SmallRng::seed_from_u64(5);
    assert_eq!(
        random_placement(&board, 0, &mut rng),
        Err(GameError::PlacementExhausted)
    );
    assert_eq!(
        random_placement(&board, BOARD_SIZE + 1, &mut rng),
        Err(GameError::PlacementExhausted)
    );
}

#[test]
fn test_full_board_exhausts_placement() -> Result<(), GameError> {
    let mut board = Board::new();
    for row in 0..BOARD_SIZE {
        board.place_vessel(
            Vessel::new(BOARD_SIZE as i64, "Wall")?,
            c(row, 0),
            Orientation::Horizontal,
        )?;
    }
    let before = board.snapshot();

    let mut rng = SmallRng::seed_from_u64(9);
    assert_eq!(
        random_placement(&board, 2, &mut rng),
        Err(GameError::PlacementExhausted)
    );
    assert_eq!(board.snapshot(), before);
    Ok(())
}

#[test]
fn test_single_free_cell_is_found() -> Result<(), GameError> {
    let mut board = Board::new();
    for row in 0..BOARD_SIZE - 1 {
        board.place_vessel(
            Vessel::new(BOARD_SIZE as i64, "Wall")?,
            c(row, 0),
            Orientation::Horizontal,
        )?;
    }
    board.place_vessel(
        Vessel::new(BOARD_SIZE as i64 - 1, "Short wall")?,
        c(BOARD_SIZE - 1, 0),
        Orientation::Horizontal,
    )?;

    let mut rng = SmallRng::seed_from_u64(11);
    let (origin, _) = random_placement(&board, 1, &mut rng)?;
    assert_eq!(origin, c(BOARD_SIZE - 1, BOARD_SIZE - 1));
    assert_eq!(
        random_placement(&board, 2, &mut rng),
        Err(GameError::PlacementExhausted)
    );
    Ok(())
}

#[test]
fn test_place_randomly_on_full_board_leaves_it_unchanged() -> Result<(), GameError> {
    let mut admiral = Combatant::with_seed("Admiral", CombatantKind::Autonomous, 3)?;
    for row in 0..BOARD_SIZE {
        admiral.place_vessel(
            Vessel::new(BOARD_SIZE as i64, "Wall")?,
            c(row, 0),
            Orientation::Horizontal,
        )?;
    }
    let before = admiral.board().snapshot();

    let mut rng = SmallRng::seed_from_u64(21);
    assert_eq!(
        place_randomly(&mut admiral, Vessel::new(3, "Destroyer")?, &mut rng),
        Err(GameError::PlacementExhausted)
    );
    assert_eq!(admiral.board().snapshot(), before);
    assert_eq!(admiral.board().vessels().len(), BOARD_SIZE);
    Ok(())
}

#[test]
fn test_standard_fleet_placed_without_overlap() -> Result<(), GameError> {
    let mut admiral = Combatant::with_seed("Admiral", CombatantKind::Autonomous, 3)?;
    let mut rng = SmallRng::seed_from_u64(42);
    let ids = place_fleet_randomly(&mut admiral, standard_fleet()?, &mut rng)?;

    assert_eq!(ids.len(), FLEET.len());
    assert_eq!(occupied(admiral.board()), FLEET_CELLS);
    for (vessel, spec) in admiral.board().vessels().iter().zip(FLEET.iter()) {
        assert_eq!(vessel.name(), spec.name());
        assert_eq!(vessel.length(), spec.length());
    }
    Ok(())
}

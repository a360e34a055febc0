use battleship_core::{CellSet, Coordinate, CELL_COUNT};

#[test]
fn test_insert_and_contains() {
    let mut set = CellSet::new();
    assert!(set.is_empty());

    assert!(set.insert(Coordinate::new(1, 1)));
    assert!(set.contains(Coordinate::new(1, 1)));
    // second insert reports a duplicate
    assert!(!set.insert(Coordinate::new(1, 1)));
    assert_eq!(set.len(), 1);

    assert!(set.insert(Coordinate::new(9, 9)));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_off_grid_never_member() {
    let mut set = CellSet::new();
    assert!(!set.insert(Coordinate::new(10, 0)));
    assert!(!set.insert(Coordinate::new(0, 42)));
    assert!(!set.contains(Coordinate::new(10, 0)));
    assert!(set.is_empty());
}

#[test]
fn test_full_after_every_cell() {
    let mut set = CellSet::new();
    for coord in Coordinate::all() {
        assert!(!set.is_full());
        assert!(set.insert(coord));
    }
    assert!(set.is_full());
    assert_eq!(set.len(), CELL_COUNT);
    assert!(!set.insert(Coordinate::new(5, 5)));
}

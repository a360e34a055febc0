use battleship_core::{level_from, CombatantKind, Coordinate, GameError, Orientation};
use log::LevelFilter;

#[test]
fn test_parse_row_col_pairs() {
    assert_eq!("4,7".parse::<Coordinate>(), Ok(Coordinate::new(4, 7)));
    assert_eq!(" 0 , 9 ".parse::<Coordinate>(), Ok(Coordinate::new(0, 9)));
    // well-formed but off the grid; the board decides
    assert_eq!("12,3".parse::<Coordinate>(), Ok(Coordinate::new(12, 3)));
}

#[test]
fn test_parse_board_notation() {
    assert_eq!("A1".parse::<Coordinate>(), Ok(Coordinate::new(0, 0)));
    assert_eq!("b3".parse::<Coordinate>(), Ok(Coordinate::new(2, 1)));
    assert_eq!("J10".parse::<Coordinate>(), Ok(Coordinate::new(9, 9)));
}

#[test]
fn test_malformed_coordinates() {
    for bad in [
        "", "4", "4,", ",4", "x,y", "-1,2", "1,2,3", "A0", "A", "11", "?5", "Z1", "K3", "B+3",
        "+1,2", "1,+2",
    ] {
        assert_eq!(
            bad.parse::<Coordinate>(),
            Err(GameError::InvalidCoordinate),
            "input {:?}",
            bad
        );
    }
}

#[test]
fn test_parse_orientation() {
    assert_eq!("horizontal".parse::<Orientation>(), Ok(Orientation::Horizontal));
    assert_eq!("Vertical".parse::<Orientation>(), Ok(Orientation::Vertical));
    assert_eq!("h".parse::<Orientation>(), Ok(Orientation::Horizontal));
    assert_eq!(
        "diagonal".parse::<Orientation>(),
        Err(GameError::InvalidOrientation)
    );
}

#[test]
fn test_parse_kind() {
    assert_eq!("controlled".parse::<CombatantKind>(), Ok(CombatantKind::Controlled));
    assert_eq!("autonomous".parse::<CombatantKind>(), Ok(CombatantKind::Autonomous));
    assert_eq!("COMPUTER".parse::<CombatantKind>(), Ok(CombatantKind::Autonomous));
    assert_eq!("robot".parse::<CombatantKind>(), Err(GameError::InvalidKind));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        GameError::AlreadyAttacked(Coordinate::new(4, 4)).to_string(),
        "Coordinate (4, 4) was already attacked"
    );
    assert_eq!(
        GameError::OutOfRange { index: 5, length: 3 }.to_string(),
        "Segment 5 is outside vessel of length 3"
    );
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
    assert_eq!(level_from(Some(" TRACE ")), LevelFilter::Trace);
    assert_eq!(level_from(Some("nonsense")), LevelFilter::Info);
    assert_eq!(level_from(None), LevelFilter::Info);
}

use battleship_core::Vessel;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Sunk exactly when every segment is hit, and stays sunk.
    #[test]
    fn sunk_is_monotonic(len in 1i64..=8, order in proptest::collection::vec(0usize..8, 0..32)) {
        let mut vessel = Vessel::new(len, "Prop").unwrap();
        let mut was_sunk = false;
        for idx in order {
            let before = vessel.hit_count();
            match vessel.hit(idx) {
                Ok(true) => prop_assert_eq!(vessel.hit_count(), before + 1),
                Ok(false) => prop_assert_eq!(vessel.hit_count(), before),
                Err(_) => {
                    prop_assert!(idx >= len as usize);
                    prop_assert_eq!(vessel.hit_count(), before);
                }
            }
            prop_assert_eq!(vessel.is_sunk(), vessel.hit_count() == vessel.length());
            if was_sunk {
                prop_assert!(vessel.is_sunk());
            }
            was_sunk = vessel.is_sunk();
        }
    }
}

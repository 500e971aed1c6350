//! Unit tests for pbs-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ItemNumber, RobotId};

    #[test]
    fn index_roundtrip() {
        assert_eq!(RobotId(3).index(), 2);
        assert_eq!(RobotId::from_index(2), RobotId(3));
    }

    #[test]
    fn all_is_ascending() {
        let ids: Vec<_> = RobotId::all().collect();
        assert_eq!(ids, vec![RobotId(1), RobotId(2), RobotId(3), RobotId(4), RobotId(5)]);
    }

    #[test]
    fn exit_sentinel() {
        assert_eq!(ItemNumber::EXITED, ItemNumber(999));
        assert_eq!(ItemNumber(42).to_string(), "#42");
    }
}

#[cfg(test)]
mod pos {
    use crate::GridPos;

    #[test]
    fn io_distance_is_manhattan_to_exit() {
        assert_eq!(GridPos::new(0, 7).io_distance(), 0);
        assert_eq!(GridPos::new(4, 2).io_distance(), 9);
        assert_eq!(GridPos::new(8, 14).io_distance(), 15);
    }

    #[test]
    fn neighbours_clamp_instead_of_wrapping() {
        let corner = GridPos::new(0, 0);
        assert_eq!(corner.up(), corner);
        assert_eq!(corner.left(), corner);
        assert_eq!(corner.down(), GridPos::new(1, 0));
        assert_eq!(corner.right(), GridPos::new(0, 1));

        let far = GridPos::new(8, 14);
        assert_eq!(far.down(), far);
        assert_eq!(far.right(), far);
    }

    #[test]
    fn neighbours_skip_clamped_self() {
        let corner = GridPos::new(0, 0);
        let n: Vec<_> = corner.neighbours().collect();
        assert_eq!(n, vec![GridPos::new(1, 0), GridPos::new(0, 1)]);

        let interior = GridPos::new(4, 7);
        assert_eq!(interior.neighbours().count(), 4);
    }
}

#[cfg(test)]
mod side {
    use crate::Side;

    #[test]
    fn construction_side_splits_at_column_7() {
        assert_eq!(Side::of_column(0), Side::Left);
        assert_eq!(Side::of_column(6), Side::Left);
        assert_eq!(Side::of_column(7), Side::Center);
        assert_eq!(Side::of_column(8), Side::Right);
    }

    #[test]
    fn dispatch_side_counts_column_7_as_right() {
        assert_eq!(Side::of_dispatch(6), Side::Left);
        assert_eq!(Side::of_dispatch(7), Side::Right);
        assert_eq!(Side::of_dispatch(14), Side::Right);
    }
}

#[cfg(test)]
mod layout {
    use crate::GridPos;
    use crate::layout::{default_tick_cap, in_arbitration_zone, in_restricted_zone};

    #[test]
    fn restricted_zone_bounds() {
        assert!(in_restricted_zone(GridPos::new(0, 7)));
        assert!(in_restricted_zone(GridPos::new(3, 5)));
        assert!(in_restricted_zone(GridPos::new(3, 8)));
        assert!(!in_restricted_zone(GridPos::new(4, 7)));
        assert!(!in_restricted_zone(GridPos::new(0, 4)));
        assert!(!in_restricted_zone(GridPos::new(2, 9)));
    }

    #[test]
    fn arbitration_zone_contains_restricted_zone() {
        for row in 0..=3 {
            for col in 5..=8 {
                assert!(in_arbitration_zone(GridPos::new(row, col)));
            }
        }
        assert!(in_arbitration_zone(GridPos::new(5, 4)));
        assert!(!in_arbitration_zone(GridPos::new(6, 7)));
        assert!(!in_arbitration_zone(GridPos::new(0, 11)));
    }

    #[test]
    fn tick_cap_scales_with_items() {
        // 10 × items × perimeter (48)
        assert_eq!(default_tick_cap(1), 480);
        assert_eq!(default_tick_cap(10), 4800);
        // an empty retrieval list still gets a non-zero budget
        assert_eq!(default_tick_cap(0), 480);
    }
}

#[cfg(test)]
mod step {
    use crate::{GridPos, PlannedStep, Step};

    #[test]
    fn fictitious_moves_stand_still() {
        let s = Step::fictitious(GridPos::new(3, 3));
        assert!(s.is_fictitious());
        assert!(!s.carries);
    }

    #[test]
    fn check_is_not_a_movement() {
        let m = PlannedStep::movement(GridPos::new(1, 1), GridPos::new(1, 2), true);
        assert!(matches!(m, PlannedStep::Move(s) if s.carries));
        assert!(matches!(PlannedStep::Check, PlannedStep::Check));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(666);
        let mut b = SimRng::new(666);
        for _ in 0..32 {
            assert_eq!(a.coin(), b.coin());
            assert_eq!(a.gen_range(0..100u32), b.gen_range(0..100u32));
        }
    }

    #[test]
    fn choose_is_none_on_empty() {
        let mut rng = SimRng::new(1);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[7u8]), Some(&7));
    }
}

#[cfg(test)]
mod config {
    use crate::SimConfig;

    #[test]
    fn default_seed_is_fixed() {
        assert_eq!(SimConfig::default().seed, 666);
    }

    #[test]
    fn explicit_cap_wins() {
        let cfg = SimConfig { seed: 1, max_ticks: Some(123) };
        assert_eq!(cfg.tick_cap(50), 123);
        let derived = SimConfig::default();
        assert_eq!(derived.tick_cap(2), 960);
    }
}

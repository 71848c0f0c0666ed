//! Unit tests for atc-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ActorId, RunId};

    #[test]
    fn index_roundtrip() {
        let id = ActorId(3);
        assert_eq!(id.index(), 2);
        assert_eq!(ActorId::from_index(2), id);
    }

    #[test]
    fn ordering() {
        assert!(ActorId(1) < ActorId(2));
        assert!(RunId(10) > RunId(9));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(ActorId::INVALID.0, u32::MAX);
        assert_eq!(RunId::INVALID.0, u64::MAX);
    }

    #[test]
    fn generation_advances() {
        assert_eq!(RunId(0).next(), RunId(1));
    }

    #[test]
    fn display() {
        assert_eq!(ActorId(7).to_string(), "ActorId(7)");
    }
}

#[cfg(test)]
mod vec2 {
    use crate::Vec2;

    #[test]
    fn lateral_separation_ignores_altitude() {
        let a = Vec2::new(100.0, 470.0);
        let b = Vec2::new(250.0, -100.0);
        assert_eq!(a.lateral_separation(b), 150.0);
        assert_eq!(b.lateral_separation(a), 150.0);
    }

    #[test]
    fn zero_separation() {
        let p = Vec2::new(42.0, 0.0);
        assert_eq!(p.lateral_separation(p), 0.0);
    }
}

#[cfg(test)]
mod state {
    use crate::ActorState;

    #[test]
    fn u8_roundtrip() {
        for s in ActorState::ALL {
            assert_eq!(ActorState::from_u8(s as u8).unwrap(), s);
        }
    }

    #[test]
    fn bad_byte_rejected() {
        assert!(ActorState::from_u8(5).is_err());
        assert!(ActorState::from_u8(255).is_err());
    }

    #[test]
    fn lifecycle_order_is_total() {
        let order = ActorState::ALL;
        for pair in order.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn ground_window() {
        assert!(!ActorState::Approaching.on_ground());
        assert!(!ActorState::Descending.on_ground());
        assert!(ActorState::OnResource.on_ground());
        assert!(ActorState::Vacating.on_ground());
        assert!(!ActorState::Done.on_ground());
    }

    #[test]
    fn done_is_invisible() {
        assert!(ActorState::Vacating.visible());
        assert!(!ActorState::Done.visible());
    }
}

#[cfg(test)]
mod config {
    use std::time::Duration;

    use crate::RunConfig;

    #[test]
    fn defaults_validate() {
        RunConfig::default().validate().unwrap();
    }

    #[test]
    fn zero_fleet_rejected() {
        let cfg = RunConfig { fleet_size: 0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_capacity_rejected() {
        let cfg = RunConfig { runway_capacity: 0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn upward_descent_rejected() {
        let cfg = RunConfig { descent_dy: -2.0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn exit_right_of_spawn_rejected() {
        let cfg = RunConfig { exit_x: 900.0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn start_offsets_stagger() {
        let cfg = RunConfig {
            start_interval: Duration::from_millis(10),
            ..Default::default()
        };
        assert_eq!(cfg.start_offset(0), Duration::ZERO);
        assert_eq!(cfg.start_offset(3), Duration::from_millis(30));
    }

    #[test]
    fn descent_tick_count() {
        // 570 px of drop at 2 px/tick → 285 ticks.
        assert_eq!(RunConfig::default().descent_ticks(), 285);
    }
}

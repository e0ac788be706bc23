//! Unit tests for od-core primitives.

#[cfg(test)]
mod ids {
    use crate::WorkerId;

    #[test]
    fn index_roundtrip() {
        let id = WorkerId(7);
        assert_eq!(id.index(), 7);
        assert_eq!(WorkerId::try_from(7usize).unwrap(), id);
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(WorkerId::default(), WorkerId::INVALID);
        assert_eq!(WorkerId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(WorkerId(3).to_string(), "WorkerId(3)");
    }
}

#[cfg(test)]
mod time {
    use crate::{CoreError, SimTime};

    #[test]
    fn new_accepts_zero_and_positive() {
        assert_eq!(SimTime::new(0.0).unwrap(), SimTime::ZERO);
        assert_eq!(SimTime::new(12.5).unwrap(), SimTime(12.5));
    }

    #[test]
    fn new_normalizes_negative_zero() {
        let t = SimTime::new(-0.0).unwrap();
        assert!(t.0.is_sign_positive());
        assert_eq!(t, SimTime::ZERO);
        assert!(!(t < SimTime::ZERO));
    }

    #[test]
    fn new_rejects_negative_and_non_finite() {
        assert_eq!(SimTime::new(-0.5), Err(CoreError::InvalidTime(-0.5)));
        assert!(SimTime::new(f64::INFINITY).is_err());
        assert!(SimTime::new(f64::NAN).is_err());
    }

    #[test]
    fn ordering_and_arithmetic() {
        assert!(SimTime(1.0) < SimTime(1.5));
        assert_eq!(SimTime(2.0) + 3.0, SimTime(5.0));
        assert_eq!(SimTime(6.0) - SimTime(4.5), 1.5);
        assert_eq!(SimTime(3.0).max(SimTime(2.0)), SimTime(3.0));
    }

    #[test]
    fn display_two_decimals() {
        assert_eq!(SimTime(3.0).to_string(), "3.00");
        assert_eq!(SimTime(12.345).to_string(), "12.35");
    }
}

#[cfg(test)]
mod status {
    use crate::WorkerStatus;

    #[test]
    fn parse_case_insensitive() {
        assert_eq!("Active".parse::<WorkerStatus>().unwrap(), WorkerStatus::Active);
        assert_eq!(" inactive ".parse::<WorkerStatus>().unwrap(), WorkerStatus::Inactive);
    }

    #[test]
    fn overloaded_is_not_a_status() {
        assert!("overloaded".parse::<WorkerStatus>().is_err());
    }

    #[test]
    fn display_matches_parse() {
        for s in [WorkerStatus::Active, WorkerStatus::Inactive] {
            assert_eq!(s.to_string().parse::<WorkerStatus>().unwrap(), s);
        }
    }
}

#[cfg(test)]
mod config {
    use crate::SimConfig;

    #[test]
    fn defaults() {
        let c = SimConfig::default();
        assert_eq!(c.service_duration, 5.0);
        assert_eq!(c.cooldown, 3.0);
        assert_eq!(c.capacity, 2);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn zero_capacity_invalid() {
        let c = SimConfig { capacity: 0, ..SimConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn negative_duration_invalid() {
        let c = SimConfig { service_duration: -1.0, ..SimConfig::default() };
        assert!(c.validate().is_err());
        let c = SimConfig { cooldown: f64::NAN, ..SimConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn with_seed_keeps_other_fields() {
        let c = SimConfig { cooldown: 1.0, ..SimConfig::default() }.with_seed(9);
        assert_eq!(c.seed, 9);
        assert_eq!(c.cooldown, 1.0);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(42);
        let mut b = SimRng::new(42);
        for _ in 0..10 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn children_diverge() {
        let mut root = SimRng::new(1);
        let mut c0 = root.child(0);
        let mut c1 = root.child(1);
        assert_ne!(c0.random::<u64>(), c1.random::<u64>());
    }

    #[test]
    fn index_in_bounds() {
        let mut rng = SimRng::new(5);
        assert_eq!(rng.index(0), None);
        for _ in 0..100 {
            let i = rng.index(3).unwrap();
            assert!(i < 3);
        }
    }
}

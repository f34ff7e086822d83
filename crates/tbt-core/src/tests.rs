//! Unit tests for tbt-core primitives.

#[cfg(test)]
mod ids {
    use crate::StepIndex;

    #[test]
    fn index_roundtrip() {
        let id = StepIndex(42);
        assert_eq!(id.index(), 42);
        assert_eq!(StepIndex::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn next_and_ordering() {
        assert_eq!(StepIndex::FIRST.next(), StepIndex(1));
        assert!(StepIndex(0) < StepIndex(1));
    }

    #[test]
    fn try_from_rejects_overflow() {
        assert!(StepIndex::try_from(u32::MAX as usize).is_ok());
        assert!(StepIndex::try_from(u32::MAX as usize + 1).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(StepIndex(7).to_string(), "StepIndex(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::Coordinate;

    #[test]
    fn zero_distance() {
        let p = Coordinate::new(37.3349, -122.0090);
        assert!(p.distance_m(p) < 1e-6);
    }

    #[test]
    fn one_degree_latitude() {
        let a = Coordinate::new(30.0, -88.0);
        let b = Coordinate::new(31.0, -88.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 50.0, "got {d}");
    }

    #[test]
    fn offset_matches_haversine() {
        let origin = Coordinate::new(48.8566, 2.3522);
        let moved  = origin.offset_m(30.0, 40.0);
        let d      = origin.distance_m(moved);
        assert!((d - 50.0).abs() < 0.5, "got {d}");
    }

    #[test]
    fn lerp_endpoints_and_clamp() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(1.0, 2.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Coordinate::new(0.5, 1.0));
        assert_eq!(a.lerp(b, 7.0), b);
    }

    #[test]
    fn validity() {
        assert!(Coordinate::new(45.0, 90.0).is_valid());
        assert!(!Coordinate::new(91.0, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, f64::NAN).is_valid());
    }

    #[test]
    fn degree_span_covers_radius() {
        let c = Coordinate::new(60.0, 10.0);
        let span = c.degree_span(20.0);
        // At 60° a degree of longitude is half as long, so the span doubles.
        assert!(span > 20.0 / 111_320.0 * 1.9);
    }
}

#[cfg(test)]
mod config {
    use crate::{MonitoringPolicy, TbtError, TrackerConfig, TransportMode, DEFAULT_RADIUS_M};

    #[test]
    fn defaults() {
        let cfg = TrackerConfig::default();
        assert_eq!(cfg.default_radius_m, DEFAULT_RADIUS_M);
        assert_eq!(cfg.policy, MonitoringPolicy::AllSteps);
        assert_eq!(cfg.transport, TransportMode::Automobile);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_bad_radius() {
        for radius in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let cfg = TrackerConfig { default_radius_m: radius, ..TrackerConfig::default() };
            assert!(matches!(cfg.validate(), Err(TbtError::Config(_))), "radius {radius}");
        }
    }
}

#[cfg(test)]
mod transport {
    use crate::TransportMode;

    #[test]
    fn labels() {
        assert_eq!(TransportMode::Automobile.to_string(), "automobile");
        assert_eq!(TransportMode::default(), TransportMode::Automobile);
        assert_eq!(TransportMode::Transit.as_str(), "transit");
    }
}

#[cfg(all(test, feature = "serde"))]
mod config_json {
    use crate::{MonitoringPolicy, TrackerConfig, TransportMode, DEFAULT_RADIUS_M};

    #[test]
    fn full_document() {
        let json = r#"{"default_radius_m": 35.0, "policy": "next_step_only", "transport": "walking"}"#;
        let cfg: TrackerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.default_radius_m, 35.0);
        assert_eq!(cfg.policy, MonitoringPolicy::NextStepOnly);
        assert_eq!(cfg.transport, TransportMode::Walking);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: TrackerConfig = serde_json::from_str(r#"{"transport": "transit"}"#).unwrap();
        assert_eq!(cfg.default_radius_m, DEFAULT_RADIUS_M);
        assert_eq!(cfg.policy, MonitoringPolicy::AllSteps);
        assert_eq!(cfg.transport, TransportMode::Transit);

        let empty: TrackerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, TrackerConfig::default());
    }

    #[test]
    fn unknown_variant_is_rejected() {
        assert!(serde_json::from_str::<TrackerConfig>(r#"{"policy": "every_step"}"#).is_err());
        assert!(serde_json::from_str::<TrackerConfig>(r#"{"transport": "Automobile"}"#).is_err());
    }

    #[test]
    fn parsed_config_still_needs_validation() {
        let cfg: TrackerConfig = serde_json::from_str(r#"{"default_radius_m": -1.0}"#).unwrap();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn serialises_with_wire_names() {
        let cfg  = TrackerConfig { policy: MonitoringPolicy::NextStepOnly, ..TrackerConfig::default() };
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains(r#""policy":"next_step_only""#), "{json}");
        assert!(json.contains(r#""transport":"automobile""#), "{json}");
    }
}

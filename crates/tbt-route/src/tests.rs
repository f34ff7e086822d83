//! Unit tests for tbt-route.
//!
//! All tests use hand-built routes or inline CSV so they run without files.

#[cfg(test)]
mod helpers {
    use tbt_core::Coordinate;
    use crate::{Route, RouteBuilder};

    /// Three steps heading north, 100 m apart.
    pub fn three_step_route() -> Route {
        let start = Coordinate::new(37.3349, -122.0090);
        let mut b = RouteBuilder::new().destination_name("Campus");
        b.add_step("Head north", 100.0, start).unwrap();
        b.add_step("Turn left", 100.0, start.offset_m(100.0, 0.0)).unwrap();
        b.add_step_with_radius("Arrive at Campus", 0.0, start.offset_m(200.0, 0.0), 35.0).unwrap();
        b.build()
    }
}

// ── Route & builder ───────────────────────────────────────────────────────────

#[cfg(test)]
mod route {
    use tbt_core::{Coordinate, StepIndex, TransportMode};
    use crate::{Route, RouteBuilder, RouteError, RouteStep};

    fn step(index: u32, instruction: &str) -> RouteStep {
        RouteStep {
            index:       StepIndex(index),
            instruction: instruction.to_owned(),
            distance_m:  10.0,
            anchor:      Coordinate::new(0.0, 0.001 * f64::from(index)),
            radius_m:    20.0,
        }
    }

    #[test]
    fn empty_build() {
        let route = RouteBuilder::new().build();
        assert!(route.is_empty());
        assert_eq!(Route::empty(), route);
    }

    #[test]
    fn indices_follow_insertion_order() {
        let route = super::helpers::three_step_route();
        for (i, step) in route.steps().iter().enumerate() {
            assert_eq!(step.index.index(), i);
        }
    }

    #[test]
    fn add_step_returns_assigned_index() {
        let mut b = RouteBuilder::new();
        assert_eq!(b.add_step("a", 1.0, Coordinate::new(0.0, 0.0)).unwrap(), StepIndex(0));
        assert_eq!(b.add_step("b", 1.0, Coordinate::new(0.0, 0.0)).unwrap(), StepIndex(1));
    }

    #[test]
    fn from_steps_accepts_positional_indices() {
        let route = Route::from_steps(vec![step(0, "a"), step(1, "b"), step(2, "c")]).unwrap();
        assert_eq!(route.len(), 3);
        assert_eq!(route.step(StepIndex(2)).unwrap().instruction, "c");
        assert!(Route::from_steps(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn from_steps_rejects_repeated_index() {
        let result = Route::from_steps(vec![step(0, "a"), step(0, "b")]);
        match result {
            Err(RouteError::StepOrder { position, found }) => {
                assert_eq!(position, 1);
                assert_eq!(found, StepIndex(0));
            }
            other => panic!("expected StepOrder, got {other:?}"),
        }
    }

    #[test]
    fn from_steps_rejects_gap_and_offset() {
        assert!(matches!(
            Route::from_steps(vec![step(0, "a"), step(2, "b")]),
            Err(RouteError::StepOrder { position: 1, .. })
        ));
        assert!(matches!(
            Route::from_steps(vec![step(1, "a")]),
            Err(RouteError::StepOrder { position: 0, .. })
        ));
    }

    #[test]
    fn default_and_explicit_radius() {
        let route = super::helpers::three_step_route();
        assert_eq!(route.steps()[0].radius_m, 20.0);
        assert_eq!(route.steps()[2].radius_m, 35.0);

        let mut b = RouteBuilder::with_default_radius(50.0);
        b.add_step("x", 1.0, Coordinate::new(0.0, 0.0)).unwrap();
        assert_eq!(b.build().steps()[0].radius_m, 50.0);
    }

    #[test]
    fn distances() {
        let route = super::helpers::three_step_route();
        assert_eq!(route.total_distance_m(), 200.0);
        assert_eq!(Route::empty().total_distance_m(), 0.0);
    }

    #[test]
    fn step_lookup_and_contains() {
        let route = super::helpers::three_step_route();
        let step  = route.step(StepIndex(1)).unwrap();
        assert_eq!(step.instruction, "Turn left");
        assert!(step.contains(step.anchor.offset_m(10.0, 0.0)));
        assert!(!step.contains(step.anchor.offset_m(30.0, 0.0)));
        assert!(route.step(StepIndex(3)).is_none());
    }

    #[test]
    fn builder_metadata() {
        let route = RouteBuilder::new()
            .transport(TransportMode::Walking)
            .destination_name("Park")
            .build();
        assert_eq!(route.transport, TransportMode::Walking);
        assert_eq!(route.destination_name.as_deref(), Some("Park"));
    }
}

// ── Planners ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod planner {
    use tbt_core::{Coordinate, TrackerConfig, TransportMode};
    use crate::{Destination, DirectPlanner, RouteError, RoutePlanner, StaticPlanner};

    #[test]
    fn static_planner_replays_route() {
        let route   = super::helpers::three_step_route();
        let planner = StaticPlanner::new(route.clone());
        let dest    = Destination::new("anywhere", Coordinate::new(1.0, 1.0));
        let config  = TrackerConfig { default_radius_m: 90.0, ..TrackerConfig::default() };
        let planned = planner.plan(Coordinate::new(0.0, 0.0), &dest, &config).unwrap();
        assert_eq!(planned, route);
        assert_eq!(planner.route(), &route);
    }

    #[test]
    fn direct_planner_two_steps() {
        let from = Coordinate::new(37.3349, -122.0090);
        let to   = Destination::new("Cafe", from.offset_m(0.0, 500.0));
        let config = TrackerConfig { transport: TransportMode::Walking, ..TrackerConfig::default() };
        let route  = DirectPlanner.plan(from, &to, &config).unwrap();

        assert_eq!(route.len(), 2);
        assert_eq!(route.transport, TransportMode::Walking);
        assert_eq!(route.destination_name.as_deref(), Some("Cafe"));
        assert_eq!(route.steps()[0].instruction, "Head toward Cafe");
        assert_eq!(route.steps()[0].anchor, from);
        assert!((route.steps()[0].distance_m - 500.0).abs() < 1.0);
        assert_eq!(route.steps()[1].instruction, "Arrive at Cafe");
        assert_eq!(route.steps()[1].anchor, to.coordinate);
        assert_eq!(route.steps()[1].distance_m, 0.0);
        assert!(route.steps().iter().all(|s| s.radius_m == 20.0));
    }

    #[test]
    fn direct_planner_uses_configured_radius() {
        let from   = Coordinate::new(37.3349, -122.0090);
        let to     = Destination::new("Cafe", from.offset_m(0.0, 500.0));
        let config = TrackerConfig { default_radius_m: 75.0, ..TrackerConfig::default() };
        let route  = DirectPlanner.plan(from, &to, &config).unwrap();
        assert_eq!(route.steps()[0].radius_m, 75.0);
        assert_eq!(route.steps()[1].radius_m, 75.0);
        assert_eq!(route.transport, TransportMode::Automobile);
    }

    #[test]
    fn direct_planner_rejects_invalid_coordinates() {
        let dest   = Destination::new("Nowhere", Coordinate::new(120.0, 0.0));
        let result = DirectPlanner.plan(Coordinate::new(0.0, 0.0), &dest, &TrackerConfig::default());
        assert!(matches!(result, Err(RouteError::NoRoute { .. })));
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use tbt_core::StepIndex;
    use crate::{load_route_reader, RouteError};

    const CSV: &str = "\
instruction,distance_m,lat,lon,radius_m\n\
Turn left onto Infinite Loop,50,37.33182,-122.03118,\n\
Turn right onto Mariani Ave,120,37.33240,-122.03020,25\n\
Arrive at destination,0,37.33300,-122.03000,\n";

    #[test]
    fn loads_steps_in_order() {
        let route = load_route_reader(Cursor::new(CSV), 20.0).unwrap();
        assert_eq!(route.len(), 3);
        assert_eq!(route.steps()[0].instruction, "Turn left onto Infinite Loop");
        assert_eq!(route.steps()[0].radius_m, 20.0);
        assert_eq!(route.steps()[1].radius_m, 25.0);
        assert_eq!(route.steps()[1].distance_m, 120.0);
        assert_eq!(route.steps()[2].index, StepIndex(2));
    }

    #[test]
    fn header_only_gives_empty_route() {
        let route = load_route_reader(Cursor::new("instruction,distance_m,lat,lon,radius_m\n"), 20.0).unwrap();
        assert!(route.is_empty());
    }

    #[test]
    fn bad_number_is_parse_error() {
        let csv = "instruction,distance_m,lat,lon,radius_m\nGo,far,0,0,\n";
        assert!(matches!(load_route_reader(Cursor::new(csv), 20.0), Err(RouteError::Parse(_))));
    }

    #[test]
    fn out_of_range_coordinate_is_parse_error() {
        let csv = "instruction,distance_m,lat,lon,radius_m\nGo,10,95.0,0,\n";
        assert!(matches!(load_route_reader(Cursor::new(csv), 20.0), Err(RouteError::Parse(_))));
    }

    #[test]
    fn negative_radius_is_parse_error() {
        let csv = "instruction,distance_m,lat,lon,radius_m\nGo,10,1.0,1.0,-3\n";
        assert!(matches!(load_route_reader(Cursor::new(csv), 20.0), Err(RouteError::Parse(_))));
    }
}

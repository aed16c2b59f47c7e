use super::*;

#[test]
fn defaults_match_config_defaults() {
    let spec = GradientSpec::new();
    assert_eq!(spec.to_config(), GradientConfig::default());
    assert_eq!(spec.start_color(), Color::WHITE);
    assert_eq!(spec.end_color(), Color::DARK_GRAY);
    assert_eq!(spec.slope_factor().get(), 2.0);
    assert_eq!(spec.start_point(), Point::new(0.5, 0.0));
    assert_eq!(spec.end_point(), Point::new(0.5, 1.0));
    assert!(!spec.mirror());
    assert!(!spec.draws_before_start());
    assert!(!spec.draws_after_end());
}

#[test]
fn setters_recompute_curve_immediately() {
    let mut spec = GradientSpec::new();
    spec.set_start_color(Color::BLACK).unwrap();
    assert_eq!(spec.curve().from, Color::BLACK);

    spec.set_end_color(Color::WHITE).unwrap();
    assert_eq!(spec.curve().to, Color::WHITE);

    spec.set_slope_factor(5.0).unwrap();
    assert_eq!(spec.curve().slope.get(), 5.0);

    spec.toggle_mirror();
    assert!(spec.mirror());
    assert_eq!(spec.curve().from, Color::WHITE);
    assert_eq!(spec.curve().to, Color::BLACK);
}

#[test]
fn invalid_slope_leaves_spec_untouched() {
    let mut spec = GradientSpec::new();
    let before = spec.clone();
    for bad in [0.0, -1.5, f64::NAN] {
        let err = spec.set_slope_factor(bad).unwrap_err();
        assert!(matches!(err, GradientError::InvalidShapeParameter(_)));
        assert_eq!(spec.slope_factor(), before.slope_factor());
    }
    assert_eq!(spec.curve(), before.curve());
}

#[test]
fn non_finite_inputs_are_rejected() {
    let mut spec = GradientSpec::new();
    assert!(spec.set_start_point(Point::new(f64::NAN, 0.0)).is_err());
    assert!(spec.set_end_point(Point::new(0.0, f64::INFINITY)).is_err());
    assert!(spec.set_end_color(Color::rgba(0.0, 0.0, f64::NAN, 1.0)).is_err());
    assert_eq!(spec, GradientSpec::new());
}

#[test]
fn endpoints_outside_unit_range_are_allowed() {
    let mut spec = GradientSpec::new();
    spec.set_start_point(Point::new(-0.5, -2.0)).unwrap();
    spec.set_end_point(Point::new(1.5, 3.0)).unwrap();
    assert_eq!(spec.start_point(), Point::new(-0.5, -2.0));
}

#[test]
fn configure_is_atomic() {
    let mut spec = GradientSpec::new();
    let cfg = GradientConfig {
        start_color: Color::BLACK,
        mirror: true,
        slope_factor: 0.0,
        ..GradientConfig::default()
    };
    assert!(spec.configure(&cfg).is_err());
    assert_eq!(spec, GradientSpec::new());

    let cfg = GradientConfig {
        slope_factor: 3.0,
        ..cfg
    };
    spec.configure(&cfg).unwrap();
    assert_eq!(spec.to_config(), cfg);
    assert_eq!(spec.curve().from, Color::DARK_GRAY);
    assert_eq!(spec.curve().to, Color::BLACK);
}

#[test]
fn swap_endpoints_and_reset() {
    let mut spec = GradientSpec::new();
    spec.swap_endpoints();
    assert_eq!(spec.start_point(), Point::new(0.5, 1.0));
    assert_eq!(spec.end_point(), Point::new(0.5, 0.0));

    spec.set_draws_after_end(true);
    spec.reset();
    assert_eq!(spec, GradientSpec::new());
}

#[test]
fn config_json_uses_defaults_for_missing_fields() {
    let cfg = GradientConfig::from_json_str(
        r##"{ "end_color": "#000080", "reverse": true, "end_point": { "x": 1.0, "y": 1.0 } }"##,
    )
    .unwrap();
    assert!(cfg.mirror);
    assert_eq!(cfg.start_color, Color::WHITE);
    assert_eq!(cfg.slope_factor, 2.0);
    assert_eq!(cfg.end_point, Point::new(1.0, 1.0));
    assert_eq!(cfg.end_color.to_rgba8().b, 128);

    assert!(matches!(
        GradientConfig::from_json_str(r#"{ "slope": 2 }"#),
        Err(GradientError::Serde(_))
    ));
}

#[test]
fn config_round_trips_through_json() {
    let cfg = GradientConfig {
        start_color: Color::rgba(0.25, 0.5, 0.75, 1.0),
        end_color: Color::BLACK,
        slope_factor: 0.75,
        draws_before_start: true,
        ..GradientConfig::default()
    };
    let json = cfg.to_json_pretty().unwrap();
    assert_eq!(GradientConfig::from_json_str(&json).unwrap(), cfg);
}

use super::*;

fn slopes() -> Vec<SlopeFactor> {
    [0.05, 0.5, 1.0, 2.0, 3.7, 10.0, 50.0, 250.0, 700.0, 5000.0]
        .into_iter()
        .map(|k| SlopeFactor::new(k).unwrap())
        .collect()
}

#[test]
fn endpoints_are_exact_for_every_slope() {
    for k in slopes() {
        assert_eq!(blend_weight(0.0, k), 0.0);
        assert_eq!(blend_weight(1.0, k), 1.0);
    }
}

#[test]
fn midpoint_is_half_for_every_slope() {
    for k in slopes() {
        assert_eq!(blend_weight(0.5, k), 0.5, "k = {}", k.get());
    }
}

#[test]
fn out_of_range_positions_clamp() {
    let k = SlopeFactor::DEFAULT;
    assert_eq!(blend_weight(-3.0, k), 0.0);
    assert_eq!(blend_weight(7.0, k), 1.0);
}

#[test]
fn linear_slope_is_identity() {
    for t in [0.0, 0.1, 0.25, 0.5, 0.8, 1.0] {
        let w = blend_weight(t, SlopeFactor::LINEAR);
        assert!((w - t).abs() < 1e-12, "t = {t}, w = {w}");
    }
}

#[test]
fn quarter_position_with_default_slope() {
    // 0.25^2 / (0.25^2 + 0.75^2) = 0.0625 / 0.625
    let w = blend_weight(0.25, SlopeFactor::DEFAULT);
    assert!((w - 0.1).abs() < 1e-12);
}

#[test]
fn weight_is_monotonic() {
    for k in slopes() {
        let mut prev = 0.0;
        for i in 0..=1_000_000 {
            let w = blend_weight(f64::from(i) / 1e6, k);
            assert!(w >= prev, "k = {}, i = {i}", k.get());
            assert!((0.0..=1.0).contains(&w));
            prev = w;
        }
    }
}

#[test]
fn steep_slopes_stay_monotonic_near_the_top() {
    // Spots where the t^k / (t^k + (1-t)^k) form stepped down by one ulp.
    for (k, t) in [(50.0, 0.641713), (700.0, 0.512025)] {
        let k = SlopeFactor::new(k).unwrap();
        let mut prev = blend_weight(t - 1e-4, k);
        for i in 0..=2000 {
            let w = blend_weight(t - 1e-4 + f64::from(i) * 1e-7, k);
            assert!(w >= prev, "k = {}, i = {i}", k.get());
            prev = w;
        }
    }
}

#[test]
fn huge_slope_is_a_step_without_nan() {
    let k = SlopeFactor::new(5000.0).unwrap();
    assert_eq!(blend_weight(0.45, k), 0.0);
    assert_eq!(blend_weight(0.5, k), 0.5);
    assert_eq!(blend_weight(0.55, k), 1.0);
    assert!(!blend_weight(0.4999, k).is_nan());
}

#[test]
fn steep_slopes_sharpen_and_shallow_slopes_flatten() {
    let t = 0.3;
    let linear = blend_weight(t, SlopeFactor::LINEAR);
    let steep = blend_weight(t, SlopeFactor::new(4.0).unwrap());
    let shallow = blend_weight(t, SlopeFactor::new(0.5).unwrap());
    assert!(steep < linear);
    assert!(shallow > linear);
}

#[test]
fn slope_factor_rejects_non_positive_and_non_finite() {
    for bad in [0.0, -0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(
            SlopeFactor::new(bad),
            Err(GradientError::InvalidShapeParameter(_))
        ));
    }
    assert!(SlopeFactor::try_from(1e-9).is_ok());
}

#[test]
fn log_scale_round_trips_default() {
    let k = SlopeFactor::from_log_scale(std::f64::consts::E.powi(2)).unwrap();
    assert!((k.get() - 2.0).abs() < 1e-12);
    assert!((SlopeFactor::DEFAULT.to_log_scale() - std::f64::consts::E.powi(2)).abs() < 1e-9);
    assert!(SlopeFactor::from_log_scale(1.0).is_err());
    assert!(SlopeFactor::from_log_scale(0.5).is_err());
}

#[test]
fn slope_factor_deserialization_validates() {
    let k: SlopeFactor = serde_json::from_str("3.5").unwrap();
    assert_eq!(k.get(), 3.5);
    assert!(serde_json::from_str::<SlopeFactor>("0").is_err());
    assert!(serde_json::from_str::<SlopeFactor>("-2").is_err());
}

#[test]
fn linear_blend_hits_endpoints_and_midpoint() {
    let a = Color::rgba(0.1, 0.7, 0.3, 1.0);
    let b = Color::rgba(0.9, 0.2, 0.6, 0.4);
    let curve = CurveParams::new(a, b, SlopeFactor::LINEAR, false);

    assert_eq!(curve.evaluate(0.0), a);
    assert_eq!(curve.evaluate(1.0), b);

    let mid = curve.evaluate(0.5);
    for (m, (x, y)) in mid
        .to_array()
        .iter()
        .zip(a.to_array().iter().zip(b.to_array().iter()))
    {
        assert!((m - (x + y) / 2.0).abs() < 1e-12);
    }
}

#[test]
fn mirror_swaps_colors_not_position() {
    let a = Color::rgba(1.0, 0.5, 0.0, 1.0);
    let b = Color::rgba(0.0, 0.25, 1.0, 0.5);
    for k in slopes() {
        let mirrored = CurveParams::new(a, b, k, true);
        let swapped = CurveParams::new(b, a, k, false);
        for i in 0..=20 {
            let t = f64::from(i) / 20.0;
            assert_eq!(mirrored.evaluate(t), swapped.evaluate(t));
        }
    }
}

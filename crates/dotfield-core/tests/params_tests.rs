use dotfield_core::*;

#[test]
fn defaults_match_the_stock_effect() {
    let p = FieldParams::default();
    assert_eq!(p.point_count, 100);
    assert_eq!(p.point_radius, 3.0);
    assert_eq!(p.point_color, "#FFFFFF");
    assert_eq!(p.line_color, "#FFFFFF");
    assert_eq!(p.threshold, 100.0);
    assert_eq!(p.sign_policy, SignPolicy::Legacy);
    assert!(p.validate().is_ok());
}

#[test]
fn threshold_kept_when_dots_are_small() {
    assert_eq!(adjusted_threshold(3.0, 100.0), 100.0);
    assert_eq!(adjusted_threshold(30.0, 100.0), 100.0);
}

#[test]
fn threshold_raised_when_dots_are_large() {
    assert_eq!(adjusted_threshold(50.0, 100.0), 200.0);
    // Boundary: 2r == 0.8t triggers the raise.
    assert_eq!(adjusted_threshold(40.0, 100.0), 160.0);
    let p = FieldParams {
        point_radius: 50.0,
        ..FieldParams::default()
    };
    assert_eq!(p.effective_threshold(), 200.0);
    assert_eq!(p.threshold, 100.0);
}

#[test]
fn validate_rejects_degenerate_params() {
    let bad_radius = FieldParams {
        point_radius: 0.0,
        ..FieldParams::default()
    };
    assert_eq!(bad_radius.validate(), Err(FieldError::InvalidRadius(0.0)));

    let bad_threshold = FieldParams {
        threshold: f64::NAN,
        ..FieldParams::default()
    };
    assert!(matches!(
        bad_threshold.validate(),
        Err(FieldError::InvalidThreshold(_))
    ));

    let empty = FieldParams {
        point_count: 0,
        ..FieldParams::default()
    };
    assert_eq!(empty.validate(), Err(FieldError::NoPoints));
}

#[test]
fn oversized_point_count_is_only_a_warning() {
    let p = FieldParams {
        point_count: RECOMMENDED_MAX_POINTS + 1,
        ..FieldParams::default()
    };
    assert!(p.validate().is_ok());
}

#[test]
fn errors_display_readable_messages() {
    let msg = FieldError::EmptySurface {
        width: 0,
        height: 10,
    }
    .to_string();
    assert!(msg.contains("0x10"));
    assert!(FieldError::ZeroRate.to_string().contains("rate"));
}

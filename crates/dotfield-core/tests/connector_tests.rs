use dotfield_core::*;
use glam::DVec2;
use proptest::prelude::*;

fn at(x: f64, y: f64) -> Point {
    Point::new(DVec2::new(x, y), DVec2::ZERO)
}

#[test]
fn opacity_endpoints() {
    assert_eq!(connector_opacity(0.0, 100.0), 1.0);
    assert_eq!(connector_opacity(100.0, 100.0), 0.0);
    assert_eq!(connector_opacity(50.0, 100.0), 0.5);
}

#[test]
fn opacity_ratio_is_rounded_to_hundredths() {
    // 33.3 / 100 = 0.333 -> 0.33
    assert!((connector_opacity(33.3, 100.0) - 0.67).abs() < 1e-12);
    // 12.5 / 100 = 0.125 -> 0.13 (half rounds up)
    assert!((connector_opacity(12.5, 100.0) - 0.87).abs() < 1e-12);
}

#[test]
fn connector_only_for_strictly_closer_points() {
    let a = at(0.0, 0.0);
    assert!(Connector::between(&a, &at(99.9, 0.0), 100.0).is_some());
    assert!(Connector::between(&a, &at(100.0, 0.0), 100.0).is_none());
    assert!(Connector::between(&a, &at(200.0, 0.0), 100.0).is_none());
}

#[test]
fn render_sets_alpha_and_color_then_strokes() {
    let a = at(10.0, 10.0);
    let b = at(10.0, 35.0);
    let mut surface = RecordingSurface::new(100, 100);
    let line = Connector::between(&a, &b, 100.0).expect("within threshold");
    line.render(&mut surface, 100.0, "#ABCDEF");
    assert_eq!(
        surface.commands(),
        &[
            DrawCommand::GlobalAlpha(0.75),
            DrawCommand::StrokeColor("#ABCDEF".to_string()),
            DrawCommand::Line {
                from: a.position,
                to: b.position
            },
        ]
    );
}

proptest! {
    #[test]
    fn opacity_never_increases_with_distance(d1 in 0.0f64..100.0, d2 in 0.0f64..100.0) {
        let (near, far) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };
        prop_assert!(connector_opacity(near, 100.0) >= connector_opacity(far, 100.0));
    }

    #[test]
    fn opacity_stays_in_unit_range_below_threshold(d in 0.0f64..100.0) {
        let o = connector_opacity(d, 100.0);
        prop_assert!((0.0..=1.0).contains(&o));
    }
}

use spacekit_core::{Point2D, Vector3};
use spacekit_designer::{distance_point_to_segment, Catalog, DesignerState, HitTester, Selection};

#[test]
fn test_point_on_segment_has_zero_distance() {
    let a = Point2D::new(-2.0, 1.0);
    let b = Point2D::new(6.0, 5.0);
    for t in [0.0, 0.25, 0.5, 1.0] {
        let p = a.lerp(&b, t);
        let projection = distance_point_to_segment(p, a, b);
        assert!(projection.distance < 1e-12);
        assert!((projection.t - t).abs() < 1e-12);
    }
}

#[test]
fn test_points_beyond_ends_clamp_t() {
    let a = Point2D::new(0.0, 0.0);
    let b = Point2D::new(4.0, 0.0);
    let before = distance_point_to_segment(Point2D::new(-3.0, 4.0), a, b);
    assert_eq!(before.t, 0.0);
    assert!((before.distance - 5.0).abs() < 1e-12);
    let after = distance_point_to_segment(Point2D::new(7.0, 0.0), a, b);
    assert_eq!(after.t, 1.0);
    assert!((after.distance - 3.0).abs() < 1e-12);
}

#[test]
fn test_topmost_furniture_wins() {
    let catalog = Catalog::builtin();
    let mut state = DesignerState::new();
    state
        .add_furniture(catalog.get("1").unwrap(), Vector3::new(0.0, 0.0, 0.0))
        .unwrap();
    let top = state
        .add_furniture(catalog.get("2").unwrap(), Vector3::new(0.4, 0.0, 0.0))
        .unwrap();
    assert_eq!(
        state.select_at(Point2D::new(0.2, 0.0)),
        Some(Selection::Furniture(top))
    );
}

#[test]
fn test_custom_tolerance() {
    let mut state = DesignerState::new();
    state.settings.hit_tolerance = 2.0;
    let wall = state
        .add_wall(vec![Point2D::new(0.0, 0.0), Point2D::new(4.0, 0.0)])
        .unwrap();
    assert_eq!(
        state.select_at(Point2D::new(2.0, 1.5)),
        Some(Selection::Wall(wall))
    );
    assert_eq!(HitTester::default().pick(state.scene(), Point2D::new(2.0, 1.5)), None);
}

#[test]
fn test_empty_space_clears_selection() {
    let mut state = DesignerState::new();
    state
        .add_wall(vec![Point2D::new(0.0, 0.0), Point2D::new(4.0, 0.0)])
        .unwrap();
    state.select_at(Point2D::new(1.0, 0.0));
    assert!(state.selection().is_some());
    state.select_at(Point2D::new(1.0, 9.0));
    assert!(state.selection().is_none());
}

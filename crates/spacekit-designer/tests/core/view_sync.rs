use spacekit_core::{Point2D, Vector3};
use spacekit_designer::designer_state::EditTool;
use spacekit_designer::{Catalog, DesignerState, OpeningKind, Selection, ViewSynchronizer};

fn office() -> (DesignerState, String, String) {
    let catalog = Catalog::builtin();
    let mut state = DesignerState::new();
    let wall = state
        .add_wall(vec![Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0)])
        .unwrap();
    state
        .add_opening(&wall, 0, 0.5, OpeningKind::Window)
        .unwrap();
    let chair = state
        .add_furniture(catalog.get("5").unwrap(), Vector3::new(2.0, 0.0, 3.0))
        .unwrap();
    state.clear_selection();
    (state, wall, chair)
}

#[test]
fn test_both_views_pick_identically() {
    let (state, wall, chair) = office();
    let sync = ViewSynchronizer::new();

    let samples = [
        (Point2D::new(2.0, 3.0), Some(Selection::Furniture(chair))),
        (Point2D::new(7.0, 0.5), Some(Selection::Wall(wall))),
        (Point2D::new(7.0, 5.0), None),
    ];
    for (plan_point, expected) in samples {
        let screen = state.viewport.world_to_pixel(plan_point);
        let from_plan = sync.plan.pick(&state, screen);
        let ground = Vector3::new(plan_point.x, 0.0, plan_point.y);
        let from_scene = sync.scene.pick(&state, ground);
        assert_eq!(from_plan, expected);
        assert_eq!(from_scene, expected);
    }
}

#[test]
fn test_plan_frame_uses_viewport_scale() {
    let (mut state, _, chair) = office();
    state.set_zoom_percent(200.0);
    let mut sync = ViewSynchronizer::new();
    sync.sync(&state);
    let frame = sync.plan_frame();
    let center = state.viewport.canvas_center();

    let item = frame.furniture.iter().find(|f| f.id == chair).unwrap();
    assert_eq!(item.center, Point2D::new(center.x + 80.0, center.y + 120.0));
    assert_eq!(item.half_size, 20.0);
    assert_eq!(frame.walls[0].points[1], Point2D::new(center.x + 400.0, center.y));
    assert_eq!(frame.grid_spacing, Some(40.0));

    let window = &frame.openings[0];
    assert!((window.start.x - (center.x + 200.0 - 24.0)).abs() < 1e-9);
    assert!((window.end.x - (center.x + 200.0 + 24.0)).abs() < 1e-9);
}

#[test]
fn test_scene_frame_geometry() {
    let (state, wall, _) = office();
    let mut sync = ViewSynchronizer::new();
    sync.sync(&state);
    let frame = sync.scene_frame();

    let wall_box = &frame.walls[0];
    assert_eq!(wall_box.entity_id, wall);
    assert_eq!(wall_box.center, Vector3::new(5.0, 1.5, 0.0));
    assert_eq!(wall_box.size, Vector3::new(10.0, 3.0, 0.2));
    assert_eq!(wall_box.yaw, 0.0);

    let window = &frame.openings[0];
    assert_eq!(window.center, Vector3::new(5.0, 0.9 + 0.6, 0.0));
    assert_eq!(window.size.x, 1.2);

    assert_eq!(frame.furniture[0].position, Vector3::new(2.0, 0.0, 3.0));
}

#[test]
fn test_sync_rebuilds_only_on_change() {
    let (mut state, _, chair) = office();
    let mut sync = ViewSynchronizer::new();
    assert!(sync.sync(&state));
    assert!(!sync.sync(&state));

    state.rotate_furniture(&chair, 1.0).unwrap();
    assert!(sync.sync(&state));
    assert_eq!(sync.scene_frame().furniture[0].rotation.y, 1.0);

    state.select_at(Point2D::new(2.0, 3.0));
    assert!(sync.sync(&state));
    assert!(sync.plan_frame().furniture[0].selected);
    assert!(sync.scene_frame().furniture[0].selected);
}

#[test]
fn test_plan_pointer_places_door_through_viewport() {
    let (mut state, wall, _) = office();
    let sync = ViewSynchronizer::new();
    state.set_tool(EditTool::Door);
    let screen = state.viewport.world_to_pixel(Point2D::new(2.5, 0.2));
    sync.plan.pointer_down(&mut state, screen).unwrap();

    let door = state.scene().openings.last().unwrap();
    assert_eq!(door.kind, OpeningKind::Door);
    assert_eq!(door.wall_id, wall);
    assert!((door.t - 0.25).abs() < 1e-9);
}

#[test]
fn test_scene_drop_snaps_like_plan_drag() {
    let (mut state, _, chair) = office();
    let sync = ViewSynchronizer::new();
    sync.scene
        .drop_furniture(&mut state, &chair, Vector3::new(4.2, 0.0, -1.1))
        .unwrap();
    assert_eq!(
        state.scene().furniture_item(&chair).unwrap().position,
        Vector3::new(4.0, 0.0, -1.0)
    );
}

use spacekit_core::{Point2D, ValidationError, Vector3};
use spacekit_designer::designer_state::EditTool;
use spacekit_designer::model::furniture::FurnitureOverrides;
use spacekit_designer::{templates, Catalog, DesignerState, OpeningKind, Selection};

#[test]
fn test_add_room_creates_room_and_four_walls_in_one_commit() {
    let mut state = DesignerState::new();
    let len = state.history_len();
    state
        .add_room(Point2D::new(5.0, 4.0), Point2D::new(-1.0, 0.0))
        .unwrap();
    assert_eq!(state.history_len(), len + 1);
    assert_eq!(state.scene().rooms.len(), 1);
    assert_eq!(state.scene().walls.len(), 4);
    assert!(state.scene().walls.iter().all(|w| w.color == "#D6D6D6"));

    state.undo();
    assert!(state.scene().walls.is_empty());
    assert!(state.scene().rooms.is_empty());
}

#[test]
fn test_too_small_room_is_a_quiet_no_op() {
    let mut state = DesignerState::new();
    let result = state.add_room(Point2D::new(0.0, 0.0), Point2D::new(3.0, 0.09));
    assert!(matches!(result, Err(ValidationError::RoomTooSmall { .. })));
    assert!(state.scene().is_empty());
    assert!(!state.is_modified);
}

#[test]
fn test_add_opening_clamps_t() {
    let mut state = DesignerState::new();
    let wall = state
        .add_wall(vec![Point2D::new(0.0, 0.0), Point2D::new(4.0, 0.0)])
        .unwrap();
    let high = state.add_opening(&wall, 0, 1.5, OpeningKind::Door).unwrap();
    let low = state
        .add_opening(&wall, 0, -0.25, OpeningKind::Window)
        .unwrap();
    assert_eq!(state.scene().opening(&high).unwrap().t, 1.0);
    assert_eq!(state.scene().opening(&low).unwrap().t, 0.0);
}

#[test]
fn test_add_opening_rejects_missing_segment() {
    let mut state = DesignerState::new();
    let wall = state
        .add_wall(vec![Point2D::new(0.0, 0.0), Point2D::new(4.0, 0.0)])
        .unwrap();
    assert_eq!(
        state.add_opening(&wall, 1, 0.5, OpeningKind::Door),
        Err(ValidationError::InvalidSegment {
            wall_id: wall.clone(),
            segment_index: 1
        })
    );
    assert!(state.scene().openings.is_empty());
}

#[test]
fn test_delete_wall_cascades_to_openings() {
    let mut state = DesignerState::new();
    let a = state
        .add_wall(vec![Point2D::new(0.0, 0.0), Point2D::new(4.0, 0.0)])
        .unwrap();
    let b = state
        .add_wall(vec![Point2D::new(0.0, 3.0), Point2D::new(4.0, 3.0)])
        .unwrap();
    state.add_opening(&a, 0, 0.2, OpeningKind::Door).unwrap();
    state.add_opening(&a, 0, 0.7, OpeningKind::Window).unwrap();
    state.add_opening(&b, 0, 0.5, OpeningKind::Window).unwrap();

    assert_eq!(state.delete_wall(&a).unwrap(), 2);
    assert_eq!(state.scene().openings.len(), 1);
    assert!(state.scene().validate().is_ok());

    state.undo();
    assert_eq!(state.scene().openings.len(), 3);
}

#[test]
fn test_furniture_lifecycle() {
    let catalog = Catalog::builtin();
    let mut state = DesignerState::new();
    let desk = state
        .add_furniture_with(
            catalog.get("8").unwrap(),
            Vector3::new(1.0, 0.0, 1.0),
            FurnitureOverrides {
                scale: Some(Vector3::new(1.5, 1.0, 0.8)),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(state.selected_furniture(), Some(desk.clone()));

    state.rotate_furniture(&desk, 0.25).unwrap();
    state.rotate_furniture(&desk, 0.25).unwrap();
    let copy = state.duplicate_furniture(&desk).unwrap();
    let original = state.scene().furniture_item(&desk).unwrap().clone();
    let duplicate = state.scene().furniture_item(&copy).unwrap().clone();
    assert!((original.yaw() - 0.5).abs() < 1e-12);
    assert_eq!(duplicate.position, Vector3::new(2.0, 0.0, 2.0));
    assert_eq!(duplicate.scale, original.scale);

    state
        .move_furniture(&desk, Vector3::new(-3.0, 0.0, 4.0))
        .unwrap();
    state.delete_furniture(&copy).unwrap();
    assert_eq!(state.scene().furniture.len(), 1);
    assert_eq!(state.selection(), None);
}

#[test]
fn test_move_rejects_non_finite_position() {
    let catalog = Catalog::builtin();
    let mut state = DesignerState::new();
    let id = state
        .add_furniture(catalog.get("3").unwrap(), Vector3::zero())
        .unwrap();
    assert!(state
        .move_furniture(&id, Vector3::new(f64::INFINITY, 0.0, 0.0))
        .is_err());
    assert_eq!(state.scene().furniture_item(&id).unwrap().position, Vector3::zero());
}

#[test]
fn test_delete_selected() {
    let mut state = DesignerState::new();
    assert_eq!(state.delete_selected(), Err(ValidationError::NothingSelected));
    let wall = state
        .add_wall(vec![Point2D::new(0.0, 0.0), Point2D::new(4.0, 0.0)])
        .unwrap();
    assert_eq!(
        state.select_at(Point2D::new(2.0, 0.1)),
        Some(Selection::Wall(wall))
    );
    state.delete_selected().unwrap();
    assert!(state.scene().walls.is_empty());
}

#[test]
fn test_load_template_resets_history_to_template() {
    let mut state = DesignerState::new();
    state
        .add_wall(vec![Point2D::new(0.0, 0.0), Point2D::new(4.0, 0.0)])
        .unwrap();
    let generation = state.generation();
    let template = templates::find("studio-apartment").unwrap();
    state.load_template(&template);

    assert!(state.generation() > generation);
    assert_eq!(state.history_len(), 1);
    assert_eq!(state.scene().walls.len(), template.scene.walls.len());
    assert_eq!(state.design_name, "Studio Apartment");

    let before = state.scene().clone();
    let catalog = Catalog::builtin();
    state
        .add_furniture(catalog.get("11").unwrap(), Vector3::zero())
        .unwrap();
    state.undo();
    assert_eq!(state.scene(), &before);
}

#[test]
fn test_tool_switch_abandons_draft() {
    let mut state = DesignerState::new();
    state.set_tool(EditTool::Wall);
    state.pointer_down(Point2D::new(0.0, 0.0)).unwrap();
    state.set_tool(EditTool::Select);
    assert!(state.draft().is_empty());
}

#[test]
fn test_furniture_drag_commits_once_on_release() {
    let catalog = Catalog::builtin();
    let mut state = DesignerState::new();
    let id = state
        .add_furniture(catalog.get("2").unwrap(), Vector3::new(1.0, 0.0, 1.0))
        .unwrap();
    let len = state.history_len();

    state.pointer_down(Point2D::new(1.2, 1.2)).unwrap();
    state.pointer_move(Point2D::new(2.0, 2.0));
    state.pointer_move(Point2D::new(3.2, 4.2));
    assert_eq!(state.history_len(), len);
    state.pointer_up(Point2D::new(3.2, 4.2)).unwrap();

    assert_eq!(state.history_len(), len + 1);
    assert_eq!(
        state.scene().furniture_item(&id).unwrap().position,
        Vector3::new(3.0, 0.0, 4.0)
    );
}

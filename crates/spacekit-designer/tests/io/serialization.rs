use spacekit_core::{Point2D, Vector3};
use spacekit_designer::model::furniture::FurnitureOverrides;
use spacekit_designer::serialization::DesignFile;
use spacekit_designer::{templates, Catalog, DesignerState, OpeningKind, ViewMode, ViewSettings};
use tempfile::tempdir;

fn sample_state() -> DesignerState {
    let catalog = Catalog::builtin();
    let mut state = DesignerState::new();
    state.design_name = "Loft".to_string();
    let wall = state
        .add_wall(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(6.0, 0.0),
            Point2D::new(6.0, 4.5),
        ])
        .unwrap();
    state.add_room(Point2D::new(-4.0, -3.0), Point2D::new(-1.0, 2.0)).unwrap();
    state.add_opening(&wall, 1, 0.3, OpeningKind::Window).unwrap();
    state.add_opening(&wall, 0, 0.75, OpeningKind::Door).unwrap();
    state
        .add_furniture_with(
            catalog.get("6").unwrap(),
            Vector3::new(2.5, 0.0, 1.25),
            FurnitureOverrides {
                rotation: Some(Vector3::new(0.0, 1.2, 0.0)),
                scale: Some(Vector3::new(1.4, 1.0, 2.0)),
                ..Default::default()
            },
        )
        .unwrap();
    state.set_view_settings(ViewSettings {
        mode: ViewMode::Plan,
        zoom_level: 150.0,
        grid_visible: false,
        show_measurements: true,
    });
    state
}

#[test]
fn test_create_new_design() {
    let design = DesignFile::new("Test Design");
    assert_eq!(design.version, "1.0");
    assert_eq!(design.metadata.name, "Test Design");
    assert!(design.scene_data.elements.is_empty());
    assert!(design.scene_data.furniture.is_empty());
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("loft.json");

    let mut state = sample_state();
    let original = state.scene().clone();
    state.save_to_file(&path).unwrap();
    assert!(!state.is_modified);

    let mut loaded = DesignerState::new();
    loaded.load_from_file(&path).unwrap();
    assert_eq!(loaded.scene(), &original);
    assert_eq!(loaded.design_name, "Loft");
    assert_eq!(loaded.view_settings().mode, ViewMode::Plan);
    assert_eq!(loaded.view_settings().zoom_level, 150.0);
    assert!(loaded.view_settings().show_measurements);
    assert_eq!(loaded.history_len(), 1);
}

#[test]
fn test_json_body_layout() {
    let design = sample_state().to_design_file();
    let value: serde_json::Value = serde_json::from_str(&design.to_json().unwrap()).unwrap();
    let scene = &value["sceneData"];
    let types: Vec<&str> = scene["elements"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["type"].as_str().unwrap())
        .collect();
    assert_eq!(types.iter().filter(|t| **t == "wall").count(), 5);
    assert_eq!(types.iter().filter(|t| **t == "room").count(), 1);
    assert!(types.contains(&"window"));
    assert!(types.contains(&"door"));
    assert_eq!(scene["furniture"][0]["type"], "Bed Frame");
    assert_eq!(scene["settings"]["mode"], "2D");
    assert_eq!(scene["settings"]["zoomLevel"], 150.0);
}

#[test]
fn test_template_round_trip() {
    for template in templates::builtin() {
        let scene = template.instantiate();
        let design = DesignFile::from_scene(&template.name, &scene, ViewSettings::default());
        let restored = DesignFile::from_json(&design.to_json().unwrap()).unwrap();
        assert_eq!(restored.to_scene(), scene);
    }
}

#[test]
fn test_dangling_openings_are_dropped_on_load() {
    let json = r##"{
        "version": "1.0",
        "metadata": {
            "name": "Broken",
            "created": "2026-01-01T00:00:00Z",
            "modified": "2026-01-01T00:00:00Z"
        },
        "sceneData": {
            "elements": [
                {"type": "wall", "id": "w1", "points": [{"x": 0, "y": 0}, {"x": 3, "y": 0}], "color": "#666666"},
                {"type": "door", "id": "d1", "wallId": "w1", "segmentIndex": 0, "t": 0.5, "width": 0.9, "height": 2.1, "color": "#8B4513"},
                {"type": "window", "id": "x1", "wallId": "gone", "segmentIndex": 0, "t": 0.5, "width": 1.2, "height": 1.2, "sill": 0.9, "color": "#22d3ee"}
            ],
            "furniture": []
        }
    }"##;
    let design = DesignFile::from_json(json).unwrap();
    let scene = design.to_scene();
    assert_eq!(scene.walls.len(), 1);
    assert!(scene.walls[0].completed);
    assert_eq!(scene.openings.len(), 1);
    assert_eq!(scene.openings[0].kind, OpeningKind::Door);
    assert_eq!(design.settings(), &ViewSettings::default());
}

#[test]
fn test_invalid_entities_are_repaired_on_load() {
    let json = r##"{
        "version": "1.0",
        "metadata": {
            "name": "Hand edited",
            "created": "2026-01-01T00:00:00Z",
            "modified": "2026-01-01T00:00:00Z"
        },
        "sceneData": {
            "elements": [
                {"type": "wall", "id": "stub", "points": [{"x": 0, "y": 0}], "color": "#666666"},
                {"type": "wall", "id": "w1", "points": [{"x": 0, "y": 0}, {"x": 3, "y": 0}], "color": "#666666"},
                {"type": "door", "id": "d1", "wallId": "stub", "segmentIndex": 0, "t": 0.5, "width": 0.9, "height": 2.1, "color": "#8B4513"},
                {"type": "door", "id": "d2", "wallId": "w1", "segmentIndex": 0, "t": 1.5, "width": 0.9, "height": 2.1, "color": "#8B4513"}
            ],
            "furniture": [
                {"id": "f1", "name": "Sofa", "category": "Living Room", "price": 899.0, "color": "#4b5563", "type": "sofa",
                 "position": {"x": 1, "y": 0, "z": 1}, "rotation": {"x": 0, "y": 0, "z": 0}, "scale": {"x": 0, "y": -1, "z": 2}}
            ]
        }
    }"##;
    let design = DesignFile::from_json(json).unwrap();
    let scene = design.to_scene();
    assert!(scene.validate().is_ok());
    assert_eq!(scene.walls.len(), 1);
    assert_eq!(scene.walls[0].id, "w1");
    assert_eq!(scene.openings.len(), 1);
    assert_eq!(scene.openings[0].t, 1.0);
    assert_eq!(scene.furniture[0].scale, Vector3::new(1.0, 1.0, 2.0));

    let mut state = DesignerState::new();
    state.load_design_file(&design);
    assert!(state.scene().validate().is_ok());
    assert_eq!(state.design_name, "Hand edited");
}

#[test]
fn test_load_missing_file_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.json");
    let err = DesignFile::load_from_file(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("missing.json"));
}

use serde_json::json;
use spacekit_assistant::{normalize_payload, normalize_response, NormalizeLimits};
use spacekit_core::{AiError, Point2D, Vector3};

const FENCED: &str = "```json\n{\"elements\":[{\"type\":\"wall\",\"points\":[{\"x\":0,\"y\":0},{\"x\":5,\"y\":0}]}],\"furniture\":[{\"name\":\"Chair\"}]}\n``` some trailing prose";

#[test]
fn test_fenced_payload_with_trailing_prose() {
    let scene = normalize_response(FENCED, &NormalizeLimits::default()).unwrap();

    assert_eq!(scene.walls.len(), 1);
    assert_eq!(
        scene.walls[0].points,
        vec![Point2D::new(0.0, 0.0), Point2D::new(5.0, 0.0)]
    );
    assert_eq!(scene.furniture.len(), 1);
    let chair = &scene.furniture[0];
    assert_eq!(chair.name, "Chair");
    assert_eq!(chair.color, "#888888");
    assert_eq!(chair.position, Vector3::zero());
    assert_eq!(chair.rotation, Vector3::zero());
    assert_eq!(chair.scale, Vector3::one());
}

#[test]
fn test_truncated_mid_array_keeps_complete_wall() {
    let truncated = "```json\n{\"elements\":[{\"type\":\"wall\",\"points\":[{\"x\":0,\"y\":0},{\"x\":5,\"y\":0}]}],\"furniture\":[{\"name\":\"Chair\"},";
    let scene = normalize_response(truncated, &NormalizeLimits::default()).unwrap();
    assert_eq!(scene.walls.len(), 1);
    assert_eq!(scene.walls[0].points.len(), 2);
    assert!(scene.furniture.len() <= 1);
}

#[test]
fn test_truncated_inside_furniture_string() {
    let truncated = "{\"elements\":[{\"type\":\"wall\",\"points\":[{\"x\":0,\"y\":0},{\"x\":5,\"y\":0}]}],\"furniture\":[{\"name\":\"Ch";
    let scene = normalize_response(truncated, &NormalizeLimits::default()).unwrap();
    assert_eq!(scene.walls.len(), 1);
}

#[test]
fn test_truncated_inside_top_level_key() {
    let truncated = "{\"elements\":[{\"type\":\"wall\",\"points\":[{\"x\":0,\"y\":0},{\"x\":5,\"y\":0}]}],\"furn";
    let scene = normalize_response(truncated, &NormalizeLimits::default()).unwrap();
    assert_eq!(scene.walls.len(), 1);
    assert!(scene.furniture.is_empty());
}

#[test]
fn test_truncated_inside_furniture_key() {
    let wall = "{\"elements\":[{\"type\":\"wall\",\"points\":[{\"x\":0,\"y\":0},{\"x\":5,\"y\":0}]}],";
    for tail in [
        "\"furniture\":[{\"name\":\"Chair\",\"col",
        "\"furniture\":[{\"name\":\"Chair\",\"color\"",
        "\"furniture\":[{\"name\":\"Chair\",\"color\":",
    ] {
        let truncated = format!("{wall}{tail}");
        let scene = normalize_response(&truncated, &NormalizeLimits::default()).unwrap();
        assert_eq!(scene.walls.len(), 1, "{tail}");
        assert_eq!(scene.furniture.len(), 1, "{tail}");
        assert_eq!(scene.furniture[0].name, "Chair");
        assert_eq!(scene.furniture[0].color, "#888888");
    }
}

#[test]
fn test_truncated_inside_wall_points() {
    let truncated = "{\"elements\":[{\"id\":\"a\",\"type\":\"wall\",\"points\":[{\"x\":0,\"y\":0},{\"x\":5,\"y\":0}]},{\"id\":\"b\",\"type\":\"wall\",\"points\":[{\"x\":5,\"y\":0},{\"x\":5,";
    let scene = normalize_response(truncated, &NormalizeLimits::default()).unwrap();
    assert_eq!(scene.walls.len(), 1);
    assert_eq!(scene.walls[0].id, "a");
}

#[test]
fn test_javascript_style_literal() {
    let text = r#"Here is the layout:
{
  // perimeter
  elements: [
    { id: "north", type: "wall", points: [{ x: 0, y: 0 }, { x: 3, y: 0 },], },
  ],
  /* furnishings */
  furniture: [{ name: "Lamp", position: { x: 1, y: 2 } }],
}"#;
    let scene = normalize_response(text, &NormalizeLimits::default()).unwrap();
    assert_eq!(scene.walls.len(), 1);
    assert_eq!(scene.walls[0].id, "north");
    assert_eq!(scene.furniture.len(), 1);
    assert_eq!(scene.furniture[0].position, Vector3::new(1.0, 0.0, 2.0));
}

#[test]
fn test_no_object_is_malformed() {
    let err = normalize_response("Sorry, I can't do that.", &NormalizeLimits::default()).unwrap_err();
    assert!(matches!(err, AiError::MalformedResponse { .. }));
    assert!(err.is_retryable());
}

#[test]
fn test_parsed_but_empty_is_distinct() {
    let err = normalize_response("{\"elements\": [], \"furniture\": []}", &NormalizeLimits::default())
        .unwrap_err();
    assert_eq!(err, AiError::EmptyResult);
}

#[test]
fn test_bounds_with_200_elements_and_100_furniture() {
    let elements: Vec<_> = (0..200)
        .map(|i| json!({"type": "wall", "points": [{"x": i, "y": 0}, {"x": i, "y": 2}]}))
        .collect();
    let furniture: Vec<_> = (0..100).map(|i| json!({"name": format!("Item {i}")})).collect();
    let scene = normalize_payload(
        &json!({"elements": elements, "furniture": furniture}),
        &NormalizeLimits::default(),
    )
    .unwrap();
    assert_eq!(scene.element_count(), 120);
    assert_eq!(scene.furniture.len(), 40);
}

#[test]
fn test_cap_spans_split_buckets() {
    let wall = json!({"points": [{"x": 0, "y": 0}, {"x": 1, "y": 0}]});
    let payload = json!({
        "elements": vec![wall.clone(); 100],
        "walls": vec![wall; 50],
    });
    let scene = normalize_payload(&payload, &NormalizeLimits::default()).unwrap();
    assert_eq!(scene.walls.len(), 120);
}

#[test]
fn test_normalized_scene_validates() {
    let scene = normalize_response(
        r#"{"elements":[
            {"id":"w","points":[{"x":0,"y":0},{"x":4,"y":0},{"x":4,"y":4}]},
            {"type":"window","wallId":"w","segmentIndex":1,"t":-2,"width":2},
            {"type":"door","wallId":"w","segmentIndex":9}
        ],
        "furniture":[{"scale":{"x":0,"y":"NaN","z":3}}]}"#,
        &NormalizeLimits::default(),
    )
    .unwrap();
    assert!(scene.validate().is_ok());
    assert_eq!(scene.openings.len(), 1);
    assert_eq!(scene.openings[0].t, 0.0);
    assert_eq!(scene.openings[0].width, 2.0);
    assert_eq!(scene.furniture[0].scale, Vector3::new(1.0, 1.0, 3.0));
}

use proptest::prelude::*;
use serde_json::{json, Value};
use spacekit_assistant::{extract_json, normalize_payload, normalize_response, NormalizeLimits};
use spacekit_core::AiError;

fn loose_number() -> impl Strategy<Value = Value> {
    prop_oneof![
        (-50.0..50.0f64).prop_map(|n| json!(n)),
        Just(json!("NaN")),
        Just(json!("12.5")),
        Just(json!(null)),
        Just(json!("wall")),
        Just(json!(-3)),
    ]
}

fn loose_point() -> impl Strategy<Value = Value> {
    (loose_number(), loose_number()).prop_map(|(x, y)| json!({"x": x, "y": y}))
}

fn loose_element() -> impl Strategy<Value = Value> {
    (
        prop_oneof![Just("wall"), Just("room"), Just("door"), Just("window"), Just("stair")],
        prop::collection::vec(loose_point(), 0..5),
        loose_number(),
        loose_number(),
    )
        .prop_map(|(kind, points, segment, t)| {
            json!({
                "id": "shared",
                "type": kind,
                "points": points,
                "wallId": "shared",
                "segmentIndex": segment,
                "t": t,
            })
        })
}

fn loose_furniture() -> impl Strategy<Value = Value> {
    (loose_number(), loose_number(), loose_number(), loose_number()).prop_map(|(x, y, s, r)| {
        json!({
            "position": {"x": x, "y": y},
            "rotation": {"y": r},
            "scale": {"x": s, "y": s, "z": s},
            "price": s,
        })
    })
}

proptest! {
    #[test]
    fn prop_output_is_bounded_and_valid(
        elements in prop::collection::vec(loose_element(), 0..40),
        furniture in prop::collection::vec(loose_furniture(), 0..30),
        max_elements in 1usize..30,
        max_furniture in 1usize..20,
    ) {
        let limits = NormalizeLimits { max_elements, max_furniture };
        let payload = json!({"elements": elements, "furniture": furniture});
        match normalize_payload(&payload, &limits) {
            Ok(scene) => {
                prop_assert!(scene.element_count() <= max_elements);
                prop_assert!(scene.furniture.len() <= max_furniture);
                prop_assert!(scene.validate().is_ok());
                for opening in &scene.openings {
                    prop_assert!((0.0..=1.0).contains(&opening.t));
                }
                for item in &scene.furniture {
                    prop_assert!(item.price.is_finite());
                    prop_assert_eq!(item.position.y, 0.0);
                }
            }
            Err(e) => prop_assert_eq!(e, AiError::EmptyResult),
        }
    }

    #[test]
    fn prop_truncation_never_panics(cut in 0usize..400) {
        let full = json!({
            "elements": [
                {"id": "a", "type": "wall", "points": [{"x": 0, "y": 0}, {"x": 6, "y": 0}]},
                {"type": "window", "wallId": "a", "segmentIndex": 0, "t": 0.3, "sill": 1.0}
            ],
            "furniture": [{"name": "Desk \"L\"", "position": {"x": 1, "z": 2}}]
        })
        .to_string();
        let end = full
            .char_indices()
            .map(|(i, _)| i)
            .find(|&i| i >= cut)
            .unwrap_or(full.len());
        match extract_json(&full[..end]) {
            Ok(value) => prop_assert!(value.is_object()),
            Err(e) => {
                let is_malformed = matches!(e, AiError::MalformedResponse { .. });
                prop_assert!(is_malformed);
            }
        }
    }

    #[test]
    fn prop_truncation_after_first_wall_keeps_it(offset in 0usize..200) {
        let full = r##"{"elements":[{"id":"a","type":"wall","points":[{"x":0,"y":0},{"x":6,"y":0}]},{"type":"window","wallId":"a","segmentIndex":0,"t":0.3,"sill":1.0}],"furniture":[{"name":"Desk \"L\"","color":"#aa0000","position":{"x":1,"z":2}}]}"##;
        let wall_end = full.find(r#"]},{"type":"window""#).unwrap() + 2;
        let end = (wall_end + offset).min(full.len());
        let scene = normalize_response(&full[..end], &NormalizeLimits::default()).unwrap();
        prop_assert_eq!(scene.walls.len(), 1);
        prop_assert_eq!(&scene.walls[0].id, "a");
        prop_assert!(scene.validate().is_ok());
    }
}

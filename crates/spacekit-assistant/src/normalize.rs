//! Conversion of an untrusted AI payload into a bounded, well-typed scene.
//!
//! The payload is never deserialized into domain types directly. Each field
//! is read from the loose [`Value`] tree, coerced, and defaulted, so the
//! result only ever holds finite coordinates, positive scales, openings that
//! resolve against a wall, and at most the configured number of entities.

use serde_json::{Map, Value};
use spacekit_core::constants::{
    AI_ELEMENT_COLOR, AI_FURNITURE_COLOR, MAX_AI_ELEMENTS, MAX_AI_FURNITURE,
};
use spacekit_core::{AiError, Point2D, Vector3};
use spacekit_designer::model::new_stamp;
use spacekit_designer::model::opening::clamp_t;
use spacekit_designer::{FurnitureItem, HitTester, Opening, OpeningKind, Room, SceneData, WallSegment};
use std::collections::HashSet;
use tracing::{debug, info};

use crate::extract::extract_json;

/// Upper bounds applied to a generated scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeLimits {
    pub max_elements: usize,
    pub max_furniture: usize,
}

impl Default for NormalizeLimits {
    fn default() -> Self {
        Self {
            max_elements: MAX_AI_ELEMENTS,
            max_furniture: MAX_AI_FURNITURE,
        }
    }
}

/// Extracts and normalizes a scene from raw service text.
pub fn normalize_response(text: &str, limits: &NormalizeLimits) -> Result<SceneData, AiError> {
    let payload = extract_json(text)?;
    let scene = normalize_payload(&payload, limits)?;
    info!(
        "Normalized AI scene: {} walls, {} rooms, {} openings, {} furniture",
        scene.walls.len(),
        scene.rooms.len(),
        scene.openings.len(),
        scene.furniture.len()
    );
    Ok(scene)
}

/// Normalizes a parsed payload.
///
/// Fails with [`AiError::EmptyResult`] when neither elements nor furniture
/// survive normalization.
pub fn normalize_payload(payload: &Value, limits: &NormalizeLimits) -> Result<SceneData, AiError> {
    let stamp = new_stamp();
    let raw_elements = combine_elements(payload, limits.max_elements);
    let mut scene = SceneData::new();
    normalize_elements(&raw_elements, &stamp, &mut scene);

    let raw_furniture = payload
        .get("furniture")
        .and_then(Value::as_array)
        .or_else(|| payload.get("items").and_then(Value::as_array));
    if let Some(items) = raw_furniture {
        scene.furniture = normalize_furniture(items, &stamp, limits.max_furniture);
    }

    if scene.element_count() == 0 && scene.furniture.is_empty() {
        return Err(AiError::EmptyResult);
    }
    Ok(scene)
}

/// One element entry plus the type implied by the field it came from.
struct RawElement<'a> {
    index: usize,
    fields: &'a Map<String, Value>,
    default_type: &'static str,
}

impl RawElement<'_> {
    fn element_type(&self) -> String {
        self.fields
            .get("type")
            .and_then(Value::as_str)
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(self.default_type)
            .trim()
            .to_ascii_lowercase()
    }

    fn number(&self, key: &str) -> Option<f64> {
        self.fields.get(key).and_then(number)
    }
}

/// Flattens `elements`, `walls`, `windows`, and `doors` and caps the total.
fn combine_elements(payload: &Value, max: usize) -> Vec<RawElement<'_>> {
    const BUCKETS: [(&str, &str); 4] = [
        ("elements", "wall"),
        ("walls", "wall"),
        ("windows", "window"),
        ("doors", "door"),
    ];
    BUCKETS
        .iter()
        .filter_map(|(key, default_type)| {
            payload
                .get(*key)
                .and_then(Value::as_array)
                .map(|entries| entries.iter().map(move |entry| (entry, *default_type)))
        })
        .flatten()
        .take(max)
        .enumerate()
        .filter_map(|(index, (entry, default_type))| {
            entry.as_object().map(|fields| RawElement {
                index,
                fields,
                default_type,
            })
        })
        .collect()
}

fn normalize_elements(raw: &[RawElement<'_>], stamp: &str, scene: &mut SceneData) {
    let mut ids = HashSet::new();
    let mut unique_id = |element: &RawElement<'_>| {
        let id = element
            .fields
            .get("id")
            .and_then(id_string)
            .filter(|id| !ids.contains(id))
            .unwrap_or_else(|| format!("ai-element-{}-{}", stamp, element.index));
        ids.insert(id.clone());
        id
    };

    // Structure first so openings may reference walls listed after them.
    let mut openings = Vec::new();
    for element in raw {
        let element_type = element.element_type();
        let kind = match element_type.as_str() {
            "door" => Some(OpeningKind::Door),
            "window" => Some(OpeningKind::Window),
            _ => None,
        };
        if let Some(kind) = kind {
            openings.push((element, kind));
            continue;
        }

        let points = normalize_points(element.fields.get("points"));
        let color = string_field(element.fields, "color").unwrap_or(AI_ELEMENT_COLOR);
        let completed = element.fields.get("completed").is_none_or(truthy);
        if element_type == "room" {
            if points.len() < 3 {
                debug!("Dropping AI room with {} usable points", points.len());
                continue;
            }
            scene.rooms.push(Room {
                id: unique_id(element),
                points,
                color: color.to_string(),
                completed,
            });
            continue;
        }

        match WallSegment::with_id(unique_id(element), points, color) {
            Ok(mut wall) => {
                wall.completed = completed;
                scene.walls.push(wall);
            }
            Err(e) => debug!("Dropping AI wall: {}", e),
        }
    }

    let hit_tester = HitTester::default();
    for (element, kind) in openings {
        let Some((wall_id, segment_index, t)) = anchor_opening(element, scene, &hit_tester) else {
            debug!("Dropping AI {} with no resolvable wall", kind);
            continue;
        };
        let mut opening = Opening::new(kind, wall_id, segment_index, t);
        opening.id = unique_id(element);
        if let Some(width) = element.number("width").filter(|w| *w > 0.0) {
            opening.width = width;
        }
        if let Some(height) = element.number("height").filter(|h| *h > 0.0) {
            opening.height = height;
        }
        if let Some(sill) = element.number("sill").filter(|s| *s >= 0.0) {
            opening.sill = Some(sill);
        }
        if let Some(color) = string_field(element.fields, "color") {
            opening.color = color.to_string();
        }
        scene.openings.push(opening);
    }
}

/// Resolves an opening's host run from `wallId`/`segmentIndex`/`t`, falling
/// back to the nearest wall around a `position` hint.
fn anchor_opening(
    element: &RawElement<'_>,
    scene: &SceneData,
    hit_tester: &HitTester,
) -> Option<(String, usize, f64)> {
    let wall_id = element
        .fields
        .get("wallId")
        .or_else(|| element.fields.get("wall"))
        .and_then(id_string);
    let segment_index = element
        .number("segmentIndex")
        .filter(|i| *i >= 0.0 && i.fract() == 0.0)
        .map_or(0, |i| i as usize);

    if let Some(wall_id) = wall_id {
        if scene.check_wall_segment(&wall_id, segment_index).is_ok() {
            let t = element.number("t").map_or(0.5, clamp_t);
            return Some((wall_id, segment_index, t));
        }
    }

    let position = element.fields.get("position").and_then(point)?;
    let hit = hit_tester.wall_at(scene, position)?;
    Some((hit.wall_id, hit.segment_index, clamp_t(hit.t)))
}

fn normalize_furniture(items: &[Value], stamp: &str, max: usize) -> Vec<FurnitureItem> {
    let mut ids = HashSet::new();
    items
        .iter()
        .filter_map(Value::as_object)
        .take(max)
        .enumerate()
        .map(|(index, fields)| {
            let id = fields
                .get("id")
                .and_then(id_string)
                .filter(|id| !ids.contains(id))
                .unwrap_or_else(|| format!("ai-furniture-{}-{}", stamp, index));
            ids.insert(id.clone());
            FurnitureItem {
                id,
                name: string_field(fields, "name")
                    .map_or_else(|| format!("AI Furniture {}", index + 1), str::to_string),
                category: string_field(fields, "category").unwrap_or("Decor").to_string(),
                price: fields.get("price").and_then(number).unwrap_or(0.0),
                color: string_field(fields, "color")
                    .unwrap_or(AI_FURNITURE_COLOR)
                    .to_string(),
                item_type: string_field(fields, "type").unwrap_or("Custom").to_string(),
                position: furniture_position(fields.get("position")),
                rotation: vector(fields.get("rotation"), Vector3::zero(), |_| true),
                scale: vector(fields.get("scale"), Vector3::one(), |v| v > 0.0),
            }
        })
        .collect()
}

/// Plan-style `{x, y}` positions map `y` onto depth; furniture always rests on the floor.
fn furniture_position(value: Option<&Value>) -> Vector3 {
    let axis = |key: &str| value.and_then(|v| v.get(key)).and_then(number);
    Vector3::new(
        axis("x").unwrap_or(0.0),
        0.0,
        axis("z").or_else(|| axis("y")).unwrap_or(0.0),
    )
}

fn vector(value: Option<&Value>, fallback: Vector3, accept: impl Fn(f64) -> bool) -> Vector3 {
    let axis = |key: &str, default: f64| {
        value
            .and_then(|v| v.get(key))
            .and_then(number)
            .filter(|n| accept(*n))
            .unwrap_or(default)
    };
    Vector3::new(
        axis("x", fallback.x),
        axis("y", fallback.y),
        axis("z", fallback.z),
    )
}

/// Keeps only points whose coordinates coerce to finite numbers.
pub fn normalize_points(value: Option<&Value>) -> Vec<Point2D> {
    value
        .and_then(Value::as_array)
        .map(|points| points.iter().filter_map(point).collect())
        .unwrap_or_default()
}

fn point(value: &Value) -> Option<Point2D> {
    let x = value.get("x").and_then(number)?;
    let y = value.get("y").and_then(number)?;
    Some(Point2D::new(x, y))
}

/// Finite number from a JSON number or a numeric string.
fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn string_field<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

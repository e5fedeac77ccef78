//! The authoritative entity lists and the element encoding used on disk.

use serde::{Deserialize, Serialize};
use spacekit_core::{Point2D, ValidationError};
use tracing::warn;

use crate::geometry::segment_length_and_angle;
use crate::model::{FurnitureItem, Opening, OpeningKind, Room, WallSegment};

/// Full state of one design: the walls arena plus everything that hangs off it.
///
/// A `SceneData` is also the unit of edit history; snapshots are deep copies.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SceneData {
    pub walls: Vec<WallSegment>,
    pub rooms: Vec<Room>,
    pub openings: Vec<Opening>,
    pub furniture: Vec<FurnitureItem>,
}

/// An opening resolved against its host wall run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedOpening {
    /// Start of the host run.
    pub start: Point2D,
    /// End of the host run.
    pub end: Point2D,
    /// Anchor point at `t` along the run.
    pub anchor: Point2D,
    /// Run direction in radians, `atan2(dy, dx)`.
    pub angle: f64,
}

impl ResolvedOpening {
    /// Endpoints of an opening of `width` centered on the anchor.
    pub fn span(&self, width: f64) -> (Point2D, Point2D) {
        let half = width / 2.0;
        let (dx, dy) = (self.angle.cos() * half, self.angle.sin() * half);
        (
            Point2D::new(self.anchor.x - dx, self.anchor.y - dy),
            Point2D::new(self.anchor.x + dx, self.anchor.y + dy),
        )
    }
}

/// One entry of the persisted `elements` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Wall(WallSegment),
    Room(Room),
    Door(Opening),
    Window(Opening),
}

impl Element {
    pub fn id(&self) -> &str {
        match self {
            Element::Wall(w) => &w.id,
            Element::Room(r) => &r.id,
            Element::Door(o) | Element::Window(o) => &o.id,
        }
    }
}

impl SceneData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
            && self.rooms.is_empty()
            && self.openings.is_empty()
            && self.furniture.is_empty()
    }

    /// Number of plan elements (walls, rooms, openings).
    pub fn element_count(&self) -> usize {
        self.walls.len() + self.rooms.len() + self.openings.len()
    }

    pub fn wall(&self, id: &str) -> Option<&WallSegment> {
        self.walls.iter().find(|w| w.id == id)
    }

    pub fn wall_mut(&mut self, id: &str) -> Option<&mut WallSegment> {
        self.walls.iter_mut().find(|w| w.id == id)
    }

    pub fn opening(&self, id: &str) -> Option<&Opening> {
        self.openings.iter().find(|o| o.id == id)
    }

    pub fn furniture_item(&self, id: &str) -> Option<&FurnitureItem> {
        self.furniture.iter().find(|f| f.id == id)
    }

    pub fn furniture_item_mut(&mut self, id: &str) -> Option<&mut FurnitureItem> {
        self.furniture.iter_mut().find(|f| f.id == id)
    }

    /// Checks that `wall_id` names a wall with run `segment_index`.
    pub fn check_wall_segment(&self, wall_id: &str, segment_index: usize) -> Result<(), ValidationError> {
        let wall = self.wall(wall_id).ok_or_else(|| ValidationError::UnknownEntity {
            id: wall_id.to_string(),
        })?;
        if segment_index >= wall.segment_count() {
            return Err(ValidationError::InvalidSegment {
                wall_id: wall_id.to_string(),
                segment_index,
            });
        }
        Ok(())
    }

    /// Resolves an opening's handle against the walls arena.
    pub fn resolve_opening(&self, opening: &Opening) -> Option<ResolvedOpening> {
        let (start, end) = self.wall(&opening.wall_id)?.segment(opening.segment_index)?;
        let (_, angle) = segment_length_and_angle(start, end);
        Some(ResolvedOpening {
            start,
            end,
            anchor: start.lerp(&end, opening.t),
            angle,
        })
    }

    /// Removes openings whose host wall or run no longer exists.
    ///
    /// Returns how many were removed.
    pub fn prune_dangling_openings(&mut self) -> usize {
        let before = self.openings.len();
        let walls = &self.walls;
        self.openings.retain(|o| {
            walls
                .iter()
                .any(|w| w.id == o.wall_id && o.segment_index < w.segment_count())
        });
        before - self.openings.len()
    }

    /// Verifies every structural invariant of the scene.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for wall in &self.walls {
            if wall.points.len() < 2 {
                return Err(ValidationError::TooFewPoints {
                    count: wall.points.len(),
                });
            }
            if !wall.points.iter().all(Point2D::is_finite) {
                return Err(ValidationError::NonFinite {
                    context: format!("wall {}", wall.id),
                });
            }
        }
        for opening in &self.openings {
            self.check_wall_segment(&opening.wall_id, opening.segment_index)?;
            if !(0.0..=1.0).contains(&opening.t) {
                return Err(ValidationError::NonFinite {
                    context: format!("opening {} parameter", opening.id),
                });
            }
        }
        for item in &self.furniture {
            if !item.scale.is_positive() {
                return Err(ValidationError::InvalidScale);
            }
            if !item.position.is_finite() || !item.rotation.is_finite() {
                return Err(ValidationError::NonFinite {
                    context: format!("furniture {}", item.id),
                });
            }
        }
        Ok(())
    }

    /// Flattens the plan into the persisted element list: walls, rooms, then openings.
    pub fn to_elements(&self) -> Vec<Element> {
        let mut elements = Vec::with_capacity(self.element_count());
        elements.extend(self.walls.iter().cloned().map(Element::Wall));
        elements.extend(self.rooms.iter().cloned().map(Element::Room));
        elements.extend(self.openings.iter().map(|o| match o.kind {
            OpeningKind::Door => Element::Door(o.clone()),
            OpeningKind::Window => Element::Window(o.clone()),
        }));
        elements
    }

    /// Rebuilds a scene from persisted elements and furniture.
    ///
    /// Loaded data is brought back within the scene invariants: walls with
    /// fewer than two finite points are dropped, then openings that do not
    /// resolve to an existing wall run. Opening parameters are clamped to
    /// `[0, 1]`. Scale axes that are not positive reset to 1, and furniture
    /// with a non-finite position or rotation is dropped.
    pub fn from_elements(elements: Vec<Element>, furniture: Vec<FurnitureItem>) -> Self {
        let mut scene = SceneData::default();
        for element in elements {
            match element {
                Element::Wall(wall) => scene.walls.push(wall),
                Element::Room(room) => scene.rooms.push(room),
                Element::Door(mut opening) => {
                    opening.kind = OpeningKind::Door;
                    scene.openings.push(opening);
                }
                Element::Window(mut opening) => {
                    opening.kind = OpeningKind::Window;
                    scene.openings.push(opening);
                }
            }
        }

        let walls_before = scene.walls.len();
        scene
            .walls
            .retain(|w| w.points.len() >= 2 && w.points.iter().all(Point2D::is_finite));
        if scene.walls.len() < walls_before {
            warn!(
                "Dropped {} walls with fewer than two finite points",
                walls_before - scene.walls.len()
            );
        }

        scene.openings.retain(|o| o.t.is_finite());
        for opening in &mut scene.openings {
            opening.t = opening.t.clamp(0.0, 1.0);
        }
        let dropped = scene.prune_dangling_openings();
        if dropped > 0 {
            warn!("Dropped {} openings with no host wall", dropped);
        }

        for mut item in furniture {
            if !item.position.is_finite() || !item.rotation.is_finite() {
                warn!("Dropped furniture {} with a non-finite transform", item.id);
                continue;
            }
            if !item.scale.is_positive() {
                warn!("Reset invalid scale on furniture {}", item.id);
                for axis in [&mut item.scale.x, &mut item.scale.y, &mut item.scale.z] {
                    if !(axis.is_finite() && *axis > 0.0) {
                        *axis = 1.0;
                    }
                }
            }
            scene.furniture.push(item);
        }
        scene
    }
}

use serde::{Deserialize, Serialize};
use spacekit_core::constants::{ROOM_FILL_COLOR, ROOM_WALL_COLOR};
use spacekit_core::{Point2D, ValidationError};

use super::{new_stamp, WallSegment};
use crate::geometry::Bounds;

/// Perimeter wall names, in the order the walls are generated.
const SIDES: [&str; 4] = ["top", "right", "bottom", "left"];

/// A rectangular room outline drawn on the plan.
///
/// Rooms are decorative on the plan; their four perimeter walls are
/// separate [`WallSegment`]s and carry all hit-testing and openings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub points: Vec<Point2D>,
    pub color: String,
    #[serde(default = "default_completed")]
    pub completed: bool,
}

fn default_completed() -> bool {
    true
}

impl Room {
    /// Builds a room spanning two opposite corners plus its four perimeter walls.
    ///
    /// Rejects rectangles narrower or shorter than `min_size`.
    pub fn rectangle(
        corner_a: Point2D,
        corner_b: Point2D,
        min_size: f64,
    ) -> Result<(Room, Vec<WallSegment>), ValidationError> {
        if !corner_a.is_finite() || !corner_b.is_finite() {
            return Err(ValidationError::NonFinite {
                context: "room corners".to_string(),
            });
        }
        let bounds = Bounds::from_corners(corner_a, corner_b);
        if bounds.width() < min_size || bounds.height() < min_size {
            return Err(ValidationError::RoomTooSmall {
                width: bounds.width(),
                height: bounds.height(),
                min: min_size,
            });
        }

        let points = bounds.corners().to_vec();
        let stamp = new_stamp();
        let mut walls = Vec::with_capacity(4);
        for (i, side) in SIDES.iter().enumerate() {
            walls.push(WallSegment::with_id(
                format!("room-wall-{}-{}", side, stamp),
                vec![points[i], points[(i + 1) % 4]],
                ROOM_WALL_COLOR,
            )?);
        }
        let room = Room {
            id: format!("room-{}", stamp),
            points,
            color: ROOM_FILL_COLOR.to_string(),
            completed: true,
        };
        Ok((room, walls))
    }

    pub fn bounds(&self) -> Option<Bounds> {
        let first = *self.points.first()?;
        Some(self.points.iter().fold(Bounds::from_corners(first, first), |acc, p| {
            Bounds::new(
                acc.min_x.min(p.x),
                acc.min_y.min(p.y),
                acc.max_x.max(p.x),
                acc.max_y.max(p.y),
            )
        }))
    }

    /// Floor area of the rectangle.
    pub fn area(&self) -> f64 {
        self.bounds().map(|b| b.width() * b.height()).unwrap_or(0.0)
    }
}

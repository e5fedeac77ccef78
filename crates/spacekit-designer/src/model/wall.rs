use serde::{Deserialize, Serialize};
use spacekit_core::constants::DRAWN_WALL_COLOR;
use spacekit_core::{Point2D, ValidationError};

use super::new_id;

/// A wall polyline: one or more contiguous straight runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallSegment {
    pub id: String,
    pub points: Vec<Point2D>,
    pub color: String,
    #[serde(default = "default_completed")]
    pub completed: bool,
}

fn default_completed() -> bool {
    true
}

impl WallSegment {
    /// Creates a completed wall in the hand-drawn color.
    ///
    /// Fails when fewer than two points are given or any point is not finite.
    pub fn new(points: Vec<Point2D>) -> Result<Self, ValidationError> {
        Self::with_id(new_id("wall"), points, DRAWN_WALL_COLOR)
    }

    /// Creates a completed wall with an explicit id and color.
    pub fn with_id(
        id: impl Into<String>,
        points: Vec<Point2D>,
        color: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if points.len() < 2 {
            return Err(ValidationError::TooFewPoints {
                count: points.len(),
            });
        }
        if !points.iter().all(Point2D::is_finite) {
            return Err(ValidationError::NonFinite {
                context: "wall points".to_string(),
            });
        }
        Ok(Self {
            id: id.into(),
            points,
            color: color.into(),
            completed: true,
        })
    }

    /// Number of straight runs (`points.len() - 1`).
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Endpoints of run `index`, if it exists.
    pub fn segment(&self, index: usize) -> Option<(Point2D, Point2D)> {
        let a = *self.points.get(index)?;
        let b = *self.points.get(index + 1)?;
        Some((a, b))
    }

    /// Iterates over `(index, start, end)` for every run.
    pub fn segments(&self) -> impl Iterator<Item = (usize, Point2D, Point2D)> + '_ {
        self.points
            .windows(2)
            .enumerate()
            .map(|(i, w)| (i, w[0], w[1]))
    }

    /// Total polyline length.
    pub fn length(&self) -> f64 {
        self.segments().map(|(_, a, b)| a.distance_to(&b)).sum()
    }
}

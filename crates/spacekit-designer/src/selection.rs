//! Hit-testing and selection shared by the plan and 3D views.

use spacekit_core::constants::{FURNITURE_HALF_EXTENT, HIT_TOLERANCE};
use spacekit_core::Point2D;

use crate::geometry::{distance_point_to_segment, Bounds};
use crate::scene::SceneData;

/// What a pointer landed on.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// A furniture item, by id.
    Furniture(String),
    /// A wall, by id.
    Wall(String),
}

impl Selection {
    pub fn id(&self) -> &str {
        match self {
            Selection::Furniture(id) | Selection::Wall(id) => id,
        }
    }

    pub fn is_furniture(&self) -> bool {
        matches!(self, Selection::Furniture(_))
    }
}

/// The closest wall run to a plan point.
#[derive(Debug, Clone, PartialEq)]
pub struct WallHit {
    pub wall_id: String,
    pub segment_index: usize,
    /// Projection parameter along the run, in [0, 1].
    pub t: f64,
    pub distance: f64,
}

/// Single hit-testing routine used by every view controller.
///
/// `HitTester` owns the selection policy:
/// - Furniture is tested first by containment in a fixed-size square
///   footprint; the most recently added item wins.
/// - Otherwise the nearest wall run strictly closer than `tolerance` wins.
/// - Anything else clears the selection.
///
/// # Design
///
/// Both the plan view and the 3D view translate their pointer input into a
/// plan point and call into the same `HitTester`, so the two views can never
/// disagree about what a click selects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitTester {
    /// Maximum wall distance, in world units, that still counts as a hit
    pub tolerance: f64,
    /// Half the side of the square furniture footprint
    pub furniture_half_extent: f64,
}

impl Default for HitTester {
    fn default() -> Self {
        Self {
            tolerance: HIT_TOLERANCE,
            furniture_half_extent: FURNITURE_HALF_EXTENT,
        }
    }
}

impl HitTester {
    pub fn new(tolerance: f64, furniture_half_extent: f64) -> Self {
        Self {
            tolerance,
            furniture_half_extent,
        }
    }

    /// Resolves a select-mode click.
    ///
    /// # Arguments
    ///
    /// * `scene` - The scene to test against
    /// * `point` - Pointer position in plan world coordinates
    ///
    /// # Returns
    ///
    /// `Some(selection)` for the winning entity, `None` for empty space.
    pub fn pick(&self, scene: &SceneData, point: Point2D) -> Option<Selection> {
        if let Some(id) = self.furniture_at(scene, point) {
            return Some(Selection::Furniture(id.to_string()));
        }
        self.wall_at(scene, point)
            .map(|hit| Selection::Wall(hit.wall_id))
    }

    /// Topmost furniture item whose footprint contains `point`.
    pub fn furniture_at<'a>(&self, scene: &'a SceneData, point: Point2D) -> Option<&'a str> {
        scene
            .furniture
            .iter()
            .rev()
            .find(|item| {
                Bounds::around(item.plan_position(), self.furniture_half_extent).contains(point)
            })
            .map(|item| item.id.as_str())
    }

    /// Nearest wall run within tolerance.
    pub fn wall_at(&self, scene: &SceneData, point: Point2D) -> Option<WallHit> {
        self.nearest_wall(scene, point)
            .filter(|hit| hit.distance < self.tolerance)
    }

    /// Nearest run of any completed wall, regardless of distance.
    ///
    /// On equal distances the earlier wall and run win.
    pub fn nearest_wall(&self, scene: &SceneData, point: Point2D) -> Option<WallHit> {
        let mut best: Option<WallHit> = None;
        for wall in scene.walls.iter().filter(|w| w.completed) {
            for (index, a, b) in wall.segments() {
                let projection = distance_point_to_segment(point, a, b);
                if best
                    .as_ref()
                    .is_none_or(|hit| projection.distance < hit.distance)
                {
                    best = Some(WallHit {
                        wall_id: wall.id.clone(),
                        segment_index: index,
                        t: projection.t,
                        distance: projection.distance,
                    });
                }
            }
        }
        best
    }
}

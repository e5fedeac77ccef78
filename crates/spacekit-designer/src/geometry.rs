//! Point and segment math shared by hit-testing and opening placement.

use spacekit_core::Point2D;

/// Result of projecting a point onto a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentProjection {
    /// Distance from the point to the closest point on the segment.
    pub distance: f64,
    /// Normalized position of the closest point, clamped to [0, 1].
    pub t: f64,
    /// The closest point on the segment.
    pub closest: Point2D,
}

/// Projects `p` onto segment `a`-`b`.
///
/// `t` is clamped to [0, 1], so points beyond either end measure their
/// distance to that endpoint. A degenerate segment (`a == b`) yields `t = 0`.
pub fn distance_point_to_segment(p: Point2D, a: Point2D, b: Point2D) -> SegmentProjection {
    let ap = p - a;
    let ab = b - a;
    let len_sq = ab.x * ab.x + ab.y * ab.y;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        ((ap.x * ab.x + ap.y * ab.y) / len_sq).clamp(0.0, 1.0)
    };
    let closest = a.lerp(&b, t);
    SegmentProjection {
        distance: p.distance_to(&closest),
        t,
        closest,
    }
}

/// Axis-aligned rectangle in plan coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Builds the normalized rectangle spanned by two opposite corners.
    pub fn from_corners(a: Point2D, b: Point2D) -> Self {
        Self::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    /// Square of side `2 * half_extent` centred on `center`.
    pub fn around(center: Point2D, half_extent: f64) -> Self {
        Self::new(
            center.x - half_extent,
            center.y - half_extent,
            center.x + half_extent,
            center.y + half_extent,
        )
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Inclusive containment test.
    pub fn contains(&self, p: Point2D) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Corners in counter-clockwise order starting at the minimum corner.
    pub fn corners(&self) -> [Point2D; 4] {
        [
            Point2D::new(self.min_x, self.min_y),
            Point2D::new(self.max_x, self.min_y),
            Point2D::new(self.max_x, self.max_y),
            Point2D::new(self.min_x, self.max_y),
        ]
    }
}

/// Length and heading of a segment, as used to orient 3D wall boxes.
pub fn segment_length_and_angle(a: Point2D, b: Point2D) -> (f64, f64) {
    let d = b - a;
    (d.x.hypot(d.y), d.y.atan2(d.x))
}

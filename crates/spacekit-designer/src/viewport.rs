//! Viewport and coordinate transformation for the plan view.
//!
//! Handles conversion between pixel coordinates (screen space), world
//! coordinates (plan units), and the 3D scene's ground plane. Zoom is a
//! percentage that scales around the canvas center.
//!
//! Every conversion in the editor goes through this module; view
//! controllers never compute their own.

use std::fmt;

use spacekit_core::constants::{
    DEFAULT_ZOOM_PERCENT, MAX_ZOOM_PERCENT, MIN_ZOOM_PERCENT, PIXELS_PER_UNIT,
};
use spacekit_core::{Point2D, Vector3};

/// Converts a screen pixel to plan world coordinates.
///
/// Formula:
/// ```text
/// world = (screen - canvas_center) / (zoom_percent / 100) / pixels_per_unit
/// ```
pub fn screen_to_world(
    screen: Point2D,
    zoom_percent: f64,
    canvas_center: Point2D,
    pixels_per_unit: f64,
) -> Point2D {
    let scale = zoom_percent / 100.0 * pixels_per_unit;
    Point2D::new(
        (screen.x - canvas_center.x) / scale,
        (screen.y - canvas_center.y) / scale,
    )
}

/// Converts plan world coordinates to a screen pixel. Inverse of
/// [`screen_to_world`].
pub fn world_to_screen(
    world: Point2D,
    zoom_percent: f64,
    canvas_center: Point2D,
    pixels_per_unit: f64,
) -> Point2D {
    let scale = zoom_percent / 100.0 * pixels_per_unit;
    Point2D::new(
        world.x * scale + canvas_center.x,
        world.y * scale + canvas_center.y,
    )
}

/// Quantizes a value to the nearest multiple of `step`.
pub fn snap_to_grid(value: f64, step: f64) -> f64 {
    if step <= 0.0 {
        return value;
    }
    (value / step).round() * step
}

/// Projects a 3D scene position onto the plan: `(x, z)` becomes `(x, y)`.
/// The vertical axis is dropped.
pub fn scene_to_plan(position: Vector3) -> Point2D {
    Point2D::new(position.x, position.z)
}

/// Lifts a plan point into the scene at the given height.
pub fn plan_to_scene(point: Point2D, height: f64) -> Vector3 {
    Vector3::new(point.x, height, point.y)
}

/// Represents the plan viewport state (zoom and canvas size).
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    zoom_percent: f64,
    canvas_width: f64,
    canvas_height: f64,
    pixels_per_unit: f64,
}

impl Viewport {
    /// Creates a new viewport with initial dimensions at 100% zoom.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            zoom_percent: DEFAULT_ZOOM_PERCENT,
            canvas_width,
            canvas_height,
            pixels_per_unit: PIXELS_PER_UNIT,
        }
    }

    /// Overrides the pixels-per-unit scale.
    pub fn with_pixels_per_unit(mut self, pixels_per_unit: f64) -> Self {
        if pixels_per_unit > 0.0 && pixels_per_unit.is_finite() {
            self.pixels_per_unit = pixels_per_unit;
        }
        self
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    pub fn pixels_per_unit(&self) -> f64 {
        self.pixels_per_unit
    }

    /// Sets the canvas dimensions (typically called when window resizes).
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// Center of the canvas in pixels.
    pub fn canvas_center(&self) -> Point2D {
        Point2D::new(self.canvas_width / 2.0, self.canvas_height / 2.0)
    }

    /// Gets the current zoom in percent (100.0 = 1:1).
    pub fn zoom_percent(&self) -> f64 {
        self.zoom_percent
    }

    /// Sets the zoom, clamped to the supported percentage range.
    pub fn set_zoom_percent(&mut self, zoom_percent: f64) {
        if zoom_percent.is_finite() {
            self.zoom_percent = zoom_percent.clamp(MIN_ZOOM_PERCENT, MAX_ZOOM_PERCENT);
        }
    }

    /// Zooms in by 10 percentage points.
    pub fn zoom_in(&mut self) {
        self.set_zoom_percent(self.zoom_percent + 10.0);
    }

    /// Zooms out by 10 percentage points.
    pub fn zoom_out(&mut self) {
        self.set_zoom_percent(self.zoom_percent - 10.0);
    }

    /// Resets zoom to 100%.
    pub fn reset_zoom(&mut self) {
        self.zoom_percent = DEFAULT_ZOOM_PERCENT;
    }

    /// Converts pixel coordinates to world coordinates.
    pub fn pixel_to_world(&self, pixel: Point2D) -> Point2D {
        screen_to_world(
            pixel,
            self.zoom_percent,
            self.canvas_center(),
            self.pixels_per_unit,
        )
    }

    /// Converts world coordinates to pixel coordinates.
    pub fn world_to_pixel(&self, world: Point2D) -> Point2D {
        world_to_screen(
            world,
            self.zoom_percent,
            self.canvas_center(),
            self.pixels_per_unit,
        )
    }

    /// Converts a world length to a pixel length at the current zoom.
    pub fn world_len_to_pixels(&self, len: f64) -> f64 {
        len * self.pixels_per_unit * self.zoom_percent / 100.0
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.0}% | Canvas: {:.0}x{:.0}",
            self.zoom_percent, self.canvas_width, self.canvas_height
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

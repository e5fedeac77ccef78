//! Shared constants for editing, viewing, and AI generation.
//!
//! These are the defaults used when no configuration file overrides them.

use std::f64::consts::FRAC_PI_4;

/// Maximum distance (world units) between a click and a wall segment that
/// still counts as a hit.
pub const HIT_TOLERANCE: f64 = 0.6;

/// Half of the fixed furniture footprint used for plan hit-testing.
pub const FURNITURE_HALF_EXTENT: f64 = 0.5;

/// Quantization step for furniture translation when grid snapping is on.
pub const GRID_STEP: f64 = 0.5;

/// Smallest width or height a room rectangle may have.
pub const MIN_ROOM_SIZE: f64 = 0.1;

/// Yaw increment applied by the "rotate selected" action.
pub const ROTATION_STEP: f64 = FRAC_PI_4;

/// Plan pixels per world unit at 100% zoom.
pub const PIXELS_PER_UNIT: f64 = 20.0;

/// Default plan zoom in percent.
pub const DEFAULT_ZOOM_PERCENT: f64 = 100.0;

/// Plan zoom limits in percent.
pub const MIN_ZOOM_PERCENT: f64 = 10.0;
pub const MAX_ZOOM_PERCENT: f64 = 500.0;

/// Wall extrusion used by the 3D view.
pub const WALL_HEIGHT: f64 = 3.0;
pub const WALL_THICKNESS: f64 = 0.2;

/// Upper bounds on what an AI response may contribute to a scene.
pub const MAX_AI_ELEMENTS: usize = 120;
pub const MAX_AI_FURNITURE: usize = 40;

/// Client-side AI throttling defaults.
pub const AI_RATE_WINDOW_MS: u64 = 60_000;
pub const AI_RATE_MAX_CALLS: usize = 3;
pub const AI_TOKEN_BUDGET: u64 = 150_000;

/// Characters of the original text kept in a malformed-response diagnostic.
pub const DIAGNOSTIC_EXCERPT_CHARS: usize = 200;

/// Default colors.
pub const DRAWN_WALL_COLOR: &str = "#666666";
pub const ROOM_WALL_COLOR: &str = "#D6D6D6";
pub const ROOM_FILL_COLOR: &str = "#00ff00";
pub const WINDOW_COLOR: &str = "#22d3ee";
pub const DOOR_COLOR: &str = "#8B4513";
pub const AI_ELEMENT_COLOR: &str = "#D6D6D6";
pub const AI_FURNITURE_COLOR: &str = "#888888";

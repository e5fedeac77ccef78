use serde::{Deserialize, Serialize};
use spacekit_core::constants::{DOOR_COLOR, WINDOW_COLOR};
use std::fmt;

use super::new_id;

/// Door or window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpeningKind {
    #[default]
    Door,
    Window,
}

impl OpeningKind {
    pub fn default_width(self) -> f64 {
        match self {
            OpeningKind::Door => 0.9,
            OpeningKind::Window => 1.2,
        }
    }

    pub fn default_height(self) -> f64 {
        match self {
            OpeningKind::Door => 2.1,
            OpeningKind::Window => 1.2,
        }
    }

    /// Sill height above the floor. Doors have none.
    pub fn default_sill(self) -> Option<f64> {
        match self {
            OpeningKind::Door => None,
            OpeningKind::Window => Some(0.9),
        }
    }

    pub fn default_color(self) -> &'static str {
        match self {
            OpeningKind::Door => DOOR_COLOR,
            OpeningKind::Window => WINDOW_COLOR,
        }
    }

    pub fn id_prefix(self) -> &'static str {
        match self {
            OpeningKind::Door => "door",
            OpeningKind::Window => "win",
        }
    }
}

impl fmt::Display for OpeningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpeningKind::Door => write!(f, "door"),
            OpeningKind::Window => write!(f, "window"),
        }
    }
}

/// A door or window anchored at parameter `t` along one run of a wall.
///
/// Holds no absolute coordinates. The kind is carried by the enclosing
/// element tag when serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opening {
    pub id: String,
    #[serde(skip)]
    pub kind: OpeningKind,
    pub wall_id: String,
    pub segment_index: usize,
    pub t: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sill: Option<f64>,
    pub color: String,
}

impl Opening {
    /// Creates an opening with the kind's default dimensions; `t` is clamped to [0, 1].
    pub fn new(kind: OpeningKind, wall_id: impl Into<String>, segment_index: usize, t: f64) -> Self {
        Self {
            id: new_id(kind.id_prefix()),
            kind,
            wall_id: wall_id.into(),
            segment_index,
            t: clamp_t(t),
            width: kind.default_width(),
            height: kind.default_height(),
            sill: kind.default_sill(),
            color: kind.default_color().to_string(),
        }
    }

    /// Effective sill height; zero for doors.
    pub fn sill_height(&self) -> f64 {
        self.sill.unwrap_or(0.0)
    }
}

/// Clamps a segment parameter to [0, 1]; NaN becomes 0.
pub fn clamp_t(t: f64) -> f64 {
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}

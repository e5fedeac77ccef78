//! Configuration for SpaceKit
//!
//! Every tunable constant of the editor, the views, and the AI assistant
//! lives here. Files are TOML or JSON, chosen by extension, and are
//! validated on both load and save.
//!
//! Configuration is organized into sections:
//! - Editor (hit-testing, grid, history depth)
//! - View (scale, zoom, default mode)
//! - Assistant (throttling, budget, output bounds, model)

use serde::{Deserialize, Serialize};
use spacekit_core::constants::{
    AI_RATE_MAX_CALLS, AI_RATE_WINDOW_MS, AI_TOKEN_BUDGET, DEFAULT_ZOOM_PERCENT,
    FURNITURE_HALF_EXTENT, GRID_STEP, HIT_TOLERANCE, MAX_AI_ELEMENTS, MAX_AI_FURNITURE,
    MAX_ZOOM_PERCENT, MIN_ROOM_SIZE, MIN_ZOOM_PERCENT, PIXELS_PER_UNIT, ROTATION_STEP,
};
use std::path::Path;
use tracing::debug;

use crate::error::{SettingsError, SettingsResult};

/// View shown when a design opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StartupView {
    /// Top-down plan
    #[serde(rename = "2D")]
    Plan,
    /// Perspective scene
    #[default]
    #[serde(rename = "3D")]
    Scene,
}

impl std::fmt::Display for StartupView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plan => write!(f, "2D"),
            Self::Scene => write!(f, "3D"),
        }
    }
}

/// Editing behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Maximum world distance for a click to hit a wall
    pub hit_tolerance: f64,
    /// Half side of the square furniture hit box
    pub furniture_half_extent: f64,
    /// Grid spacing used for snapping
    pub grid_step: f64,
    /// Snap dragged furniture to the grid
    pub snap_to_grid: bool,
    /// Smallest room side accepted
    pub min_room_size: f64,
    /// Rotation applied by one rotate action, in radians
    pub rotation_step: f64,
    /// Snapshots kept for undo; unbounded when absent
    pub max_history: Option<usize>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            hit_tolerance: HIT_TOLERANCE,
            furniture_half_extent: FURNITURE_HALF_EXTENT,
            grid_step: GRID_STEP,
            snap_to_grid: true,
            min_room_size: MIN_ROOM_SIZE,
            rotation_step: ROTATION_STEP,
            max_history: None,
        }
    }
}

/// Presentation defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub pixels_per_unit: f64,
    pub zoom_percent: f64,
    pub grid_visible: bool,
    pub show_measurements: bool,
    pub mode: StartupView,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            pixels_per_unit: PIXELS_PER_UNIT,
            zoom_percent: DEFAULT_ZOOM_PERCENT,
            grid_visible: true,
            show_measurements: false,
            mode: StartupView::Scene,
        }
    }
}

/// AI assistant limits and service selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Rolling window for the call limit, in milliseconds
    pub rate_window_ms: u64,
    /// Calls allowed per window; 0 disables the limit
    pub rate_max_calls: usize,
    /// Tokens allowed per session; 0 disables the budget
    pub token_budget: u64,
    pub max_elements: usize,
    pub max_furniture: usize,
    pub model: String,
    /// Environment variable holding the service API key
    pub api_key_env: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            rate_window_ms: AI_RATE_WINDOW_MS,
            rate_max_calls: AI_RATE_MAX_CALLS,
            token_budget: AI_TOKEN_BUDGET,
            max_elements: MAX_AI_ELEMENTS,
            max_furniture: MAX_AI_FURNITURE,
            model: "models/gemini-2.5-flash".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub editor: EditorConfig,
    pub view: ViewConfig,
    pub assistant: AssistantConfig,
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse TOML text and validate it.
    pub fn from_toml_str(content: &str) -> SettingsResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::of(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;
        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };
        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };
        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;
        debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let positive = |key: &str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(SettingsError::invalid(key, "must be > 0"))
            }
        };

        positive("editor.hit_tolerance", self.editor.hit_tolerance)?;
        positive("editor.furniture_half_extent", self.editor.furniture_half_extent)?;
        positive("editor.grid_step", self.editor.grid_step)?;
        positive("editor.rotation_step", self.editor.rotation_step)?;
        if !(self.editor.min_room_size.is_finite() && self.editor.min_room_size >= 0.0) {
            return Err(SettingsError::invalid(
                "editor.min_room_size",
                "must be >= 0",
            ));
        }
        if self.editor.max_history == Some(0) {
            return Err(SettingsError::invalid(
                "editor.max_history",
                "must keep at least one snapshot",
            ));
        }

        positive("view.pixels_per_unit", self.view.pixels_per_unit)?;
        if !(MIN_ZOOM_PERCENT..=MAX_ZOOM_PERCENT).contains(&self.view.zoom_percent) {
            return Err(SettingsError::invalid(
                "view.zoom_percent",
                format!("must be within {}..={}", MIN_ZOOM_PERCENT, MAX_ZOOM_PERCENT),
            ));
        }

        if self.assistant.rate_max_calls > 0 && self.assistant.rate_window_ms == 0 {
            return Err(SettingsError::invalid(
                "assistant.rate_window_ms",
                "must be > 0 when calls are limited",
            ));
        }
        if self.assistant.max_elements == 0 && self.assistant.max_furniture == 0 {
            return Err(SettingsError::invalid(
                "assistant.max_elements",
                "elements and furniture cannot both be capped at 0",
            ));
        }
        if self.assistant.model.trim().is_empty() {
            return Err(SettingsError::invalid("assistant.model", "must not be empty"));
        }

        Ok(())
    }
}

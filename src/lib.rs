//! # SpaceKit
//!
//! A parametric floor-plan and furniture layout engine:
//! - Walls, rooms, doors, windows, and catalog furniture
//! - Snapshot undo/redo over every edit
//! - One scene driving both a 2D plan and a 3D view
//! - AI scene generation with tolerant response recovery
//!
//! ## Architecture
//!
//! SpaceKit is organized as a workspace with multiple crates:
//!
//! 1. **spacekit-core** - Error taxonomy, constants, primitive types
//! 2. **spacekit-designer** - Scene model, mutation API, history, view synchronization
//! 3. **spacekit-assistant** - AI response normalizer, rate limiting, request orchestration
//! 4. **spacekit-settings** - Configuration files and their location
//! 5. **spacekit** - This crate: logging, wiring, and the `spacekit` binary

use std::sync::Arc;
use std::time::Duration;

pub use spacekit_assistant as assistant;
pub use spacekit_designer as designer;
pub use spacekit_settings as settings;

pub use spacekit_core::{AiError, AssetError, Error, Point2D, Result, ValidationError, Vector3};

pub use spacekit_designer::{
    Catalog, DesignFile, DesignerState, EditTool, EditorSettings, SceneData, Template,
    ViewMode, ViewSettings, ViewSynchronizer, Viewport,
};

pub use spacekit_assistant::{
    AssistantSession, DesignGenerator, GeneratedScene, NormalizeLimits, RateLimiter,
};

pub use spacekit_settings::{Config, SettingsPersistence};

use spacekit_settings::{AssistantConfig, EditorConfig, StartupView, ViewConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Logs go to stderr so command output on stdout stays machine-readable.
/// `RUST_LOG` overrides the INFO default.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

pub fn editor_settings(config: &EditorConfig) -> EditorSettings {
    EditorSettings {
        hit_tolerance: config.hit_tolerance,
        furniture_half_extent: config.furniture_half_extent,
        grid_step: config.grid_step,
        snap_to_grid: config.snap_to_grid,
        min_room_size: config.min_room_size,
        rotation_step: config.rotation_step,
        max_history: config.max_history,
    }
}

pub fn view_settings(config: &ViewConfig) -> ViewSettings {
    ViewSettings {
        mode: match config.mode {
            StartupView::Plan => ViewMode::Plan,
            StartupView::Scene => ViewMode::Scene,
        },
        zoom_level: config.zoom_percent,
        grid_visible: config.grid_visible,
        show_measurements: config.show_measurements,
    }
}

/// Builds an empty designer configured from `config`.
pub fn designer_from_config(config: &Config) -> DesignerState {
    let mut state = DesignerState::with_settings(
        editor_settings(&config.editor),
        view_settings(&config.view),
    );
    state.viewport = Viewport::default().with_pixels_per_unit(config.view.pixels_per_unit);
    state.set_zoom_percent(config.view.zoom_percent);
    state
}

pub fn normalize_limits(config: &AssistantConfig) -> NormalizeLimits {
    NormalizeLimits {
        max_elements: config.max_elements,
        max_furniture: config.max_furniture,
    }
}

pub fn rate_limiter(config: &AssistantConfig) -> RateLimiter {
    RateLimiter::new(
        Duration::from_millis(config.rate_window_ms),
        config.rate_max_calls,
        config.token_budget,
    )
}

/// Builds an AI session around `generator` with the configured limits and model.
pub fn assistant_session(
    config: &AssistantConfig,
    generator: Arc<dyn DesignGenerator>,
) -> AssistantSession {
    AssistantSession::with_limiter(generator, rate_limiter(config), normalize_limits(config))
        .with_model(config.model.clone())
}

//! SpaceKit Settings Crate
//!
//! Handles application configuration and its persistence.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{AssistantConfig, Config, EditorConfig, StartupView, ViewConfig};
pub use error::{SettingsError, SettingsResult};
pub use persistence::{default_config_path, SettingsPersistence};

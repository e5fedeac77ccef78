//! Settings Persistence
//!
//! Locates the platform configuration file and loads or saves [`Config`]
//! through it.

use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{SettingsError, SettingsResult};

const APP_DIR: &str = "spacekit";
const CONFIG_FILE: &str = "config.toml";

/// Default config location: `<config_dir>/spacekit/config.toml`.
pub fn default_config_path() -> SettingsResult<PathBuf> {
    let mut path = dirs::config_dir().ok_or_else(|| {
        SettingsError::ConfigDirectory("no platform configuration directory".to_string())
    })?;
    path.push(APP_DIR);
    path.push(CONFIG_FILE);
    Ok(path)
}

/// Settings persistence layer
#[derive(Debug, Clone)]
pub struct SettingsPersistence {
    config: Config,
    path: PathBuf,
}

impl SettingsPersistence {
    /// Default config bound to `path`, not yet written.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            config: Config::default(),
            path: path.into(),
        }
    }

    /// Loads `path`; a missing file yields the defaults.
    pub fn load_or_default(path: impl Into<PathBuf>) -> SettingsResult<Self> {
        let path = path.into();
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Ok(Self::new(path));
        }
        let config = Config::load_from_file(&path)?;
        Ok(Self { config, path })
    }

    /// Loads the platform default file, falling back to defaults on any failure.
    pub fn load_default_location() -> Self {
        let path = match default_config_path() {
            Ok(path) => path,
            Err(e) => {
                warn!("{}; using defaults", e);
                return Self::new(CONFIG_FILE);
            }
        };
        Self::load_or_default(&path).unwrap_or_else(|e| {
            warn!("Ignoring unreadable config {}: {}", path.display(), e);
            Self::new(path)
        })
    }

    /// Writes the config, creating the parent directory if needed.
    pub fn save(&self) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        self.config.save_to_file(&self.path)?;
        info!("Settings saved to {}", self.path.display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get reference to config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get mutable reference to config
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Validate settings
    pub fn validate(&self) -> SettingsResult<()> {
        self.config.validate()
    }
}

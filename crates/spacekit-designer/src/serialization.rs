//! Design-file blob handed to the persistence collaborator.
//!
//! The body is JSON: a metadata block plus `sceneData` holding the
//! `elements` list, the `furniture` list, and the view `settings`. Storage
//! semantics live elsewhere; this module only encodes and decodes.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use spacekit_core::constants::DEFAULT_ZOOM_PERCENT;
use std::fmt;
use std::path::Path;

use crate::model::FurnitureItem;
use crate::scene::{Element, SceneData};

/// Design file format version
const FILE_FORMAT_VERSION: &str = "1.0";

/// Which renderer is in front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    #[serde(rename = "2D")]
    Plan,
    #[default]
    #[serde(rename = "3D")]
    Scene,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Plan => write!(f, "2D"),
            ViewMode::Scene => write!(f, "3D"),
        }
    }
}

/// View settings persisted with a design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSettings {
    pub mode: ViewMode,
    pub zoom_level: f64,
    pub grid_visible: bool,
    pub show_measurements: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            mode: ViewMode::Scene,
            zoom_level: DEFAULT_ZOOM_PERCENT,
            grid_visible: true,
            show_measurements: false,
        }
    }
}

/// Design metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignMetadata {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

/// Entity lists plus view settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneBlob {
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(default)]
    pub furniture: Vec<FurnitureItem>,
    #[serde(default)]
    pub settings: ViewSettings,
}

/// Complete design file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignFile {
    pub version: String,
    pub metadata: DesignMetadata,
    pub scene_data: SceneBlob,
}

impl DesignFile {
    /// Creates an empty design with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: DesignMetadata {
                name: name.into(),
                description: String::new(),
                created: now,
                modified: now,
            },
            scene_data: SceneBlob::default(),
        }
    }

    /// Captures a scene and its view settings.
    pub fn from_scene(name: impl Into<String>, scene: &SceneData, settings: ViewSettings) -> Self {
        let mut file = Self::new(name);
        file.scene_data = SceneBlob {
            elements: scene.to_elements(),
            furniture: scene.furniture.clone(),
            settings,
        };
        file
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.metadata.description = description.into();
        self
    }

    /// Rebuilds the scene, dropping openings that reference missing walls.
    pub fn to_scene(&self) -> SceneData {
        SceneData::from_elements(
            self.scene_data.elements.clone(),
            self.scene_data.furniture.clone(),
        )
    }

    pub fn settings(&self) -> &ViewSettings {
        &self.scene_data.settings
    }

    /// Encodes the blob as pretty JSON.
    pub fn to_json(&self) -> spacekit_core::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decodes a blob produced by [`DesignFile::to_json`].
    pub fn from_json(json: &str) -> spacekit_core::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Save design to file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).context("Failed to serialize design")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write design file: {}", path.display()))?;
        tracing::info!("Saved design '{}' to {}", self.metadata.name, path.display());
        Ok(())
    }

    /// Load design from file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read design file: {}", path.display()))?;
        let design: DesignFile =
            serde_json::from_str(&content).context("Failed to parse design file")?;
        Ok(design)
    }
}

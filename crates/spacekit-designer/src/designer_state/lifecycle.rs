//! Reset, templates, wholesale replacement, and design file I/O.

use tracing::{info, warn};

use super::DesignerState;
use crate::scene::SceneData;
use crate::serialization::DesignFile;
use crate::templates::Template;

impl DesignerState {
    /// Clears every entity list, the selection, the overlay, and the history.
    ///
    /// Afterwards the history holds a single snapshot of the empty scene.
    pub fn reset_scene(&mut self) {
        self.overlay = None;
        self.replace_scene(SceneData::default());
        self.is_modified = false;
        info!("Scene reset (generation {})", self.generation());
    }

    /// Replaces the scene with a fresh copy of a template.
    pub fn load_template(&mut self, template: &Template) {
        self.overlay = None;
        self.replace_scene(template.instantiate());
        self.design_name = template.name.clone();
        self.is_modified = true;
        info!("Loaded template '{}'", template.id);
    }

    /// Replaces the scene only if no reset or replacement happened since
    /// `generation` was observed.
    ///
    /// Returns `false` and leaves the state untouched for a stale result.
    pub fn replace_scene_if_current(&mut self, generation: u64, scene: SceneData) -> bool {
        if generation != self.generation() {
            warn!(
                "Discarding stale scene (captured generation {}, now {})",
                generation,
                self.generation()
            );
            return false;
        }
        self.replace_scene(scene);
        self.is_modified = true;
        true
    }

    /// Captures the scene and view settings as a design file.
    pub fn to_design_file(&self) -> DesignFile {
        DesignFile::from_scene(&self.design_name, &self.scene, self.view_settings())
    }

    /// Loads a design file; its scene becomes the sole history entry.
    pub fn load_design_file(&mut self, design: &DesignFile) {
        self.overlay = None;
        self.replace_scene(design.to_scene());
        self.set_view_settings(design.settings().clone());
        self.design_name = design.metadata.name.clone();
        self.is_modified = false;
    }

    /// Save design to file.
    pub fn save_to_file(&mut self, path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
        self.to_design_file().save_to_file(path)?;
        self.is_modified = false;
        Ok(())
    }

    /// Load design from file.
    pub fn load_from_file(&mut self, path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
        let design = DesignFile::load_from_file(path)?;
        self.load_design_file(&design);
        Ok(())
    }
}

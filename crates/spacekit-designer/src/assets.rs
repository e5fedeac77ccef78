//! Seams for the binary 3D asset codecs.
//!
//! Encoding and decoding happen in external collaborators. The designer only
//! hands an exporter the renderable [`SceneFrame`] and holds whatever an
//! importer returns as a read-only overlay next to the entity model.

use spacekit_core::AssetError;
use std::any::Any;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::view_sync::SceneFrame;

/// File extensions accepted for import.
pub const IMPORT_EXTENSIONS: [&str; 2] = ["glb", "gltf"];

/// Produces a portable binary asset from renderable scene content.
pub trait AssetExporter {
    fn export(&self, frame: &SceneFrame) -> Result<Vec<u8>, AssetError>;
}

/// Decodes a binary asset into a renderer-specific scene root.
pub trait AssetImporter {
    fn import(&self, file_name: &str, bytes: &[u8]) -> Result<ImportedOverlay, AssetError>;
}

/// An imported scene graph, layered beside the entity model and never merged into it.
#[derive(Clone)]
pub struct ImportedOverlay {
    pub name: String,
    root: Arc<dyn Any + Send + Sync>,
}

impl ImportedOverlay {
    pub fn new<T: Any + Send + Sync>(name: impl Into<String>, root: T) -> Self {
        Self {
            name: name.into(),
            root: Arc::new(root),
        }
    }

    /// Borrows the scene root as the renderer's concrete type.
    pub fn root<T: Any>(&self) -> Option<&T> {
        self.root.downcast_ref::<T>()
    }
}

impl fmt::Debug for ImportedOverlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImportedOverlay")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Checks that `file_name` has a glTF extension.
pub fn check_import_extension(file_name: &str) -> Result<(), AssetError> {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext {
        Some(ext) if IMPORT_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        _ => Err(AssetError::ImportFailure(format!(
            "Unsupported file type: {} (expected .glb or .gltf)",
            file_name
        ))),
    }
}

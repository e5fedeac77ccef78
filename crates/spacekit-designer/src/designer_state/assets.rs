//! Import overlay and export.

use spacekit_core::AssetError;
use tracing::{error, info};

use super::DesignerState;
use crate::assets::{check_import_extension, AssetExporter, AssetImporter, ImportedOverlay};
use crate::view_sync::SceneView;

impl DesignerState {
    /// Decodes an asset and shows it as a read-only overlay.
    ///
    /// On failure the previous overlay and the scene are left as they were.
    pub fn import_overlay(
        &mut self,
        importer: &dyn AssetImporter,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<(), AssetError> {
        check_import_extension(file_name)?;
        let overlay = importer
            .import(file_name, bytes)
            .inspect_err(|e| error!("Import of {} failed: {}", file_name, e))?;
        info!("Imported overlay '{}'", overlay.name);
        self.overlay = Some(overlay);
        self.touch();
        Ok(())
    }

    pub fn overlay(&self) -> Option<&ImportedOverlay> {
        self.overlay.as_ref()
    }

    pub fn clear_overlay(&mut self) {
        if self.overlay.take().is_some() {
            self.touch();
        }
    }

    /// Hands the renderable 3D content to an exporter.
    pub fn export_with(&self, exporter: &dyn AssetExporter) -> Result<Vec<u8>, AssetError> {
        let frame = SceneView::new().build(self);
        exporter
            .export(&frame)
            .inspect_err(|e| error!("Export failed: {}", e))
    }
}

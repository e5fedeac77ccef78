//! Furniture placement and transforms.

use spacekit_core::{Point2D, ValidationError, Vector3};

use super::DesignerState;
use crate::catalog::CatalogEntry;
use crate::model::furniture::FurnitureOverrides;
use crate::model::FurnitureItem;
use crate::selection::Selection;
use crate::viewport::snap_to_grid;

/// Offset applied to duplicated furniture.
const DUPLICATE_OFFSET: Vector3 = Vector3 {
    x: 1.0,
    y: 0.0,
    z: 1.0,
};

fn unknown(id: &str) -> ValidationError {
    ValidationError::UnknownEntity { id: id.to_string() }
}

fn require_finite(v: Vector3, context: &str) -> Result<(), ValidationError> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFinite {
            context: context.to_string(),
        })
    }
}

impl DesignerState {
    /// Places a catalog item with zero rotation and unit scale, and selects it.
    pub fn add_furniture(&mut self, entry: &CatalogEntry, position: Vector3) -> Result<String, ValidationError> {
        self.add_furniture_with(entry, position, FurnitureOverrides::default())
    }

    /// Places a catalog item, replacing defaults with any supplied overrides.
    pub fn add_furniture_with(
        &mut self,
        entry: &CatalogEntry,
        position: Vector3,
        overrides: FurnitureOverrides,
    ) -> Result<String, ValidationError> {
        require_finite(position, "furniture position")?;
        let mut item = FurnitureItem::from_catalog(entry, position);
        item.apply_overrides(overrides)?;
        let id = item.id.clone();
        self.scene.furniture.push(item);
        self.selection = Some(Selection::Furniture(id.clone()));
        self.commit("add furniture");
        Ok(id)
    }

    /// Moves an item to an absolute scene position.
    pub fn move_furniture(&mut self, id: &str, position: Vector3) -> Result<(), ValidationError> {
        require_finite(position, "furniture position")?;
        let item = self.scene.furniture_item_mut(id).ok_or_else(|| unknown(id))?;
        item.position = position;
        self.commit("move furniture");
        Ok(())
    }

    /// Moves an item so its footprint is centered on a plan point.
    ///
    /// The plan `y` becomes scene `z`; the vertical coordinate is kept.
    /// Snaps both axes to the grid when snapping is enabled.
    pub fn move_furniture_on_plan(&mut self, id: &str, point: Point2D) -> Result<(), ValidationError> {
        let (mut x, mut z) = (point.x, point.y);
        if self.settings.snap_to_grid {
            x = snap_to_grid(x, self.settings.grid_step);
            z = snap_to_grid(z, self.settings.grid_step);
        }
        let height = self
            .scene
            .furniture_item(id)
            .map(|item| item.position.y)
            .ok_or_else(|| unknown(id))?;
        self.move_furniture(id, Vector3::new(x, height, z))
    }

    /// Adds `delta_yaw` radians to an item's yaw.
    pub fn rotate_furniture(&mut self, id: &str, delta_yaw: f64) -> Result<(), ValidationError> {
        if !delta_yaw.is_finite() {
            return Err(ValidationError::NonFinite {
                context: "rotation".to_string(),
            });
        }
        let item = self.scene.furniture_item_mut(id).ok_or_else(|| unknown(id))?;
        item.rotation.y += delta_yaw;
        self.commit("rotate furniture");
        Ok(())
    }

    /// Rotates the selected item by one rotation step.
    pub fn rotate_selected(&mut self) -> Result<(), ValidationError> {
        let id = self.selected_furniture().ok_or(ValidationError::NothingSelected)?;
        self.rotate_furniture(&id, self.settings.rotation_step)
    }

    /// Sets an item's scale; every component must be finite and positive.
    pub fn scale_furniture(&mut self, id: &str, scale: Vector3) -> Result<(), ValidationError> {
        if !scale.is_positive() {
            return Err(ValidationError::InvalidScale);
        }
        let item = self.scene.furniture_item_mut(id).ok_or_else(|| unknown(id))?;
        item.scale = scale;
        self.commit("scale furniture");
        Ok(())
    }

    pub fn delete_furniture(&mut self, id: &str) -> Result<(), ValidationError> {
        let index = self
            .scene
            .furniture
            .iter()
            .position(|f| f.id == id)
            .ok_or_else(|| unknown(id))?;
        self.scene.furniture.remove(index);
        if self.selected_furniture().as_deref() == Some(id) {
            self.selection = None;
        }
        self.commit("delete furniture");
        Ok(())
    }

    /// Copies an item one unit along x and z, selects the copy, and returns its id.
    pub fn duplicate_furniture(&mut self, id: &str) -> Result<String, ValidationError> {
        let copy = self
            .scene
            .furniture_item(id)
            .ok_or_else(|| unknown(id))?
            .duplicate(DUPLICATE_OFFSET);
        let new_id = copy.id.clone();
        self.scene.furniture.push(copy);
        self.selection = Some(Selection::Furniture(new_id.clone()));
        self.commit("duplicate furniture");
        Ok(new_id)
    }
}

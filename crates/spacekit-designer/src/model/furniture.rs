use serde::{Deserialize, Serialize};
use spacekit_core::{Point2D, ValidationError, Vector3};

use super::new_id;
use crate::catalog::CatalogEntry;
use crate::viewport::scene_to_plan;

/// A piece of furniture placed in the scene.
///
/// `rotation.y` (yaw, radians) is the authoritative orientation. Every scale
/// component is finite and strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FurnitureItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub color: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub position: Vector3,
    pub rotation: Vector3,
    pub scale: Vector3,
}

/// Optional values that replace the catalog defaults when placing an item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FurnitureOverrides {
    pub name: Option<String>,
    pub color: Option<String>,
    pub rotation: Option<Vector3>,
    pub scale: Option<Vector3>,
}

impl FurnitureItem {
    /// Instantiates a catalog entry at `position` with zero rotation and unit scale.
    pub fn from_catalog(entry: &CatalogEntry, position: Vector3) -> Self {
        Self {
            id: new_id(&entry.id),
            name: entry.name.clone(),
            category: entry.category.clone(),
            price: entry.price,
            color: entry.default_color.clone(),
            item_type: entry.item_type.clone(),
            position,
            rotation: Vector3::zero(),
            scale: Vector3::one(),
        }
    }

    /// Applies overrides, rejecting an invalid scale without touching `self`.
    pub fn apply_overrides(&mut self, overrides: FurnitureOverrides) -> Result<(), ValidationError> {
        if let Some(scale) = overrides.scale {
            if !scale.is_positive() {
                return Err(ValidationError::InvalidScale);
            }
        }
        if let Some(rotation) = overrides.rotation {
            if !rotation.is_finite() {
                return Err(ValidationError::NonFinite {
                    context: "furniture rotation".to_string(),
                });
            }
        }
        if let Some(name) = overrides.name {
            self.name = name;
        }
        if let Some(color) = overrides.color {
            self.color = color;
        }
        if let Some(rotation) = overrides.rotation {
            self.rotation = rotation;
        }
        if let Some(scale) = overrides.scale {
            self.scale = scale;
        }
        Ok(())
    }

    /// Yaw in radians.
    pub fn yaw(&self) -> f64 {
        self.rotation.y
    }

    /// Footprint center on the plan.
    pub fn plan_position(&self) -> Point2D {
        scene_to_plan(self.position)
    }

    /// Copy with a fresh id derived from the same prefix.
    pub fn duplicate(&self, offset: Vector3) -> Self {
        let prefix = self
            .id
            .split_once('-')
            .map(|(head, _)| head)
            .unwrap_or("item");
        let mut copy = self.clone();
        copy.id = new_id(prefix);
        copy.position = self.position + offset;
        copy
    }
}

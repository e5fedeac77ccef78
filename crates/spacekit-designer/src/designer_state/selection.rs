//! Selection state.

use spacekit_core::Point2D;

use super::DesignerState;
use crate::selection::Selection;

impl DesignerState {
    /// Selects whatever lies under a plan point, clearing the selection on empty space.
    pub fn select_at(&mut self, point: Point2D) -> Option<Selection> {
        self.selection = self.hit_tester().pick(&self.scene, point);
        self.selection.clone()
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Selects an entity by id if it exists.
    pub fn set_selection(&mut self, selection: Option<Selection>) {
        self.selection = selection.filter(|s| match s {
            Selection::Furniture(id) => self.scene.furniture_item(id).is_some(),
            Selection::Wall(id) => self.scene.wall(id).is_some(),
        });
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn selected_furniture(&self) -> Option<String> {
        match &self.selection {
            Some(Selection::Furniture(id)) => Some(id.clone()),
            _ => None,
        }
    }

    pub fn selected_wall(&self) -> Option<String> {
        match &self.selection {
            Some(Selection::Wall(id)) => Some(id.clone()),
            _ => None,
        }
    }
}

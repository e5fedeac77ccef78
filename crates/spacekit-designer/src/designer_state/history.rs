//! Undo/redo functionality for designer state.

use tracing::debug;

use super::DesignerState;
use crate::selection::Selection;

impl DesignerState {
    /// Restores the previous snapshot. Returns `false` at the oldest entry.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo().cloned() else {
            debug!("Nothing to undo");
            return false;
        };
        self.restore(snapshot);
        true
    }

    /// Restores the next snapshot. Returns `false` when nothing was undone.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo().cloned() else {
            debug!("Nothing to redo");
            return false;
        };
        self.restore(snapshot);
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Number of snapshots in the history stack.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// History cursor; `-1` for an empty stack.
    pub fn history_cursor(&self) -> isize {
        self.history.cursor_index()
    }

    fn restore(&mut self, snapshot: crate::scene::SceneData) {
        self.scene = snapshot;
        let still_exists = match &self.selection {
            Some(Selection::Furniture(id)) => self.scene.furniture_item(id).is_some(),
            Some(Selection::Wall(id)) => self.scene.wall(id).is_some(),
            None => true,
        };
        if !still_exists {
            self.selection = None;
        }
        self.is_modified = true;
        self.touch();
    }
}

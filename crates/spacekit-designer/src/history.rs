//! Linear undo/redo over full scene snapshots.
//!
//! `cursor` points at the snapshot that matches the live scene. A commit
//! after an undo discards every snapshot beyond the cursor; there is no
//! branching timeline.

use tracing::debug;

use crate::scene::SceneData;

/// Snapshot stack with a cursor.
#[derive(Debug, Clone, Default)]
pub struct History {
    snapshots: Vec<SceneData>,
    cursor: Option<usize>,
    max_depth: Option<usize>,
}

impl History {
    /// Creates an empty, unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a history that keeps at most `max_depth` snapshots, dropping the oldest.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth.max(1)),
            ..Self::default()
        }
    }

    /// Records a snapshot as the new current state.
    pub fn commit(&mut self, snapshot: SceneData) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        self.snapshots.truncate(keep);
        self.snapshots.push(snapshot);

        if let Some(max) = self.max_depth {
            if self.snapshots.len() > max {
                let excess = self.snapshots.len() - max;
                self.snapshots.drain(..excess);
            }
        }
        self.cursor = Some(self.snapshots.len() - 1);
        debug!(
            "History commit: {} snapshots, cursor {}",
            self.snapshots.len(),
            self.cursor_index()
        );
    }

    /// Steps back one snapshot and returns it, or `None` at the oldest entry.
    pub fn undo(&mut self) -> Option<&SceneData> {
        match self.cursor {
            Some(c) if c > 0 => {
                self.cursor = Some(c - 1);
                self.snapshots.get(c - 1)
            }
            _ => None,
        }
    }

    /// Steps forward one snapshot and returns it, or `None` at the newest entry.
    pub fn redo(&mut self) -> Option<&SceneData> {
        let next = self.cursor.map_or(0, |c| c + 1);
        if next < self.snapshots.len() && self.cursor.is_some() {
            self.cursor = Some(next);
            self.snapshots.get(next)
        } else {
            None
        }
    }

    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(c) if c > 0)
    }

    pub fn can_redo(&self) -> bool {
        matches!(self.cursor, Some(c) if c + 1 < self.snapshots.len())
    }

    /// Cursor as a signed index; `-1` when empty.
    pub fn cursor_index(&self) -> isize {
        self.cursor.map_or(-1, |c| c as isize)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Number of snapshots available to undo into.
    pub fn undo_depth(&self) -> usize {
        self.cursor.unwrap_or(0)
    }

    /// Number of snapshots available to redo into.
    pub fn redo_depth(&self) -> usize {
        self.cursor
            .map_or(0, |c| self.snapshots.len().saturating_sub(c + 1))
    }

    /// The snapshot under the cursor.
    pub fn current(&self) -> Option<&SceneData> {
        self.cursor.and_then(|c| self.snapshots.get(c))
    }

    /// Drops every snapshot.
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.cursor = None;
    }

    /// Replaces the whole stack with a single baseline snapshot.
    pub fn reset_to(&mut self, baseline: SceneData) {
        self.clear();
        self.commit(baseline);
    }
}

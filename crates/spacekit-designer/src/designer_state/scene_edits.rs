//! Wall, room, and opening edits.

use spacekit_core::{Point2D, ValidationError};
use tracing::debug;

use super::DesignerState;
use crate::model::{Opening, OpeningKind, Room, WallSegment};
use crate::selection::Selection;

impl DesignerState {
    /// Appends a completed wall through `points`. Returns the new wall id.
    pub fn add_wall(&mut self, points: Vec<Point2D>) -> Result<String, ValidationError> {
        let wall = WallSegment::new(points).inspect_err(|e| debug!("Wall rejected: {}", e))?;
        let id = wall.id.clone();
        self.scene.walls.push(wall);
        self.commit("add wall");
        Ok(id)
    }

    /// Adds a rectangular room spanning two corners, plus its four perimeter walls.
    ///
    /// Rooms narrower or shorter than the configured minimum are rejected
    /// without touching the scene. Returns the room id.
    pub fn add_room(&mut self, corner_a: Point2D, corner_b: Point2D) -> Result<String, ValidationError> {
        let (room, walls) = Room::rectangle(corner_a, corner_b, self.settings.min_room_size)
            .inspect_err(|e| debug!("Room rejected: {}", e))?;
        let id = room.id.clone();
        self.scene.rooms.push(room);
        self.scene.walls.extend(walls);
        self.commit("add room");
        Ok(id)
    }

    /// Anchors a door or window on run `segment_index` of wall `wall_id`.
    ///
    /// `t` is clamped to [0, 1]. Returns the new opening id.
    pub fn add_opening(
        &mut self,
        wall_id: &str,
        segment_index: usize,
        t: f64,
        kind: OpeningKind,
    ) -> Result<String, ValidationError> {
        self.scene
            .check_wall_segment(wall_id, segment_index)
            .inspect_err(|e| debug!("Opening rejected: {}", e))?;
        let opening = Opening::new(kind, wall_id, segment_index, t);
        let id = opening.id.clone();
        self.scene.openings.push(opening);
        self.commit("add opening");
        Ok(id)
    }

    /// Places an opening on the wall run nearest to `point`.
    ///
    /// Fails with [`ValidationError::NoWallAtLocation`] unless some completed
    /// wall lies within hit tolerance.
    pub fn place_opening_at(&mut self, point: Point2D, kind: OpeningKind) -> Result<String, ValidationError> {
        let hit = self
            .hit_tester()
            .wall_at(&self.scene, point)
            .ok_or(ValidationError::NoWallAtLocation)
            .inspect_err(|_| debug!("No wall near {} for {}", point, kind))?;
        self.add_opening(&hit.wall_id, hit.segment_index, hit.t, kind)
    }

    /// Deletes a wall together with every opening anchored to it.
    ///
    /// Cascading is the chosen policy: openings are never detached or
    /// re-hosted onto another wall, and the whole change is one undo step.
    /// Returns the number of openings removed alongside the wall.
    pub fn delete_wall(&mut self, wall_id: &str) -> Result<usize, ValidationError> {
        let index = self
            .scene
            .walls
            .iter()
            .position(|w| w.id == wall_id)
            .ok_or_else(|| ValidationError::UnknownEntity {
                id: wall_id.to_string(),
            })?;
        self.scene.walls.remove(index);
        let before = self.scene.openings.len();
        self.scene.openings.retain(|o| o.wall_id != wall_id);
        let removed = before - self.scene.openings.len();
        if self.selection.as_ref().is_some_and(|s| s.id() == wall_id) {
            self.selection = None;
        }
        self.commit("delete wall");
        Ok(removed)
    }

    /// Deletes a single door or window.
    pub fn delete_opening(&mut self, opening_id: &str) -> Result<(), ValidationError> {
        let index = self
            .scene
            .openings
            .iter()
            .position(|o| o.id == opening_id)
            .ok_or_else(|| ValidationError::UnknownEntity {
                id: opening_id.to_string(),
            })?;
        self.scene.openings.remove(index);
        self.commit("delete opening");
        Ok(())
    }

    /// Recolors any entity by id.
    pub fn update_color(&mut self, entity_id: &str, color: &str) -> Result<(), ValidationError> {
        let color = color.to_string();
        let scene = &mut self.scene;
        let found = if let Some(wall) = scene.walls.iter_mut().find(|w| w.id == entity_id) {
            wall.color = color;
            true
        } else if let Some(item) = scene.furniture.iter_mut().find(|f| f.id == entity_id) {
            item.color = color;
            true
        } else if let Some(opening) = scene.openings.iter_mut().find(|o| o.id == entity_id) {
            opening.color = color;
            true
        } else if let Some(room) = scene.rooms.iter_mut().find(|r| r.id == entity_id) {
            room.color = color;
            true
        } else {
            false
        };

        if !found {
            return Err(ValidationError::UnknownEntity {
                id: entity_id.to_string(),
            });
        }
        self.commit("update color");
        Ok(())
    }

    /// Deletes whatever is selected.
    pub fn delete_selected(&mut self) -> Result<(), ValidationError> {
        match self.selection.clone() {
            Some(Selection::Furniture(id)) => self.delete_furniture(&id),
            Some(Selection::Wall(id)) => self.delete_wall(&id).map(|_| ()),
            None => Err(ValidationError::NothingSelected),
        }
    }
}

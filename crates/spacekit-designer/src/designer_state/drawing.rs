//! Pointer-driven editing on the plan: wall drafting, room dragging,
//! opening placement, and furniture dragging.
//!
//! All points are plan world coordinates; view controllers convert from
//! screen space before calling in. Drafting is never snapped.

use spacekit_core::{Point2D, ValidationError};

use super::{DesignerState, EditTool};
use crate::geometry::Bounds;
use crate::model::OpeningKind;
use crate::selection::Selection;

/// What an in-progress draft will become.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftKind {
    Wall,
    Room,
}

/// Result of a pointer press.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerOutcome {
    /// Select tool resolved a pick (possibly nothing).
    Selected(Option<Selection>),
    /// A draft point was recorded.
    Drafting,
    /// An entity was created.
    Created(String),
}

/// Furniture being dragged in select mode.
#[derive(Clone, Debug, PartialEq)]
pub struct FurnitureDrag {
    pub id: String,
    /// Pointer offset from the item center at grab time.
    pub offset: Point2D,
    /// Where the item center would land if released now.
    pub target: Point2D,
}

impl DesignerState {
    /// Switches tools, abandoning any draft.
    pub fn set_tool(&mut self, tool: EditTool) {
        self.tool = tool;
        self.draft.clear();
        self.drag = None;
    }

    pub fn draft(&self) -> &[Point2D] {
        &self.draft
    }

    pub fn draft_kind(&self) -> Option<DraftKind> {
        match self.tool {
            EditTool::Wall if !self.draft.is_empty() => Some(DraftKind::Wall),
            EditTool::Room if !self.draft.is_empty() => Some(DraftKind::Room),
            _ => None,
        }
    }

    pub fn drag(&self) -> Option<&FurnitureDrag> {
        self.drag.as_ref()
    }

    /// Handles a pointer press according to the active tool.
    pub fn pointer_down(&mut self, point: Point2D) -> Result<PointerOutcome, ValidationError> {
        if !point.is_finite() {
            return Err(ValidationError::NonFinite {
                context: "pointer".to_string(),
            });
        }
        match self.tool {
            EditTool::Select => {
                let picked = self.select_at(point);
                if let Some(Selection::Furniture(id)) = &picked {
                    if let Some(item) = self.scene.furniture_item(id) {
                        let center = item.plan_position();
                        self.drag = Some(FurnitureDrag {
                            id: id.clone(),
                            offset: point - center,
                            target: center,
                        });
                    }
                }
                Ok(PointerOutcome::Selected(picked))
            }
            EditTool::Wall => {
                self.draft.push(point);
                Ok(PointerOutcome::Drafting)
            }
            EditTool::Room => {
                self.draft = vec![point];
                Ok(PointerOutcome::Drafting)
            }
            EditTool::Door => self
                .place_opening_at(point, OpeningKind::Door)
                .map(PointerOutcome::Created),
            EditTool::Window => self
                .place_opening_at(point, OpeningKind::Window)
                .map(PointerOutcome::Created),
        }
    }

    /// Tracks pointer motion for room previews and furniture drags. Never commits.
    pub fn pointer_move(&mut self, point: Point2D) {
        if let Some(drag) = self.drag.as_mut() {
            drag.target = point - drag.offset;
        }
    }

    /// Completes a room drag or a furniture drag.
    pub fn pointer_up(&mut self, point: Point2D) -> Result<Option<String>, ValidationError> {
        if let Some(drag) = self.drag.take() {
            let target = point - drag.offset;
            self.move_furniture_on_plan(&drag.id, target)?;
            return Ok(Some(drag.id));
        }
        if self.tool == EditTool::Room {
            if let Some(anchor) = self.draft.first().copied() {
                self.draft.clear();
                return self.add_room(anchor, point).map(Some);
            }
        }
        Ok(None)
    }

    /// Rectangle the room tool would create if released at `point`.
    pub fn room_preview(&self, point: Point2D) -> Option<[Point2D; 4]> {
        match (self.tool, self.draft.first()) {
            (EditTool::Room, Some(anchor)) => Some(Bounds::from_corners(*anchor, point).corners()),
            _ => None,
        }
    }

    /// Turns the wall draft into a wall. Needs at least two draft points.
    pub fn finish_draft(&mut self) -> Result<String, ValidationError> {
        let points = std::mem::take(&mut self.draft);
        self.add_wall(points)
    }

    pub fn cancel_draft(&mut self) {
        self.draft.clear();
        self.drag = None;
    }
}

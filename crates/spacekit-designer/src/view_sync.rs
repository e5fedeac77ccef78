//! Keeps the 2D plan and the 3D scene consistent with one source of truth.
//!
//! Neither renderer reads the entity lists directly. Each frame they receive
//! a read-only, fully resolved description built here from the
//! [`DesignerState`]:
//!
//! ```text
//! DesignerState ──► PlanView::build  ──► PlanFrame  (screen pixels)
//!               └─► SceneView::build ──► SceneFrame (world units, y up)
//! ```
//!
//! Picking goes the other way. The plan converts a screen pixel to a plan
//! point through the viewport; the 3D view hands over the point where its
//! pick ray met the ground plane. Both end in the same [`HitTester`] call,
//! so selection precedence and tolerance are identical in the two views.
//!
//! [`HitTester`]: crate::selection::HitTester

use spacekit_core::constants::{WALL_HEIGHT, WALL_THICKNESS};
use spacekit_core::{Point2D, ValidationError, Vector3};

use crate::assets::ImportedOverlay;
use crate::designer_state::{DesignerState, FurnitureDrag, PointerOutcome};
use crate::geometry::segment_length_and_angle;
use crate::model::OpeningKind;
use crate::selection::Selection;
use crate::serialization::ViewSettings;
use crate::viewport::{plan_to_scene, scene_to_plan};

/// Window glazing depth across the wall.
const WINDOW_DEPTH: f64 = 0.3;
/// Door leaf depth across the wall.
const DOOR_DEPTH: f64 = WALL_THICKNESS + 0.05;

#[derive(Debug, Clone, PartialEq)]
pub struct PlanWall {
    pub id: String,
    pub points: Vec<Point2D>,
    pub color: String,
    pub selected: bool,
    /// Polyline length in world units, for measurement labels.
    pub length: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanRoom {
    pub id: String,
    pub points: Vec<Point2D>,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanOpening {
    pub id: String,
    pub kind: OpeningKind,
    pub start: Point2D,
    pub end: Point2D,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanFurniture {
    pub id: String,
    pub name: String,
    pub center: Point2D,
    /// Half side of the square footprint, in pixels.
    pub half_size: f64,
    pub yaw: f64,
    pub color: String,
    pub selected: bool,
}

/// Everything the 2D renderer draws, in screen pixels.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlanFrame {
    pub rooms: Vec<PlanRoom>,
    pub walls: Vec<PlanWall>,
    pub openings: Vec<PlanOpening>,
    pub furniture: Vec<PlanFurniture>,
    /// Points of the wall or room being drafted.
    pub draft: Vec<Point2D>,
    /// Grid line spacing in pixels, when the grid is shown.
    pub grid_spacing: Option<f64>,
    pub show_measurements: bool,
}

/// An oriented box in the 3D scene; `yaw` rotates about the vertical axis.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneBox {
    pub entity_id: String,
    pub center: Vector3,
    pub size: Vector3,
    pub yaw: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneFloor {
    pub id: String,
    pub points: Vec<Vector3>,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneFurniture {
    pub id: String,
    pub item_type: String,
    pub position: Vector3,
    pub rotation: Vector3,
    pub scale: Vector3,
    pub color: String,
    pub selected: bool,
}

/// Everything the 3D renderer draws, in world units.
#[derive(Debug, Clone, Default)]
pub struct SceneFrame {
    pub floors: Vec<SceneFloor>,
    pub walls: Vec<SceneBox>,
    pub openings: Vec<SceneBox>,
    pub furniture: Vec<SceneFurniture>,
    pub overlay: Option<ImportedOverlay>,
    pub grid_visible: bool,
}

fn is_selected(selection: Option<&Selection>, id: &str) -> bool {
    selection.is_some_and(|s| s.id() == id)
}

/// Plan view controller.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanView;

impl PlanView {
    pub fn new() -> Self {
        Self
    }

    /// Builds the plan frame for the current state.
    pub fn build(&self, state: &DesignerState) -> PlanFrame {
        let viewport = &state.viewport;
        let to_px = |p: &Point2D| viewport.world_to_pixel(*p);
        let scene = state.scene();
        let selection = state.selection();
        let view = state.view_settings();

        let rooms = scene
            .rooms
            .iter()
            .map(|room| PlanRoom {
                id: room.id.clone(),
                points: room.points.iter().map(to_px).collect(),
                color: room.color.clone(),
            })
            .collect();

        let walls = scene
            .walls
            .iter()
            .map(|wall| PlanWall {
                id: wall.id.clone(),
                points: wall.points.iter().map(to_px).collect(),
                color: wall.color.clone(),
                selected: is_selected(selection, &wall.id),
                length: wall.length(),
            })
            .collect();

        let openings = scene
            .openings
            .iter()
            .filter_map(|opening| {
                let resolved = scene.resolve_opening(opening)?;
                let (start, end) = resolved.span(opening.width);
                Some(PlanOpening {
                    id: opening.id.clone(),
                    kind: opening.kind,
                    start: to_px(&start),
                    end: to_px(&end),
                    color: opening.color.clone(),
                })
            })
            .collect();

        let half_size = viewport.world_len_to_pixels(state.settings.furniture_half_extent);
        let drag: Option<&FurnitureDrag> = state.drag();
        let furniture = scene
            .furniture
            .iter()
            .map(|item| {
                let center = match drag {
                    Some(d) if d.id == item.id => d.target,
                    _ => item.plan_position(),
                };
                PlanFurniture {
                    id: item.id.clone(),
                    name: item.name.clone(),
                    center: to_px(&center),
                    half_size,
                    yaw: item.yaw(),
                    color: item.color.clone(),
                    selected: is_selected(selection, &item.id),
                }
            })
            .collect();

        PlanFrame {
            rooms,
            walls,
            openings,
            furniture,
            draft: state.draft().iter().map(to_px).collect(),
            grid_spacing: view
                .grid_visible
                .then(|| viewport.world_len_to_pixels(1.0)),
            show_measurements: view.show_measurements,
        }
    }

    /// Converts a screen pixel to a plan point.
    pub fn to_world(&self, state: &DesignerState, screen: Point2D) -> Point2D {
        state.viewport.pixel_to_world(screen)
    }

    /// What a click at `screen` would select.
    pub fn pick(&self, state: &DesignerState, screen: Point2D) -> Option<Selection> {
        state.hit_tester().pick(state.scene(), self.to_world(state, screen))
    }

    pub fn pointer_down(
        &self,
        state: &mut DesignerState,
        screen: Point2D,
    ) -> Result<PointerOutcome, ValidationError> {
        let point = self.to_world(state, screen);
        state.pointer_down(point)
    }

    pub fn pointer_move(&self, state: &mut DesignerState, screen: Point2D) {
        let point = self.to_world(state, screen);
        state.pointer_move(point);
    }

    pub fn pointer_up(
        &self,
        state: &mut DesignerState,
        screen: Point2D,
    ) -> Result<Option<String>, ValidationError> {
        let point = self.to_world(state, screen);
        state.pointer_up(point)
    }
}

/// 3D view controller.
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneView;

impl SceneView {
    pub fn new() -> Self {
        Self
    }

    /// Builds the 3D frame for the current state.
    pub fn build(&self, state: &DesignerState) -> SceneFrame {
        let scene = state.scene();
        let selection = state.selection();

        let floors = scene
            .rooms
            .iter()
            .map(|room| SceneFloor {
                id: room.id.clone(),
                points: room.points.iter().map(|p| plan_to_scene(*p, 0.0)).collect(),
                color: room.color.clone(),
            })
            .collect();

        let walls = scene
            .walls
            .iter()
            .filter(|w| w.completed)
            .flat_map(|wall| {
                wall.segments().map(|(_, a, b)| {
                    let (length, angle) = segment_length_and_angle(a, b);
                    let mid = a.lerp(&b, 0.5);
                    SceneBox {
                        entity_id: wall.id.clone(),
                        center: plan_to_scene(mid, WALL_HEIGHT / 2.0),
                        size: Vector3::new(length, WALL_HEIGHT, WALL_THICKNESS),
                        yaw: angle,
                        color: wall.color.clone(),
                    }
                })
            })
            .collect();

        let openings = scene
            .openings
            .iter()
            .filter_map(|opening| {
                let resolved = scene.resolve_opening(opening)?;
                let depth = match opening.kind {
                    OpeningKind::Door => DOOR_DEPTH,
                    OpeningKind::Window => WINDOW_DEPTH,
                };
                let center_height = opening.sill_height() + opening.height / 2.0;
                Some(SceneBox {
                    entity_id: opening.id.clone(),
                    center: plan_to_scene(resolved.anchor, center_height),
                    size: Vector3::new(opening.width, opening.height, depth),
                    yaw: resolved.angle,
                    color: opening.color.clone(),
                })
            })
            .collect();

        let furniture = scene
            .furniture
            .iter()
            .map(|item| SceneFurniture {
                id: item.id.clone(),
                item_type: item.item_type.clone(),
                position: item.position,
                rotation: item.rotation,
                scale: item.scale,
                color: item.color.clone(),
                selected: is_selected(selection, &item.id),
            })
            .collect();

        SceneFrame {
            floors,
            walls,
            openings,
            furniture,
            overlay: state.overlay().cloned(),
            grid_visible: state.view_settings().grid_visible,
        }
    }

    /// What a pick ray meeting the ground at `ground` would select.
    pub fn pick(&self, state: &DesignerState, ground: Vector3) -> Option<Selection> {
        state.hit_tester().pick(state.scene(), scene_to_plan(ground))
    }

    /// Selects under a ground-plane point.
    pub fn select(&self, state: &mut DesignerState, ground: Vector3) -> Option<Selection> {
        state.select_at(scene_to_plan(ground))
    }

    /// Drops a dragged item at a ground-plane point.
    pub fn drop_furniture(
        &self,
        state: &mut DesignerState,
        id: &str,
        ground: Vector3,
    ) -> Result<(), ValidationError> {
        state.move_furniture_on_plan(id, scene_to_plan(ground))
    }
}

/// Inputs that affect either frame.
#[derive(Debug, Clone, PartialEq)]
struct SyncKey {
    revision: u64,
    view: ViewSettings,
    canvas: (f64, f64),
    selection: Option<Selection>,
    draft: Vec<Point2D>,
    drag: Option<FurnitureDrag>,
}

impl SyncKey {
    fn of(state: &DesignerState) -> Self {
        Self {
            revision: state.revision(),
            view: state.view_settings(),
            canvas: (state.viewport.canvas_width(), state.viewport.canvas_height()),
            selection: state.selection().cloned(),
            draft: state.draft().to_vec(),
            drag: state.drag().cloned(),
        }
    }
}

/// Owns both view controllers and their cached frames.
#[derive(Debug, Default)]
pub struct ViewSynchronizer {
    pub plan: PlanView,
    pub scene: SceneView,
    key: Option<SyncKey>,
    plan_frame: PlanFrame,
    scene_frame: SceneFrame,
}

impl ViewSynchronizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds both frames if anything they depend on changed.
    ///
    /// Returns `true` when the frames were rebuilt.
    pub fn sync(&mut self, state: &DesignerState) -> bool {
        let key = SyncKey::of(state);
        if self.key.as_ref() == Some(&key) {
            return false;
        }
        self.plan_frame = self.plan.build(state);
        self.scene_frame = self.scene.build(state);
        self.key = Some(key);
        true
    }

    pub fn plan_frame(&self) -> &PlanFrame {
        &self.plan_frame
    }

    pub fn scene_frame(&self) -> &SceneFrame {
        &self.scene_frame
    }
}

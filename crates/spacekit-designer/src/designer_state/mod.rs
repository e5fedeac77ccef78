//! Designer state: the single owner of the scene and its edit history.
//!
//! Every write to the entity lists goes through a method on
//! [`DesignerState`], and every successful write commits exactly one
//! snapshot. Rejected edits leave both the scene and the history untouched.
//!
//! This module is split into submodules:
//! - `scene_edits`: walls, rooms, openings, colors
//! - `furniture`: placing, moving, rotating, duplicating, deleting furniture
//! - `history`: undo/redo
//! - `drawing`: pointer-driven wall and room drafting
//! - `lifecycle`: reset, templates, wholesale scene replacement, design files
//! - `selection`: selection state
//! - `assets`: import overlay and export

mod assets;
mod drawing;
mod furniture;
mod history;
mod lifecycle;
mod scene_edits;
mod selection;

use spacekit_core::constants::{
    FURNITURE_HALF_EXTENT, GRID_STEP, HIT_TOLERANCE, MIN_ROOM_SIZE, ROTATION_STEP,
};
use spacekit_core::Point2D;
use tracing::debug;

use crate::assets::ImportedOverlay;
use crate::history::History;
use crate::scene::SceneData;
use crate::selection::{HitTester, Selection};
use crate::serialization::ViewSettings;
use crate::viewport::Viewport;

pub use drawing::{DraftKind, FurnitureDrag, PointerOutcome};

/// Editing parameters for the designer
#[derive(Clone, Debug, PartialEq)]
pub struct EditorSettings {
    pub hit_tolerance: f64,
    pub furniture_half_extent: f64,
    pub grid_step: f64,
    pub snap_to_grid: bool,
    pub min_room_size: f64,
    pub rotation_step: f64,
    /// Maximum number of snapshots kept; `None` keeps everything.
    pub max_history: Option<usize>,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            hit_tolerance: HIT_TOLERANCE,
            furniture_half_extent: FURNITURE_HALF_EXTENT,
            grid_step: GRID_STEP,
            snap_to_grid: true,
            min_room_size: MIN_ROOM_SIZE,
            rotation_step: ROTATION_STEP,
            max_history: None,
        }
    }
}

impl EditorSettings {
    pub fn hit_tester(&self) -> HitTester {
        HitTester::new(self.hit_tolerance, self.furniture_half_extent)
    }
}

/// Active plan tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EditTool {
    #[default]
    Select,
    Wall,
    Room,
    Door,
    Window,
}

/// Designer state for UI integration
#[derive(Clone, Debug)]
pub struct DesignerState {
    pub settings: EditorSettings,
    pub viewport: Viewport,
    pub tool: EditTool,
    pub design_name: String,
    pub is_modified: bool,
    pub(crate) view: ViewSettings,
    pub(crate) scene: SceneData,
    pub(crate) history: History,
    pub(crate) selection: Option<Selection>,
    pub(crate) overlay: Option<ImportedOverlay>,
    pub(crate) draft: Vec<Point2D>,
    pub(crate) drag: Option<FurnitureDrag>,
    generation: u64,
    revision: u64,
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}

impl DesignerState {
    /// Creates an empty designer with default settings.
    pub fn new() -> Self {
        Self::with_settings(EditorSettings::default(), ViewSettings::default())
    }

    /// Creates an empty designer; the history starts with one snapshot of the empty scene.
    pub fn with_settings(settings: EditorSettings, view: ViewSettings) -> Self {
        let history = match settings.max_history {
            Some(depth) => History::with_max_depth(depth),
            None => History::new(),
        };
        let mut viewport = Viewport::default();
        viewport.set_zoom_percent(view.zoom_level);
        let mut state = Self {
            settings,
            viewport,
            tool: EditTool::Select,
            design_name: "Untitled".to_string(),
            is_modified: false,
            view,
            scene: SceneData::default(),
            history,
            selection: None,
            overlay: None,
            draft: Vec::new(),
            drag: None,
            generation: 0,
            revision: 0,
        };
        state.history.reset_to(state.scene.clone());
        state
    }

    /// Read-only view of the entity lists.
    pub fn scene(&self) -> &SceneData {
        &self.scene
    }

    pub fn hit_tester(&self) -> HitTester {
        self.settings.hit_tester()
    }

    /// Current view settings, with the zoom taken from the viewport.
    pub fn view_settings(&self) -> ViewSettings {
        ViewSettings {
            zoom_level: self.viewport.zoom_percent(),
            ..self.view.clone()
        }
    }

    pub fn set_view_settings(&mut self, view: ViewSettings) {
        self.viewport.set_zoom_percent(view.zoom_level);
        self.view = view;
    }

    pub fn set_zoom_percent(&mut self, zoom_percent: f64) {
        self.viewport.set_zoom_percent(zoom_percent);
        self.view.zoom_level = self.viewport.zoom_percent();
    }

    /// Incremented whenever the scene is reset or replaced wholesale.
    ///
    /// Long-running requests capture it up front and are discarded if it
    /// has moved on by the time they complete.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Incremented on every change to the entity lists or the overlay.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Records the live scene as a new history snapshot.
    pub(crate) fn commit(&mut self, action: &str) {
        self.history.commit(self.scene.clone());
        self.touch();
        self.is_modified = true;
        debug!("Committed '{}' (revision {})", action, self.revision);
    }

    pub(crate) fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Swaps in a new scene and makes it the sole history entry.
    pub(crate) fn replace_scene(&mut self, scene: SceneData) {
        self.scene = scene;
        self.history.reset_to(self.scene.clone());
        self.selection = None;
        self.draft.clear();
        self.drag = None;
        self.generation = self.generation.wrapping_add(1);
        self.touch();
    }
}

//! # SpaceKit Designer
//!
//! Floor-plan editing for SpaceKit: a parametric scene of walls, rooms,
//! door and window openings, and furniture, edited through a single
//! mutation API with linear undo/redo, and presented through two
//! synchronized views.
//!
//! ## Core Components
//!
//! - **Geometry & Viewport**: point/segment math, screen ↔ world ↔ grid conversion
//! - **Model**: walls, openings, furniture, rooms
//! - **Scene**: the walls arena plus everything anchored to it
//! - **History**: full-snapshot undo/redo
//! - **Selection**: the shared hit-tester used by both views
//! - **Designer State**: the mutation API
//! - **View Sync**: plan and 3D frames built from one state
//! - **Serialization**: the design file blob
//! - **Catalog & Templates**: built-in furniture and starter layouts
//! - **Assets**: import overlay and export seams
//!
//! ## Architecture
//!
//! ```text
//! DesignerState
//!   ├── SceneData (walls, rooms, openings, furniture)
//!   ├── History (snapshots + cursor)
//!   ├── Viewport (zoom, canvas)
//!   └── Selection / draft / overlay
//!
//! ViewSynchronizer
//!   ├── PlanView  ─┐
//!   └── SceneView ─┴── HitTester
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use spacekit_core::Point2D;
//! use spacekit_designer::{DesignerState, OpeningKind};
//!
//! let mut state = DesignerState::new();
//! let wall = state
//!     .add_wall(vec![Point2D::new(0.0, 0.0), Point2D::new(6.0, 0.0)])
//!     .unwrap();
//! state.add_opening(&wall, 0, 0.5, OpeningKind::Door).unwrap();
//! assert!(state.undo());
//! assert!(state.scene().openings.is_empty());
//! ```

pub mod assets;
pub mod catalog;
pub mod designer_state;
pub mod geometry;
pub mod history;
pub mod model;
pub mod scene;
pub mod selection;
pub mod serialization;
pub mod templates;
pub mod view_sync;
pub mod viewport;

pub use assets::{AssetExporter, AssetImporter, ImportedOverlay};
pub use catalog::{Catalog, CatalogEntry};
pub use designer_state::{DesignerState, EditTool, EditorSettings, PointerOutcome};
pub use geometry::{distance_point_to_segment, Bounds, SegmentProjection};
pub use history::History;
pub use model::{FurnitureItem, Opening, OpeningKind, Room, WallSegment};
pub use scene::{Element, SceneData};
pub use selection::{HitTester, Selection};
pub use serialization::{DesignFile, ViewMode, ViewSettings};
pub use templates::Template;
pub use view_sync::{PlanFrame, PlanView, SceneFrame, SceneView, ViewSynchronizer};
pub use viewport::{screen_to_world, snap_to_grid, world_to_screen, Viewport};

//! Scene entities: walls, openings, furniture, and rooms.
//!
//! Entities reference each other by id only. An [`Opening`] names its host
//! wall through `wall_id` + `segment_index` and is resolved against the
//! scene whenever it is drawn or hit-tested.

pub mod furniture;
pub mod opening;
pub mod room;
pub mod wall;

pub use furniture::FurnitureItem;
pub use opening::{Opening, OpeningKind};
pub use room::Room;
pub use wall::WallSegment;

use uuid::Uuid;

/// Generates a unique entity id with the given prefix, e.g. `wall-3f2a...`.
pub fn new_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}

/// Short unique stamp shared by entities created together.
pub fn new_stamp() -> String {
    let mut stamp = Uuid::new_v4().simple().to_string();
    stamp.truncate(12);
    stamp
}

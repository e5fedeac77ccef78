//! Starter layouts.
//!
//! Loading a template replaces the scene with a fresh copy whose ids are
//! re-stamped, so a template can be loaded repeatedly without id clashes.

use spacekit_core::{Point2D, Vector3};
use std::f64::consts::{FRAC_PI_2, PI};

use crate::model::{new_stamp, FurnitureItem, Opening, OpeningKind, Room, WallSegment};
use crate::scene::SceneData;

const PERIMETER_COLOR: &str = "#D6D6D6";
const PARTITION_COLOR: &str = "#E3E3E3";

/// A named starter layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    pub scene: SceneData,
}

impl Template {
    /// Copies the layout with every id suffixed by a fresh stamp.
    ///
    /// Opening wall references are rewritten to match.
    pub fn instantiate(&self) -> SceneData {
        let stamp = new_stamp();
        let restamp = |id: &str| format!("{}-{}", id, stamp);
        let mut scene = self.scene.clone();
        for wall in &mut scene.walls {
            wall.id = restamp(&wall.id);
        }
        for room in &mut scene.rooms {
            room.id = restamp(&room.id);
        }
        for opening in &mut scene.openings {
            opening.id = restamp(&opening.id);
            opening.wall_id = restamp(&opening.wall_id);
        }
        for item in &mut scene.furniture {
            item.id = restamp(&item.id);
        }
        scene
    }
}

/// All built-in templates.
pub fn builtin() -> Vec<Template> {
    vec![startup_office(), studio_apartment()]
}

/// Looks up a built-in template by id.
pub fn find(id: &str) -> Option<Template> {
    builtin().into_iter().find(|t| t.id == id)
}

fn wall(id: &str, color: &str, points: &[(f64, f64)]) -> WallSegment {
    WallSegment {
        id: id.to_string(),
        points: points.iter().map(|&(x, y)| Point2D::new(x, y)).collect(),
        color: color.to_string(),
        completed: true,
    }
}

fn opening(id: &str, kind: OpeningKind, wall_id: &str, t: f64, width: f64) -> Opening {
    let mut opening = Opening::new(kind, wall_id, 0, t);
    opening.id = id.to_string();
    opening.width = width;
    opening
}

struct Piece<'a> {
    name: &'a str,
    category: &'a str,
    price: f64,
    color: &'a str,
    item_type: &'a str,
}

fn place(id: &str, piece: &Piece, x: f64, z: f64, yaw: f64, scale: (f64, f64, f64)) -> FurnitureItem {
    FurnitureItem {
        id: id.to_string(),
        name: piece.name.to_string(),
        category: piece.category.to_string(),
        price: piece.price,
        color: piece.color.to_string(),
        item_type: piece.item_type.to_string(),
        position: Vector3::new(x, 0.0, z),
        rotation: Vector3::new(0.0, yaw, 0.0),
        scale: Vector3::new(scale.0, scale.1, scale.2),
    }
}

fn startup_office() -> Template {
    let hot_desk = Piece {
        name: "Hot Desk",
        category: "Tables",
        price: 499.0,
        color: "#263238",
        item_type: "Desk",
    };
    let task_chair = Piece {
        name: "Task Chair",
        category: "Seating",
        price: 299.0,
        color: "#37474F",
        item_type: "Dining Chair",
    };
    let meeting_table = Piece {
        name: "Meeting Table",
        category: "Tables",
        price: 1199.0,
        color: "#5D4037",
        item_type: "Coffee Table",
    };
    let lounge_sofa = Piece {
        name: "Lounge Sofa",
        category: "Seating",
        price: 1499.0,
        color: "#546E7A",
        item_type: "Modern Sofa",
    };
    let kitchen_counter = Piece {
        name: "Kitchen Counter",
        category: "Storage",
        price: 899.0,
        color: "#ECEFF1",
        item_type: "Dresser",
    };

    let walls = vec![
        wall("ext-1", PERIMETER_COLOR, &[(-10.0, -6.0), (10.0, -6.0)]),
        wall("ext-2", PERIMETER_COLOR, &[(10.0, -6.0), (10.0, 6.0)]),
        wall("ext-3", PERIMETER_COLOR, &[(10.0, 6.0), (-10.0, 6.0)]),
        wall("ext-4", PERIMETER_COLOR, &[(-10.0, 6.0), (-10.0, -6.0)]),
        wall("int-1", PARTITION_COLOR, &[(-2.0, -6.0), (-2.0, 6.0)]),
        wall("int-2", PARTITION_COLOR, &[(3.0, -1.0), (3.0, 4.0), (7.0, 4.0), (7.0, -1.0)]),
        wall("int-4", PARTITION_COLOR, &[(0.0, -2.0), (3.0, -2.0)]),
    ];

    let mut meeting_door = opening("door-meeting", OpeningKind::Door, "int-2", 0.5, 1.0);
    meeting_door.segment_index = 2;
    let openings = vec![
        opening("door-main", OpeningKind::Door, "ext-4", 0.5, 1.2),
        opening("door-corridor", OpeningKind::Door, "int-1", 4.0 / 12.0, 1.0),
        meeting_door,
        opening("door-kitchen", OpeningKind::Door, "int-4", 0.5, 0.9),
        opening("door-terrace", OpeningKind::Door, "ext-3", 0.4, 1.1),
        opening("win-north-1", OpeningKind::Window, "ext-1", 0.2, 1.2),
        opening("win-north-2", OpeningKind::Window, "ext-1", 0.45, 1.2),
        opening("win-east", OpeningKind::Window, "ext-2", 0.5, 1.2),
    ];

    let mut furniture = Vec::new();
    for (i, (x, z)) in [(-8.5, -4.5), (-5.5, -4.5), (-8.5, -1.5), (-5.5, -1.5)]
        .into_iter()
        .enumerate()
    {
        furniture.push(place(&format!("tso-desk-{}", i + 1), &hot_desk, x, z, 0.0, (1.6, 1.0, 0.9)));
        furniture.push(place(
            &format!("tso-chair-{}", i + 1),
            &task_chair,
            x,
            z + 1.3,
            PI,
            (0.9, 1.0, 0.9),
        ));
    }
    furniture.push(place("tso-meeting", &meeting_table, 5.0, 1.5, 0.0, (2.0, 1.0, 1.2)));
    furniture.push(place("tso-lounge", &lounge_sofa, 5.0, -4.5, 0.0, (1.0, 1.0, 1.0)));
    furniture.push(place("tso-kitchen", &kitchen_counter, 1.5, -5.0, 0.0, (2.5, 1.0, 0.7)));

    Template {
        id: "tech-startup-office".to_string(),
        name: "Tech Startup Office Floor".to_string(),
        description: "Open-plan workspace with hot desks, a meeting pod, a lounge and a kitchenette"
            .to_string(),
        scene: SceneData {
            walls,
            rooms: Vec::new(),
            openings,
            furniture,
        },
    }
}

fn studio_apartment() -> Template {
    let bed = Piece {
        name: "Bed Frame",
        category: "Bedroom",
        price: 899.0,
        color: "#8B4513",
        item_type: "Bed Frame",
    };
    let wardrobe = Piece {
        name: "Wardrobe",
        category: "Storage",
        price: 1199.0,
        color: "#696969",
        item_type: "Wardrobe",
    };
    let sofa = Piece {
        name: "Modern Sofa",
        category: "Seating",
        price: 1299.0,
        color: "#8B4513",
        item_type: "Modern Sofa",
    };
    let desk = Piece {
        name: "Desk",
        category: "Tables",
        price: 699.0,
        color: "#8B4513",
        item_type: "Desk",
    };

    let corners = [(-4.0, -3.0), (4.0, -3.0), (4.0, 3.0), (-4.0, 3.0)];
    let room = Room {
        id: "studio-room".to_string(),
        points: corners.iter().map(|&(x, y)| Point2D::new(x, y)).collect(),
        color: spacekit_core::constants::ROOM_FILL_COLOR.to_string(),
        completed: true,
    };
    let walls = vec![
        wall("studio-top", PERIMETER_COLOR, &[corners[0], corners[1]]),
        wall("studio-right", PERIMETER_COLOR, &[corners[1], corners[2]]),
        wall("studio-bottom", PERIMETER_COLOR, &[corners[2], corners[3]]),
        wall("studio-left", PERIMETER_COLOR, &[corners[3], corners[0]]),
        wall("studio-bath", PARTITION_COLOR, &[(1.5, 3.0), (1.5, 0.5), (4.0, 0.5)]),
    ];
    let openings = vec![
        opening("studio-entry", OpeningKind::Door, "studio-left", 0.3, 0.9),
        opening("studio-bath-door", OpeningKind::Door, "studio-bath", 0.5, 0.8),
        opening("studio-window", OpeningKind::Window, "studio-top", 0.5, 1.6),
    ];
    let furniture = vec![
        place("studio-bed", &bed, -2.5, -1.5, 0.0, (1.4, 1.0, 2.0)),
        place("studio-wardrobe", &wardrobe, -0.5, -2.6, 0.0, (1.2, 2.0, 0.6)),
        place("studio-sofa", &sofa, -1.5, 2.0, PI, (1.0, 1.0, 1.0)),
        place("studio-desk", &desk, 3.2, -1.5, FRAC_PI_2, (1.2, 1.0, 0.6)),
    ];

    Template {
        id: "studio-apartment".to_string(),
        name: "Studio Apartment".to_string(),
        description: "8m x 6m studio with a sleeping corner, a lounge and a bathroom".to_string(),
        scene: SceneData {
            walls,
            rooms: vec![room],
            openings,
            furniture,
        },
    }
}

use proptest::prelude::*;
use spacekit_core::{Point2D, Vector3};
use spacekit_designer::{distance_point_to_segment, Catalog, DesignerState, OpeningKind};

fn coord() -> impl Strategy<Value = f64> {
    -100.0..100.0f64
}

#[derive(Debug, Clone)]
enum Edit {
    Wall(f64, f64, f64, f64),
    Room(f64, f64, f64, f64),
    Opening(f64),
    Furniture(f64, f64),
    Rotate(f64),
    Recolor,
}

fn edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (coord(), coord(), coord(), coord()).prop_map(|(a, b, c, d)| Edit::Wall(a, b, c, d)),
        (coord(), coord(), coord(), coord()).prop_map(|(a, b, c, d)| Edit::Room(a, b, c, d)),
        (-2.0..3.0f64).prop_map(Edit::Opening),
        (coord(), coord()).prop_map(|(x, z)| Edit::Furniture(x, z)),
        (-7.0..7.0f64).prop_map(Edit::Rotate),
        Just(Edit::Recolor),
    ]
}

fn apply(state: &mut DesignerState, catalog: &Catalog, edit: &Edit) -> bool {
    match *edit {
        Edit::Wall(a, b, c, d) => state
            .add_wall(vec![Point2D::new(a, b), Point2D::new(c, d)])
            .is_ok(),
        Edit::Room(a, b, c, d) => state
            .add_room(Point2D::new(a, b), Point2D::new(c, d))
            .is_ok(),
        Edit::Opening(t) => match state.scene().walls.first().map(|w| w.id.clone()) {
            Some(wall) => state.add_opening(&wall, 0, t, OpeningKind::Door).is_ok(),
            None => false,
        },
        Edit::Furniture(x, z) => state
            .add_furniture(catalog.get("9").unwrap(), Vector3::new(x, 0.0, z))
            .is_ok(),
        Edit::Rotate(delta) => match state.scene().furniture.first().map(|f| f.id.clone()) {
            Some(id) => state.rotate_furniture(&id, delta).is_ok(),
            None => false,
        },
        Edit::Recolor => match state.scene().walls.first().map(|w| w.id.clone()) {
            Some(id) => state.update_color(&id, "#ABCDEF").is_ok(),
            None => false,
        },
    }
}

proptest! {
    #[test]
    fn prop_projection_t_in_unit_range(
        px in coord(), py in coord(),
        ax in coord(), ay in coord(),
        bx in coord(), by in coord(),
    ) {
        let projection = distance_point_to_segment(
            Point2D::new(px, py),
            Point2D::new(ax, ay),
            Point2D::new(bx, by),
        );
        prop_assert!((0.0..=1.0).contains(&projection.t));
        prop_assert!(projection.distance >= 0.0);
        prop_assert!(projection.distance <= Point2D::new(px, py).distance_to(&Point2D::new(ax, ay)) + 1e-9);
    }

    #[test]
    fn prop_mutations_then_undos_restore_initial(edits in prop::collection::vec(edit(), 1..20)) {
        let catalog = Catalog::builtin();
        let mut state = DesignerState::new();
        let initial = state.scene().clone();
        let mut committed = 0;
        for e in &edits {
            if apply(&mut state, &catalog, e) {
                committed += 1;
            }
        }
        prop_assert_eq!(state.history_len(), committed + 1);
        for _ in 0..committed {
            prop_assert!(state.undo());
        }
        prop_assert_eq!(state.scene(), &initial);
        prop_assert!(state.scene().validate().is_ok());
    }

    #[test]
    fn prop_openings_always_in_unit_range(t in -1e6..1e6f64) {
        let mut state = DesignerState::new();
        let wall = state
            .add_wall(vec![Point2D::new(0.0, 0.0), Point2D::new(1.0, 1.0)])
            .unwrap();
        let id = state.add_opening(&wall, 0, t, OpeningKind::Window).unwrap();
        let stored = state.scene().opening(&id).unwrap().t;
        prop_assert!((0.0..=1.0).contains(&stored));
    }
}

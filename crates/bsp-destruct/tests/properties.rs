use bsp_destruct::{BspTree, Plane3D, Polygon, apply_edit, partition_by_radius};
use nalgebra::{Point3, Vector3};
use proptest::prelude::*;

fn point() -> impl Strategy<Value = Point3<f64>> {
    (-50.0..50.0f64, -50.0..50.0f64, -50.0..50.0f64).prop_map(|(x, y, z)| Point3::new(x, y, z))
}

fn polygon() -> impl Strategy<Value = Polygon> {
    prop::collection::vec(point(), 3..6).prop_map(|verts| Polygon::new(verts).unwrap())
}

fn polygons() -> impl Strategy<Value = Vec<Polygon>> {
    prop::collection::vec(polygon(), 0..40)
}

/// Axis-aligned quads on a small integer lattice, so many share planes.
fn lattice_quads() -> impl Strategy<Value = Vec<Polygon>> {
    prop::collection::vec((0..3usize, -3..3i32, -3..3i32, -3..3i32), 0..40).prop_map(|specs| {
        specs
            .into_iter()
            .map(|(axis, a, b, c)| {
                let (a, b, c) = (a as f64, b as f64, c as f64);
                let verts = match axis {
                    0 => vec![
                        Point3::new(a, b, c),
                        Point3::new(a, b + 1.0, c),
                        Point3::new(a, b + 1.0, c + 1.0),
                        Point3::new(a, b, c + 1.0),
                    ],
                    1 => vec![
                        Point3::new(b, a, c),
                        Point3::new(b, a, c + 1.0),
                        Point3::new(b + 1.0, a, c + 1.0),
                        Point3::new(b + 1.0, a, c),
                    ],
                    _ => vec![
                        Point3::new(b, c, a),
                        Point3::new(b + 1.0, c, a),
                        Point3::new(b + 1.0, c + 1.0, a),
                        Point3::new(b, c + 1.0, a),
                    ],
                };
                Polygon::new(verts).unwrap()
            })
            .collect()
    })
}

/// Returns how many times `p` occurs in `list`.
fn occurrences(list: &[Polygon], p: &Polygon) -> usize {
    list.iter().filter(|q| *q == p).count()
}

proptest! {
    #[test]
    fn classification_matches_dot_product(a in point(), b in point(), c in point(), p in point()) {
        let plane = Plane3D::from_three_points(a, b, c);
        let expected = plane.normal().dot(&p.coords) - plane.offset();
        prop_assert_eq!(plane.signed_distance(p), expected);
    }

    #[test]
    fn points_on_plane_classify_within_epsilon(
        origin in point(),
        normal in (-1.0..1.0f64, -1.0..1.0f64, -1.0..1.0f64),
        u in -10.0..10.0f64,
        v in -10.0..10.0f64,
    ) {
        let n = Vector3::new(normal.0, normal.1, normal.2);
        prop_assume!(n.norm() > 0.1);
        let n = n.normalize();
        let plane = Plane3D::from_point_and_normal(origin, n);

        // Two directions spanning the plane.
        let helper = if n.x.abs() < 0.9 { Vector3::x() } else { Vector3::y() };
        let t1 = n.cross(&helper).normalize();
        let t2 = n.cross(&t1).normalize();
        let on_plane = origin + t1 * u + t2 * v;

        prop_assert!(plane.signed_distance(on_plane).abs() <= 1e-5);
    }

    #[test]
    fn tree_holds_every_polygon_once(polys in polygons()) {
        let tree = BspTree::new(polys.clone());
        let all = tree.all_polygons();

        prop_assert_eq!(all.len(), polys.len());
        prop_assert_eq!(tree.polygon_count(), polys.len());
        for p in &polys {
            prop_assert_eq!(occurrences(&all, p), occurrences(&polys, p));
        }
    }

    #[test]
    fn lattice_tree_holds_every_polygon_once(polys in lattice_quads()) {
        let tree = BspTree::new(polys.clone());
        let all = tree.all_polygons();

        prop_assert_eq!(all.len(), polys.len());
        for p in &polys {
            prop_assert_eq!(occurrences(&all, p), occurrences(&polys, p));
        }
    }

    #[test]
    fn traversal_is_deterministic(polys in lattice_quads()) {
        let tree = BspTree::new(polys.clone());
        prop_assert_eq!(tree.all_polygons(), tree.all_polygons());
        prop_assert_eq!(BspTree::new(polys).all_polygons(), tree.all_polygons());
    }

    #[test]
    fn edit_removes_exactly_the_polygons_in_range(
        polys in lattice_quads(),
        center in (-3.0..3.0f64, -3.0..3.0f64, -3.0..3.0f64),
        radius in 0.0..4.0f64,
    ) {
        let center = Point3::new(center.0, center.1, center.2);
        let tree = BspTree::new(polys);
        let original = tree.all_polygons();

        let edited = apply_edit(&tree, center, radius).all_polygons();
        let (kept, removed) = partition_by_radius(original.clone(), center, radius);

        prop_assert!(edited.iter().all(|p| p.distance_to(center) > radius));
        prop_assert!(removed.iter().all(|p| p.distance_to(center) <= radius));
        prop_assert_eq!(kept.len() + removed.len(), original.len());
        prop_assert_eq!(edited.len(), kept.len());
        for p in &removed {
            prop_assert_eq!(occurrences(&edited, p), 0);
        }
    }

    #[test]
    fn edit_with_any_radius_keeps_only_strictly_farther(
        polys in lattice_quads(),
        center in (-3.0..3.0f64, -3.0..3.0f64, -3.0..3.0f64),
        radius in prop_oneof![
            Just(f64::NAN),
            Just(f64::INFINITY),
            Just(f64::NEG_INFINITY),
            -4.0..4.0f64,
        ],
    ) {
        let center = Point3::new(center.0, center.1, center.2);
        let tree = BspTree::new(polys);
        let original = tree.all_polygons();

        let edited = apply_edit(&tree, center, radius).all_polygons();
        let survivors: Vec<Polygon> = original
            .iter()
            .filter(|p| p.distance_to(center) > radius)
            .cloned()
            .collect();
        prop_assert_eq!(&edited, &BspTree::new(survivors).all_polygons());

        if radius.is_nan() || radius == f64::INFINITY {
            prop_assert!(edited.is_empty());
        }
        if radius == f64::NEG_INFINITY {
            prop_assert_eq!(edited.len(), original.len());
        }
    }
}

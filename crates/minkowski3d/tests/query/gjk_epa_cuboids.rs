use minkowski3d::math::{Isometry, Point, Real, Vector};
use minkowski3d::query::gjk::{GjkEpa, GjkEpaOutput, Termination};
use minkowski3d::shape::ConvexVertexSet;
use std::f64::consts::FRAC_PI_4;

// The 8 corners of an axis-aligned box, already placed at `center`.
fn box_vertices(center: Vector<Real>, half_extents: Vector<Real>) -> Vec<Point<Real>> {
    ConvexVertexSet::cuboid(half_extents)
        .points()
        .iter()
        .map(|p| p + center)
        .collect()
}

fn box_with_edges(center: Vector<Real>, half_extents: Vector<Real>) -> ConvexVertexSet {
    let edges: Vec<[u32; 2]> = (0..8u32)
        .flat_map(|i| [1, 2, 4].into_iter().map(move |bit| [i, i ^ bit]))
        .collect();
    ConvexVertexSet::from_points_and_edges(box_vertices(center, half_extents), &edges).unwrap()
}

fn unit_box(center: Vector<Real>) -> ConvexVertexSet {
    box_with_edges(center, Vector::repeat(1.0))
}

fn world_closest_points(out: &GjkEpaOutput) -> (Point<Real>, Point<Real>) {
    let (a, b) = out.closest_points().unwrap();
    (*a, *b)
}

#[test]
fn unit_cubes_one_apart() {
    let cube1 = unit_box(Vector::zeros());
    let cube2 = unit_box(Vector::new(3.0, 0.0, 0.0));
    let out = GjkEpa::default().execute(&cube1, &cube2);

    assert!(!out.is_intersecting());
    assert_relative_eq!(out.distance(), 1.0, epsilon = 1.0e-6);
    assert_relative_eq!(out.normal().unwrap().x.abs(), 1.0, epsilon = 1.0e-6);

    let (a, b) = world_closest_points(&out);
    assert_relative_eq!(a.x, 1.0, epsilon = 1.0e-6);
    assert_relative_eq!(b.x, 2.0, epsilon = 1.0e-6);
    assert!(a.y.abs() <= 1.0 + 1.0e-6 && a.z.abs() <= 1.0 + 1.0e-6);
    assert_relative_eq!(a.y, b.y, epsilon = 1.0e-6);
    assert_relative_eq!(a.z, b.z, epsilon = 1.0e-6);
}

#[test]
fn separated_along_each_axis() {
    let cases = [
        (Vector::new(0.0, 3.5, 0.0), 1.5),
        (Vector::new(0.0, 0.0, -4.0), 2.0),
        (Vector::new(2.5, 2.5, 0.0), Real::sqrt(0.5)),
        (Vector::new(3.0, 3.0, 3.0), Real::sqrt(3.0)),
        (Vector::new(-5.0, 0.2, 0.1), 3.0),
    ];
    let engine = GjkEpa::default();
    let cube1 = unit_box(Vector::zeros());

    for (offset, expected) in cases {
        let out = engine.execute(&cube1, &unit_box(offset));

        assert!(!out.is_intersecting(), "{:?} should be separated", offset);
        assert_relative_eq!(out.distance(), expected, epsilon = 1.0e-6);

        let (a, b) = world_closest_points(&out);
        assert_relative_eq!((a - b).norm(), expected, epsilon = 1.0e-6);
        assert_relative_eq!(
            out.normal().unwrap().into_inner(),
            (a - b) / expected,
            epsilon = 1.0e-6
        );
    }
}

#[test]
fn overlapping_cubes_intersect() {
    let engine = GjkEpa::default();
    let cube1 = unit_box(Vector::zeros());

    for offset in [
        Vector::new(1.0, 0.0, 0.0),
        Vector::new(0.0, 0.0, 0.0),
        Vector::new(1.9, 0.5, 0.5),
        Vector::new(-0.3, 1.2, -1.5),
    ] {
        let out = engine.execute(&cube1, &unit_box(offset));

        assert!(out.is_intersecting(), "{:?} should intersect", offset);
        assert_eq!(out.termination, Termination::Intersection);
        assert_eq!(out.distance(), -1.0);
    }
}

#[test]
fn touching_cubes_are_deterministic() {
    let engine = GjkEpa::default();
    let cube1 = unit_box(Vector::zeros());
    let cube2 = unit_box(Vector::new(2.0, 0.0, 0.0));
    let first = engine.execute(&cube1, &cube2);

    assert!(first.distance() < 1.0e-6);

    for _ in 0..10 {
        let out = engine.execute(&cube1, &cube2);
        assert_eq!(out.is_intersecting(), first.is_intersecting());
        assert_eq!(out.distance().to_bits(), first.distance().to_bits());
    }
}

#[test]
fn repeated_queries_are_identical() {
    let engine = GjkEpa::default();
    let cube1 = unit_box(Vector::zeros());
    let cube2 = box_with_edges(Vector::new(1.0, 4.0, -0.5), Vector::new(0.5, 1.0, 2.0));
    let (copy1, copy2) = (cube1.clone(), cube2.clone());

    let out1 = engine.execute(&cube1, &cube2);
    let out2 = engine.execute(&cube1, &cube2);

    assert_eq!(out1.result, out2.result);
    assert_eq!(out1.iterations, out2.iterations);
    assert_eq!(out1.termination, out2.termination);
    assert_eq!(out1.polytope.faces().len(), out2.polytope.faces().len());
    assert_eq!(cube1, copy1);
    assert_eq!(cube2, copy2);
}

#[test]
fn swapping_objects_mirrors_the_output() {
    let engine = GjkEpa::default();
    let offsets = [
        Vector::new(3.0, 0.0, 0.0),
        Vector::new(0.0, 3.5, 0.0),
        Vector::new(3.0, 3.0, 3.0),
        Vector::new(-5.0, 0.2, 0.1),
    ];

    for offset in offsets {
        let cube1 = unit_box(Vector::zeros());
        let cube2 = unit_box(offset);
        let out12 = engine.execute(&cube1, &cube2);
        let out21 = engine.execute(&cube2, &cube1);

        assert_eq!(out12.is_intersecting(), out21.is_intersecting());
        assert_relative_eq!(out12.distance(), out21.distance(), epsilon = 1.0e-9);
        assert_relative_eq!(
            out12.normal().unwrap().into_inner(),
            -out21.normal().unwrap().into_inner(),
            epsilon = 1.0e-9
        );

        // Faces may touch along a whole patch, but the gap vector is unique.
        let (a12, b12) = world_closest_points(&out12);
        let (a21, b21) = world_closest_points(&out21);
        assert_relative_eq!(a12 - b12, b21 - a21, epsilon = 1.0e-9);
    }

    // Only the corners are closest, so the closest points are unique.
    let cube1 = unit_box(Vector::zeros());
    let cube2 = unit_box(Vector::new(3.0, 3.0, 3.0));
    let (a12, b12) = world_closest_points(&engine.execute(&cube1, &cube2));
    let (a21, b21) = world_closest_points(&engine.execute(&cube2, &cube1));

    assert_relative_eq!(a12, Point::new(1.0, 1.0, 1.0), epsilon = 1.0e-9);
    assert_relative_eq!(b12, Point::new(2.0, 2.0, 2.0), epsilon = 1.0e-9);
    assert_relative_eq!(a12, b21, epsilon = 1.0e-9);
    assert_relative_eq!(b12, a21, epsilon = 1.0e-9);
}

#[test]
fn adjacency_does_not_change_the_result() {
    let engine = GjkEpa::default();
    let half_extents = Vector::new(0.5, 1.5, 1.0);

    for offset in [
        Vector::new(3.0, 0.0, 0.0),
        Vector::new(0.5, 4.0, 1.0),
        Vector::new(-1.0, -0.5, 3.5),
        Vector::new(0.2, 0.3, 0.4),
    ] {
        let with_graph = engine.execute(
            &box_with_edges(Vector::zeros(), half_extents),
            &box_with_edges(offset, half_extents),
        );
        let cloud1 = ConvexVertexSet::from_points(box_vertices(Vector::zeros(), half_extents));
        let cloud2 = ConvexVertexSet::from_points(box_vertices(offset, half_extents));
        let without_graph = engine.execute(&cloud1.unwrap(), &cloud2.unwrap());

        assert_eq!(with_graph.is_intersecting(), without_graph.is_intersecting());
        assert_relative_eq!(
            with_graph.distance(),
            without_graph.distance(),
            epsilon = 1.0e-9
        );
    }
}

#[test]
fn rotated_cube_with_poses() {
    let engine = GjkEpa::default();
    let cube = ConvexVertexSet::cuboid(Vector::repeat(1.0));
    let pos1 = Isometry::identity();
    let pos2 = Isometry::new(Vector::new(4.0, 0.0, 0.0), Vector::z() * FRAC_PI_4);

    let out = engine.execute_with_poses(&pos1, &cube, &pos2, &cube);
    let expected = 3.0 - Real::sqrt(2.0);

    assert!(!out.is_intersecting());
    assert_relative_eq!(out.distance(), expected, epsilon = 1.0e-6);

    // The closest point of the rotated cube is on its edge facing `-x`.
    let sep = out.separation().unwrap();
    let (w1, w2) = sep.collision_point.world_points(&pos1, &pos2);
    assert_relative_eq!(w1.x, 1.0, epsilon = 1.0e-6);
    assert_relative_eq!(w2, Point::new(4.0 - Real::sqrt(2.0), 0.0, w2.z), epsilon = 1.0e-6);
    assert_relative_eq!((w1 - w2).norm(), expected, epsilon = 1.0e-6);
    assert_relative_eq!(
        out.normal().unwrap().into_inner(),
        -Vector::x(),
        epsilon = 1.0e-6
    );
}

#[test]
fn degenerate_inputs() {
    let engine = GjkEpa::default();
    let point = ConvexVertexSet::from_points(vec![Point::new(1.0, 2.0, 3.0)]).unwrap();
    let cube = unit_box(Vector::new(5.0, 0.0, 0.0));

    let out = engine.execute(&point, &point);
    assert!(out.is_degenerate());
    assert!(!out.is_intersecting());
    assert_eq!(out.distance(), -1.0);

    // A single point against a box still spans a full tetrahedron.
    let out = engine.execute(&point, &cube);
    assert!(!out.is_degenerate());
    assert!(!out.is_intersecting());
    assert_relative_eq!(out.distance(), Real::sqrt(14.0), epsilon = 1.0e-6);
}

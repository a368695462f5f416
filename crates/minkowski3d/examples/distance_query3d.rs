#[macro_use]
extern crate approx; // for relative_eq!

use minkowski3d::math::{Isometry, Vector};
use minkowski3d::query::gjk::GjkEpa;
use minkowski3d::shape::ConvexVertexSet;

fn main() {
    let cube1 = ConvexVertexSet::cuboid(Vector::new(1.0, 1.0, 1.0));
    let cube2 = ConvexVertexSet::cuboid(Vector::new(1.0, 1.0, 1.0));
    let engine = GjkEpa::default();

    let cube1_pos = Isometry::identity();
    let cube2_pos_intersecting = Isometry::translation(1.0, 0.0, 0.0);
    let cube2_pos_disjoint = Isometry::translation(3.0, 0.0, 0.0);

    let intersecting =
        engine.execute_with_poses(&cube1_pos, &cube1, &cube2_pos_intersecting, &cube2);
    let disjoint = engine.execute_with_poses(&cube1_pos, &cube1, &cube2_pos_disjoint, &cube2);

    assert!(intersecting.is_intersecting());
    assert!(relative_eq!(disjoint.distance(), 1.0, epsilon = 1.0e-7));

    if let Some((pt1, pt2)) = disjoint.closest_points() {
        println!(
            "Distance: {}, closest points: {} and {} (in local-space), after {} iterations.",
            disjoint.distance(),
            pt1,
            pt2,
            disjoint.iterations
        );
    }
}

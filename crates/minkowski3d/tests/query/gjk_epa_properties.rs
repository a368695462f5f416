use minkowski3d::math::{Isometry, Real, Vector};
use minkowski3d::query::gjk::GjkEpa;
use minkowski3d::shape::ConvexVertexSet;

fn rand_range(rng: &mut oorandom::Rand32, min: Real, max: Real) -> Real {
    min + (max - min) * rng.rand_float() as Real
}

fn rand_vector(rng: &mut oorandom::Rand32, min: Real, max: Real) -> Vector<Real> {
    Vector::new(
        rand_range(rng, min, max),
        rand_range(rng, min, max),
        rand_range(rng, min, max),
    )
}

// The exact distance between two axis-aligned boxes, and whether they overlap.
fn aabb_distance(
    center1: &Vector<Real>,
    half_extents1: &Vector<Real>,
    center2: &Vector<Real>,
    half_extents2: &Vector<Real>,
) -> (Real, bool) {
    let gaps = (center1 - center2).abs() - half_extents1 - half_extents2;
    let overlap = gaps.iter().all(|g| *g < 0.0);
    (gaps.map(|g| g.max(0.0)).norm(), overlap)
}

#[test]
fn random_boxes_match_the_exact_distance() {
    let mut rng = oorandom::Rand32::new(42);
    let engine = GjkEpa::default();

    for _ in 0..1000 {
        let half_extents1 = rand_vector(&mut rng, 0.2, 2.0);
        let half_extents2 = rand_vector(&mut rng, 0.2, 2.0);
        let center1 = rand_vector(&mut rng, -3.0, 3.0);
        let center2 = rand_vector(&mut rng, -3.0, 3.0);

        let (distance, overlap) = aabb_distance(&center1, &half_extents1, &center2, &half_extents2);
        let out = engine.execute_with_poses(
            &Isometry::translation(center1.x, center1.y, center1.z),
            &ConvexVertexSet::cuboid(half_extents1),
            &Isometry::translation(center2.x, center2.y, center2.z),
            &ConvexVertexSet::cuboid(half_extents2),
        );

        assert!(!out.is_degenerate());

        if overlap {
            assert!(
                out.is_intersecting(),
                "boxes at {:?} and {:?} overlap",
                center1,
                center2
            );
        } else if distance > 1.0e-6 {
            assert!(!out.is_intersecting());
            assert_relative_eq!(out.distance(), distance, epsilon = 1.0e-6);
        }
    }
}

#[test]
fn random_rotated_boxes_are_symmetric() {
    let mut rng = oorandom::Rand32::new(7);
    let engine = GjkEpa::default();

    for _ in 0..200 {
        let box1 = ConvexVertexSet::cuboid(rand_vector(&mut rng, 0.2, 1.5));
        let box2 = ConvexVertexSet::cuboid(rand_vector(&mut rng, 0.2, 1.5));
        let pos1 = Isometry::new(
            rand_vector(&mut rng, -4.0, 4.0),
            rand_vector(&mut rng, -3.0, 3.0),
        );
        let pos2 = Isometry::new(
            rand_vector(&mut rng, -4.0, 4.0),
            rand_vector(&mut rng, -3.0, 3.0),
        );

        let out12 = engine.execute_with_poses(&pos1, &box1, &pos2, &box2);
        let out21 = engine.execute_with_poses(&pos2, &box2, &pos1, &box1);

        if out12.is_intersecting() || out21.is_intersecting() {
            continue;
        }

        assert_relative_eq!(out12.distance(), out21.distance(), epsilon = 1.0e-5);

        let (a1, b1) = out12
            .separation()
            .unwrap()
            .collision_point
            .world_points(&pos1, &pos2);
        let (a2, b2) = out21
            .separation()
            .unwrap()
            .collision_point
            .world_points(&pos2, &pos1);

        // The closest points are as far apart as the reported distance.
        assert_relative_eq!((a1 - b1).norm(), out12.distance(), epsilon = 1.0e-6);
        assert_relative_eq!((a2 - b2).norm(), out21.distance(), epsilon = 1.0e-6);
        assert_relative_eq!(
            out12.normal().unwrap().into_inner(),
            -out21.normal().unwrap().into_inner(),
            epsilon = 1.0e-4
        );
    }
}

//! Distance queries between convex vertex sets.
//!
//! # Overview
//!
//! Two convex sets intersect iff. their **Minkowski difference** (the set of all differences
//! `a - b` with `a` in the first set and `b` in the second) contains the origin. When it does
//! not, the distance between the sets is the distance from the origin to that difference, and
//! the closest points of both sets are the pair whose difference is closest to the origin.
//!
//! The Minkowski difference of two vertex sets is never built explicitly. It is sampled through
//! support points: the farthest point of the difference along a direction is the farthest
//! point of the first set along that direction minus the farthest point of the second set along
//! the opposite direction.
//!
//! # Algorithm
//!
//! 1. A tetrahedron is seeded from four distinct support points (see
//!    [`GjkEpa::build_simplex`]).
//! 2. The tetrahedron becomes a [`Polytope`]. If the polytope contains the origin, the sets
//!    intersect. If the Minkowski difference is flat, so is the tetrahedron: its faces then
//!    face the origin, and each refinement keeps the face closest to the origin plus the new
//!    support point.
//! 3. Otherwise, the face of the polytope closest to the origin gives a search direction.
//!    The support point along that direction is added to the polytope, which is
//!    retriangulated around it, and the closest face is searched again.
//! 4. The loop stops when the polytope contains the origin, when the search direction stops
//!    changing, when no direction yields a new support point, or after
//!    [`GjkEpaOptions::max_iterations`] passes.
//!
//! The best separation found by the loop is returned along with the polytope itself. Every
//! geometric outcome is reported through [`GjkEpaOutput`]: the query never fails.

use crate::math::{
    Isometry, Real, UnitVector, Vector, COLLINEARITY_EPSILON, ZERO_DIRECTION_EPSILON,
};
use crate::query::epa::{ClosestFace, Polytope};
use crate::query::gjk::{
    CollisionPoint, GjkEpaOptions, GjkEpaOutput, GjkEpaResult, Separation, Simplex,
    SupportPoint, Termination,
};
use crate::shape::IndexedSupportMap;
use crate::utils;

/// Computes the distance and closest points of two convex vertex sets.
///
/// The engine holds no state besides its options: each query allocates its own simplex and
/// polytope, so a single engine can serve concurrent queries.
///
/// # Example
///
/// ```
/// use minkowski3d::math::Vector;
/// use minkowski3d::query::gjk::{GjkEpa, GjkEpaOptions};
/// use minkowski3d::shape::ConvexVertexSet;
///
/// let options = GjkEpaOptions::new(50, 1.0e-6, 0.09).expect("invalid options");
/// let engine = GjkEpa::new(options);
///
/// let cube1 = ConvexVertexSet::cuboid(Vector::new(1.0, 1.0, 1.0));
/// let cube2 = ConvexVertexSet::cuboid(Vector::new(0.5, 0.5, 0.5));
/// let out = engine.execute(&cube1, &cube2);
///
/// assert!(out.is_intersecting());
/// assert_eq!(out.distance(), -1.0);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GjkEpa {
    options: GjkEpaOptions,
}

impl GjkEpa {
    /// Creates an engine with the given options.
    pub fn new(options: GjkEpaOptions) -> Self {
        GjkEpa { options }
    }

    /// The options of this engine.
    #[inline]
    pub fn options(&self) -> &GjkEpaOptions {
        &self.options
    }

    /// Computes the distance between two vertex sets expressed in the same frame.
    pub fn execute<G1: ?Sized, G2: ?Sized>(&self, g1: &G1, g2: &G2) -> GjkEpaOutput
    where
        G1: IndexedSupportMap,
        G2: IndexedSupportMap,
    {
        self.execute_with_poses(&Isometry::identity(), g1, &Isometry::identity(), g2)
    }

    /// Computes the distance between `g1` placed at `pos1` and `g2` placed at `pos2`.
    ///
    /// The closest points are returned in the local-space of each vertex set. The normal, the
    /// closest point of the Minkowski difference, and the polytope are expressed in
    /// world-space.
    pub fn execute_with_poses<G1: ?Sized, G2: ?Sized>(
        &self,
        pos1: &Isometry<Real>,
        g1: &G1,
        pos2: &Isometry<Real>,
        g2: &G2,
    ) -> GjkEpaOutput
    where
        G1: IndexedSupportMap,
        G2: IndexedSupportMap,
    {
        let mut polytope = match self
            .build_simplex(pos1, g1, pos2, g2)
            .and_then(|simplex| Polytope::from_simplex(&simplex))
        {
            Some(polytope) => polytope,
            None => {
                log::debug!("Failed to build the initial simplex of the distance query.");
                return degenerate_output(Polytope::default());
            }
        };

        if polytope.contains_origin() {
            return intersection_output(polytope, 0);
        }

        let mut closest = match polytope.closest_face_to_origin() {
            Some(closest) => closest,
            None => {
                log::debug!("Failed to project the origin on the initial simplex.");
                return degenerate_output(polytope);
            }
        };
        let mut best = separation(&polytope, &closest, g1, g2);
        let mut old_dir: Option<Vector<Real>> = None;
        let mut iterations = 0;
        let mut termination = Termination::MaxIterations;

        while iterations < self.options.max_iterations() {
            iterations += 1;

            let dir = if closest.point.coords.norm() < ZERO_DIRECTION_EPSILON {
                -polytope.centroid().coords
            } else {
                -closest.point.coords.normalize()
            };

            if old_dir.map_or(false, |old| utils::approx_eq_vector(&dir, &old)) {
                log::debug!("Distance query stalled after {} iterations.", iterations);
                termination = Termination::DirectionStall;
                break;
            }

            old_dir = Some(dir);

            let sp = SupportPoint::from_sets(pos1, g1, pos2, g2, &dir);
            let new_pt = if polytope.insert_vertex(sp) {
                Some(sp)
            } else {
                fallback_support_point(&mut polytope, pos1, g1, pos2, g2)
            };

            let new_pt = match new_pt {
                Some(pt) => pt,
                None => {
                    log::debug!(
                        "No new support point found after {} iterations.",
                        iterations
                    );
                    termination = Termination::NoNewSupportPoint;
                    break;
                }
            };

            if polytope.is_flat() {
                let _ = polytope.expand_flat(closest.face_id, &new_pt);
            } else {
                let _ = polytope.expand(&new_pt);
            }

            if polytope.contains_origin() {
                return intersection_output(polytope, iterations);
            }

            if let Some(new_closest) = polytope.closest_face_to_origin() {
                if new_closest.distance < best.distance {
                    best = separation(&polytope, &new_closest, g1, g2);
                }

                closest = new_closest;
            }

            log::trace!(
                "Distance query iteration {}: best distance {}, {} faces.",
                iterations,
                best.distance,
                polytope.faces().len()
            );
        }

        GjkEpaOutput {
            result: GjkEpaResult::Separated(best),
            polytope,
            iterations,
            termination,
        }
    }

    /// Builds the initial tetrahedron of the distance query.
    ///
    /// 1. The first point is built from the first point of `g1` and the middle point of `g2`.
    /// 2. The second point is the support point toward the origin, as seen from the first. Its
    ///    searches start from the vertices the first point was built from.
    /// 3. The third point is the support point along the direction orthogonal to the first
    ///    edge, on the side of the origin.
    /// 4. The fourth point is the support point along the normal of the first three.
    ///
    /// If the support point along the preferred direction of a step is already part of the
    /// simplex, the opposite direction is tried, then each coordinate axis in both directions.
    /// The third point must not be collinear with the first two. The fourth point is coplanar
    /// with the first three only if every candidate is, in which case the Minkowski difference
    /// is flat. Returns `None` if a step has no valid candidate.
    pub fn build_simplex<G1: ?Sized, G2: ?Sized>(
        &self,
        pos1: &Isometry<Real>,
        g1: &G1,
        pos2: &Isometry<Real>,
        g2: &G2,
    ) -> Option<Simplex>
    where
        G1: IndexedSupportMap,
        G2: IndexedSupportMap,
    {
        if g1.num_points() == 0 || g2.num_points() == 0 {
            return None;
        }

        let mut simplex = Simplex::new();
        let first = SupportPoint::from_ids(pos1, g1, 0, pos2, g2, g2.num_points() / 2);
        simplex.try_push(first).ok()?;

        // The first support query starts its searches from the vertices of the first point.
        let dir = utils::normalize_or_zero(&-first.point.coords);
        let dirs = seed_directions(dir);
        let pushed = dir.norm() >= ZERO_DIRECTION_EPSILON
            && simplex
                .try_push(SupportPoint::from_sets_starting_at(
                    pos1,
                    g1,
                    pos2,
                    g2,
                    &dir,
                    first.ids(),
                ))
                .is_ok();

        if !pushed {
            push_first_valid(&mut simplex, &dirs[1..], false, pos1, g1, pos2, g2)?;
        }

        let ab = simplex.point(1).point - simplex.point(0).point;
        let ao = -simplex.point(0).point.coords;
        let dir = utils::normalize_or_zero(&ab.cross(&ao).cross(&ab));
        let dirs = seed_directions(dir);
        push_first_valid(&mut simplex, &dirs, false, pos1, g1, pos2, g2)?;

        let dir = utils::triangle_normal(
            &simplex.point(0).point,
            &simplex.point(1).point,
            &simplex.point(2).point,
        );
        let dirs = seed_directions(dir);
        push_first_valid(&mut simplex, &dirs, false, pos1, g1, pos2, g2)
            .or_else(|| push_first_valid(&mut simplex, &dirs, true, pos1, g1, pos2, g2))?;

        Some(simplex)
    }
}

fn seed_directions(dir: Vector<Real>) -> [Vector<Real>; 8] {
    [
        dir,
        -dir,
        Vector::x(),
        -Vector::x(),
        Vector::y(),
        -Vector::y(),
        Vector::z(),
        -Vector::z(),
    ]
}

// Appends the support point along the first direction that yields a new point, keeping the
// simplex non-degenerate. With `allow_flat`, a fourth point may be coplanar with the others.
fn push_first_valid<G1: ?Sized, G2: ?Sized>(
    simplex: &mut Simplex,
    dirs: &[Vector<Real>],
    allow_flat: bool,
    pos1: &Isometry<Real>,
    g1: &G1,
    pos2: &Isometry<Real>,
    g2: &G2,
) -> Option<()>
where
    G1: IndexedSupportMap,
    G2: IndexedSupportMap,
{
    for dir in dirs {
        if dir.norm() < ZERO_DIRECTION_EPSILON {
            continue;
        }

        let sp = SupportPoint::from_sets(pos1, g1, pos2, g2, dir);

        if simplex.contains(&sp) || !extends_simplex(simplex, &sp, allow_flat) {
            continue;
        }

        if simplex.try_push(sp).is_ok() {
            return Some(());
        }
    }

    None
}

fn extends_simplex(simplex: &Simplex, sp: &SupportPoint, allow_flat: bool) -> bool {
    let pts = simplex.points();

    match pts.len() {
        2 => !utils::is_collinear(&pts[0].point, &pts[1].point, &sp.point),
        3 if allow_flat => true,
        3 => {
            let n = utils::triangle_normal(&pts[0].point, &pts[1].point, &pts[2].point);
            n.dot(&(sp.point - pts[0].point)).abs() >= COLLINEARITY_EPSILON
        }
        _ => true,
    }
}

// Searches for a new support point along the normals of the polytope faces, in both
// directions.
fn fallback_support_point<G1: ?Sized, G2: ?Sized>(
    polytope: &mut Polytope,
    pos1: &Isometry<Real>,
    g1: &G1,
    pos2: &Isometry<Real>,
    g2: &G2,
) -> Option<SupportPoint>
where
    G1: IndexedSupportMap,
    G2: IndexedSupportMap,
{
    let normals: Vec<Vector<Real>> = polytope.faces().iter().map(|f| *f.normal()).collect();

    for n in normals {
        if n.norm() < ZERO_DIRECTION_EPSILON {
            continue;
        }

        for dir in [n, -n] {
            let sp = SupportPoint::from_sets(pos1, g1, pos2, g2, &dir);

            if polytope.insert_vertex(sp) {
                return Some(sp);
            }
        }
    }

    None
}

fn separation<G1: ?Sized, G2: ?Sized>(
    polytope: &Polytope,
    closest: &ClosestFace,
    g1: &G1,
    g2: &G2,
) -> Separation
where
    G1: IndexedSupportMap,
    G2: IndexedSupportMap,
{
    let face = &polytope.faces()[closest.face_id];
    let normal = UnitVector::try_new(closest.point.coords, ZERO_DIRECTION_EPSILON)
        .or_else(|| UnitVector::try_new(-*face.normal(), ZERO_DIRECTION_EPSILON))
        .unwrap_or_else(Vector::x_axis);

    Separation {
        distance: closest.distance,
        normal,
        closest_point: closest.point,
        collision_point: CollisionPoint::from_face(face, g1, g2),
    }
}

fn intersection_output(polytope: Polytope, iterations: usize) -> GjkEpaOutput {
    GjkEpaOutput {
        result: GjkEpaResult::Intersection,
        polytope,
        iterations,
        termination: Termination::Intersection,
    }
}

fn degenerate_output(polytope: Polytope) -> GjkEpaOutput {
    GjkEpaOutput {
        result: GjkEpaResult::DegenerateSimplex,
        polytope,
        iterations: 0,
        termination: Termination::DegenerateSimplex,
    }
}

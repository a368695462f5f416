use crate::math::{Isometry, Point, Real, UnitVector};
use crate::query::epa::{Polytope, SupportTriangle};
use crate::shape::{IndexedSupportMap, Vertex};

/// The value returned by [`GjkEpaOutput::distance`] when the distance is not defined.
pub const NO_DISTANCE: Real = -1.0;

/// The closest points of two vertex sets.
///
/// Each point is expressed in the local-space of its own vertex set, and is linked to the
/// identities of the three vertices it interpolates.
#[derive(Clone, Debug, PartialEq)]
pub struct CollisionPoint {
    /// The closest point on the first vertex set.
    pub a: Vertex,
    /// The closest point on the second vertex set.
    pub b: Vertex,
}

impl CollisionPoint {
    /// Reconstructs the closest points from the coordinates `(s, t)` cached on a polytope
    /// face.
    ///
    /// The point on `g1` is `a1 + s * (b1 - a1) + t * (c1 - a1)` where `a1`, `b1`, and `c1` are
    /// the points of `g1` the face vertices were built from. The point on `g2` is obtained the
    /// same way from the points of `g2`.
    pub fn from_face<G1: ?Sized, G2: ?Sized>(face: &SupportTriangle, g1: &G1, g2: &G2) -> Self
    where
        G1: IndexedSupportMap,
        G2: IndexedSupportMap,
    {
        let [s, t] = face.st();
        let [fa, fb, fc] = face.vertices();

        let a1 = g1.local_point(fa.id1);
        let pt1 = a1 + (g1.local_point(fb.id1) - a1) * s + (g1.local_point(fc.id1) - a1) * t;
        let a2 = g2.local_point(fa.id2);
        let pt2 = a2 + (g2.local_point(fb.id2) - a2) * s + (g2.local_point(fc.id2) - a2) * t;

        CollisionPoint {
            a: Vertex::new(pt1).with_linked_ids([
                g1.vertex_id(fa.id1),
                g1.vertex_id(fb.id1),
                g1.vertex_id(fc.id1),
            ]),
            b: Vertex::new(pt2).with_linked_ids([
                g2.vertex_id(fa.id2),
                g2.vertex_id(fb.id2),
                g2.vertex_id(fc.id2),
            ]),
        }
    }

    /// The closest points, transformed to world-space by the poses of their vertex sets.
    #[inline]
    pub fn world_points(
        &self,
        pos1: &Isometry<Real>,
        pos2: &Isometry<Real>,
    ) -> (Point<Real>, Point<Real>) {
        (pos1 * self.a.position(), pos2 * self.b.position())
    }
}

/// The closest points and distance of two separated vertex sets.
#[derive(Clone, Debug, PartialEq)]
pub struct Separation {
    /// The distance between both vertex sets.
    pub distance: Real,
    /// The world-space unit vector pointing from the closest point of the second vertex set
    /// toward the closest point of the first one.
    pub normal: UnitVector<Real>,
    /// The point of the Minkowski difference closest to the origin, in world-space.
    pub closest_point: Point<Real>,
    /// The closest points, in the local-space of each vertex set.
    pub collision_point: CollisionPoint,
}

/// The outcome of a distance query.
#[derive(Clone, Debug, PartialEq)]
pub enum GjkEpaResult {
    /// The vertex sets intersect.
    Intersection,
    /// The vertex sets are disjoint.
    Separated(Separation),
    /// No initial tetrahedron could be built from the support points of the vertex sets.
    ///
    /// This happens when the Minkowski difference has too few points, or when it is flat and
    /// its plane contains the origin (for example when both sets are coplanar polygons).
    DegenerateSimplex,
}

/// The reason the refinement loop of a distance query stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Termination {
    /// The polytope contains the origin.
    Intersection,
    /// The search direction did not change since the previous iteration.
    DirectionStall,
    /// No search direction yielded a support point that wasn't already part of the
    /// polytope.
    NoNewSupportPoint,
    /// The iteration budget was exhausted.
    MaxIterations,
    /// No initial tetrahedron could be built.
    DegenerateSimplex,
}

/// The complete output of a distance query.
#[derive(Clone, Debug)]
pub struct GjkEpaOutput {
    /// The outcome of the query.
    pub result: GjkEpaResult,
    /// The polytope in its final state. This is empty if the query stopped with
    /// [`GjkEpaResult::DegenerateSimplex`].
    pub polytope: Polytope,
    /// The number of passes of the refinement loop. Each pass expands the polytope once,
    /// except for the last one if it stopped on a stalled direction or a lack of new support
    /// point.
    pub iterations: usize,
    /// Why the query stopped.
    pub termination: Termination,
}

impl GjkEpaOutput {
    /// The distance between both vertex sets.
    ///
    /// This is [`NO_DISTANCE`] (i.e. `-1.0`) if they intersect, and also if the query could
    /// not build its initial tetrahedron. Use [`Self::is_intersecting`] to tell those cases
    /// apart.
    #[inline]
    pub fn distance(&self) -> Real {
        match &self.result {
            GjkEpaResult::Separated(sep) => sep.distance,
            GjkEpaResult::Intersection | GjkEpaResult::DegenerateSimplex => NO_DISTANCE,
        }
    }

    /// Returns `true` if the polytope was found to contain the origin.
    #[inline]
    pub fn is_intersecting(&self) -> bool {
        self.result == GjkEpaResult::Intersection
    }

    /// Returns `true` if no initial tetrahedron could be built.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.result == GjkEpaResult::DegenerateSimplex
    }

    /// The separation data, if both vertex sets are disjoint.
    #[inline]
    pub fn separation(&self) -> Option<&Separation> {
        match &self.result {
            GjkEpaResult::Separated(sep) => Some(sep),
            _ => None,
        }
    }

    /// The closest point on each vertex set, in their respective local-space.
    #[inline]
    pub fn closest_points(&self) -> Option<(&Point<Real>, &Point<Real>)> {
        self.separation().map(|sep| {
            (
                sep.collision_point.a.position(),
                sep.collision_point.b.position(),
            )
        })
    }

    /// The world-space unit vector from the second closest point toward the first one.
    #[inline]
    pub fn normal(&self) -> Option<UnitVector<Real>> {
        self.separation().map(|sep| sep.normal)
    }
}

use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::IndexedSupportMap;
use std::hash::{Hash, Hasher};
use std::ops::Sub;

/// A point of the Minkowski difference of two vertex sets.
///
/// Each support point is the difference of a vertex of the first set and a vertex of the
/// second set, and remembers the indices of both. Two support points are equal iff. they
/// were built from the same pair of indices: their positions are not compared, so distinct
/// pairs that happen to coincide geometrically are still told apart.
#[derive(Copy, Clone, Debug)]
pub struct SupportPoint {
    /// The point on the Minkowski difference. This is equal to `self.orig1 - self.orig2`.
    pub point: Point<Real>,
    /// The point of the first set used to compute `self.point`, in world-space.
    pub orig1: Point<Real>,
    /// The point of the second set used to compute `self.point`, in world-space.
    pub orig2: Point<Real>,
    /// The index of `self.orig1` in the first set.
    pub id1: usize,
    /// The index of `self.orig2` in the second set.
    pub id2: usize,
}

impl SupportPoint {
    /// Initializes a support point with `orig1 - orig2`.
    pub fn new(orig1: Point<Real>, id1: usize, orig2: Point<Real>, id2: usize) -> Self {
        SupportPoint {
            point: Point::from(orig1 - orig2),
            orig1,
            orig2,
            id1,
            id2,
        }
    }

    /// The support point built from the `id1`-th point of `g1` and the `id2`-th point of
    /// `g2`, each placed by its own pose.
    pub fn from_ids<G1: ?Sized, G2: ?Sized>(
        pos1: &Isometry<Real>,
        g1: &G1,
        id1: usize,
        pos2: &Isometry<Real>,
        g2: &G2,
        id2: usize,
    ) -> Self
    where
        G1: IndexedSupportMap,
        G2: IndexedSupportMap,
    {
        SupportPoint::new(pos1 * g1.local_point(id1), id1, pos2 * g2.local_point(id2), id2)
    }

    /// Computes the support point of the Minkowski difference of `g1` and `g2` toward the
    /// world-space direction `dir`.
    ///
    /// This is the farthest point of `g1` along `dir` minus the farthest point of `g2` along
    /// `-dir`.
    pub fn from_sets<G1: ?Sized, G2: ?Sized>(
        pos1: &Isometry<Real>,
        g1: &G1,
        pos2: &Isometry<Real>,
        g2: &G2,
        dir: &Vector<Real>,
    ) -> Self
    where
        G1: IndexedSupportMap,
        G2: IndexedSupportMap,
    {
        Self::from_sets_starting_at(pos1, g1, pos2, g2, dir, (0, 0))
    }

    /// Computes the support point of the Minkowski difference of `g1` and `g2` toward `dir`,
    /// starting the search on `g1` from the index `start.0` and on `g2` from `start.1`.
    ///
    /// The start indices only matter to vertex sets searched by hill-climbing.
    pub fn from_sets_starting_at<G1: ?Sized, G2: ?Sized>(
        pos1: &Isometry<Real>,
        g1: &G1,
        pos2: &Isometry<Real>,
        g2: &G2,
        dir: &Vector<Real>,
        start: (usize, usize),
    ) -> Self
    where
        G1: IndexedSupportMap,
        G2: IndexedSupportMap,
    {
        let id1 = g1.support_point_id_from(pos1, dir, start.0);
        let id2 = g2.support_point_id_from(pos2, &-*dir, start.1);

        SupportPoint::from_ids(pos1, g1, id1, pos2, g2, id2)
    }

    /// The pair of indices identifying this support point.
    #[inline]
    pub fn ids(&self) -> (usize, usize) {
        (self.id1, self.id2)
    }
}

impl PartialEq for SupportPoint {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id1 == other.id1 && self.id2 == other.id2
    }
}

impl Eq for SupportPoint {}

impl Hash for SupportPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ids().hash(state)
    }
}

impl Sub<SupportPoint> for SupportPoint {
    type Output = Vector<Real>;

    #[inline]
    fn sub(self, rhs: SupportPoint) -> Vector<Real> {
        self.point - rhs.point
    }
}

//! Traits for support mapping based vertex sets.

use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::VertexId;

/// A convex object given by a finite set of points, with a support function returning the
/// index of its farthest point along a direction.
///
/// Indices are what the distance query tracks: two support points of a Minkowski difference
/// are the same if they were built from the same pair of indices.
pub trait IndexedSupportMap {
    /// The number of points of this object. Must be non-zero for support queries.
    fn num_points(&self) -> usize;

    /// The `i`-th point, in the local-space of this object.
    fn local_point(&self, i: usize) -> Point<Real>;

    /// The user-provided identity of the `i`-th point, if any.
    fn vertex_id(&self, _i: usize) -> Option<VertexId> {
        None
    }

    /// The index of the farthest point along `dir`, starting the search from `start`.
    ///
    /// Implementations that scan every point may ignore `start`. An out-of-range `start` is
    /// treated as `0`.
    fn local_support_point_id_from(&self, dir: &Vector<Real>, start: usize) -> usize;

    /// The index of the farthest point along `dir`.
    fn local_support_point_id(&self, dir: &Vector<Real>) -> usize {
        self.local_support_point_id_from(dir, 0)
    }

    /// The farthest point along `dir`, in the local-space of this object.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        self.local_point(self.local_support_point_id(dir))
    }

    /// The index of the farthest point along the world-space direction `dir`, when this
    /// object is placed by `transform`, starting the search from `start`.
    fn support_point_id_from(
        &self,
        transform: &Isometry<Real>,
        dir: &Vector<Real>,
        start: usize,
    ) -> usize {
        let local_dir = transform.inverse_transform_vector(dir);
        self.local_support_point_id_from(&local_dir, start)
    }

    /// The index of the farthest point along the world-space direction `dir`, when this
    /// object is placed by `transform`.
    fn support_point_id(&self, transform: &Isometry<Real>, dir: &Vector<Real>) -> usize {
        self.support_point_id_from(transform, dir, 0)
    }

    /// The farthest point along `dir`, transformed by `transform`.
    fn support_point(&self, transform: &Isometry<Real>, dir: &Vector<Real>) -> Point<Real> {
        transform * self.local_point(self.support_point_id(transform, dir))
    }
}

impl IndexedSupportMap for [Point<Real>] {
    #[inline]
    fn num_points(&self) -> usize {
        self.len()
    }

    #[inline]
    fn local_point(&self, i: usize) -> Point<Real> {
        self[i]
    }

    #[inline]
    fn local_support_point_id_from(&self, dir: &Vector<Real>, _start: usize) -> usize {
        crate::utils::point_cloud_support_point_id(dir, self)
    }
}

use crate::query::gjk::SupportPoint;
use arrayvec::ArrayVec;

/// Indicates why a support point could not be added to a [`Simplex`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum SimplexError {
    /// The support point is already part of the simplex, at the given position.
    #[error("the support point is already the vertex {0} of the simplex.")]
    Duplicate(usize),
    /// The simplex already has four vertices.
    #[error("the simplex already has four vertices.")]
    Full,
}

/// The up to four support points seeding the polytope of the distance query.
///
/// Points are appended in order and are pairwise distinct: adding a support point built
/// from the same pair of indices as one already present is an error.
#[derive(Clone, Debug, Default)]
pub struct Simplex {
    points: ArrayVec<SupportPoint, 4>,
}

impl Simplex {
    /// Creates an empty simplex.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a support point.
    pub fn try_push(&mut self, pt: SupportPoint) -> Result<(), SimplexError> {
        if let Some(i) = self.points.iter().position(|p| *p == pt) {
            return Err(SimplexError::Duplicate(i));
        }

        self.points.try_push(pt).map_err(|_| SimplexError::Full)
    }

    /// Tests if a support point with the same indices as `pt` is part of this simplex.
    #[inline]
    pub fn contains(&self, pt: &SupportPoint) -> bool {
        self.points.contains(pt)
    }

    /// The number of vertices of this simplex.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if this simplex has no vertex.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns `true` if this simplex is a tetrahedron.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.points.is_full()
    }

    /// The vertices of this simplex, in insertion order.
    #[inline]
    pub fn points(&self) -> &[SupportPoint] {
        &self.points
    }

    /// The `i`-th vertex of this simplex.
    #[inline]
    pub fn point(&self, i: usize) -> &SupportPoint {
        &self.points[i]
    }
}

//! Vertices of a convex vertex set.

use crate::math::{Point, Real};
use smallvec::SmallVec;
use std::collections::btree_set::{self, BTreeSet};
use std::iter::FromIterator;

/// The stable identity of a vertex, as given by the user.
pub type VertexId = u32;

/// The set of neighbors of a vertex, as indices into the same vertex array.
///
/// This has set semantics (inserting an index twice has no effect) and iterates in
/// increasing index order, so the hill-climbing support search visits neighbors in a
/// deterministic order.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencySet(BTreeSet<u32>);

impl AdjacencySet {
    /// An empty adjacency set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a neighbor. Returns `false` if it was already present.
    pub fn insert(&mut self, neighbor: u32) -> bool {
        self.0.insert(neighbor)
    }

    /// Tests if `neighbor` is part of this set.
    pub fn contains(&self, neighbor: u32) -> bool {
        self.0.contains(&neighbor)
    }

    /// The number of neighbors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if this vertex has no neighbor.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates through the neighbors in increasing index order.
    pub fn iter(&self) -> btree_set::Iter<'_, u32> {
        self.0.iter()
    }

    /// The greatest neighbor index, if any.
    pub fn max(&self) -> Option<u32> {
        self.0.iter().next_back().copied()
    }
}

impl FromIterator<u32> for AdjacencySet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        AdjacencySet(iter.into_iter().collect())
    }
}

impl Extend<u32> for AdjacencySet {
    fn extend<I: IntoIterator<Item = u32>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl<'a> IntoIterator for &'a AdjacencySet {
    type Item = &'a u32;
    type IntoIter = btree_set::Iter<'a, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A vertex of a convex object.
///
/// Besides its position, a vertex may carry a user-provided identity, the indices of its
/// neighbors on the convex hull, and the identities of the original vertices it was derived
/// from (this is only set on the closest points computed by
/// [`GjkEpa`](crate::query::gjk::GjkEpa)).
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
    position: Point<Real>,
    id: Option<VertexId>,
    adjacency: AdjacencySet,
    linked_ids: SmallVec<[Option<VertexId>; 3]>,
}

impl Vertex {
    /// A vertex without identity nor adjacency information.
    pub fn new(position: Point<Real>) -> Self {
        Vertex {
            position,
            id: None,
            adjacency: AdjacencySet::new(),
            linked_ids: SmallVec::new(),
        }
    }

    /// Sets the identity of this vertex.
    pub fn with_id(mut self, id: VertexId) -> Self {
        self.id = Some(id);
        self
    }

    /// Adds the given neighbors to the adjacency set of this vertex.
    pub fn with_adjacency(mut self, neighbors: impl IntoIterator<Item = u32>) -> Self {
        self.adjacency.extend(neighbors);
        self
    }

    /// Sets the identities of the vertices this vertex was derived from.
    pub fn with_linked_ids(mut self, ids: impl IntoIterator<Item = Option<VertexId>>) -> Self {
        self.linked_ids = ids.into_iter().collect();
        self
    }

    /// The position of this vertex.
    #[inline]
    pub fn position(&self) -> &Point<Real> {
        &self.position
    }

    /// The identity of this vertex, if any.
    #[inline]
    pub fn id(&self) -> Option<VertexId> {
        self.id
    }

    /// The neighbors of this vertex.
    #[inline]
    pub fn adjacency(&self) -> &AdjacencySet {
        &self.adjacency
    }

    /// The identities of the vertices this vertex was derived from.
    #[inline]
    pub fn linked_ids(&self) -> &[Option<VertexId>] {
        &self.linked_ids
    }

    /// Moves this vertex.
    pub fn set_position(&mut self, position: Point<Real>) {
        self.position = position;
    }

    /// Adds a neighbor to this vertex. Returns `false` if it was already a neighbor.
    pub fn add_neighbor(&mut self, neighbor: u32) -> bool {
        self.adjacency.insert(neighbor)
    }
}

impl From<Point<Real>> for Vertex {
    fn from(position: Point<Real>) -> Self {
        Vertex::new(position)
    }
}

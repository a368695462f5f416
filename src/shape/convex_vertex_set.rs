//! The vertex store of a convex object.

use crate::math::{Point, Real, Vector};
use crate::shape::{IndexedSupportMap, Vertex, VertexId};
use crate::utils;

/// Indicated an inconsistency while building a [`ConvexVertexSet`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum VertexSetError {
    /// A convex vertex set must contain at least one vertex.
    #[error("a convex vertex set must contain at least one vertex.")]
    Empty,
    /// A vertex lists a neighbor that does not exist.
    #[error("the vertex {vertex} lists the neighbor {neighbor} but there are only {len} vertices.")]
    AdjacencyOutOfBounds {
        /// The vertex with the invalid neighbor.
        vertex: u32,
        /// The invalid neighbor index.
        neighbor: u32,
        /// The number of vertices of the set.
        len: usize,
    },
    /// A vertex has a NaN or infinite coordinate.
    #[error("the vertex {0} has a non-finite position.")]
    NonFinitePosition(u32),
}

/// The vertices of a convex object, with optional adjacency information.
///
/// If every vertex has at least one neighbor, support queries use a hill-climbing search
/// over the adjacency graph. Otherwise, they scan every vertex. The adjacency graph is
/// expected to be the edge graph of the convex hull of the vertices: the hill-climbing
/// search may return a non-maximal vertex if the graph doesn't describe a convex
/// polyhedron. This is not checked.
///
/// # Example
///
/// ```
/// use minkowski3d::math::{Point, Vector};
/// use minkowski3d::shape::{ConvexVertexSet, IndexedSupportMap};
///
/// let tetrahedron = ConvexVertexSet::from_convex_mesh(
///     vec![
///         Point::origin(),
///         Point::new(1.0, 0.0, 0.0),
///         Point::new(0.0, 1.0, 0.0),
///         Point::new(0.0, 0.0, 1.0),
///     ],
///     &[[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]],
/// )
/// .expect("invalid tetrahedron");
///
/// assert!(tetrahedron.has_adjacency());
/// assert_eq!(tetrahedron.local_support_point_id(&Vector::y()), 2);
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexVertexSet {
    vertices: Vec<Vertex>,
    // Same as `vertices[i].position()`, packed for the support functions.
    points: Vec<Point<Real>>,
    has_adjacency: bool,
    hill_climb_step_limit: Option<usize>,
}

impl ConvexVertexSet {
    /// Creates a vertex set, checking that it is not empty, that every position is finite,
    /// and that every neighbor index is valid.
    pub fn new(vertices: Vec<Vertex>) -> Result<Self, VertexSetError> {
        if vertices.is_empty() {
            return Err(VertexSetError::Empty);
        }

        let len = vertices.len();

        for (i, vertex) in vertices.iter().enumerate() {
            if !vertex.position().coords.iter().all(|e| e.is_finite()) {
                return Err(VertexSetError::NonFinitePosition(i as u32));
            }

            if let Some(neighbor) = vertex.adjacency().max() {
                if neighbor as usize >= len {
                    return Err(VertexSetError::AdjacencyOutOfBounds {
                        vertex: i as u32,
                        neighbor,
                        len,
                    });
                }
            }
        }

        let points = vertices.iter().map(|v| *v.position()).collect();
        let has_adjacency = len > 1 && vertices.iter().all(|v| !v.adjacency().is_empty());

        Ok(ConvexVertexSet {
            vertices,
            points,
            has_adjacency,
            hill_climb_step_limit: None,
        })
    }

    /// Creates a vertex set without adjacency information.
    ///
    /// Support queries on this set scan every point.
    pub fn from_points(points: Vec<Point<Real>>) -> Result<Self, VertexSetError> {
        Self::new(points.into_iter().map(Vertex::new).collect())
    }

    /// Creates a vertex set from points and the undirected edges of their convex hull.
    ///
    /// Each edge `[i, j]` makes `i` a neighbor of `j` and `j` a neighbor of `i`.
    pub fn from_points_and_edges(
        points: Vec<Point<Real>>,
        edges: &[[u32; 2]],
    ) -> Result<Self, VertexSetError> {
        let len = points.len();
        let mut vertices: Vec<Vertex> = points.into_iter().map(Vertex::new).collect();

        for (k, edge) in edges.iter().enumerate() {
            for (from, to) in [(edge[0], edge[1]), (edge[1], edge[0])] {
                if to as usize >= len || from as usize >= len {
                    log::debug!("Invalid edge {} in vertex set: {:?}.", k, edge);
                    return Err(VertexSetError::AdjacencyOutOfBounds {
                        vertex: from,
                        neighbor: to,
                        len,
                    });
                }

                if from != to {
                    let _ = vertices[from as usize].add_neighbor(to);
                }
            }
        }

        Self::new(vertices)
    }

    /// Creates a vertex set from the triangles of its convex hull.
    ///
    /// The adjacency graph is made of the edges of the given triangles.
    pub fn from_convex_mesh(
        points: Vec<Point<Real>>,
        indices: &[[u32; 3]],
    ) -> Result<Self, VertexSetError> {
        let edges: Vec<[u32; 2]> = indices
            .iter()
            .flat_map(|idx| [[idx[0], idx[1]], [idx[1], idx[2]], [idx[2], idx[0]]])
            .collect();
        Self::from_points_and_edges(points, &edges)
    }

    /// Creates the 8 vertices and 12 edges of a box centered at the origin.
    ///
    /// The `i`-th bit of a vertex index is set iff. the `i`-th coordinate of that vertex is
    /// negative. Vertex `i` has the identity `i`.
    pub fn cuboid(half_extents: Vector<Real>) -> Self {
        let vertices: Vec<Vertex> = (0..8u32)
            .map(|i| {
                let mut pt = half_extents;

                for k in 0..3 {
                    if i & (1 << k) != 0 {
                        pt[k] = -pt[k];
                    }
                }

                Vertex::new(Point::from(pt))
                    .with_id(i)
                    .with_adjacency([i ^ 0b001, i ^ 0b010, i ^ 0b100])
            })
            .collect();
        let points = vertices.iter().map(|v| *v.position()).collect();

        ConvexVertexSet {
            vertices,
            points,
            has_adjacency: true,
            hill_climb_step_limit: None,
        }
    }

    /// Bounds the number of moves made by each hill-climbing support search.
    ///
    /// By default, a search stops after as many moves as there are vertices, which no
    /// strictly ascending walk can exceed.
    pub fn with_hill_climb_step_limit(mut self, limit: usize) -> Self {
        self.hill_climb_step_limit = Some(limit);
        self
    }

    /// The number of vertices of this set. This is never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`: a vertex set cannot be empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The vertices of this set.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// The vertex positions of this set.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// Returns `true` if support queries use the hill-climbing search.
    #[inline]
    pub fn has_adjacency(&self) -> bool {
        self.has_adjacency
    }
}

impl IndexedSupportMap for ConvexVertexSet {
    #[inline]
    fn num_points(&self) -> usize {
        self.points.len()
    }

    #[inline]
    fn local_point(&self, i: usize) -> Point<Real> {
        self.points[i]
    }

    #[inline]
    fn vertex_id(&self, i: usize) -> Option<VertexId> {
        self.vertices[i].id()
    }

    fn local_support_point_id_from(&self, dir: &Vector<Real>, start: usize) -> usize {
        if self.has_adjacency {
            let start = if start < self.points.len() { start } else { 0 };
            let max_steps = self.hill_climb_step_limit.unwrap_or(self.points.len());
            utils::hill_climb_support_point_id(dir, &self.points, start, max_steps, |i| {
                self.vertices[i].adjacency()
            })
        } else {
            utils::point_cloud_support_point_id(dir, &self.points)
        }
    }
}

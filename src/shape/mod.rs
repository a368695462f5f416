//! Shapes supported by minkowski3d.

pub use self::convex_vertex_set::{ConvexVertexSet, VertexSetError};
#[doc(inline)]
pub use self::support_map::IndexedSupportMap;
pub use self::triangle::{Triangle, TrianglePointLocation};
pub use self::vertex::{AdjacencySet, Vertex, VertexId};

mod convex_vertex_set;
#[doc(hidden)]
pub mod support_map;
mod triangle;
mod vertex;

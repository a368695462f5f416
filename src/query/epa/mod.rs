//! The expanding polytope refined by the distance query.

pub use self::polytope::{ClosestFace, Polytope, Silhouette};
pub use self::support_triangle::{Edge, SupportTriangle};

mod polytope;
mod support_triangle;

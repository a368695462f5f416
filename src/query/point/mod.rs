//! Point projection on triangles.

pub use self::point_triangle::{closest_point_on_triangle, TriangleProjection};

mod point_triangle;

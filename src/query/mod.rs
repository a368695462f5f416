//! Non-persistent geometric queries.
//!
//! The main entry point is [`GjkEpa`](gjk::GjkEpa), which computes the distance and the
//! closest points of two convex vertex sets, or reports that they intersect:
//!
//! * [`gjk`] contains the engine, its options, and its output types.
//! * [`epa`] contains the polytope the engine expands toward the origin.
//! * [`point`] contains the projection of a point on a triangle.

pub mod epa;
pub mod gjk;
pub mod point;

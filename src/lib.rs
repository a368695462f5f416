/*!
minkowski3d
===========

**minkowski3d** computes the distance between two convex vertex sets in 3D, and tells
whether they intersect.

The query works on the Minkowski difference of the two sets. An initial tetrahedron is
seeded from support points, then refined by an expanding-polytope loop that retriangulates
the hull around each new support point until the face closest to the origin stops moving.

```
use minkowski3d::math::{Isometry, Vector};
use minkowski3d::query::gjk::GjkEpa;
use minkowski3d::shape::ConvexVertexSet;

let cube1 = ConvexVertexSet::cuboid(Vector::new(1.0, 1.0, 1.0));
let cube2 = ConvexVertexSet::cuboid(Vector::new(1.0, 1.0, 1.0));

let engine = GjkEpa::default();
let out = engine.execute_with_poses(
    &Isometry::identity(),
    &cube1,
    &Isometry::translation(3.0, 0.0, 0.0),
    &cube2,
);

assert!(!out.is_intersecting());
assert!((out.distance() - 1.0).abs() < 1.0e-6);
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![doc(html_root_url = "http://docs.rs/minkowski3d/0.1.0")]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    pub use f64 as Real;
}

/// Aliases for mathematical types and the tolerances shared by every query.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Point3, UnitVector3, Vector3};

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;

    /// Two vectors are equal if all their components differ by less than this value.
    pub const VECTOR_EQ_EPSILON: Real = 1.0e-7;

    /// Two triangle edges are collinear if every component of their cross product is
    /// smaller than this value.
    pub const COLLINEARITY_EPSILON: Real = 1.0e-6;

    /// The normalized signed distance from a face below which a point lies outside of a
    /// polytope.
    pub const CONTAINMENT_BOUND: Real = -1.0e-15;

    /// A face normal is flipped when its dot product with the vector from the polytope
    /// centroid to the face falls below this value.
    pub const NORMAL_FLIP_BOUND: Real = -1.0e-10;

    /// Closest-point vectors shorter than this are considered to be zero.
    pub const ZERO_DIRECTION_EPSILON: Real = 1.0e-7;

    /// Determinants with an absolute value below this are considered to be zero when
    /// projecting a point on the interior of a triangle.
    pub const DEGENERATE_DETERMINANT: Real = 1.0e-100;
}

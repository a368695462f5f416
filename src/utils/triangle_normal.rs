use crate::math::{Point, Real, Vector, COLLINEARITY_EPSILON};
use crate::utils::normalize_or_zero;

/// Computes the unit normal of the triangle `abc`, collinear to `AB × AC`.
///
/// Reversing the winding order negates the result. Degenerate triangles have a zero normal.
#[inline]
pub fn triangle_normal(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Vector<Real> {
    let ab = b - a;
    let ac = c - a;
    normalize_or_zero(&ab.cross(&ac))
}

/// Tests if the three points are collinear.
///
/// The points are collinear if every component of `AB × AC` is smaller than
/// `COLLINEARITY_EPSILON` in absolute value. Note that this is an absolute bound: large
/// triangles need to be proportionally thinner to be considered degenerate.
#[inline]
pub fn is_collinear(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> bool {
    let cross = (b - a).cross(&(c - a));
    cross.iter().all(|e| e.abs() < COLLINEARITY_EPSILON)
}

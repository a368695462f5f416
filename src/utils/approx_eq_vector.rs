use crate::math::{Real, Vector, VECTOR_EQ_EPSILON};

/// Tests if two vectors are equal up to `VECTOR_EQ_EPSILON` on every component.
///
/// This is the equality used to detect a stalled search direction and to match the
/// shared edges of two polytope faces.
#[inline]
pub fn approx_eq_vector(a: &Vector<Real>, b: &Vector<Real>) -> bool {
    (a.x - b.x).abs() < VECTOR_EQ_EPSILON
        && (a.y - b.y).abs() < VECTOR_EQ_EPSILON
        && (a.z - b.z).abs() < VECTOR_EQ_EPSILON
}

/// Normalizes `v`, or returns it unchanged if its norm is zero.
#[inline]
pub fn normalize_or_zero(v: &Vector<Real>) -> Vector<Real> {
    let norm = v.norm();

    if norm > 0.0 {
        v * (1.0 / norm)
    } else {
        *v
    }
}

use crate::math::{Point, Real, DEGENERATE_DETERMINANT};
use crate::shape::TrianglePointLocation;

/// The projection of a point on a triangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TriangleProjection {
    /// Whether or not the point to project was already on the triangle.
    pub is_inside: bool,
    /// The projection result.
    pub point: Point<Real>,
    /// The coordinates `(s, t)` of the projection such that
    /// `point = a + s * (b - a) + t * (c - a)`.
    pub st: [Real; 2],
    /// The feature of the triangle the projection lies on.
    pub location: TrianglePointLocation,
}

/// Computes the point of the triangle `abc` closest to `pt`.
///
/// The query point is expressed in the `(s, t)` frame of the edges `AB` and `AC`, and
/// classified among the seven regions of that plane delimited by the triangle edges: the
/// interior, three edge regions, and three vertex regions. Outside of the interior, the
/// quadratic distance function is minimized along the boundary of the triangle.
///
/// Returns `None` if `pt` projects on the interior of a triangle whose barycentric system is
/// too degenerate to be inverted. Degenerate triangles should be filtered out with
/// [`crate::utils::is_collinear`] beforehand.
pub fn closest_point_on_triangle(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    pt: &Point<Real>,
) -> Option<TriangleProjection> {
    let diff = pt - a;
    let ab = b - a;
    let ac = c - a;

    let a00 = ab.dot(&ab);
    let a01 = ab.dot(&ac);
    let a11 = ac.dot(&ac);
    let b0 = -diff.dot(&ab);
    let b1 = -diff.dot(&ac);
    let det = a00 * a11 - a01 * a01;

    let mut s = a01 * b1 - a11 * b0;
    let mut t = a01 * b0 - a00 * b1;

    // Clamps `(s, t)` on the segment AC, i.e., with `s = 0`.
    let clamp_on_ac = |t: &mut Real| {
        if b1 >= 0.0 {
            *t = 0.0;
        } else if -b1 >= a11 {
            *t = 1.0;
        } else {
            *t = -b1 / a11;
        }
    };
    // Clamps `(s, t)` on the segment AB, i.e., with `t = 0`.
    let clamp_on_ab = |s: &mut Real| {
        if b0 >= 0.0 {
            *s = 0.0;
        } else if -b0 >= a00 {
            *s = 1.0;
        } else {
            *s = -b0 / a00;
        }
    };

    let mut on_face = false;

    if s + t <= det {
        if s < 0.0 {
            if t < 0.0 {
                // Vertex region of `a`: the minimum is on AB or on AC.
                if b0 < 0.0 {
                    t = 0.0;
                    clamp_on_ab(&mut s);
                } else {
                    s = 0.0;
                    clamp_on_ac(&mut t);
                }
            } else {
                // Edge region of AC.
                s = 0.0;
                clamp_on_ac(&mut t);
            }
        } else if t < 0.0 {
            // Edge region of AB.
            t = 0.0;
            clamp_on_ab(&mut s);
        } else {
            // Interior.
            if det.abs() <= DEGENERATE_DETERMINANT {
                return None;
            }

            let inv_det = 1.0 / det;
            s *= inv_det;
            t *= inv_det;
            on_face = true;
        }
    } else if s < 0.0 {
        // Vertex region of `c`: the minimum is on BC or on AC.
        let tmp0 = a01 + b0;
        let tmp1 = a11 + b1;

        if tmp1 > tmp0 {
            let numer = tmp1 - tmp0;
            let denom = a00 - 2.0 * a01 + a11;

            if numer >= denom {
                s = 1.0;
                t = 0.0;
            } else {
                s = numer / denom;
                t = 1.0 - s;
            }
        } else {
            s = 0.0;

            if tmp1 <= 0.0 {
                t = 1.0;
            } else if b1 >= 0.0 {
                t = 0.0;
            } else {
                t = -b1 / a11;
            }
        }
    } else if t < 0.0 {
        // Vertex region of `b`: the minimum is on BC or on AB.
        let tmp0 = a01 + b1;
        let tmp1 = a00 + b0;

        if tmp1 > tmp0 {
            let numer = tmp1 - tmp0;
            let denom = a00 - 2.0 * a01 + a11;

            if numer >= denom {
                t = 1.0;
                s = 0.0;
            } else {
                t = numer / denom;
                s = 1.0 - t;
            }
        } else {
            t = 0.0;

            if tmp1 <= 0.0 {
                s = 1.0;
            } else if b0 >= 0.0 {
                s = 0.0;
            } else {
                s = -b0 / a00;
            }
        }
    } else {
        // Edge region of BC.
        let numer = a11 + b1 - a01 - b0;

        if numer <= 0.0 {
            s = 0.0;
            t = 1.0;
        } else {
            let denom = a00 - 2.0 * a01 + a11;

            if numer >= denom {
                s = 1.0;
                t = 0.0;
            } else {
                s = numer / denom;
                t = 1.0 - s;
            }
        }
    }

    let point = a + ab * s + ac * t;
    let location = if on_face {
        TrianglePointLocation::OnFace([1.0 - s - t, s, t])
    } else {
        boundary_location(s, t)
    };

    Some(TriangleProjection {
        is_inside: relative_eq!(point, *pt),
        point,
        st: [s, t],
        location,
    })
}

fn boundary_location(s: Real, t: Real) -> TrianglePointLocation {
    if t == 0.0 {
        if s == 0.0 {
            TrianglePointLocation::OnVertex(0)
        } else if s == 1.0 {
            TrianglePointLocation::OnVertex(1)
        } else {
            TrianglePointLocation::OnEdge(0, [1.0 - s, s])
        }
    } else if s == 0.0 {
        if t == 1.0 {
            TrianglePointLocation::OnVertex(2)
        } else {
            TrianglePointLocation::OnEdge(2, [1.0 - t, t])
        }
    } else {
        TrianglePointLocation::OnEdge(1, [s, t])
    }
}

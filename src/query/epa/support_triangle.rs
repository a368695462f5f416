use crate::math::{Point, Real, Vector, NORMAL_FLIP_BOUND};
use crate::query::gjk::SupportPoint;
use crate::shape::Triangle;
use crate::utils;

/// A face of the polytope built by the distance query.
///
/// A face is an immutable value: updating its cached coordinates creates a new face.
#[derive(Copy, Clone, Debug)]
pub struct SupportTriangle {
    /// The first vertex of this face.
    pub a: SupportPoint,
    /// The second vertex of this face.
    pub b: SupportPoint,
    /// The third vertex of this face.
    pub c: SupportPoint,
    normal: Vector<Real>,
    st: [Real; 2],
}

impl SupportTriangle {
    /// Creates a face with a unit normal pointing away from `centroid`.
    ///
    /// The normal is collinear to `AB × AC` unless its dot product with `a - centroid` is
    /// smaller than `NORMAL_FLIP_BOUND`, in which case it is negated. Degenerate faces get a
    /// zero normal.
    pub fn new(
        a: SupportPoint,
        b: SupportPoint,
        c: SupportPoint,
        centroid: &Point<Real>,
    ) -> Self {
        let mut normal = utils::triangle_normal(&a.point, &b.point, &c.point);

        if normal.dot(&(a.point - centroid)) < NORMAL_FLIP_BOUND {
            normal = -normal;
        }

        SupportTriangle {
            a,
            b,
            c,
            normal,
            st: [0.0; 2],
        }
    }

    /// This face, with the coordinates `(s, t)` of its closest point cached.
    #[inline]
    #[must_use]
    pub fn with_st(mut self, st: [Real; 2]) -> Self {
        self.st = st;
        self
    }

    /// The outward unit normal of this face.
    #[inline]
    pub fn normal(&self) -> &Vector<Real> {
        &self.normal
    }

    /// The coordinates `(s, t)` of the last closest point computed on this face, such that
    /// this point is `a + s * (b - a) + t * (c - a)`.
    #[inline]
    pub fn st(&self) -> [Real; 2] {
        self.st
    }

    /// The three vertices of this face.
    #[inline]
    pub fn vertices(&self) -> [&SupportPoint; 3] {
        [&self.a, &self.b, &self.c]
    }

    /// The geometric triangle of this face.
    #[inline]
    pub fn triangle(&self) -> Triangle {
        Triangle::new(self.a.point, self.b.point, self.c.point)
    }

    /// The point at the coordinates `(s, t)` cached on this face.
    #[inline]
    pub fn cached_point(&self) -> Point<Real> {
        self.a.point + (self.b - self.a) * self.st[0] + (self.c - self.a) * self.st[1]
    }

    /// Tests if the edges of this face are nearly collinear.
    #[inline]
    pub fn is_collinear(&self) -> bool {
        utils::is_collinear(&self.a.point, &self.b.point, &self.c.point)
    }

    /// Tests if this face can be seen from `pt`, i.e., if `pt` is strictly in front of its
    /// plane.
    #[inline]
    pub fn is_visible_from(&self, pt: &Point<Real>) -> bool {
        let dir = utils::normalize_or_zero(&(pt - self.a.point));
        self.normal.dot(&dir) > 0.0
    }

    /// The edges `AB`, `BC`, and `CA` of this face.
    #[inline]
    pub fn edges(&self) -> [Edge; 3] {
        [
            Edge::new(self.a, self.b),
            Edge::new(self.b, self.c),
            Edge::new(self.c, self.a),
        ]
    }
}

/// An edge of a polytope face.
#[derive(Copy, Clone, Debug)]
pub struct Edge {
    /// The first endpoint.
    pub a: SupportPoint,
    /// The second endpoint.
    pub b: SupportPoint,
}

impl Edge {
    /// Creates an edge from its endpoints.
    #[inline]
    pub fn new(a: SupportPoint, b: SupportPoint) -> Self {
        Edge { a, b }
    }

    /// Tests if both edges have the same endpoints, in any order.
    ///
    /// Endpoints are compared by position with
    /// [`approx_eq_vector`](crate::utils::approx_eq_vector), not by indices. This relation is
    /// not transitive, which is why `Edge` does not implement `PartialEq`.
    pub fn coincides_with(&self, other: &Edge) -> bool {
        let same = |p: &SupportPoint, q: &SupportPoint| {
            utils::approx_eq_vector(&p.point.coords, &q.point.coords)
        };

        (same(&self.a, &other.a) && same(&self.b, &other.b))
            || (same(&self.a, &other.b) && same(&self.b, &other.a))
    }
}

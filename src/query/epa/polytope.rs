use crate::math::{Point, Real, Vector, COLLINEARITY_EPSILON, CONTAINMENT_BOUND};
use crate::query::epa::{Edge, SupportTriangle};
use crate::query::gjk::{Simplex, SupportPoint};
use crate::query::point;
use crate::utils;

/// The face of a polytope closest to the origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClosestFace {
    /// The index of the face in [`Polytope::faces`].
    pub face_id: usize,
    /// The point of the face closest to the origin.
    pub point: Point<Real>,
    /// The distance between the origin and `self.point`.
    pub distance: Real,
}

/// The boundary of the region removed from a polytope when it is expanded toward a new
/// vertex.
///
/// Every edge of a removed face is toggled: an edge shared by two removed faces is added then
/// removed, so only the edges bordering the kept faces remain.
#[derive(Clone, Debug, Default)]
pub struct Silhouette {
    edges: Vec<Edge>,
}

impl Silhouette {
    /// An empty silhouette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes the edge coinciding with `edge` if there is one, otherwise adds `edge`.
    pub fn toggle(&mut self, edge: Edge) {
        if let Some(i) = self.edges.iter().position(|e| e.coincides_with(&edge)) {
            let _ = self.edges.remove(i);
        } else {
            self.edges.push(edge);
        }
    }

    /// The edges of this silhouette.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// A triangulated convex polytope of the Minkowski difference of two vertex sets.
///
/// The polytope starts as a tetrahedron and grows one support point at a time. Face normals
/// are oriented away from the centroid of the initial tetrahedron, which stays inside the
/// polytope as it grows.
///
/// If the Minkowski difference is flat, the tetrahedron is flat too. Its plane must not
/// contain the origin, and all its faces are then oriented toward the origin. A flat polytope
/// is refined with [`Self::expand_flat`] instead of [`Self::expand`].
#[derive(Clone, Debug, Default)]
pub struct Polytope {
    vertices: Vec<SupportPoint>,
    faces: Vec<SupportTriangle>,
    centroid: Point<Real>,
    // Unit normal of the plane of a flat polytope, pointing away from the origin.
    plane_normal: Option<Vector<Real>>,
}

impl Polytope {
    /// Builds the four faces of the tetrahedron of a full simplex.
    ///
    /// Returns `None` if the simplex has less than four vertices, or if it is flat and its
    /// plane contains the origin.
    pub fn from_simplex(simplex: &Simplex) -> Option<Self> {
        let pts = simplex.points();

        if !simplex.is_full() {
            return None;
        }

        let mut polytope = Polytope {
            vertices: pts.to_vec(),
            ..Polytope::default()
        };

        if polytope.set_tetrahedron([pts[0], pts[1], pts[2], pts[3]]) {
            Some(polytope)
        } else {
            None
        }
    }

    // Replaces every face by the faces of the tetrahedron `pts`. Returns `false`, leaving
    // `self` unchanged, if `pts` is flat and its plane contains the origin.
    fn set_tetrahedron(&mut self, pts: [SupportPoint; 4]) -> bool {
        let n = utils::triangle_normal(&pts[0].point, &pts[1].point, &pts[2].point);
        let offset = n.dot(&pts[0].point.coords);

        let is_flat = n.dot(&(pts[3].point - pts[0].point)).abs() < COLLINEARITY_EPSILON;

        let plane_normal = if is_flat {
            if offset.abs() < COLLINEARITY_EPSILON {
                return false;
            }

            Some(n * offset.signum())
        } else {
            None
        };

        self.centroid = utils::center(pts.iter().map(|p| &p.point));
        self.plane_normal = plane_normal;

        let reference = self.orientation_point();
        self.faces = [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]]
            .iter()
            .map(|idx| SupportTriangle::new(pts[idx[0]], pts[idx[1]], pts[idx[2]], &reference))
            .collect();

        true
    }

    // The point face normals point away from. It lies behind the plane of a flat polytope,
    // on the side opposite to the origin.
    fn orientation_point(&self) -> Point<Real> {
        match self.plane_normal {
            Some(n) => self.centroid + n,
            None => self.centroid,
        }
    }

    /// Returns `true` if all the vertices of this polytope lie on a plane.
    #[inline]
    pub fn is_flat(&self) -> bool {
        self.plane_normal.is_some()
    }

    /// The support points inserted so far, including the ones of the initial simplex.
    ///
    /// Some of them may no longer be vertices of any face.
    #[inline]
    pub fn vertices(&self) -> &[SupportPoint] {
        &self.vertices
    }

    /// The faces of this polytope.
    #[inline]
    pub fn faces(&self) -> &[SupportTriangle] {
        &self.faces
    }

    /// The centroid of the tetrahedron this polytope was built from.
    ///
    /// It only changes when a flat polytope is refined with [`Self::expand_flat`].
    #[inline]
    pub fn centroid(&self) -> &Point<Real> {
        &self.centroid
    }

    /// Tests if a support point built from the same indices as `pt` was already inserted.
    #[inline]
    pub fn contains_vertex(&self, pt: &SupportPoint) -> bool {
        self.vertices.contains(pt)
    }

    /// Records a new support point.
    ///
    /// Returns `false`, and leaves the polytope unchanged, if it was already inserted.
    pub fn insert_vertex(&mut self, pt: SupportPoint) -> bool {
        if self.contains_vertex(&pt) {
            false
        } else {
            self.vertices.push(pt);
            true
        }
    }

    /// Tests if `pt` lies inside of this polytope.
    ///
    /// For each face, the signed distance from `pt` to the face plane is divided by the distance
    /// between `pt` and the first vertex of the face. The point is outside as soon as one of
    /// these ratios is smaller than `CONTAINMENT_BOUND`. Faces with a vertex exactly at `pt`
    /// are ignored.
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        for face in &self.faces {
            let dpt = face.a.point - pt;
            let len = dpt.norm();

            if len == 0.0 {
                continue;
            }

            if dpt.dot(face.normal()) / len < CONTAINMENT_BOUND {
                return false;
            }
        }

        true
    }

    /// Tests if the origin lies inside of this polytope.
    #[inline]
    pub fn contains_origin(&self) -> bool {
        self.contains_point(&Point::origin())
    }

    /// Finds the face closest to the origin.
    ///
    /// Nearly collinear faces are ignored. The coordinates of the closest point are cached on
    /// each face visited. Ties are resolved in favor of the first face. Returns `None` if no face
    /// could be projected on.
    pub fn closest_face_to_origin(&mut self) -> Option<ClosestFace> {
        let origin = Point::origin();
        let mut best: Option<ClosestFace> = None;

        for (face_id, face) in self.faces.iter_mut().enumerate() {
            if face.is_collinear() {
                continue;
            }

            let proj = match point::closest_point_on_triangle(
                &face.a.point,
                &face.b.point,
                &face.c.point,
                &origin,
            ) {
                Some(proj) => proj,
                None => continue,
            };

            *face = face.with_st(proj.st);
            let distance = proj.point.coords.norm();

            if best.map(|b| distance < b.distance).unwrap_or(true) {
                best = Some(ClosestFace {
                    face_id,
                    point: proj.point,
                    distance,
                });
            }
        }

        best
    }

    /// Grows this polytope so it includes `pt`.
    ///
    /// Every face visible from `pt` is removed, then the hole is closed with one new face per
    /// edge of its silhouette, each connecting that edge to `pt`. `pt` should already have been
    /// recorded with [`Self::insert_vertex`]. Returns the number of removed faces.
    pub fn expand(&mut self, pt: &SupportPoint) -> usize {
        let mut silhouette = Silhouette::new();
        let num_faces = self.faces.len();

        self.faces.retain(|face| {
            if face.is_visible_from(&pt.point) {
                for edge in face.edges() {
                    silhouette.toggle(edge);
                }
                false
            } else {
                true
            }
        });

        let removed = num_faces - self.faces.len();
        log::trace!(
            "Polytope expansion removed {} faces, silhouette of {} edges.",
            removed,
            silhouette.edges().len()
        );

        let reference = self.orientation_point();
        for edge in silhouette.edges() {
            self.faces.push(SupportTriangle::new(edge.a, edge.b, *pt, &reference));
        }

        removed
    }

    /// Refines a flat polytope toward `pt`.
    ///
    /// The faces are replaced by the four faces of the tetrahedron spanned by the face
    /// `face_id` and `pt`. This tetrahedron contains that face, so if it was the face closest
    /// to the origin, the closest point never moves away from the origin. If `pt` does not lie
    /// on the plane of the polytope, the polytope stops being flat.
    ///
    /// Returns `false`, leaving the polytope unchanged, if there is no face `face_id`.
    pub fn expand_flat(&mut self, face_id: usize, pt: &SupportPoint) -> bool {
        let face = match self.faces.get(face_id) {
            Some(face) => *face,
            None => return false,
        };

        let expanded = self.set_tetrahedron([face.a, face.b, face.c, *pt]);
        log::trace!(
            "Flat polytope refined toward a new vertex, still flat: {}.",
            self.is_flat()
        );

        expanded
    }
}

use crate::math::{Point, Real, Vector};

/// Computes the index of the support point of a cloud of points.
///
/// This is an exhaustive scan: the first point maximizing the dot product with `dir` wins.
#[inline]
pub fn point_cloud_support_point_id(dir: &Vector<Real>, points: &[Point<Real>]) -> usize {
    let mut best_pt = 0;
    let mut best_dot = points[0].coords.dot(dir);

    for i in 1..points.len() {
        let p = &points[i];
        let dot = p.coords.dot(dir);

        if dot > best_dot {
            best_dot = dot;
            best_pt = i;
        }
    }

    best_pt
}

/// Computes the support point of a cloud of points.
#[inline]
pub fn point_cloud_support_point(dir: &Vector<Real>, points: &[Point<Real>]) -> Point<Real> {
    points[point_cloud_support_point_id(dir, points)]
}

/// Computes the index of the support point of a cloud of points by greedy ascent on its
/// vertex-adjacency graph.
///
/// Starting from `start`, the search moves to the best neighbor with a strictly greater
/// dot product with `dir` until no neighbor improves, or until `max_steps` moves were made.
/// The result is exact only if the dot product is unimodal along the graph, which holds for
/// the edge graph of a convex polyhedron.
///
/// `neighbors(i)` must only yield valid indices into `points`.
pub fn hill_climb_support_point_id<'a, F, I>(
    dir: &Vector<Real>,
    points: &[Point<Real>],
    start: usize,
    max_steps: usize,
    neighbors: F,
) -> usize
where
    F: Fn(usize) -> I,
    I: IntoIterator<Item = &'a u32>,
{
    let mut best_pt = start;
    let mut best_dot = points[start].coords.dot(dir);

    for _ in 0..max_steps {
        let mut improved = None;

        for &adj in neighbors(best_pt) {
            let adj = adj as usize;
            let dot = points[adj].coords.dot(dir);

            if dot > best_dot {
                best_dot = dot;
                improved = Some(adj);
            }
        }

        match improved {
            Some(next) => best_pt = next,
            None => break,
        }
    }

    best_pt
}

use crate::math::{Point, Real};

/// Computes the geometric center (centroid) of a set of points.
///
/// All points are weighted equally. Returns the origin if `pts` is empty.
///
/// # Example
///
/// ```
/// use minkowski3d::utils::center;
/// use minkowski3d::math::Point;
///
/// let points = vec![
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(4.0, 0.0, 0.0),
///     Point::new(0.0, 4.0, 0.0),
///     Point::new(0.0, 0.0, 4.0),
/// ];
///
/// assert_eq!(center(&points), Point::new(1.0, 1.0, 1.0));
/// ```
#[inline]
pub fn center<'a, I>(pts: I) -> Point<Real>
where
    I: IntoIterator<Item = &'a Point<Real>>,
{
    let mut sum = Point::origin();
    let mut count = 0usize;

    for pt in pts {
        sum += pt.coords;
        count += 1;
    }

    if count == 0 {
        return sum;
    }

    sum * (1.0 / count as Real)
}

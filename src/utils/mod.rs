//! Various unsorted geometrical and logical operators.

pub use self::approx_eq_vector::{approx_eq_vector, normalize_or_zero};
pub use self::center::center;
pub use self::point_cloud_support_point::{
    hill_climb_support_point_id, point_cloud_support_point, point_cloud_support_point_id,
};
pub use self::triangle_normal::{is_collinear, triangle_normal};

mod approx_eq_vector;
mod center;
mod point_cloud_support_point;
mod triangle_normal;

//! The GJK/EPA distance query between convex vertex sets.

pub use self::gjk_epa::GjkEpa;
pub use self::options::{GjkEpaOptions, OptionsError};
pub use self::output::{
    CollisionPoint, GjkEpaOutput, GjkEpaResult, Separation, Termination, NO_DISTANCE,
};
pub use self::simplex::{Simplex, SimplexError};
pub use self::support_point::SupportPoint;

pub mod gjk_epa;
mod options;
mod output;
mod simplex;
mod support_point;

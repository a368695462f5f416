use crate::math::Real;

/// Indicates an invalid set of [`GjkEpaOptions`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum OptionsError {
    /// The refinement loop must be allowed at least one iteration.
    #[error("the maximum number of iterations must be at least 1.")]
    ZeroIterations,
    /// A tolerance is negative or NaN.
    #[error("the tolerance `{0}` must be a non-negative number.")]
    NegativeTolerance(&'static str),
}

/// Parameters of the [`GjkEpa`](crate::query::gjk::GjkEpa) distance query.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GjkEpaOptions {
    max_iterations: usize,
    precision: Real,
    manifold_tolerance: Real,
}

impl Default for GjkEpaOptions {
    fn default() -> Self {
        GjkEpaOptions {
            max_iterations: 100,
            precision: 1.0e-6,
            manifold_tolerance: 0.09,
        }
    }
}

impl GjkEpaOptions {
    /// Validates and builds a set of options.
    ///
    /// `precision` and `manifold_tolerance` are carried for callers that derive contact data
    /// from the query results. The query itself only depends on `max_iterations`.
    pub fn new(
        max_iterations: usize,
        precision: Real,
        manifold_tolerance: Real,
    ) -> Result<Self, OptionsError> {
        if max_iterations == 0 {
            return Err(OptionsError::ZeroIterations);
        }

        if precision.is_nan() || precision < 0.0 {
            return Err(OptionsError::NegativeTolerance("precision"));
        }

        if manifold_tolerance.is_nan() || manifold_tolerance < 0.0 {
            return Err(OptionsError::NegativeTolerance("manifold_tolerance"));
        }

        Ok(GjkEpaOptions {
            max_iterations,
            precision,
            manifold_tolerance,
        })
    }

    /// The maximum number of expansions of the polytope.
    #[inline]
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// The numerical precision reported to downstream contact generation.
    #[inline]
    pub fn precision(&self) -> Real {
        self.precision
    }

    /// The distance tolerance reported to downstream contact-manifold generation.
    #[inline]
    pub fn manifold_tolerance(&self) -> Real {
        self.manifold_tolerance
    }
}

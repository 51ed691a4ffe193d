//! Derivative check configuration types.

use num_traits::Float;

use crate::types::VerificationError;

/// Configuration for finite-difference derivative checks.
///
/// A check passes when
/// `|analytic - numeric| <= abs_tolerance + rel_tolerance * |analytic|`.
///
/// # Type Parameters
///
/// * `T` - Floating-point type of the probed functor (e.g., `f64`)
///
/// # Example
///
/// ```
/// use functor_core::verify::CheckConfig;
///
/// // Defaults scale with the machine epsilon of the type
/// let config: CheckConfig<f64> = CheckConfig::default();
/// assert!(config.step < 1e-4);
///
/// // Custom configuration
/// let custom = CheckConfig::new(1e-5, 1e-7, 1e-7).unwrap();
/// assert_eq!(custom.step, 1e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckConfig<T: Float> {
    /// Central-difference step `h`.
    pub step: T,

    /// Absolute part of the allowed deviation.
    pub abs_tolerance: T,

    /// Relative part of the allowed deviation, scaled by `|analytic|`.
    pub rel_tolerance: T,
}

impl<T: Float> Default for CheckConfig<T> {
    /// Default values, with `ε` the machine epsilon of `T`:
    /// - `step`: `ε^(1/3)`, which balances truncation and rounding error
    /// - `abs_tolerance`, `rel_tolerance`: `ε^(1/3)`
    fn default() -> Self {
        let cbrt_eps = T::epsilon().cbrt();
        Self {
            step: cbrt_eps,
            abs_tolerance: cbrt_eps,
            rel_tolerance: cbrt_eps,
        }
    }
}

impl<T: Float> CheckConfig<T> {
    /// Create a new configuration with specified values.
    ///
    /// # Errors
    ///
    /// Returns `VerificationError::InvalidConfig` if `step` is not a positive
    /// finite number or a tolerance is negative or non-finite.
    pub fn new(step: T, abs_tolerance: T, rel_tolerance: T) -> Result<Self, VerificationError> {
        if !(step > T::zero() && step.is_finite()) {
            return Err(VerificationError::InvalidConfig(
                "step must be positive and finite".to_string(),
            ));
        }
        if !(abs_tolerance >= T::zero() && abs_tolerance.is_finite()) {
            return Err(VerificationError::InvalidConfig(
                "abs_tolerance must be non-negative and finite".to_string(),
            ));
        }
        if !(rel_tolerance >= T::zero() && rel_tolerance.is_finite()) {
            return Err(VerificationError::InvalidConfig(
                "rel_tolerance must be non-negative and finite".to_string(),
            ));
        }
        Ok(Self {
            step,
            abs_tolerance,
            rel_tolerance,
        })
    }

    /// Tight tolerances (`ε^(1/2)`) for formulas expected to be exact.
    pub fn strict() -> Self {
        let sqrt_eps = T::epsilon().sqrt();
        Self {
            step: T::epsilon().cbrt(),
            abs_tolerance: sqrt_eps,
            rel_tolerance: sqrt_eps,
        }
    }

    /// Loose tolerances (`ε^(1/4)`) for probes near large curvature.
    pub fn relaxed() -> Self {
        let quarter_eps = T::epsilon().sqrt().sqrt();
        Self {
            step: T::epsilon().cbrt(),
            abs_tolerance: quarter_eps,
            rel_tolerance: quarter_eps,
        }
    }

    /// Allowed deviation for an analytic derivative value.
    #[inline]
    pub fn bound(&self, analytic: T) -> T {
        self.abs_tolerance + self.rel_tolerance * analytic.abs()
    }
}

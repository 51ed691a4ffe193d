//! Error types for structured error handling.
//!
//! Functor evaluation itself never fails. Errors only arise at the edges:
//! - `FunctorError`: converting a captured constant into the working scalar type
//! - `VerificationError`: finite-difference checks of derivative formulas

use thiserror::Error;

/// Errors from constructing a captured-constant functor.
///
/// # Examples
/// ```
/// use functor_core::types::FunctorError;
///
/// let err = FunctorError::ConstantOverflow { value: 1e300, target: "f32" };
/// assert_eq!(format!("{}", err), "Captured constant 1e300 overflows f32");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FunctorError {
    /// The constant has no representation in the target type.
    #[error("Captured constant is not representable as {target}")]
    ConstantConversion {
        /// Target scalar type name
        target: &'static str,
    },

    /// A finite constant became infinite after conversion.
    #[error("Captured constant {value:e} overflows {target}")]
    ConstantOverflow {
        /// Original value, widened to f64
        value: f64,
        /// Target scalar type name
        target: &'static str,
    },
}

/// Errors from verifying analytic derivatives against finite differences.
///
/// # Variants
/// - `DerivativeMismatch`: analytic and numeric derivatives disagree
/// - `NonFiniteProbe`: a probe produced a non-finite value
/// - `InvalidConfig`: the check configuration is unusable
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VerificationError {
    /// Analytic derivative outside tolerance of the central difference.
    #[error(
        "{operation}: analytic d/d{operand} = {analytic} differs from finite difference {numeric} (tolerance {tolerance})"
    )]
    DerivativeMismatch {
        /// Operation name
        operation: &'static str,
        /// Operand differentiated against (`a` or `b`)
        operand: &'static str,
        /// Analytic derivative
        analytic: f64,
        /// Central-difference estimate
        numeric: f64,
        /// Allowed absolute deviation at this point
        tolerance: f64,
    },

    /// A value or derivative at the probe point was infinite or NaN.
    #[error("{operation}: non-finite value while probing operand {operand}")]
    NonFiniteProbe {
        /// Operation name
        operation: &'static str,
        /// Operand probed (`"a, b"` for a binary primal value)
        operand: &'static str,
    },

    /// Invalid step size or tolerance.
    #[error("Invalid check configuration: {0}")]
    InvalidConfig(String),
}

//! Finite-difference verification of analytic derivatives.
//!
//! Compares each functor's derivative formula against a central difference
//! of its own primal evaluation:
//! ```text
//! f'(x) ≈ (f(x + h) - f(x - h)) / (2h)
//! ```
//!
//! Probes should be taken away from singularities (e.g. `b` near zero for
//! division), where the central difference is meaningless.
//!
//! # Usage
//!
//! ```rust
//! use functor_core::ops::{DivOp, ScalarDivIntoOp};
//! use functor_core::verify::{check_binary, check_unary, CheckConfig};
//!
//! let config = CheckConfig::<f64>::default();
//! let report = check_binary(&DivOp, 3.0, 2.0, &config).unwrap();
//! assert_eq!(report.operation, "div");
//!
//! check_unary(&ScalarDivIntoOp::<f64>::new(6.0), 2.0, &config).unwrap();
//! ```

mod config;

pub use config::CheckConfig;

use num_traits::Float;
use tracing::{debug, warn};

use crate::traits::{BinaryFunctor, UnaryFunctor};
use crate::types::VerificationError;

/// Outcome of a successful derivative check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivativeReport {
    /// Operation name
    pub operation: &'static str,
    /// Largest `|analytic - numeric|` over the checked partials
    pub max_abs_error: f64,
}

/// Central-difference derivative estimate of `f` at `x` with step `h`.
///
/// # Examples
///
/// ```rust
/// use functor_core::verify::central_difference;
///
/// let grad = central_difference(|x: f64| x * x, 3.0, 1e-6);
/// assert!((grad - 6.0).abs() < 1e-6);
/// ```
#[inline]
pub fn central_difference<T, F>(f: F, x: T, h: T) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    (f(x + h) - f(x - h)) / (h + h)
}

/// Check `d_da` of a unary functor at `a`.
///
/// # Errors
///
/// - `VerificationError::NonFiniteProbe` if the value, the analytic
///   derivative or the estimate is not finite
/// - `VerificationError::DerivativeMismatch` if the estimate is out of tolerance
pub fn check_unary<T, U>(
    op: &U,
    a: T,
    config: &CheckConfig<T>,
) -> Result<DerivativeReport, VerificationError>
where
    T: Float,
    U: UnaryFunctor<T>,
{
    let operation = op.name();
    if !op.eval(a).is_finite() {
        warn!(operation, "non-finite primal value at probe point");
        return Err(VerificationError::NonFiniteProbe {
            operation,
            operand: "a",
        });
    }

    let analytic = op.d_da(a);
    let numeric = central_difference(|x| op.eval(x), a, config.step);
    let error = compare(operation, "a", analytic, numeric, config)?;

    Ok(DerivativeReport {
        operation,
        max_abs_error: error,
    })
}

/// Check `d_da` and `d_db` of a binary functor at `(a, b)`.
///
/// # Errors
///
/// Same as [`check_unary`]; the first failing partial is reported.
pub fn check_binary<T, B>(
    op: &B,
    a: T,
    b: T,
    config: &CheckConfig<T>,
) -> Result<DerivativeReport, VerificationError>
where
    T: Float,
    B: BinaryFunctor<T>,
{
    let operation = op.name();
    if !op.eval(a, b).is_finite() {
        warn!(operation, "non-finite primal value at probe point");
        return Err(VerificationError::NonFiniteProbe {
            operation,
            operand: "a, b",
        });
    }

    let numeric_a = central_difference(|x| op.eval(x, b), a, config.step);
    let error_a = compare(operation, "a", op.d_da(a, b), numeric_a, config)?;

    let numeric_b = central_difference(|x| op.eval(a, x), b, config.step);
    let error_b = compare(operation, "b", op.d_db(a, b), numeric_b, config)?;

    Ok(DerivativeReport {
        operation,
        max_abs_error: error_a.max(error_b),
    })
}

/// Compare one analytic partial with its estimate, returning `|error|`.
fn compare<T: Float>(
    operation: &'static str,
    operand: &'static str,
    analytic: T,
    numeric: T,
    config: &CheckConfig<T>,
) -> Result<f64, VerificationError> {
    let analytic_f64 = analytic.to_f64().unwrap_or(f64::NAN);
    let numeric_f64 = numeric.to_f64().unwrap_or(f64::NAN);

    if !analytic.is_finite() || !numeric.is_finite() {
        warn!(
            operation,
            operand,
            analytic = analytic_f64,
            numeric = numeric_f64,
            "non-finite derivative at probe point"
        );
        return Err(VerificationError::NonFiniteProbe { operation, operand });
    }

    let error = (analytic - numeric).abs();
    let bound = config.bound(analytic);
    let error_f64 = error.to_f64().unwrap_or(f64::NAN);

    if error > bound {
        warn!(
            operation,
            operand,
            analytic = analytic_f64,
            numeric = numeric_f64,
            error = error_f64,
            "derivative mismatch"
        );
        return Err(VerificationError::DerivativeMismatch {
            operation,
            operand,
            analytic: analytic_f64,
            numeric: numeric_f64,
            tolerance: bound.to_f64().unwrap_or(f64::NAN),
        });
    }

    debug!(
        operation,
        operand,
        analytic = analytic_f64,
        error = error_f64,
        "derivative check passed"
    );
    Ok(error_f64)
}

//! Capability traits for operands and functors.
//!
//! This module defines:
//! - `Scalar`: the arithmetic capability set every operand type must provide
//! - `BinaryFunctor`: primal value plus one partial derivative per operand
//! - `UnaryFunctor`: primal value plus one derivative
//!
//! All functors are used through static dispatch. The engine picks the
//! concrete functor type (or an enum from [`crate::ops::kind`]) at the point
//! it records an operation.

use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::One;

/// Numeric type usable as a functor operand.
///
/// Requires the four arithmetic operators, negation and a multiplicative
/// identity. Built-in `f32` and `f64` implement it, as do num-dual's dual
/// numbers (with the `num-dual-mode` feature), so functors can be evaluated
/// on an active type recursively.
///
/// # Fast Path Dispatch
///
/// [`Scalar::add_primal`] is the single hook for an alternate addition
/// strategy. The default is plain `self + rhs`; `f32` and `f64` route through
/// [`crate::simd`]. The choice is fixed per type at compile time.
///
/// # Examples
/// ```
/// use functor_core::traits::Scalar;
///
/// fn double<S: Scalar>(x: S) -> S {
///     x.add_primal(x)
/// }
///
/// assert_eq!(double(1.25_f64), 2.5);
/// assert_eq!(double(1.25_f32), 2.5);
/// ```
pub trait Scalar:
    Copy
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Primal addition used by the add functors.
    ///
    /// Implementations must return a value bit-identical to `self + rhs`.
    #[inline]
    fn add_primal(self, rhs: Self) -> Self {
        self + rhs
    }
}

impl Scalar for f32 {
    #[inline]
    fn add_primal(self, rhs: Self) -> Self {
        crate::simd::add_f32(self, rhs)
    }
}

impl Scalar for f64 {
    #[inline]
    fn add_primal(self, rhs: Self) -> Self {
        crate::simd::add_f64(self, rhs)
    }
}

/// Functor for a two-operand operation `f(a, b)`.
///
/// `d_da` and `d_db` must be called with the same operands as the matching
/// `eval`; functors never cache operand values.
pub trait BinaryFunctor<S> {
    /// Primal value `f(a, b)`.
    fn eval(&self, a: S, b: S) -> S;

    /// Partial derivative `∂f/∂a` at `(a, b)`.
    fn d_da(&self, a: S, b: S) -> S;

    /// Partial derivative `∂f/∂b` at `(a, b)`.
    fn d_db(&self, a: S, b: S) -> S;

    /// Both partial derivatives `(∂f/∂a, ∂f/∂b)` at `(a, b)`.
    #[inline]
    fn partials(&self, a: S, b: S) -> (S, S)
    where
        S: Copy,
    {
        (self.d_da(a, b), self.d_db(a, b))
    }

    /// Human-readable operation name used in diagnostics.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Functor for a one-operand operation `f(a)`.
pub trait UnaryFunctor<S> {
    /// Primal value `f(a)`.
    fn eval(&self, a: S) -> S;

    /// Derivative `df/da` at `a`.
    fn d_da(&self, a: S) -> S;

    /// Human-readable operation name used in diagnostics.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

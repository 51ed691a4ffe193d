//! Dual number type integration for automatic differentiation.
//!
//! num-dual's `Dual<T, F>` carries a value and a tangent. Implementing
//! [`Scalar`] for it lets every functor run on dual numbers directly, which
//! is how an active type uses the functor layer recursively: evaluating
//! `DivOp.d_db` on a `Dual64` seeded in `b` yields the second derivative
//! `∂²(a/b)/∂b²` in the tangent.
//!
//! Because `T` may itself be a dual number, nesting works to any order.
//!
//! ## Usage
//!
//! ```rust
//! use functor_core::ops::ProdOp;
//! use functor_core::traits::BinaryFunctor;
//! use functor_core::types::dual::DualNumber;
//!
//! let a = DualNumber::new(3.0, 1.0); // seed a
//! let b = DualNumber::from(4.0);
//!
//! let value = ProdOp.eval(a, b);
//! assert_eq!(value.re, 12.0);
//! assert_eq!(value.eps, ProdOp.d_da(3.0_f64, 4.0));
//! ```

use num_dual::{Dual, DualNum};
use num_traits::Float;

use crate::traits::Scalar;

/// Type alias for num-dual's Dual64 (f64-based dual numbers).
///
/// - `re`: Real part (function value)
/// - `eps`: Dual part (derivative)
pub type DualNumber = num_dual::Dual64;

impl<T, F> Scalar for Dual<T, F>
where
    T: DualNum<F> + Copy,
    F: Float,
    Dual<T, F>: DualNum<F>,
{
}

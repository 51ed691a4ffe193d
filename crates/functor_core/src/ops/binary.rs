//! Binary arithmetic functors.
//!
//! | Functor  | `eval(a, b)` | `d_da(a, b)` | `d_db(a, b)`   |
//! |----------|--------------|--------------|----------------|
//! | `AddOp`  | `a + b`      | `1`          | `1`            |
//! | `SubOp`  | `a - b`      | `1`          | `-1`           |
//! | `ProdOp` | `a * b`      | `b`          | `a`            |
//! | `DivOp`  | `a / b`      | `1 / b`      | `-a / (b * b)` |
//!
//! `DivOp` does not check `b`. At `b == 0` the value and both partials are
//! whatever IEEE 754 division produces (signed infinity or NaN).

use super::kind::{BinaryFamily, BinaryOpKind};
use crate::traits::{BinaryFunctor, Scalar};

/// Addition `a + b`.
///
/// The primal goes through [`Scalar::add_primal`], which selects the
/// single-lane vector path for `f32`/`f64` when it is compiled in.
///
/// # Examples
/// ```
/// use functor_core::ops::AddOp;
/// use functor_core::traits::BinaryFunctor;
///
/// assert_eq!(AddOp.eval(2.0_f64, 3.0), 5.0);
/// assert_eq!(AddOp.partials(2.0_f64, 3.0), (1.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AddOp;

impl<S: Scalar> BinaryFunctor<S> for AddOp {
    #[inline]
    fn eval(&self, a: S, b: S) -> S {
        a.add_primal(b)
    }

    #[inline]
    fn d_da(&self, _a: S, _b: S) -> S {
        S::one()
    }

    #[inline]
    fn d_db(&self, _a: S, _b: S) -> S {
        S::one()
    }

    fn name(&self) -> &'static str {
        BinaryOpKind::Add.name()
    }
}

impl BinaryFamily for AddOp {
    const KIND: BinaryOpKind = BinaryOpKind::Add;
}

/// Subtraction `a - b`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SubOp;

impl<S: Scalar> BinaryFunctor<S> for SubOp {
    #[inline]
    fn eval(&self, a: S, b: S) -> S {
        a - b
    }

    #[inline]
    fn d_da(&self, _a: S, _b: S) -> S {
        S::one()
    }

    #[inline]
    fn d_db(&self, _a: S, _b: S) -> S {
        -S::one()
    }

    fn name(&self) -> &'static str {
        BinaryOpKind::Sub.name()
    }
}

impl BinaryFamily for SubOp {
    const KIND: BinaryOpKind = BinaryOpKind::Sub;
}

/// Multiplication `a * b`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ProdOp;

impl<S: Scalar> BinaryFunctor<S> for ProdOp {
    #[inline]
    fn eval(&self, a: S, b: S) -> S {
        a * b
    }

    #[inline]
    fn d_da(&self, _a: S, b: S) -> S {
        b
    }

    #[inline]
    fn d_db(&self, a: S, _b: S) -> S {
        a
    }

    fn name(&self) -> &'static str {
        BinaryOpKind::Prod.name()
    }
}

impl BinaryFamily for ProdOp {
    const KIND: BinaryOpKind = BinaryOpKind::Prod;
}

/// Division `a / b`.
///
/// # Examples
/// ```
/// use functor_core::ops::DivOp;
/// use functor_core::traits::BinaryFunctor;
///
/// assert_eq!(DivOp.eval(1.0_f64, 0.0), f64::INFINITY);
/// assert_eq!(DivOp.eval(-1.0_f64, 0.0), f64::NEG_INFINITY);
/// assert!(DivOp.eval(0.0_f64, 0.0).is_nan());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DivOp;

impl<S: Scalar> BinaryFunctor<S> for DivOp {
    #[inline]
    fn eval(&self, a: S, b: S) -> S {
        a / b
    }

    #[inline]
    fn d_da(&self, _a: S, b: S) -> S {
        S::one() / b
    }

    #[inline]
    fn d_db(&self, a: S, b: S) -> S {
        -a / (b * b)
    }

    fn name(&self) -> &'static str {
        BinaryOpKind::Div.name()
    }
}

impl BinaryFamily for DivOp {
    const KIND: BinaryOpKind = BinaryOpKind::Div;
}

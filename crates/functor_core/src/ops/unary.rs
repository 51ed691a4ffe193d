//! Unary negation functor.

use super::kind::UnaryOpKind;
use crate::traits::{Scalar, UnaryFunctor};

/// Negation `-a`, with derivative `-1` everywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NegateOp;

impl<S: Scalar> UnaryFunctor<S> for NegateOp {
    #[inline]
    fn eval(&self, a: S) -> S {
        -a
    }

    #[inline]
    fn d_da(&self, _a: S) -> S {
        -S::one()
    }

    fn name(&self) -> &'static str {
        UnaryOpKind::Negate.name()
    }
}

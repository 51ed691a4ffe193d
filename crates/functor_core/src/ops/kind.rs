//! Enum-dispatched operation families.
//!
//! An engine that records operations on a tape needs to store *which*
//! formula a node uses without storing a type. These enums name every
//! functor family and evaluate it by delegating to the zero-sized functors,
//! so the formulas are defined once in [`super::binary`] and
//! [`super::unary`].
//!
//! `ScalarOpKind` plus the captured constant is the runtime counterpart of
//! [`super::ScalarOp`].

use super::binary::{AddOp, DivOp, ProdOp, SubOp};
use super::unary::NegateOp;
use crate::traits::{BinaryFunctor, Scalar, UnaryFunctor};

/// Compile-time link from a binary functor type to its [`BinaryOpKind`].
pub trait BinaryFamily {
    /// Family of the implementing functor.
    const KIND: BinaryOpKind;
}

/// Binary arithmetic operation family.
///
/// # Examples
/// ```
/// use functor_core::ops::BinaryOpKind;
///
/// let (da, db) = BinaryOpKind::Prod.partials(3.0_f64, 4.0);
/// assert_eq!((da, db), (4.0, 3.0));
/// assert!(BinaryOpKind::Prod.is_commutative());
/// assert!(!BinaryOpKind::Div.is_commutative());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOpKind {
    /// `a + b`
    Add,
    /// `a - b`
    Sub,
    /// `a * b`
    Prod,
    /// `a / b`
    Div,
}

impl BinaryOpKind {
    /// All binary families.
    pub const ALL: [BinaryOpKind; 4] = [
        BinaryOpKind::Add,
        BinaryOpKind::Sub,
        BinaryOpKind::Prod,
        BinaryOpKind::Div,
    ];

    /// Short lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            BinaryOpKind::Add => "add",
            BinaryOpKind::Sub => "sub",
            BinaryOpKind::Prod => "prod",
            BinaryOpKind::Div => "div",
        }
    }

    /// Returns true if `f(a, b) == f(b, a)`.
    #[inline]
    pub fn is_commutative(&self) -> bool {
        matches!(self, BinaryOpKind::Add | BinaryOpKind::Prod)
    }

    /// Primal value `f(a, b)`.
    #[inline]
    pub fn eval<S: Scalar>(&self, a: S, b: S) -> S {
        match self {
            BinaryOpKind::Add => AddOp.eval(a, b),
            BinaryOpKind::Sub => SubOp.eval(a, b),
            BinaryOpKind::Prod => ProdOp.eval(a, b),
            BinaryOpKind::Div => DivOp.eval(a, b),
        }
    }

    /// Partial derivative `∂f/∂a`.
    #[inline]
    pub fn d_da<S: Scalar>(&self, a: S, b: S) -> S {
        match self {
            BinaryOpKind::Add => AddOp.d_da(a, b),
            BinaryOpKind::Sub => SubOp.d_da(a, b),
            BinaryOpKind::Prod => ProdOp.d_da(a, b),
            BinaryOpKind::Div => DivOp.d_da(a, b),
        }
    }

    /// Partial derivative `∂f/∂b`.
    #[inline]
    pub fn d_db<S: Scalar>(&self, a: S, b: S) -> S {
        match self {
            BinaryOpKind::Add => AddOp.d_db(a, b),
            BinaryOpKind::Sub => SubOp.d_db(a, b),
            BinaryOpKind::Prod => ProdOp.d_db(a, b),
            BinaryOpKind::Div => DivOp.d_db(a, b),
        }
    }

    /// Both partials `(∂f/∂a, ∂f/∂b)`.
    #[inline]
    pub fn partials<S: Scalar>(&self, a: S, b: S) -> (S, S) {
        (self.d_da(a, b), self.d_db(a, b))
    }
}

impl<S: Scalar> BinaryFunctor<S> for BinaryOpKind {
    #[inline]
    fn eval(&self, a: S, b: S) -> S {
        BinaryOpKind::eval(self, a, b)
    }

    #[inline]
    fn d_da(&self, a: S, b: S) -> S {
        BinaryOpKind::d_da(self, a, b)
    }

    #[inline]
    fn d_db(&self, a: S, b: S) -> S {
        BinaryOpKind::d_db(self, a, b)
    }

    fn name(&self) -> &'static str {
        BinaryOpKind::name(self)
    }
}

/// Unary operation family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOpKind {
    /// `-a`
    Negate,
}

impl UnaryOpKind {
    /// All unary families.
    pub const ALL: [UnaryOpKind; 1] = [UnaryOpKind::Negate];

    /// Short lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            UnaryOpKind::Negate => "negate",
        }
    }

    /// Primal value `f(a)`.
    #[inline]
    pub fn eval<S: Scalar>(&self, a: S) -> S {
        match self {
            UnaryOpKind::Negate => NegateOp.eval(a),
        }
    }

    /// Derivative `df/da`.
    #[inline]
    pub fn d_da<S: Scalar>(&self, a: S) -> S {
        match self {
            UnaryOpKind::Negate => NegateOp.d_da(a),
        }
    }
}

impl<S: Scalar> UnaryFunctor<S> for UnaryOpKind {
    #[inline]
    fn eval(&self, a: S) -> S {
        UnaryOpKind::eval(self, a)
    }

    #[inline]
    fn d_da(&self, a: S) -> S {
        UnaryOpKind::d_da(self, a)
    }

    fn name(&self) -> &'static str {
        UnaryOpKind::name(self)
    }
}

/// Binary operation with one operand captured as constant `k`.
///
/// Subtraction and division are not commutative and so appear twice:
/// `SubFrom`/`DivInto` hold `k` on the left, `Sub`/`Div` on the right.
///
/// # Examples
/// ```
/// use functor_core::ops::ScalarOpKind;
///
/// // k / a with k = 6
/// assert_eq!(ScalarOpKind::DivInto.eval(6.0_f64, 2.0), 3.0);
/// assert_eq!(ScalarOpKind::DivInto.d_da(6.0_f64, 2.0), -1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScalarOpKind {
    /// `a + k`
    Add,
    /// `a * k`
    Prod,
    /// `k - a`
    SubFrom,
    /// `a - k`
    Sub,
    /// `k / a`
    DivInto,
    /// `a / k`
    Div,
}

impl ScalarOpKind {
    /// All captured-constant families.
    pub const ALL: [ScalarOpKind; 6] = [
        ScalarOpKind::Add,
        ScalarOpKind::Prod,
        ScalarOpKind::SubFrom,
        ScalarOpKind::Sub,
        ScalarOpKind::DivInto,
        ScalarOpKind::Div,
    ];

    /// Family obtained by fixing one operand of `op`.
    ///
    /// For the commutative families the position does not matter.
    pub fn bind(op: BinaryOpKind, captures_lhs: bool) -> Self {
        match (op, captures_lhs) {
            (BinaryOpKind::Add, _) => ScalarOpKind::Add,
            (BinaryOpKind::Prod, _) => ScalarOpKind::Prod,
            (BinaryOpKind::Sub, true) => ScalarOpKind::SubFrom,
            (BinaryOpKind::Sub, false) => ScalarOpKind::Sub,
            (BinaryOpKind::Div, true) => ScalarOpKind::DivInto,
            (BinaryOpKind::Div, false) => ScalarOpKind::Div,
        }
    }

    /// Underlying binary family.
    pub fn binary(&self) -> BinaryOpKind {
        match self {
            ScalarOpKind::Add => BinaryOpKind::Add,
            ScalarOpKind::Prod => BinaryOpKind::Prod,
            ScalarOpKind::SubFrom | ScalarOpKind::Sub => BinaryOpKind::Sub,
            ScalarOpKind::DivInto | ScalarOpKind::Div => BinaryOpKind::Div,
        }
    }

    /// Returns true if `k` is the left operand.
    pub fn captures_lhs(&self) -> bool {
        matches!(self, ScalarOpKind::SubFrom | ScalarOpKind::DivInto)
    }

    /// Short lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            ScalarOpKind::Add => "scalar_add",
            ScalarOpKind::Prod => "scalar_prod",
            ScalarOpKind::SubFrom => "scalar_sub_from",
            ScalarOpKind::Sub => "scalar_sub",
            ScalarOpKind::DivInto => "scalar_div_into",
            ScalarOpKind::Div => "scalar_div",
        }
    }

    /// Primal value at free operand `a` with captured constant `k`.
    #[inline]
    pub fn eval<S: Scalar>(&self, k: S, a: S) -> S {
        if self.captures_lhs() {
            self.binary().eval(k, a)
        } else {
            self.binary().eval(a, k)
        }
    }

    /// Derivative with respect to the free operand `a`.
    #[inline]
    pub fn d_da<S: Scalar>(&self, k: S, a: S) -> S {
        if self.captures_lhs() {
            self.binary().d_db(k, a)
        } else {
            self.binary().d_da(a, k)
        }
    }
}

//! Binary operations with one operand captured as a constant.
//!
//! A binary operation whose other operand is known at the point of use is a
//! unary functor over the remaining operand. [`ScalarOp`] stores the captured
//! constant `k` together with the binary functor and the position `k` takes:
//!
//! | Alias              | `eval(a)` | `d_da(a)`      |
//! |--------------------|-----------|----------------|
//! | `ScalarAddOp`      | `a + k`   | `1`            |
//! | `ScalarProdOp`     | `a * k`   | `k`            |
//! | `ScalarSubFromOp`  | `k - a`   | `-1`           |
//! | `ScalarSubOp`      | `a - k`   | `1`            |
//! | `ScalarDivIntoOp`  | `k / a`   | `-k / (a * a)` |
//! | `ScalarDivOp`      | `a / k`   | `1 / k`        |
//!
//! The derivative is the binary functor's partial with respect to the free
//! operand, so every formula lives in [`super::binary`] only.

use std::marker::PhantomData;

use num_traits::{Float, NumCast, ToPrimitive};

use super::binary::{AddOp, DivOp, ProdOp, SubOp};
use super::kind::{BinaryFamily, ScalarOpKind};
use crate::traits::{BinaryFunctor, Scalar, UnaryFunctor};
use crate::types::FunctorError;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Lhs {}
    impl Sealed for super::Rhs {}
}

/// Position the captured constant takes in the binary operation.
pub trait OperandPosition: sealed::Sealed {
    /// `true` when the constant is the left operand (`k op a`).
    const CAPTURES_LHS: bool;

    /// Primal value of the bound operation at the free operand `a`.
    fn eval<S, O: BinaryFunctor<S>>(op: &O, k: S, a: S) -> S;

    /// Derivative of the bound operation with respect to the free operand `a`.
    fn d_da<S, O: BinaryFunctor<S>>(op: &O, k: S, a: S) -> S;
}

/// Constant on the left: `k op a`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Lhs;

/// Constant on the right: `a op k`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rhs;

impl OperandPosition for Lhs {
    const CAPTURES_LHS: bool = true;

    #[inline]
    fn eval<S, O: BinaryFunctor<S>>(op: &O, k: S, a: S) -> S {
        op.eval(k, a)
    }

    #[inline]
    fn d_da<S, O: BinaryFunctor<S>>(op: &O, k: S, a: S) -> S {
        op.d_db(k, a)
    }
}

impl OperandPosition for Rhs {
    const CAPTURES_LHS: bool = false;

    #[inline]
    fn eval<S, O: BinaryFunctor<S>>(op: &O, k: S, a: S) -> S {
        op.eval(a, k)
    }

    #[inline]
    fn d_da<S, O: BinaryFunctor<S>>(op: &O, k: S, a: S) -> S {
        op.d_da(a, k)
    }
}

/// Binary functor `O` with one operand fixed to a captured constant.
///
/// The constant is converted to `S` once, at construction, and never
/// changes afterwards.
///
/// # Type Parameters
///
/// * `S` - Working scalar type
/// * `O` - Binary functor (`AddOp`, `SubOp`, `ProdOp`, `DivOp`)
/// * `P` - Constant position, [`Lhs`] or [`Rhs`]
///
/// # Examples
///
/// ```
/// use functor_core::ops::{ScalarAddOp, ScalarDivIntoOp};
/// use functor_core::traits::UnaryFunctor;
///
/// let shift = ScalarAddOp::<f64>::new(3.0);
/// assert_eq!(shift.eval(2.0), 5.0);
/// assert_eq!(shift.d_da(2.0), 1.0);
///
/// let reciprocal = ScalarDivIntoOp::<f64>::new(6.0_f32);
/// assert_eq!(reciprocal.eval(2.0), 3.0);
/// assert_eq!(reciprocal.d_da(2.0), -1.5);
/// ```
///
/// Equality compares the operation family only, never the captured constant:
///
/// ```
/// use functor_core::ops::ScalarAddOp;
///
/// assert_eq!(ScalarAddOp::<f64>::new(1.0), ScalarAddOp::<f64>::new(2.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScalarOp<S, O, P> {
    k: S,
    op: O,
    position: PhantomData<P>,
}

/// `a + k`
pub type ScalarAddOp<S> = ScalarOp<S, AddOp, Rhs>;
/// `a * k`
pub type ScalarProdOp<S> = ScalarOp<S, ProdOp, Rhs>;
/// `k - a`
pub type ScalarSubFromOp<S> = ScalarOp<S, SubOp, Lhs>;
/// `a - k`
pub type ScalarSubOp<S> = ScalarOp<S, SubOp, Rhs>;
/// `k / a`
pub type ScalarDivIntoOp<S> = ScalarOp<S, DivOp, Lhs>;
/// `a / k`
pub type ScalarDivOp<S> = ScalarOp<S, DivOp, Rhs>;

impl<S, O: Default, P: OperandPosition> ScalarOp<S, O, P> {
    /// Captures `k` through a lossless conversion into `S`.
    #[inline]
    pub fn new<T: Into<S>>(k: T) -> Self {
        Self {
            k: k.into(),
            op: O::default(),
            position: PhantomData,
        }
    }

    /// Captures `k` through a numeric cast into `S`.
    ///
    /// Accepts any primitive numeric type, including narrowing casts such as
    /// `f64 -> f32`. Non-finite inputs are carried over unchanged.
    ///
    /// # Errors
    ///
    /// - `FunctorError::ConstantConversion` if the cast is not defined for `k`
    /// - `FunctorError::ConstantOverflow` if a finite `k` becomes infinite in `S`
    ///
    /// # Examples
    ///
    /// ```
    /// use functor_core::ops::ScalarProdOp;
    /// use functor_core::traits::UnaryFunctor;
    ///
    /// let scale = ScalarProdOp::<f32>::try_new(0.5_f64).unwrap();
    /// assert_eq!(scale.eval(3.0), 1.5);
    ///
    /// assert!(ScalarProdOp::<f32>::try_new(1e300_f64).is_err());
    /// ```
    pub fn try_new<T: ToPrimitive>(k: T) -> Result<Self, FunctorError>
    where
        S: Float,
    {
        let target = std::any::type_name::<S>();
        let source = k.to_f64();
        let converted =
            <S as NumCast>::from(k).ok_or(FunctorError::ConstantConversion { target })?;

        if let Some(value) = source {
            if value.is_finite() && !converted.is_finite() {
                return Err(FunctorError::ConstantOverflow { value, target });
            }
        }

        Ok(Self {
            k: converted,
            op: O::default(),
            position: PhantomData,
        })
    }
}

impl<S: Copy, O, P> ScalarOp<S, O, P> {
    /// The captured constant `k`.
    #[inline]
    pub fn constant(&self) -> S {
        self.k
    }
}

impl<S, O: BinaryFamily, P: OperandPosition> ScalarOp<S, O, P> {
    /// Operation family of this functor.
    #[inline]
    pub fn kind(&self) -> ScalarOpKind {
        ScalarOpKind::bind(O::KIND, P::CAPTURES_LHS)
    }
}

impl<S, O: BinaryFamily, P: OperandPosition> PartialEq for ScalarOp<S, O, P> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind()
    }
}

impl<S, O: BinaryFamily, P: OperandPosition> Eq for ScalarOp<S, O, P> {}

impl<S, O, P> UnaryFunctor<S> for ScalarOp<S, O, P>
where
    S: Scalar,
    O: BinaryFunctor<S> + BinaryFamily,
    P: OperandPosition,
{
    #[inline]
    fn eval(&self, a: S) -> S {
        P::eval(&self.op, self.k, a)
    }

    #[inline]
    fn d_da(&self, a: S) -> S {
        P::d_da(&self.op, self.k, a)
    }

    fn name(&self) -> &'static str {
        self.kind().name()
    }
}

//! Elementary-operation functors.
//!
//! This module provides:
//! - `binary`: `AddOp`, `SubOp`, `ProdOp`, `DivOp`
//! - `unary`: `NegateOp`
//! - `scalar`: `ScalarOp`, a binary functor with one operand captured as a constant
//! - `kind`: enum-dispatched operation families for runtime recording
//!
//! Every functor is a plain value type. Stateless functors are zero-sized;
//! captured-constant functors hold exactly one value of the working scalar type.

pub mod binary;
pub mod kind;
pub mod scalar;
pub mod unary;

pub use binary::{AddOp, DivOp, ProdOp, SubOp};
pub use kind::{BinaryFamily, BinaryOpKind, ScalarOpKind, UnaryOpKind};
pub use scalar::{
    Lhs, OperandPosition, Rhs, ScalarAddOp, ScalarDivIntoOp, ScalarDivOp, ScalarOp,
    ScalarProdOp, ScalarSubFromOp, ScalarSubOp,
};
pub use unary::NegateOp;

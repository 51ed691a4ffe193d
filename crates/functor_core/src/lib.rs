//! # functor_core: Elementary-Operation Functors for Automatic Differentiation
//!
//! ## Foundation Layer Role
//!
//! functor_core provides the computational primitives an AD engine calls for
//! every node of an expression graph:
//! - Binary arithmetic functors: `AddOp`, `SubOp`, `ProdOp`, `DivOp` (`ops::binary`)
//! - Unary negation functor: `NegateOp` (`ops::unary`)
//! - Captured-constant functors: `ScalarOp` and its six aliases (`ops::scalar`)
//! - Enum-dispatched operation families for tape recording (`ops::kind`)
//! - Capability traits: `Scalar`, `BinaryFunctor`, `UnaryFunctor` (`traits`)
//! - Finite-difference verification of derivative formulas (`verify`)
//!
//! Each functor pairs a primal evaluation with the analytic partial
//! derivative(s) of the same operation. How the engine combines those local
//! sensitivities with tangents or adjoints is outside this crate.
//!
//! ## Numeric Degeneracies
//!
//! Functors never fail. Division by zero, overflow and NaN-producing inputs
//! follow IEEE 754 and surface as infinities or NaNs in the returned value.
//!
//! ## Usage Examples
//!
//! ```rust
//! use functor_core::ops::{DivOp, ScalarDivIntoOp};
//! use functor_core::traits::{BinaryFunctor, UnaryFunctor};
//!
//! let (a, b) = (3.0_f64, 2.0_f64);
//! assert_eq!(DivOp.eval(a, b), 1.5);
//! assert_eq!(DivOp.d_da(a, b), 0.5);
//! assert_eq!(DivOp.d_db(a, b), -0.75);
//!
//! // k / a with k captured at construction
//! let reciprocal = ScalarDivIntoOp::<f64>::new(6.0);
//! assert_eq!(reciprocal.eval(2.0), 3.0);
//! assert_eq!(reciprocal.d_da(2.0), -1.5);
//! ```
//!
//! ## Feature Flags
//!
//! - `num-dual-mode` (default): `Scalar` implementation for num-dual's dual numbers
//! - `simd` (default): single-lane SSE2 addition for `f32`/`f64` on x86_64
//! - `serde`: serialisation for operation kinds and verification config

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod ops;
pub mod simd;
pub mod traits;
pub mod types;
pub mod verify;

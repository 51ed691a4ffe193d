//! Supporting types.
//!
//! This module provides:
//! - `dual`: num-dual integration (when `num-dual-mode` feature is enabled)
//! - `error`: error types for constant capture and derivative verification

#[cfg(feature = "num-dual-mode")]
pub mod dual;
pub mod error;

pub use error::{FunctorError, VerificationError};

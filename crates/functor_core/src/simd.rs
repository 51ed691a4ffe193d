//! Single-lane vector addition for built-in floating types.
//!
//! With the `simd` feature on x86_64 targets, `add_f32` and `add_f64` load
//! each operand into the low lane of an SSE register and add with
//! `addss`/`addsd`. Everywhere else they compute `a + b` directly. Both paths
//! produce the same bits for every input; the vector path is an alternate
//! instruction selection, not a numerical change.
//!
//! SSE2 is part of the x86_64 baseline, so no runtime feature detection is
//! needed.

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
use std::arch::x86_64::{
    _mm_add_sd, _mm_add_ss, _mm_cvtsd_f64, _mm_cvtss_f32, _mm_set_sd, _mm_set_ss,
};

/// Whether the SSE2 path is compiled in.
pub const ENABLED: bool = cfg!(all(feature = "simd", target_arch = "x86_64"));

/// Adds two `f32` values through the low lane of an SSE register.
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
#[inline]
#[allow(unused_unsafe)]
pub fn add_f32(a: f32, b: f32) -> f32 {
    // SAFETY: sse is always available on x86_64.
    unsafe { _mm_cvtss_f32(_mm_add_ss(_mm_set_ss(a), _mm_set_ss(b))) }
}

/// Adds two `f64` values through the low lane of an SSE2 register.
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
#[inline]
#[allow(unused_unsafe)]
pub fn add_f64(a: f64, b: f64) -> f64 {
    // SAFETY: sse2 is always available on x86_64.
    unsafe { _mm_cvtsd_f64(_mm_add_sd(_mm_set_sd(a), _mm_set_sd(b))) }
}

/// Adds two `f32` values.
#[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
#[inline]
pub fn add_f32(a: f32, b: f32) -> f32 {
    a + b
}

/// Adds two `f64` values.
#[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
#[inline]
pub fn add_f64(a: f64, b: f64) -> f64 {
    a + b
}

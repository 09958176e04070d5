#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! fastinv-math: Magic-constant reciprocal square root for numeric hot paths
//!
//! This library provides a branchless `1/√x` approximation built from an
//! IEEE 754 bit trick and Newton-Raphson refinement. It is meant for code that
//! evaluates many reciprocal square roots per frame or tick (vector
//! normalization in graphics or physics) and can accept ~0.2% relative error.
//!
//! # Features
//!
//! - **Fast path**: `approx_rsqrt` is total, allocation-free and never fails
//! - **Caller-selected precision**: zero, one or more refinement passes
//! - **Checked variant**: `checked_rsqrt` rejects inputs outside the domain
//! - **Bit view**: `F32Bits` exposes the IEEE 754 fields of a value
//! - **Reference**: `f64` reference and relative error helpers
//!
//! # Quick Start
//!
//! ```rust
//! use fastinv_math::{approx_rsqrt, ApproxRsqrt};
//!
//! fn normalize(v: [f32; 3]) -> [f32; 3] {
//!     let inv_len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).approx_rsqrt();
//!     [v[0] * inv_len, v[1] * inv_len, v[2] * inv_len]
//! }
//!
//! let n = normalize([3.0, 0.0, 4.0]);
//! assert!((n[0] - 0.6).abs() < 0.002);
//! assert!((n[2] - 0.8).abs() < 0.002);
//! assert!((approx_rsqrt(4.0) - 0.5).abs() < 0.001);
//! ```

// IEEE 754 bit reinterpretation
pub mod bits;

// Documented error bounds and tolerances
pub mod bounds;

// Fast math kernels
pub mod math;

// Extension traits
pub mod traits;

// Validated entry points
pub mod checked;

// f64 reference for accuracy measurement
pub mod reference;

// Public re-exports for convenience
pub use bits::{decode_bits, encode_bits, F32Bits};
pub use checked::{checked_rsqrt, checked_rsqrt_with, DomainError};
pub use math::rsqrt::{
    approx_rsqrt, approx_rsqrt_unrefined, approx_rsqrt_with, initial_guess, magic_bits,
    newton_step, DEFAULT_ITERATIONS, HALF, MAGIC, THREE_HALVES,
};
pub use reference::{exact_rsqrt, relative_error};
pub use traits::ApproxRsqrt;

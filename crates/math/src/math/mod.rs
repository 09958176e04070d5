//! Fast math kernels
//!
//! Scalar `f32` kernels that trade a bounded amount of accuracy for avoiding
//! division and square root instructions.
//!
//! # Modules
//!
//! - `rsqrt`: Magic-constant reciprocal square root with Newton-Raphson refinement
//!
//! # Example
//!
//! ```rust
//! use fastinv_math::math::{approx_rsqrt, approx_rsqrt_with};
//!
//! let fast = approx_rsqrt(16.0); // ≈ 0.25, one refinement pass
//! let tight = approx_rsqrt_with(16.0, 2); // two passes
//! assert!((fast - 0.25).abs() < 0.001);
//! assert!((tight - 0.25).abs() < 0.00001);
//! ```

// Math kernel modules
pub mod rsqrt;

// Re-export commonly used functions
pub use self::rsqrt::{approx_rsqrt, approx_rsqrt_unrefined, approx_rsqrt_with};

//! Extension traits
//!
//! Method-call syntax for the kernels, so normalization code can read
//! `length_squared.approx_rsqrt()`.

use crate::math::rsqrt;

/// Fast reciprocal square root as a method
///
/// # Example
///
/// ```rust
/// use fastinv_math::ApproxRsqrt;
///
/// let inv_len = 25.0f32.approx_rsqrt();
/// assert!((inv_len - 0.2).abs() < 0.001);
/// ```
pub trait ApproxRsqrt: Copy {
    /// 1/√self with [`DEFAULT_ITERATIONS`](crate::DEFAULT_ITERATIONS) refinement passes.
    fn approx_rsqrt(self) -> Self;

    /// 1/√self with an explicit number of refinement passes.
    fn approx_rsqrt_with(self, iterations: u32) -> Self;
}

impl ApproxRsqrt for f32 {
    #[inline(always)]
    fn approx_rsqrt(self) -> Self {
        rsqrt::approx_rsqrt(self)
    }

    #[inline(always)]
    fn approx_rsqrt_with(self, iterations: u32) -> Self {
        rsqrt::approx_rsqrt_with(self, iterations)
    }
}

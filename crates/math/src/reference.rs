//! Reference implementation for accuracy measurement
//!
//! `f64` evaluation of 1/√x through `libm`, used by tests, benchmarks and the
//! CLI to measure the error of the fast kernels. Not meant for hot paths.

/// Exact reciprocal square root evaluated in `f64`.
#[inline]
pub fn exact_rsqrt(number: f32) -> f64 {
    1.0 / libm::sqrt(number as f64)
}

/// Relative error of `approx` against 1/√`number`.
///
/// Returns NaN when the reference is not finite and nonzero, which happens
/// exactly for inputs outside the kernel's domain.
///
/// # Example
///
/// ```rust
/// use fastinv_math::{approx_rsqrt, relative_error};
///
/// let x = 10.0;
/// assert!(relative_error(approx_rsqrt(x), x) < 0.002);
/// ```
#[inline]
pub fn relative_error(approx: f32, number: f32) -> f64 {
    let exact = exact_rsqrt(number);
    if !exact.is_finite() || exact == 0.0 {
        return f64::NAN;
    }
    libm::fabs((approx as f64 - exact) / exact)
}

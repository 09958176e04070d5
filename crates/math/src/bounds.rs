//! Error bounds and tolerance constants
//!
//! Relative error limits the kernel guarantees for positive normal inputs,
//! plus the tolerance ladder used when reporting measured error.

/// 5% relative tolerance
pub const FIVE_PERCENT: f64 = 5e-2;

/// 2% relative tolerance
pub const TWO_PERCENT: f64 = 2e-2;

/// 1% relative tolerance
pub const ONE_PERCENT: f64 = 1e-2;

/// One part per thousand
pub const ONE_PPT: f64 = 1e-3;

/// One part per million
pub const ONE_PPM: f64 = 1e-6;

/// One part per billion
pub const ONE_PPB: f64 = 1e-9;

/// Max relative error of the initial guess with no refinement
pub const UNREFINED_BOUND: f64 = 0.04;

/// Max relative error after one refinement pass
pub const ONE_PASS_BOUND: f64 = 0.002;

/// Max relative error after two or more refinement passes
///
/// The analytic limit is ~4.7e-6; the rest is headroom for `f32` rounding.
pub const MULTI_PASS_BOUND: f64 = 1e-5;

/// Documented relative error bound for a given number of refinement passes.
///
/// # Example
///
/// ```rust
/// use fastinv_math::bounds::{bound_for_iterations, ONE_PASS_BOUND};
///
/// assert_eq!(bound_for_iterations(1), ONE_PASS_BOUND);
/// ```
#[inline]
pub const fn bound_for_iterations(iterations: u32) -> f64 {
    match iterations {
        0 => UNREFINED_BOUND,
        1 => ONE_PASS_BOUND,
        _ => MULTI_PASS_BOUND,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_tighten_with_iterations() {
        assert!(bound_for_iterations(0) > bound_for_iterations(1));
        assert!(bound_for_iterations(1) > bound_for_iterations(2));
        assert_eq!(bound_for_iterations(2), bound_for_iterations(7));
    }

    #[test]
    fn test_tolerance_ladder_is_ordered() {
        let ladder = [
            FIVE_PERCENT,
            TWO_PERCENT,
            ONE_PERCENT,
            ONE_PPT,
            ONE_PPM,
            ONE_PPB,
        ];
        assert!(ladder.windows(2).all(|w| w[0] > w[1]));
    }
}

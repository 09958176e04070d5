//! Magic-constant reciprocal square root
//!
//! Approximates 1/√x for positive finite `f32` without a division or square
//! root instruction.
//!
//! # Algorithm
//!
//! 1. Reinterpret `x` as its IEEE 754 bit pattern `i`.
//! 2. `i' = 0x5F3759DF - (i >> 1)` in wrapping `u32` arithmetic.
//! 3. Reinterpret `i'` as the initial guess `y`.
//! 4. Refine with Newton-Raphson on `f(y) = 1/y² - x`:
//!    `y ← y · (1.5 - 0.5 · x · y²)`, as many times as requested.
//!
//! Reading the bit pattern as an integer gives roughly `2^23 · (log2(x) + 127)`,
//! so halving it and subtracting from the constant negates and halves the
//! logarithm: a piecewise-linear `x^(-1/2)`.
//!
//! # Error Bounds
//!
//! | Passes | Max relative error |
//! |--------|--------------------|
//! | 0 | ~3.4% |
//! | 1 | ~0.175% |
//! | 2 | ~0.0005% |
//!
//! # Domain
//!
//! No input is rejected. Zero, negative, NaN, infinite and subnormal inputs
//! produce a well-defined but meaningless value. See [`crate::checked`] for a
//! validated entry point.

use crate::bits::{decode_bits, encode_bits};

/// Magic constant for the initial guess.
pub const MAGIC: u32 = 0x5F37_59DF;

/// First Newton-Raphson coefficient.
pub const THREE_HALVES: f32 = 1.5;

/// Second Newton-Raphson coefficient.
pub const HALF: f32 = 0.5;

/// Refinement passes used by [`approx_rsqrt`].
pub const DEFAULT_ITERATIONS: u32 = 1;

/// Apply the magic-constant transform to a raw bit pattern.
///
/// # Example
///
/// ```rust
/// use fastinv_math::magic_bits;
///
/// // 1.0 = 0x3F800000
/// assert_eq!(magic_bits(0x3F80_0000), 0x3F77_59DF);
/// ```
#[inline(always)]
pub const fn magic_bits(bits: u32) -> u32 {
    MAGIC.wrapping_sub(bits >> 1)
}

/// First-order approximation of 1/√x from the bit transform alone.
#[inline(always)]
pub const fn initial_guess(number: f32) -> f32 {
    decode_bits(magic_bits(encode_bits(number)))
}

/// One Newton-Raphson step for 1/√x.
///
/// `number` must be the original input, not an intermediate value.
#[inline(always)]
pub fn newton_step(number: f32, y: f32) -> f32 {
    y * (THREE_HALVES - HALF * number * y * y)
}

/// Fast reciprocal square root with one refinement pass
///
/// Computes 1/√x with <0.2% relative error for positive normal `x`.
///
/// # Performance
///
/// One integer shift and subtract plus four multiplies and one subtract.
///
/// # Example
///
/// ```rust
/// use fastinv_math::approx_rsqrt;
///
/// let result = approx_rsqrt(4.0);
/// assert!((result - 0.5).abs() < 0.001);
/// ```
#[inline(always)]
pub fn approx_rsqrt(number: f32) -> f32 {
    newton_step(number, initial_guess(number))
}

/// Reciprocal square root from the bit transform only
///
/// Same as [`initial_guess`]. Relative error is below 4%.
#[inline(always)]
pub fn approx_rsqrt_unrefined(number: f32) -> f32 {
    initial_guess(number)
}

/// Fast reciprocal square root with a caller-selected number of passes
///
/// `iterations = 0` returns the initial guess, `1` matches [`approx_rsqrt`].
/// Each pass roughly squares the relative error until `f32` rounding
/// dominates, so more than two passes rarely pays off.
///
/// # Example
///
/// ```rust
/// use fastinv_math::approx_rsqrt_with;
///
/// let precise = approx_rsqrt_with(2.0, 2);
/// assert!((precise - core::f32::consts::FRAC_1_SQRT_2).abs() < 1e-5);
/// ```
#[inline(always)]
pub fn approx_rsqrt_with(number: f32, iterations: u32) -> f32 {
    let mut y = initial_guess(number);
    for _ in 0..iterations {
        y = newton_step(number, y);
    }
    y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relative_error(actual: f32, expected: f32) -> f32 {
        libm::fabsf((actual - expected) / expected)
    }

    #[test]
    fn test_magic_bits_for_one() {
        // 0x3F800000 >> 1 = 0x1FC00000
        assert_eq!(0x3F80_0000u32 >> 1, 0x1FC0_0000);
        assert_eq!(magic_bits(0x3F80_0000), 0x3F77_59DF);
        assert_eq!(initial_guess(1.0).to_bits(), 0x3F77_59DF);
    }

    #[test]
    fn test_magic_bits_wraps() {
        // Patterns above 2 × MAGIC would underflow without wrapping
        assert_eq!(magic_bits(u32::MAX), MAGIC.wrapping_sub(0x7FFF_FFFF));
        assert_eq!(magic_bits(u32::MAX), 0xDF37_59E0);
    }

    #[test]
    fn test_rsqrt_one() {
        let result = approx_rsqrt(1.0);
        assert!(
            relative_error(result, 1.0) < 0.002,
            "approx_rsqrt(1) = {}",
            result
        );
    }

    #[test]
    fn test_rsqrt_four() {
        let result = approx_rsqrt(4.0);
        assert!(
            relative_error(result, 0.5) < 0.002,
            "approx_rsqrt(4) = {}",
            result
        );
    }

    #[test]
    fn test_unrefined_bound() {
        let result = approx_rsqrt_unrefined(2.0);
        let error = relative_error(result, core::f32::consts::FRAC_1_SQRT_2);
        assert!(error < 0.04, "unrefined error at 2.0: {}", error);
    }

    #[test]
    fn test_iteration_counts_match_named_functions() {
        for &x in &[0.01f32, 0.5, 1.0, 3.0, 1234.5] {
            assert_eq!(approx_rsqrt_with(x, 0).to_bits(), initial_guess(x).to_bits());
            assert_eq!(approx_rsqrt_with(x, 1).to_bits(), approx_rsqrt(x).to_bits());
            assert_eq!(
                approx_rsqrt_with(x, 2).to_bits(),
                newton_step(x, approx_rsqrt(x)).to_bits()
            );
        }
    }

    #[test]
    fn test_newton_step_fixed_point() {
        // y = 0.5 is exact for x = 4 and must stay put
        assert_eq!(newton_step(4.0, 0.5), 0.5);
    }

    #[test]
    fn test_invalid_inputs_do_not_panic() {
        // Garbage in, garbage out: only totality is checked here
        let _ = approx_rsqrt(0.0);
        let _ = approx_rsqrt(-1.0);
        let _ = approx_rsqrt(f32::NAN);
        let _ = approx_rsqrt(f32::INFINITY);
        let _ = approx_rsqrt_with(f32::MIN_POSITIVE / 4.0, 3);
    }
}

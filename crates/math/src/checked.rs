//! Validated reciprocal square root
//!
//! The fast path accepts anything and returns garbage for inputs outside its
//! domain. These entry points classify the input first and return an error
//! instead. For accepted inputs the result is bit-identical to the fast path.
//!
//! # Error Codes
//!
//! | Code | Description |
//! |------|-------------|
//! | R001 | Input is NaN |
//! | R002 | Input is infinite |
//! | R003 | Input is zero |
//! | R004 | Input is negative |
//! | R005 | Input is subnormal |

use crate::math::rsqrt::{approx_rsqrt_with, DEFAULT_ITERATIONS};
use core::fmt;

/// Reasons an input falls outside the kernel's domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainError {
    /// R001: NaN input
    NaN,
    /// R002: +∞ or -∞
    Infinite,
    /// R003: +0 or -0
    Zero,
    /// R004: Finite negative value
    Negative,
    /// R005: Positive subnormal; the exponent trick assumes a normal encoding
    Subnormal,
}

impl DomainError {
    /// Stable short code for programmatic handling.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NaN => "R001",
            Self::Infinite => "R002",
            Self::Zero => "R003",
            Self::Negative => "R004",
            Self::Subnormal => "R005",
        }
    }

    /// Human-readable description.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::NaN => "input is NaN",
            Self::Infinite => "input is infinite",
            Self::Zero => "input is zero",
            Self::Negative => "input is negative",
            Self::Subnormal => "input is subnormal",
        }
    }

    /// Classify `number`, returning the first reason it is rejected.
    ///
    /// Checks run in the order NaN, infinite, zero, negative, subnormal, so
    /// `-0.0` is `Zero` and `-∞` is `Infinite`.
    pub fn classify(number: f32) -> Option<Self> {
        if number.is_nan() {
            Some(Self::NaN)
        } else if number.is_infinite() {
            Some(Self::Infinite)
        } else if number == 0.0 {
            Some(Self::Zero)
        } else if number < 0.0 {
            Some(Self::Negative)
        } else if number.is_subnormal() {
            Some(Self::Subnormal)
        } else {
            None
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message())
    }
}

impl core::error::Error for DomainError {}

/// Reciprocal square root that rejects inputs outside the domain
///
/// # Example
///
/// ```rust
/// use fastinv_math::{checked_rsqrt, DomainError};
///
/// assert!(checked_rsqrt(4.0).is_ok());
/// assert_eq!(checked_rsqrt(-4.0), Err(DomainError::Negative));
/// ```
#[inline]
pub fn checked_rsqrt(number: f32) -> Result<f32, DomainError> {
    checked_rsqrt_with(number, DEFAULT_ITERATIONS)
}

/// [`checked_rsqrt`] with an explicit number of refinement passes.
#[inline]
pub fn checked_rsqrt_with(number: f32, iterations: u32) -> Result<f32, DomainError> {
    match DomainError::classify(number) {
        Some(err) => Err(err),
        None => Ok(approx_rsqrt_with(number, iterations)),
    }
}

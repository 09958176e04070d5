//! IEEE 754 single-precision bit view
//!
//! The reciprocal square root kernel works on the raw bit pattern of an `f32`.
//! This module provides that view as a value type so the kernel and its tools
//! never have to spell out masks and shifts by hand.
//!
//! ```text
//!  31  30      23 22                    0
//! ┌───┬──────────┬───────────────────────┐
//! │ s │ exponent │       mantissa        │
//! └───┴──────────┴───────────────────────┘
//! value = (-1)^s × 1.mantissa × 2^(exponent - 127)
//! ```
//!
//! Conversions go through `f32::to_bits` / `f32::from_bits`, which reinterpret
//! the 32 bits. A numeric cast (`x as u32`) would truncate the value instead.

use core::fmt;

/// Sign bit mask
pub const SIGN_MASK: u32 = 0x8000_0000;

/// Biased exponent mask
pub const EXPONENT_MASK: u32 = 0x7F80_0000;

/// Mantissa (fraction) mask
pub const MANTISSA_MASK: u32 = 0x007F_FFFF;

/// Number of mantissa bits below the exponent field
pub const MANTISSA_BITS: u32 = 23;

/// Exponent bias for single precision
pub const EXPONENT_BIAS: i32 = 127;

/// Reinterpret an `f32` as its IEEE 754 bit pattern.
#[inline(always)]
pub const fn encode_bits(value: f32) -> u32 {
    value.to_bits()
}

/// Reinterpret a bit pattern as an `f32`.
#[inline(always)]
pub const fn decode_bits(bits: u32) -> f32 {
    f32::from_bits(bits)
}

/// Raw bit pattern of an `f32`
///
/// A view, not a conversion: `F32Bits::from(x).to_f32()` returns `x` with the
/// same bits, including NaN payloads and the sign of zero.
///
/// # Example
///
/// ```rust
/// use fastinv_math::F32Bits;
///
/// let one = F32Bits::from_f32(1.0);
/// assert_eq!(one.raw(), 0x3F80_0000);
/// assert_eq!(one.biased_exponent(), 127);
/// assert_eq!(one.mantissa(), 0);
/// assert_eq!(format!("{}", one), "0x3F800000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct F32Bits(u32);

impl F32Bits {
    /// Wrap a raw bit pattern.
    #[inline(always)]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Take the bit pattern of `value`.
    #[inline(always)]
    pub const fn from_f32(value: f32) -> Self {
        Self(encode_bits(value))
    }

    /// The pattern as an unsigned integer.
    #[inline(always)]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Decode the pattern back into an `f32`.
    #[inline(always)]
    pub const fn to_f32(self) -> f32 {
        decode_bits(self.0)
    }

    /// Sign bit (0 for positive, 1 for negative).
    #[inline(always)]
    pub const fn sign(self) -> u32 {
        (self.0 & SIGN_MASK) >> 31
    }

    /// Exponent field as stored (0..=255).
    #[inline(always)]
    pub const fn biased_exponent(self) -> u32 {
        (self.0 & EXPONENT_MASK) >> MANTISSA_BITS
    }

    /// Exponent with the bias removed.
    ///
    /// Meaningful for normal numbers only. Subnormals and zero report -127,
    /// infinities and NaN report 128.
    #[inline(always)]
    pub const fn unbiased_exponent(self) -> i32 {
        self.biased_exponent() as i32 - EXPONENT_BIAS
    }

    /// Mantissa field without the implicit leading one.
    #[inline(always)]
    pub const fn mantissa(self) -> u32 {
        self.0 & MANTISSA_MASK
    }

    /// Logical right shift of the pattern.
    #[inline(always)]
    pub const fn shr(self, n: u32) -> Self {
        Self(self.0 >> n)
    }

    /// Big-endian byte encoding.
    #[inline]
    pub const fn to_be_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Little-endian byte encoding.
    #[inline]
    pub const fn to_le_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }
}

impl From<f32> for F32Bits {
    #[inline(always)]
    fn from(value: f32) -> Self {
        Self::from_f32(value)
    }
}

impl From<F32Bits> for f32 {
    #[inline(always)]
    fn from(bits: F32Bits) -> Self {
        bits.to_f32()
    }
}

impl fmt::Display for F32Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

impl fmt::UpperHex for F32Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for F32Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::Binary for F32Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

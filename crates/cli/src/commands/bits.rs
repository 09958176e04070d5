//! `fastinv bits`: show the bit-level view of the initial guess.

use anyhow::Result;
use clap::Args;
use fastinv_math::{approx_rsqrt, magic_bits, F32Bits, MAGIC};
use log::debug;

/// Arguments for `fastinv bits`.
#[derive(Args, Debug)]
pub struct BitsArgs {
    /// Value to inspect
    #[arg(allow_negative_numbers = true)]
    pub value: f32,
}

/// Render the field breakdown of one bit pattern.
pub fn describe(label: &str, bits: F32Bits) -> String {
    let be = bits.to_be_bytes();
    let le = bits.to_le_bytes();
    format!(
        "{label}\n  \
         value:     {value:e}\n  \
         hex:       {bits}\n  \
         binary:    {bits:#034b}\n  \
         sign:      {sign}\n  \
         exponent:  {exp} (unbiased {unbiased})\n  \
         mantissa:  0x{mantissa:06X}\n  \
         bytes BE:  {be:02X?}\n  \
         bytes LE:  {le:02X?}\n",
        value = bits.to_f32(),
        sign = bits.sign(),
        exp = bits.biased_exponent(),
        unbiased = bits.unbiased_exponent(),
        mantissa = bits.mantissa(),
    )
}

/// Input pattern and the initial guess the kernel derives from it.
pub fn transform(value: f32) -> (F32Bits, F32Bits) {
    let input = F32Bits::from_f32(value);
    (input, F32Bits::new(magic_bits(input.raw())))
}

/// Execute `fastinv bits`.
pub fn execute(args: &BitsArgs) -> Result<()> {
    let (input, guess) = transform(args.value);
    let shifted = input.shr(1);
    debug!("bits: input {} shifted {} guess {}", input, shifted, guess);

    print!("{}", describe("input", input));
    println!();
    println!("transform");
    println!("  i >> 1:    {}", shifted);
    println!("  magic:     {}", F32Bits::new(MAGIC));
    println!("  magic - (i >> 1) = {}", guess);
    println!();
    print!("{}", describe("initial guess", guess));
    println!();
    println!("after one pass: {:e}", approx_rsqrt(args.value));

    Ok(())
}

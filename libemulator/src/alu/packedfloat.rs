//! The machine's 8-bit float format.
//!
//! ```text
//!   7   6  5  4  3   2  1  0
//! | s | exponent    | mantissa |
//! ```
//!
//! The exponent is biased by [`FLOAT_EXPONENT_BIAS`] and the mantissa is a fraction of eighths
//! with an implicit leading one, so there is no zero, infinity or NaN. This is not IEEE-754.

use libisa::Byte;

pub const FLOAT_EXPONENT_BIAS: i32 = 4;

const SIGN_MASK: Byte = 0b1000_0000;
const EXPONENT_MASK: Byte = 0b0111_1000;
const MANTISSA_MASK: Byte = 0b0000_0111;

const EXPONENT_SHIFT: u32 = 3;
const MANTISSA_STEPS: f32 = 8.0;

pub fn decode(packed: Byte) -> f32 {
    let sign = if packed & SIGN_MASK == 0 { 1.0 } else { -1.0 };
    let exponent = ((packed & EXPONENT_MASK) >> EXPONENT_SHIFT) as i32 - FLOAT_EXPONENT_BIAS;
    let mantissa = 1.0 + (packed & MANTISSA_MASK) as f32 / MANTISSA_STEPS;

    sign * mantissa * 2f32.powi(exponent)
}

/// Packs a value, truncating the mantissa to three bits.
///
/// The biased exponent isn't range checked. A value outside of `[2^-4, 2^12)` has its exponent
/// bits spill into the sign bit or wrap around, and only the low eight bits of the packed result
/// are kept. Zero has no representation and ends up as `0x20`, which decodes to 1.0.
pub fn encode(value: f32) -> Byte {
    let sign_bit = (value < 0.0) as i32;
    let magnitude = value.abs();

    let exponent = magnitude.log2().floor() as i32;
    let exponent_bits = exponent.wrapping_add(FLOAT_EXPONENT_BIAS);

    let mantissa_value = magnitude / 2f32.powi(exponent);
    let mantissa_bits = ((mantissa_value - 1.0) * MANTISSA_STEPS) as i32;

    ((sign_bit << 7) | (exponent_bits << EXPONENT_SHIFT) | mantissa_bits) as Byte
}

//! Word arithmetic used by the instruction handlers. Nothing here keeps state or sets flags.

use libisa::{Byte, Word, WordSigned};

pub mod packedfloat;


pub fn add(a: Word, b: Word) -> Word {
    a.wrapping_add(b)
}

pub fn or(a: Word, b: Word) -> Word {
    a | b
}

pub fn and(a: Word, b: Word) -> Word {
    a & b
}

pub fn xor(a: Word, b: Word) -> Word {
    a ^ b
}

/// Rotates right within 16 bits; the amount is taken modulo the word width.
pub fn rotate_right(value: Word, amount: u32) -> Word {
    value.rotate_right(amount % Word::BITS)
}

/// Compares both words as two's complement values.
pub fn greater_signed(a: Word, b: Word) -> bool {
    (a as WordSigned) > (b as WordSigned)
}

pub fn float_add(a: Byte, b: Byte) -> Byte {
    packedfloat::encode(packedfloat::decode(a) + packedfloat::decode(b))
}

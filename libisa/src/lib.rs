pub mod instruction;
pub mod program;

pub type Word = u16;
pub type WordSigned = i16;
pub type Byte = u8;

pub const BYTES_PER_WORD: usize = 2;

pub type Register = usize;
pub type Immediate = u8;

pub const REGISTER_COUNT: usize = 16;
pub const MEMORY_SIZE: usize = 256;

/// Splits a word into its high and low byte, in that order.
pub fn word_to_bytes(word: Word) -> [Byte; BYTES_PER_WORD] {
    [((word & 0xFF00) >> 8) as u8, (word & 0x00FF) as u8]
}

pub fn bytes_to_word(bytes: [Byte; BYTES_PER_WORD]) -> Word {
    (bytes[0] as u16) << 8 | (bytes[1] as u16)
}

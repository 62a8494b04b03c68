//! Text program images: whitespace-separated hexadecimal words, each stored high byte first.

use std::fmt::Write;

use thiserror::Error;

use crate::{Byte, Word};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProgramParseError {
    #[error("Invalid program word #{index} ({token:?})")]
    InvalidWord { index: usize, token: String },
}

pub fn parse_hex_word(token: &str) -> Option<Word> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);

    Word::from_str_radix(digits, 16).ok()
}

pub fn parse_hex_program(text: &str) -> Result<Vec<Byte>, ProgramParseError> {
    text.split_whitespace()
        .enumerate()
        .map(|(index, token)| {
            parse_hex_word(token).ok_or_else(|| ProgramParseError::InvalidWord {
                index,
                token: token.to_string(),
            })
        })
        .try_fold(Vec::new(), |mut program, word| {
            program.extend(crate::word_to_bytes(word?));
            Ok(program)
        })
}

/// Formats a byte image as one word per line. A trailing odd byte is padded with zero.
pub fn format_hex_program(program: &[Byte]) -> String {
    program
        .chunks(crate::BYTES_PER_WORD)
        .fold(String::new(), |mut text, chunk| {
            let word = crate::bytes_to_word([chunk[0], chunk.get(1).copied().unwrap_or(0)]);
            // Writing into a String never fails.
            let _ = writeln!(text, "{:04X}", word);
            text
        })
}

#[cfg(test)]
mod tests {
    use super::{format_hex_program, parse_hex_program, ProgramParseError};

    #[test]
    fn parses_words_across_lines() -> Result<(), ProgramParseError> {
        let program = parse_hex_program("2001 2102\n5201\n\tC000\n")?;

        assert_eq!(
            program,
            [0x20, 0x01, 0x21, 0x02, 0x52, 0x01, 0xC0, 0x00]
        );

        Ok(())
    }

    #[test]
    fn accepts_prefix_and_short_words() -> Result<(), ProgramParseError> {
        assert_eq!(parse_hex_program("0x2001 c0 0XB100")?, [0x20, 0x01, 0x00, 0xC0, 0xB1, 0x00]);

        Ok(())
    }

    #[test]
    fn rejects_invalid_tokens() {
        assert_eq!(
            parse_hex_program("2001 zz01"),
            Err(ProgramParseError::InvalidWord {
                index: 1,
                token: "zz01".to_string()
            })
        );
        assert!(parse_hex_program("12345").is_err());
    }

    #[test]
    fn format_pads_odd_images() {
        assert_eq!(format_hex_program(&[0x20, 0x01, 0xC0]), "2001\nC000\n");
    }
}

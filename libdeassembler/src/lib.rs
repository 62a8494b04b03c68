use std::iter::Peekable;

use libisa::{instruction::Instruction, Word};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DeassemblyError {
    #[error("Incomplete instruction at {0:#04x}")]
    IncompleteInstruction(usize),
}

/// An instruction together with where it was found and the word it was decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deassembled {
    pub addr: usize,
    pub word: Word,
    pub instruction: Instruction,
}

pub struct Deassembler<'a, I>
where
    I: Iterator<Item = &'a u8>,
{
    code_iter: Peekable<I>,
    addr: usize,
}

impl<'a, I> Deassembler<'a, I>
where
    I: Iterator<Item = &'a u8>,
{
    pub fn new(code_iter: I) -> Self {
        Self {
            code_iter: code_iter.peekable(),
            addr: 0,
        }
    }

    /// Deassembles everything left, pairing each instruction with its address.
    pub fn deassemble(mut self) -> Result<Vec<Deassembled>, DeassemblyError> {
        let mut output = Vec::new();

        while let Some(entry) = self.deassemble_instruction() {
            output.push(entry?);
        }

        Ok(output)
    }

    /// One line per instruction: address, raw word and the rendered instruction.
    pub fn deassemble_text(mut self) -> String {
        let mut output = String::new();

        while let Some(entry) = self.deassemble_instruction() {
            let line = match entry {
                Ok(deassembled) => format!(
                    "{:#04x}: {:04X}  {}\n",
                    deassembled.addr, deassembled.word, deassembled.instruction
                ),
                Err(e) => format!("<{}>\n", e),
            };

            output.push_str(&line);
        }

        output
    }

    /// Returns `None` once all code has been consumed.
    pub fn deassemble_instruction(&mut self) -> Option<Result<Deassembled, DeassemblyError>> {
        self.code_iter.peek()?;

        let addr = self.addr;
        let entry = self
            .next_word()
            .map(|word| Deassembled {
                addr,
                word,
                instruction: Instruction::decode(word),
            })
            .ok_or(DeassemblyError::IncompleteInstruction(addr));

        Some(entry)
    }

    fn next_word(&mut self) -> Option<Word> {
        let first_byte = *self.code_iter.next()?;
        self.addr += 1;
        let second_byte = *self.code_iter.next()?;
        self.addr += 1;

        Some(libisa::bytes_to_word([first_byte, second_byte]))
    }
}

#[cfg(test)]
mod tests {
    use libisa::instruction::kind::InstructionKind;

    use super::{DeassemblyError, Deassembler};

    #[test]
    fn deassembles_with_addresses() -> Result<(), DeassemblyError> {
        let code = [0x20, 0x01, 0x21, 0x02, 0x52, 0x01, 0xC0, 0x00];
        let listing = Deassembler::new(code.iter()).deassemble()?;

        let kinds: Vec<_> = listing
            .iter()
            .map(|deassembled| (deassembled.addr, deassembled.instruction.kind))
            .collect();

        assert_eq!(
            kinds,
            [
                (0, InstructionKind::LoadImm),
                (2, InstructionKind::LoadImm),
                (4, InstructionKind::Add),
                (6, InstructionKind::Halt),
            ]
        );

        Ok(())
    }

    #[test]
    fn odd_trailing_byte_is_an_error() {
        let code = [0x20, 0x01, 0xC0];

        assert_eq!(
            Deassembler::new(code.iter()).deassemble(),
            Err(DeassemblyError::IncompleteInstruction(2))
        );
    }

    #[test]
    fn text_listing() {
        let code = [0x20, 0x01, 0xE1, 0x00, 0xC0];
        let text = Deassembler::new(code.iter()).deassemble_text();

        assert_eq!(
            text,
            "0x00: 2001  loadi %0, $0x01\n0x02: E100  halt\n<Incomplete instruction at 0x04>\n"
        );
    }
}

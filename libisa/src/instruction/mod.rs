use std::fmt::Display;

use kind::InstructionKind;
use thiserror::Error;

use crate::{Immediate, Register, Word};

pub mod assembler;
pub mod kind;

#[cfg(test)]
mod tests;

const FIELD_MAX: u8 = 0xF;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyError {
    #[error("Register %{0} out of range")]
    RegisterOutOfRange(Register),

    #[error("Field value {0} doesn't fit into 4 bits")]
    FieldOutOfRange(u8),
}

/// A decoded instruction word.
///
/// Every instruction is exactly one word wide and split into four nibbles: the opcode followed by
/// the `r`, `s` and `t` fields. What the fields mean depends on the kind, see
/// [`Instruction::immediate`] for the 8-bit operand formed by `s` and `t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instruction {
    pub kind: InstructionKind,
    pub r: u8,
    pub s: u8,
    pub t: u8,
}

impl Instruction {
    pub const fn new(kind: InstructionKind) -> Self {
        Self {
            kind,
            r: 0,
            s: 0,
            t: 0,
        }
    }

    pub const fn with_r(mut self, r: u8) -> Self {
        self.r = r;
        self
    }

    pub const fn with_s(mut self, s: u8) -> Self {
        self.s = s;
        self
    }

    pub const fn with_t(mut self, t: u8) -> Self {
        self.t = t;
        self
    }

    pub const fn with_immediate(mut self, immediate: Immediate) -> Self {
        self.s = immediate >> 4;
        self.t = immediate & FIELD_MAX;
        self
    }

    pub const fn immediate(&self) -> Immediate {
        (self.s << 4) | (self.t & FIELD_MAX)
    }

    pub fn encode(self) -> Result<Word, AssemblyError> {
        if self.r > FIELD_MAX {
            return Err(AssemblyError::RegisterOutOfRange(self.r as Register));
        }

        if let Some(field) = [self.s, self.t].into_iter().find(|field| *field > FIELD_MAX) {
            return Err(AssemblyError::FieldOutOfRange(field));
        }

        Ok((self.kind.opcode() as Word) << 12
            | (self.r as Word) << 8
            | (self.s as Word) << 4
            | self.t as Word)
    }

    pub fn assemble(self) -> Result<Vec<u8>, AssemblyError> {
        Ok(crate::word_to_bytes(self.encode()?).to_vec())
    }

    /// Splits an instruction word into its fields. This can't fail, unknown opcodes decode as halts.
    pub fn decode(instruction: Word) -> Self {
        let [opcode, r, s, t] = [
            (instruction >> 12) as u8 & FIELD_MAX,
            (instruction >> 8) as u8 & FIELD_MAX,
            (instruction >> 4) as u8 & FIELD_MAX,
            instruction as u8 & FIELD_MAX,
        ];

        Self {
            kind: InstructionKind::from_opcode_or_halt(opcode),
            r,
            s,
            t,
        }
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)?;

        if self.kind.has_immediate() {
            let immediate = self.immediate();

            return match self.kind {
                InstructionKind::LoadImm => write!(f, " %{}, ${:#04x}", self.r, immediate),
                InstructionKind::BgtJmp => write!(f, " %{}, @{:#04x}", self.r, immediate),
                _ => write!(f, " %{}, [{:#04x}]", self.r, immediate),
            };
        }

        match self.kind {
            InstructionKind::Move => write!(f, " %{} -> %{}", self.r, self.s),
            InstructionKind::Add
            | InstructionKind::Or
            | InstructionKind::And
            | InstructionKind::Xor => write!(f, " %{}, %{}, %{}", self.r, self.s, self.t),
            // The second FADD operand is the field itself, not a register.
            InstructionKind::FAdd => write!(f, " %{}, %{}, ${:#x}", self.r, self.s, self.t),
            InstructionKind::Ror => write!(f, " %{}, ${}", self.r, self.s),
            InstructionKind::Jmp => write!(f, " %{}", self.r),
            // Halt.
            _ => Ok(()),
        }
    }
}

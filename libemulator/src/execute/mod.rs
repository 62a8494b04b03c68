use libisa::{instruction::Instruction, Word};
use thiserror::Error;

use crate::Emulator;

mod ops;
mod parsed;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteOk {
    Normal,
    Halted,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteErr {
    #[error("Program counter out of bounds ({0:#06x})")]
    ProgramCounterOutOfBounds(Word),
}

impl Emulator {
    /// Runs one fetch, decode and execute cycle.
    ///
    /// Halted and faulted machines stay that way: a halted machine reports [`ExecuteOk::Halted`]
    /// and a faulted one returns its fault again, neither touches any state.
    pub fn execute_instruction(&mut self) -> Result<ExecuteOk, ExecuteErr> {
        if let Some(fault) = self.fault {
            return Err(fault);
        }

        if self.state.halted {
            return Ok(ExecuteOk::Halted);
        }

        let instruction = self.parse_next_instruction().inspect_err(|fault| {
            self.fault = Some(*fault);
        })?;

        self.instructions_executed += 1;
        Ok(self.execute_parsed_instruction(instruction))
    }

    pub fn execute_to_halt(&mut self) -> Result<(), ExecuteErr> {
        while !self.state.halted {
            self.execute_instruction()?;
        }

        Ok(())
    }

    /// Executes until the machine halts or `limit` instructions have run.
    pub fn execute_with_limit(&mut self, limit: usize) -> Result<ExecuteOk, ExecuteErr> {
        for _ in 0..limit {
            if self.execute_instruction()? == ExecuteOk::Halted {
                return Ok(ExecuteOk::Halted);
            }
        }

        Ok(if self.state.halted {
            ExecuteOk::Halted
        } else {
            ExecuteOk::Normal
        })
    }

    fn parse_next_instruction(&mut self) -> Result<Instruction, ExecuteErr> {
        let pc = self.state.program_counter;

        if pc as usize >= self.memory.len() {
            return Err(ExecuteErr::ProgramCounterOutOfBounds(pc));
        }

        let instruction_word = self.memory.word(pc as usize);
        self.state.program_counter = pc.wrapping_add(libisa::BYTES_PER_WORD as Word);

        let instruction = Instruction::decode(instruction_word);
        log::debug!("{:#04x}: {:04X}  {}", pc, instruction_word, instruction);

        Ok(instruction)
    }
}

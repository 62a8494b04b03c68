use std::{fs, path::Path};

use anyhow::Context;
use libemulator::{Emulator, ExecuteErr, ExecuteOk};

/// The machine plus the program it was loaded with, so it can be started over.
pub struct Session {
    pub emulator: Emulator,
    program: Vec<u8>,
    max_instructions: Option<usize>,
}

impl Session {
    pub fn new(max_instructions: Option<usize>) -> Self {
        Self {
            emulator: Emulator::new(&[]),
            program: Vec::new(),
            max_instructions,
        }
    }

    /// Loads a text program image and resets the machine onto it.
    pub fn load(&mut self, path: &Path) -> anyhow::Result<()> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Couldn't read program file {}", path.display()))?;
        let program = libisa::program::parse_hex_program(&text)
            .with_context(|| format!("Couldn't parse program file {}", path.display()))?;

        log::info!("Loaded {} bytes from {}", program.len(), path.display());

        self.program = program;
        self.reset();
        Ok(())
    }

    pub fn reset(&mut self) {
        self.emulator = Emulator::new(&self.program);
    }

    pub fn run(&mut self) -> Result<ExecuteOk, ExecuteErr> {
        match self.max_instructions {
            Some(limit) => self.emulator.execute_with_limit(limit),
            None => self
                .emulator
                .execute_to_halt()
                .map(|()| ExecuteOk::Halted),
        }
    }

    pub fn step(&mut self, count: usize) -> Result<ExecuteOk, ExecuteErr> {
        self.emulator.execute_with_limit(count)
    }
}

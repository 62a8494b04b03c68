use std::fmt::{self, Display};

use libemulator::{memory::Memory, Emulator};
use libisa::WordSigned;

const BYTES_PER_ROW: usize = 16;

pub struct Registers<'a>(pub &'a Emulator);

impl Display for Registers<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, value) in self.0.registers().enumerate() {
            writeln!(
                f,
                "R{:<2} {:#06x} {:>6}",
                index,
                value,
                value as WordSigned
            )?;
        }

        Ok(())
    }
}

/// Hex grid of `len` memory cells starting at `begin`, clamped to the end of memory.
pub struct MemoryGrid<'a> {
    pub memory: &'a Memory,
    pub begin: usize,
    pub len: usize,
}

impl<'a> MemoryGrid<'a> {
    pub fn all(memory: &'a Memory) -> Self {
        Self {
            memory,
            begin: 0,
            len: memory.len(),
        }
    }
}

impl Display for MemoryGrid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = self.memory.as_slice();
        let begin = self.begin.min(cells.len());
        let end = begin.saturating_add(self.len).min(cells.len());

        write!(f, "     ")?;
        for column in 0..BYTES_PER_ROW {
            write!(f, " {:02X}", column)?;
        }
        writeln!(f)?;

        for (row, chunk) in cells[begin..end].chunks(BYTES_PER_ROW).enumerate() {
            write!(f, "{:#04x}:", begin + row * BYTES_PER_ROW)?;
            for byte in chunk {
                write!(f, " {:02X}", byte)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Everything there is to know about a machine.
pub struct State<'a>(pub &'a Emulator);

impl Display for State<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let emulator = self.0;

        let status = match emulator.fault() {
            Some(fault) => format!("faulted: {}", fault),
            None if emulator.is_halted() => "halted".to_string(),
            None => "ready".to_string(),
        };

        writeln!(
            f,
            "PC: {:#04x} ({}), {} instructions executed",
            emulator.program_counter(),
            status,
            emulator.instructions_executed()
        )?;
        writeln!(f, "Registers:")?;
        write!(f, "{}", Registers(emulator))?;
        writeln!(f, "Memory:")?;
        write!(f, "{}", MemoryGrid::all(&emulator.memory))
    }
}

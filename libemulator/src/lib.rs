use libisa::{Byte, Word};
use memory::Memory;
use regfile::RegFile;

pub mod alu;
pub mod execute;
pub mod memory;
pub mod regfile;

pub use execute::{ExecuteErr, ExecuteOk};

/// Program counter and halt flag of a running machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExecutionState {
    pub program_counter: Word,
    pub halted: bool,
}

pub struct Emulator {
    pub memory: Memory,
    pub reg_file: RegFile,
    pub state: ExecutionState,

    fault: Option<ExecuteErr>,
    instructions_executed: usize,
}

impl Emulator {
    /// Creates a machine with the program copied to the start of zeroed memory.
    ///
    /// Whatever doesn't fit into memory is dropped, the same way the text loader stops once memory
    /// is full.
    pub fn new(program: &[Byte]) -> Self {
        let mut memory = Memory::new();
        let loaded = memory.load(program);

        if loaded < program.len() {
            log::warn!(
                "Program is {} bytes long, only the first {} fit into memory",
                program.len(),
                loaded
            );
        }

        Self::with_memory(memory)
    }

    pub fn with_memory(memory: Memory) -> Self {
        Self {
            memory,
            reg_file: RegFile::new(),
            state: ExecutionState::default(),
            fault: None,
            instructions_executed: 0,
        }
    }

    pub fn reg(&self, index: usize) -> Word {
        self.reg_file.get(index)
    }

    pub fn registers(&self) -> impl Iterator<Item = Word> + '_ {
        self.reg_file.iter().copied()
    }

    pub fn program_counter(&self) -> Word {
        self.state.program_counter
    }

    pub fn set_program_counter(&mut self, program_counter: Word) {
        self.state.program_counter = program_counter;
    }

    pub fn is_halted(&self) -> bool {
        self.state.halted
    }

    /// The fault that stopped the machine, if any.
    pub fn fault(&self) -> Option<ExecuteErr> {
        self.fault
    }

    pub fn instructions_executed(&self) -> usize {
        self.instructions_executed
    }
}

use libisa::{Byte, Word};


/// Byte addressable main memory, zero filled on creation.
///
/// Like the register file, out of range addresses read as zero and ignore writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory([Byte; libisa::MEMORY_SIZE]);

impl Memory {
    pub fn new() -> Self {
        Self([0; libisa::MEMORY_SIZE])
    }

    /// Copies the program to the start of memory, returning how many bytes fit.
    pub fn load(&mut self, program: &[Byte]) -> usize {
        let len = program.len().min(self.0.len());
        self.0[..len].copy_from_slice(&program[..len]);
        len
    }

    pub fn get(&self, addr: usize) -> Byte {
        self.0.get(addr).copied().unwrap_or(0)
    }

    pub fn set(&mut self, addr: usize, value: Byte) {
        if let Some(byte) = self.0.get_mut(addr) {
            *byte = value;
        }
    }

    /// Reads the big-endian word starting at `addr`.
    pub fn word(&self, addr: usize) -> Word {
        libisa::bytes_to_word([self.get(addr), self.get(addr.saturating_add(1))])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Byte> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Byte] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

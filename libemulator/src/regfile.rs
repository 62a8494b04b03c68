use libisa::{Register, Word};

/// The general purpose registers.
///
/// Accesses outside of the register file never fail: reads give zero and writes are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegFile([Word; libisa::REGISTER_COUNT]);

impl RegFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: Register) -> Word {
        self.0.get(index).copied().unwrap_or(0)
    }

    pub fn set(&mut self, index: Register, value: Word) {
        if let Some(register) = self.0.get_mut(index) {
            *register = value;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.0.iter()
    }
}

//! Instruction handlers.
//!
//! Each handler works on the pieces of machine state it needs and nothing else. Out of range
//! register and memory accesses are left to the tolerant accessors.

use libisa::{Byte, Register, Word};

use crate::{alu, memory::Memory, regfile::RegFile, ExecutionState};

pub(super) fn load_memory(reg_file: &mut RegFile, memory: &Memory, r: Register, addr: Byte) {
    reg_file.set(r, memory.get(addr as usize) as Word);
}

pub(super) fn load_immediate(reg_file: &mut RegFile, r: Register, value: Byte) {
    reg_file.set(r, value as Word);
}

/// Memory cells are a byte wide, so only the low byte of the register is stored.
pub(super) fn store(reg_file: &RegFile, memory: &mut Memory, r: Register, addr: Byte) {
    memory.set(addr as usize, reg_file.get(r) as Byte);
}

/// Copies register `src` (the `r` field) into `dest` (the `s` field).
pub(super) fn move_register(reg_file: &mut RegFile, src: Register, dest: Register) {
    reg_file.set(dest, reg_file.get(src));
}

/// `reg[r] = op(reg[s], reg[t])`
pub(super) fn binary<F>(reg_file: &mut RegFile, r: Register, s: Register, t: Register, op: F)
where
    F: FnOnce(Word, Word) -> Word,
{
    let result = op(reg_file.get(s), reg_file.get(t));
    reg_file.set(r, result);
}

/// Adds the packed float in the low byte of `reg[s]` to the packed float formed by the raw `t`
/// field. `t` is not a register index here.
///
/// Only `reg[r]` changes, the OR handler doesn't run afterwards.
pub(super) fn float_add(reg_file: &mut RegFile, r: Register, s: Register, t: u8) {
    let result = alu::float_add(reg_file.get(s) as Byte, t);
    reg_file.set(r, result as Word);
}

pub(super) fn rotate_right(reg_file: &mut RegFile, r: Register, amount: u8) {
    reg_file.set(r, alu::rotate_right(reg_file.get(r), amount as u32));
}

pub(super) fn jump(reg_file: &RegFile, state: &mut ExecutionState, r: Register) {
    state.program_counter = reg_file.get(r);
}

/// Jumps if `reg[r]` is greater than `reg[0]`, both read as signed words.
pub(super) fn branch_if_greater(
    reg_file: &RegFile,
    state: &mut ExecutionState,
    r: Register,
    target: Byte,
) {
    if alu::greater_signed(reg_file.get(r), reg_file.get(0)) {
        state.program_counter = target as Word;
    }
}

pub(super) fn halt(state: &mut ExecutionState) {
    // The flag flips rather than being set; a running machine is never halted, so in practice
    // this always stops it.
    state.halted = !state.halted;
    log::info!("Program execution halted");
}

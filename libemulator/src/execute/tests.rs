use libisa::{
    instruction::{assembler, kind::InstructionKind, Instruction},
    program, Word,
};

use crate::{Emulator, ExecuteErr, ExecuteOk};

#[test]
fn load_add_halt() -> anyhow::Result<()> {
    let emulator = exec("2001 2102 5201 C000")?;

    assert_eq!(emulator.reg(0), 1);
    assert_eq!(emulator.reg(1), 2);
    assert_eq!(emulator.reg(2), 3);
    assert!(emulator.is_halted());
    assert_eq!(emulator.program_counter(), 8);
    assert_eq!(emulator.instructions_executed(), 4);

    Ok(())
}

#[test]
fn store_then_load() -> anyhow::Result<()> {
    let emulator = exec_instructions([
        Instruction::new(InstructionKind::LoadImm).with_r(1).with_immediate(0xAB),
        Instruction::new(InstructionKind::Store).with_r(1).with_immediate(0x80),
        Instruction::new(InstructionKind::LoadMem).with_r(2).with_immediate(0x80),
        Instruction::new(InstructionKind::Halt),
    ])?;

    assert_eq!(emulator.memory.get(0x80), 0xAB);
    assert_eq!(emulator.reg(2), 0xAB);

    Ok(())
}

#[test]
fn store_keeps_low_byte() -> anyhow::Result<()> {
    let mut emulator = Emulator::new(&program::parse_hex_program("3390 C000")?);
    emulator.reg_file.set(3, 0x1234);
    emulator.execute_to_halt()?;

    assert_eq!(emulator.memory.get(0x90), 0x34);

    Ok(())
}

#[test]
fn move_copies_r_into_s() -> anyhow::Result<()> {
    // loadi %1, $0x07; mov %1 -> %2
    let emulator = exec("2107 4120 C000")?;

    assert_eq!(emulator.reg(1), 7);
    assert_eq!(emulator.reg(2), 7);

    Ok(())
}

#[test]
fn bitwise_ops() -> anyhow::Result<()> {
    // %1 = 0x0C, %2 = 0x0A; or %3, and %4, xor %5
    let emulator = exec("210C 220A 7312 8412 9512 C000")?;

    assert_eq!(emulator.reg(3), 0x0E);
    assert_eq!(emulator.reg(4), 0x08);
    assert_eq!(emulator.reg(5), 0x06);

    Ok(())
}

#[test]
fn rotate_right() -> anyhow::Result<()> {
    // loadi %1, $0x01; ror %1, $1
    let emulator = exec("2101 A110 C000")?;

    assert_eq!(emulator.reg(1), 0x8000);

    Ok(())
}

#[test]
fn float_add_uses_raw_t_field() -> anyhow::Result<()> {
    // %1 = 0.125; fadd %2, %1, $0x8 (0.125)
    let emulator = exec("2108 6218 C000")?;

    assert_eq!(emulator.reg(2), 0x10);

    Ok(())
}

#[test]
fn float_add_does_not_fall_through_to_or() -> anyhow::Result<()> {
    // With a fallthrough, %2 would end up as %1 | %8 = 0x08.
    let emulator = exec("2108 6218 C000")?;

    assert_ne!(emulator.reg(2), 0x08);

    Ok(())
}

#[test]
fn jump_to_register() -> anyhow::Result<()> {
    // %1 = 0x08; jmp %1; (skipped) loadi %2, $0xFF; halt
    let emulator = exec("2108 B100 22FF C000 C000")?;

    assert_eq!(emulator.reg(2), 0);
    assert_eq!(emulator.program_counter(), 0x0A);

    Ok(())
}

#[test]
fn branch_taken_when_greater() -> anyhow::Result<()> {
    let emulator = exec_with_regs("D10A 22FF C000 0000 0000 C000", &[(1, 5), (0, 3)])?;

    assert_eq!(emulator.reg(2), 0);
    assert_eq!(emulator.program_counter(), 0x0C);

    Ok(())
}

#[test]
fn branch_compares_signed() -> anyhow::Result<()> {
    let emulator = exec_with_regs("D10A 22FF C000 0000 0000 C000", &[(1, 0xFFFF), (0, 0)])?;

    assert_eq!(emulator.reg(2), 0xFF);
    assert_eq!(emulator.program_counter(), 0x06);

    Ok(())
}

#[test]
fn unknown_opcode_halts() -> anyhow::Result<()> {
    let emulator = exec("2101 E123 2202")?;

    assert!(emulator.is_halted());
    assert_eq!(emulator.reg(2), 0);

    Ok(())
}

#[test]
fn empty_memory_halts_immediately() {
    let mut emulator = Emulator::new(&[]);

    assert_eq!(emulator.execute_instruction(), Ok(ExecuteOk::Halted));
    assert_eq!(emulator.program_counter(), 2);
}

#[test]
fn halted_machine_stays_halted() -> anyhow::Result<()> {
    let mut emulator = exec("C000 2101")?;

    assert_eq!(emulator.execute_instruction(), Ok(ExecuteOk::Halted));
    assert!(emulator.is_halted());
    assert_eq!(emulator.reg(1), 0);
    assert_eq!(emulator.program_counter(), 2);

    Ok(())
}

#[test]
fn program_counter_out_of_bounds_faults() -> anyhow::Result<()> {
    // %1 = 0xFF, %2 = 0x01, %3 = %1 + %2 = 0x100; jmp %3
    let mut emulator = Emulator::new(&program::parse_hex_program("21FF 2201 5312 B300")?);

    assert_eq!(
        emulator.execute_to_halt(),
        Err(ExecuteErr::ProgramCounterOutOfBounds(0x100))
    );
    assert!(!emulator.is_halted());
    assert_eq!(
        emulator.fault(),
        Some(ExecuteErr::ProgramCounterOutOfBounds(0x100))
    );

    // The fault is terminal.
    assert_eq!(
        emulator.execute_instruction(),
        Err(ExecuteErr::ProgramCounterOutOfBounds(0x100))
    );
    assert_eq!(emulator.instructions_executed(), 4);

    Ok(())
}

#[test]
fn running_off_the_end_of_memory_faults() {
    // 128 words of `loadi %0, $0x00` fill memory without ever halting.
    let program: Vec<u8> = [0x20, 0x00].repeat(libisa::MEMORY_SIZE / 2);
    let mut emulator = Emulator::new(&program);

    assert_eq!(
        emulator.execute_to_halt(),
        Err(ExecuteErr::ProgramCounterOutOfBounds(libisa::MEMORY_SIZE as Word))
    );
}

#[test]
fn limit_stops_endless_loop() -> anyhow::Result<()> {
    // %1 = 0; jmp %1
    let mut emulator = Emulator::new(&program::parse_hex_program("2100 B100")?);

    assert_eq!(emulator.execute_with_limit(100)?, ExecuteOk::Normal);
    assert_eq!(emulator.instructions_executed(), 100);
    assert!(!emulator.is_halted());

    Ok(())
}

#[test]
fn oversized_program_is_truncated() {
    let program: Vec<u8> = [0xC0, 0x00].repeat(libisa::MEMORY_SIZE);
    let emulator = Emulator::new(&program);

    assert_eq!(emulator.memory.as_slice(), &program[..libisa::MEMORY_SIZE]);
}

fn exec(program_text: &str) -> anyhow::Result<Emulator> {
    exec_with_regs(program_text, &[])
}

fn exec_with_regs(program_text: &str, regs: &[(usize, Word)]) -> anyhow::Result<Emulator> {
    let mut emulator = Emulator::new(&program::parse_hex_program(program_text)?);

    for (index, value) in regs {
        emulator.reg_file.set(*index, *value);
    }

    emulator.execute_to_halt()?;
    Ok(emulator)
}

fn exec_instructions<I>(instructions: I) -> anyhow::Result<Emulator>
where
    I: IntoIterator<Item = Instruction>,
{
    let mut emulator = Emulator::new(&assembler::assemble(instructions)?);
    emulator.execute_to_halt()?;
    Ok(emulator)
}

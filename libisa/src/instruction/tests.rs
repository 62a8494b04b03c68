use super::{assembler, kind::InstructionKind, AssemblyError, Instruction};

#[test]
fn decode_splits_nibbles() {
    let instruction = Instruction::decode(0x5201);

    assert_eq!(instruction.kind, InstructionKind::Add);
    assert_eq!([instruction.r, instruction.s, instruction.t], [2, 0, 1]);
}

#[test]
fn immediate_joins_s_and_t() {
    let instruction = Instruction::decode(0x21A7);

    assert_eq!(instruction.kind, InstructionKind::LoadImm);
    assert_eq!(instruction.r, 1);
    assert_eq!(instruction.immediate(), 0xA7);
}

#[test]
fn unknown_opcodes_decode_as_halt() {
    for word in [0x0000, 0xE123, 0xFFFF, 0xC000] {
        assert_eq!(
            Instruction::decode(word).kind,
            InstructionKind::Halt,
            "word {:#06x}",
            word
        );
    }
}

#[test]
fn encode_matches_decode() -> Result<(), AssemblyError> {
    let instruction = Instruction::new(InstructionKind::BgtJmp)
        .with_r(3)
        .with_immediate(0x42);

    assert_eq!(instruction.encode()?, 0xD342);
    assert_eq!(Instruction::decode(0xD342), instruction);

    Ok(())
}

#[test]
fn encode_rejects_wide_fields() {
    assert_eq!(
        Instruction::new(InstructionKind::Add).with_r(16).encode(),
        Err(AssemblyError::RegisterOutOfRange(16))
    );
    assert_eq!(
        Instruction::new(InstructionKind::Add).with_t(0x1F).encode(),
        Err(AssemblyError::FieldOutOfRange(0x1F))
    );
}

#[test]
fn assemble_is_big_endian() -> Result<(), AssemblyError> {
    let machine_code = assembler::assemble([
        Instruction::new(InstructionKind::LoadImm).with_r(0).with_immediate(1),
        Instruction::new(InstructionKind::Halt),
    ])?;

    assert_eq!(machine_code, [0x20, 0x01, 0xC0, 0x00]);

    Ok(())
}

#[test]
fn display_renders_operands() {
    let rendered: Vec<_> = [
        0x2001, 0x1342, 0x3580, 0x4012, 0x5201, 0x6215, 0xA230, 0xB300, 0xD110, 0xC000,
    ]
        .into_iter()
        .map(|word| Instruction::decode(word).to_string())
        .collect();

    assert_eq!(
        rendered,
        [
            "loadi %0, $0x01",
            "load %3, [0x42]",
            "store %5, [0x80]",
            "mov %0 -> %1",
            "add %2, %0, %1",
            "fadd %2, %1, $0x5",
            "ror %2, $3",
            "jmp %3",
            "bgtjmp %1, @0x10",
            "halt",
        ]
    );
}

#[test]
fn immediate_kinds() {
    let with_immediate: Vec<_> = InstructionKind::ALL
        .into_iter()
        .filter(InstructionKind::has_immediate)
        .collect();

    assert_eq!(
        with_immediate,
        [
            InstructionKind::LoadMem,
            InstructionKind::LoadImm,
            InstructionKind::Store,
            InstructionKind::BgtJmp,
        ]
    );
}

#[test]
fn opcode_table_is_bijective() {
    for kind in InstructionKind::ALL {
        assert_eq!(InstructionKind::from_opcode(kind.opcode()), Some(kind));
    }

    assert_eq!(InstructionKind::from_opcode(0x0), None);
    assert_eq!(InstructionKind::from_opcode(0xE), None);
}

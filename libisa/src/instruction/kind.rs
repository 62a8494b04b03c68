use std::fmt::Display;

use bimap::BiMap;
use lazy_static::lazy_static;

lazy_static! {
    static ref KIND_OPCODE_BIMAP: BiMap<InstructionKind, u8> = InstructionKind::ALL
        .into_iter()
        .map(|kind| (kind, kind.opcode()))
        .collect();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstructionKind {
    LoadMem,
    LoadImm,
    Store,
    Move,

    Add,
    FAdd,

    Or,
    And,
    Xor,
    Ror,

    Jmp,
    BgtJmp,

    Halt,
}

impl InstructionKind {
    pub const ALL: [Self; 13] = [
        Self::LoadMem,
        Self::LoadImm,
        Self::Store,
        Self::Move,
        Self::Add,
        Self::FAdd,
        Self::Or,
        Self::And,
        Self::Xor,
        Self::Ror,
        Self::Jmp,
        Self::BgtJmp,
        Self::Halt,
    ];

    pub fn from_opcode(opcode: u8) -> Option<Self> {
        KIND_OPCODE_BIMAP.get_by_right(&opcode).copied()
    }

    /// Like [`Self::from_opcode`], but every opcode without a mapping executes as a halt.
    pub fn from_opcode_or_halt(opcode: u8) -> Self {
        Self::from_opcode(opcode).unwrap_or(Self::Halt)
    }

    pub const fn opcode(&self) -> u8 {
        match self {
            Self::LoadMem => 0x1,
            Self::LoadImm => 0x2,
            Self::Store => 0x3,
            Self::Move => 0x4,
            Self::Add => 0x5,
            Self::FAdd => 0x6,
            Self::Or => 0x7,
            Self::And => 0x8,
            Self::Xor => 0x9,
            Self::Ror => 0xA,
            Self::Jmp => 0xB,
            Self::Halt => 0xC,
            Self::BgtJmp => 0xD,
        }
    }

    /// Whether the `s` and `t` fields together form an 8-bit immediate or address.
    pub fn has_immediate(&self) -> bool {
        matches!(
            self,
            Self::LoadMem | Self::LoadImm | Self::Store | Self::BgtJmp
        )
    }
}

impl Display for InstructionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::LoadMem => "load",
            Self::LoadImm => "loadi",
            Self::Store => "store",
            Self::Move => "mov",
            Self::Add => "add",
            Self::FAdd => "fadd",
            Self::Or => "or",
            Self::And => "and",
            Self::Xor => "xor",
            Self::Ror => "ror",
            Self::Jmp => "jmp",
            Self::BgtJmp => "bgtjmp",
            Self::Halt => "halt",
        })
    }
}

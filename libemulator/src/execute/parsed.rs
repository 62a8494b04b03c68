use libisa::{
    instruction::{kind::InstructionKind, Instruction},
    Register,
};

use crate::{alu, Emulator};

use super::{ops, ExecuteOk};

impl Emulator {
    pub fn execute_parsed_instruction(&mut self, instruction: Instruction) -> ExecuteOk {
        let [r, s, t] = [instruction.r, instruction.s, instruction.t].map(Register::from);
        let immediate = instruction.immediate();

        let reg_file = &mut self.reg_file;
        let memory = &mut self.memory;
        let state = &mut self.state;

        match instruction.kind {
            InstructionKind::LoadMem => ops::load_memory(reg_file, memory, r, immediate),
            InstructionKind::LoadImm => ops::load_immediate(reg_file, r, immediate),
            InstructionKind::Store => ops::store(reg_file, memory, r, immediate),
            InstructionKind::Move => ops::move_register(reg_file, r, s),

            InstructionKind::Add => ops::binary(reg_file, r, s, t, alu::add),
            InstructionKind::FAdd => ops::float_add(reg_file, r, s, instruction.t),

            InstructionKind::Or => ops::binary(reg_file, r, s, t, alu::or),
            InstructionKind::And => ops::binary(reg_file, r, s, t, alu::and),
            InstructionKind::Xor => ops::binary(reg_file, r, s, t, alu::xor),
            InstructionKind::Ror => ops::rotate_right(reg_file, r, instruction.s),

            InstructionKind::Jmp => ops::jump(reg_file, state, r),
            InstructionKind::BgtJmp => ops::branch_if_greater(reg_file, state, r, immediate),

            InstructionKind::Halt => ops::halt(state),
        }

        if self.state.halted {
            ExecuteOk::Halted
        } else {
            ExecuteOk::Normal
        }
    }
}

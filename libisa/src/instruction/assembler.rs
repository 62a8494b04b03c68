use super::{AssemblyError, Instruction};

/// Assembles instructions into a flat, big-endian machine code image.
pub fn assemble<I>(instructions: I) -> Result<Vec<u8>, AssemblyError>
where
    I: IntoIterator<Item = Instruction>,
{
    instructions
        .into_iter()
        .try_fold(Vec::new(), |mut machine_code, instruction| {
            machine_code.extend(instruction.assemble()?);
            Ok(machine_code)
        })
}


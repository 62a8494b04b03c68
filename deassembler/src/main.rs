use std::{env, fs, path::PathBuf, process::exit};

use libdeassembler::Deassembler;
use libisa::program;

fn main() {
    let path: PathBuf = env::args().skip(1).collect();

    if path.file_name().is_none() {
        eprintln!("Specify the program file path as arguments.");
        exit(1);
    }

    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error reading program file: {}", e);
            exit(1);
        }
    };

    let program = match program::parse_hex_program(&text) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("Error parsing program file: {}", e);
            exit(1);
        }
    };

    if program.len() > libisa::MEMORY_SIZE {
        eprintln!(
            "Program is {} bytes long, only the first {} would be loaded.",
            program.len(),
            libisa::MEMORY_SIZE
        );
    }

    let deassembler = Deassembler::new(program.iter());
    print!("{}", deassembler.deassemble_text());
}

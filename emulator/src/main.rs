use std::{ops::ControlFlow, path::PathBuf, process::exit};

use anyhow::anyhow;
use clap::Parser;
use command::{Command, CommandError};
use libdeassembler::Deassembler;
use libemulator::{Emulator, ExecuteErr, ExecuteOk};
use session::Session;

mod command;
mod dump;
mod session;

const MENU: &str = "\
1. load <path>    Load a program
2. run            Run the program until it halts
3. state          Display registers and memory
4. quit           Exit
   step [n]       Execute n instructions (default 1)
   regs           Display registers
   mem [begin] [len]
   dis            Deassemble memory
   jmp <addr>     Set the program counter
   reset          Reload the last program
   help           Show this menu";

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Program image to load on startup, whitespace separated hexadecimal words.
    program: Option<PathBuf>,

    /// Run the program to completion, print the machine state and exit.
    #[arg(short, long, requires = "program")]
    run: bool,

    /// Stop runs after this many instructions.
    #[arg(short, long)]
    max_instructions: Option<usize>,

    /// Only print the registers after a batch run.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Err(e) = start(args) {
        log::error!("{:#}", e);
        exit(1);
    }
}

fn start(args: Args) -> anyhow::Result<()> {
    let mut session = Session::new(args.max_instructions);

    if let Some(path) = &args.program {
        session.load(path)?;
    }

    if args.run {
        return run_batch(&mut session, args.quiet);
    }

    println!("{}", MENU);

    while let Some(command) = Command::prompt()? {
        match execute_command(&command, &mut session) {
            Ok(ControlFlow::Break(())) => break,
            Ok(ControlFlow::Continue(())) => {}
            Err(e) => eprintln!("!> {:#}", e),
        }
    }

    Ok(())
}

fn run_batch(session: &mut Session, quiet: bool) -> anyhow::Result<()> {
    let outcome = session.run();

    if quiet {
        print!("{}", dump::Registers(&session.emulator));
    } else {
        print!("{}", dump::State(&session.emulator));
    }

    match outcome? {
        ExecuteOk::Halted => Ok(()),
        ExecuteOk::Normal => Err(anyhow!(
            "Program didn't halt within {} instructions",
            session.emulator.instructions_executed()
        )),
    }
}

fn execute_command(command: &Command, session: &mut Session) -> anyhow::Result<ControlFlow<()>> {
    let mut args = command.args();

    // Empty line.
    let Ok(name) = args.next() else {
        return Ok(ControlFlow::Continue(()));
    };

    match name {
        "1" | "load" => {
            let path: PathBuf = args.next_parsed()?;
            session.load(&path)?;
        }
        "2" | "run" => report(session.run(), &session.emulator),
        "3" | "state" => print!("{}", dump::State(&session.emulator)),
        "4" | "q" | "quit" | "exit" => {
            println!("Thanks for using the emulator!");
            return Ok(ControlFlow::Break(()));
        }

        "s" | "step" => {
            let count = args.next_number_or(1)?;
            report(session.step(count), &session.emulator);
        }
        "regs" => print!("{}", dump::Registers(&session.emulator)),
        "mem" => {
            let begin = args.next_number_or(0)?;
            let len = args.next_number_or(libisa::MEMORY_SIZE)?;

            print!(
                "{}",
                dump::MemoryGrid {
                    memory: &session.emulator.memory,
                    begin,
                    len,
                }
            );
        }
        "dis" => {
            let deassembler = Deassembler::new(session.emulator.memory.iter());
            print!("{}", deassembler.deassemble_text());
        }
        "jmp" => {
            let addr = args.next_number()?;
            let addr = libisa::Word::try_from(addr)
                .map_err(|e| CommandError::ParseError(args.index(), e.to_string()))?;

            session.emulator.set_program_counter(addr);
        }
        "reset" => session.reset(),
        "help" | "?" => println!("{}", MENU),

        _ => Err(CommandError::UnknownCommand)?,
    }

    let unused_arg_count = args.remaining();
    if unused_arg_count != 0 {
        eprintln!("{} unused command arguments!", unused_arg_count);
    }

    Ok(ControlFlow::Continue(()))
}

fn report(outcome: Result<ExecuteOk, ExecuteErr>, emulator: &Emulator) {
    match summary(outcome, emulator) {
        Ok(line) => println!("{}", line),
        Err(e) => log::error!("Execution fault: {}", e),
    }
}

fn summary(
    outcome: Result<ExecuteOk, ExecuteErr>,
    emulator: &Emulator,
) -> Result<String, ExecuteErr> {
    let verb = match outcome? {
        ExecuteOk::Halted => "Halted",
        ExecuteOk::Normal => "Paused",
    };

    Ok(format!(
        "{} at {:#04x} after {} instructions",
        verb,
        emulator.program_counter(),
        emulator.instructions_executed()
    ))
}

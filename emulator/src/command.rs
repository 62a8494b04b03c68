use std::{
    error::Error,
    io::{self, Write},
    str::FromStr,
};

use anyhow::anyhow;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    // Not thrown directly by the arg reader
    #[error("Unknown command (try `help`)")]
    UnknownCommand,

    #[error("Missing argument {0}")]
    MissingArgument(usize),

    #[error("Bad argument {0} ({1})")]
    ParseError(usize, String),
}

pub struct Command(String);

impl Command {
    /// Reads the next command line, `None` at the end of input.
    pub fn prompt() -> anyhow::Result<Option<Self>> {
        print!("> ");
        io::stdout().flush()?;

        io::stdin()
            .lines()
            .next()
            .transpose()
            .map(|line| line.map(Self))
            .map_err(|e| anyhow!("Couldn't read command from stdin: {}", e))
    }

    pub fn args(&self) -> CommandArgs<impl Iterator<Item = &str>> {
        CommandArgs {
            iter: self.0.split_whitespace(),
            index: 0,
        }
    }
}

impl From<&str> for Command {
    fn from(line: &str) -> Self {
        Self(line.to_string())
    }
}

pub struct CommandArgs<I> {
    iter: I,
    index: usize,
}

impl<'a, I> CommandArgs<I>
where
    I: Iterator<Item = &'a str>,
{
    pub fn next(&mut self) -> Result<&'a str, CommandError> {
        self.index += 1;

        self.iter
            .next()
            .ok_or(CommandError::MissingArgument(self.index))
    }

    pub fn next_parsed<T>(&mut self) -> Result<T, CommandError>
    where
        T: FromStr,
        <T as FromStr>::Err: Error + 'static,
    {
        let arg_str = self.next()?;

        T::from_str(arg_str).map_err(|e| CommandError::ParseError(self.index, e.to_string()))
    }

    /// Parses a decimal or `0x` prefixed hexadecimal number.
    pub fn next_number(&mut self) -> Result<usize, CommandError> {
        let arg_str = self.next()?;

        let parsed = match arg_str.strip_prefix("0x") {
            Some(hex) => usize::from_str_radix(hex, 16),
            None => arg_str.parse(),
        };

        parsed.map_err(|e| CommandError::ParseError(self.index, e.to_string()))
    }

    /// Like [`Self::next_number`], falling back to `default` if the argument is missing.
    pub fn next_number_or(&mut self, default: usize) -> Result<usize, CommandError> {
        match self.next_number() {
            Err(CommandError::MissingArgument(_)) => Ok(default),
            parsed => parsed,
        }
    }

    /// Index of the last argument handed out, starting at 1.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn remaining(self) -> usize {
        self.iter.count()
    }
}

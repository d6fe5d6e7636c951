// src/input.rs
use lazy_static::lazy_static;
use regex::Regex;
use std::error::Error;
use std::fmt;

use crate::board::Square;
use crate::dashboard::Tab;

lazy_static! {
    static ref COORDS: Regex = Regex::new(r"^(\d+)\s*[,\s]\s*(\d+)$").unwrap();
    static ref ALGEBRAIC: Regex = Regex::new(r"^[a-hA-H][1-8]$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Click(Square),
    SwitchTab(Tab),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Empty,
    UnknownCommand(String),
    UnknownTab(String),
    OutOfRange(String),
}
impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Empty => write!(f, "Nothing entered."),
            InputError::UnknownCommand(cmd) => write!(f, "Unknown command: '{}'. Type 'help' for commands.", cmd),
            InputError::UnknownTab(name) => write!(f, "No such tab: '{}'. Tabs are board, tournaments, lessons, history.", name),
            InputError::OutOfRange(input) => write!(f, "Square '{}' is off the board. Rows and columns run 0-7.", input),
        }
    }
}
impl Error for InputError {}

/// Parses one line typed at the prompt.
pub fn parse_command(input: &str) -> Result<Command, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() { return Err(InputError::Empty); }

    if let Some(caps) = COORDS.captures(trimmed) {
        // digits only, so parse fails only on overflow
        let row = caps[1].parse::<usize>().map_err(|_| InputError::OutOfRange(trimmed.to_string()))?;
        let col = caps[2].parse::<usize>().map_err(|_| InputError::OutOfRange(trimmed.to_string()))?;
        return Square::new(row, col)
            .map(Command::Click)
            .ok_or_else(|| InputError::OutOfRange(trimmed.to_string()));
    }
    if ALGEBRAIC.is_match(trimmed) {
        return Square::from_algebraic(trimmed)
            .map(Command::Click)
            .ok_or_else(|| InputError::OutOfRange(trimmed.to_string()));
    }

    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let command_word = parts.next().unwrap_or("").to_lowercase();
    let argument = parts.next().unwrap_or("").trim().to_lowercase();

    match command_word.as_str() {
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "tab" => Tab::from_name(&argument)
            .map(Command::SwitchTab)
            .ok_or(InputError::UnknownTab(argument)),
        other => Tab::from_name(other)
            .filter(|_| argument.is_empty())
            .map(Command::SwitchTab)
            .ok_or_else(|| InputError::UnknownCommand(trimmed.to_string())),
    }
}

//! Text commands accepted by the interactive loop and `run --moves`.
//!
//! Long forms are `row <i> left|right` and `col <i> up|down`; short forms
//! are `r<i><l|r>` and `c<i><u|d>`. Parsing is case-insensitive. Index
//! bounds are not checked here; the board rejects out-of-range shifts.

use gameboard::grid::{ColumnShift, RowShift};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("missing {0} index")]
    MissingIndex(&'static str),
    #[error("invalid index '{0}'")]
    InvalidIndex(String),
    #[error("invalid {axis} direction '{word}'")]
    InvalidDirection { axis: &'static str, word: String },
    #[error("unexpected trailing input '{0}'")]
    Trailing(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Row(usize, RowShift),
    Column(usize, ColumnShift),
    Reset,
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  row <i> left|right   shift row i one step (short: r<i>l, r<i>r)
  col <i> up|down      shift column i one step (short: c<i>u, c<i>d)
  reset                restore the starting board
  show                 print the board
  help                 print this help
  quit                 leave";

/// Parse a single command line.
///
/// # Errors
///
/// Returns a [`CommandError`] describing the first problem found.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let lower = line.trim().to_ascii_lowercase();
    let mut words = lower.split_whitespace();
    let Some(head) = words.next() else {
        return Err(CommandError::Empty);
    };

    let command = match head {
        "row" | "r" => {
            let index = parse_index(words.next(), "row")?;
            Command::Row(index, parse_row_shift(words.next())?)
        }
        "col" | "column" | "c" => {
            let index = parse_index(words.next(), "column")?;
            Command::Column(index, parse_column_shift(words.next())?)
        }
        "reset" => Command::Reset,
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        short => parse_short(short)?,
    };

    match words.next() {
        Some(extra) => Err(CommandError::Trailing(extra.to_string())),
        None => Ok(command),
    }
}

/// Parse a script of commands separated by `;` or newlines. Blank entries are skipped.
///
/// # Errors
///
/// Returns the first [`CommandError`] in the script.
pub fn parse_script(script: &str) -> Result<Vec<Command>, CommandError> {
    script
        .split([';', '\n'])
        .filter(|part| !part.trim().is_empty())
        .map(parse_command)
        .collect()
}

fn parse_short(word: &str) -> Result<Command, CommandError> {
    let mut chars = word.chars();
    let (Some(axis), Some(dir)) = (chars.next(), chars.next_back()) else {
        return Err(CommandError::Unknown(word.to_string()));
    };
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CommandError::Unknown(word.to_string()));
    }
    let index = parse_index(Some(digits), "")?;
    match (axis, dir) {
        ('r', 'l') => Ok(Command::Row(index, RowShift::Left)),
        ('r', 'r') => Ok(Command::Row(index, RowShift::Right)),
        ('c', 'u') => Ok(Command::Column(index, ColumnShift::Up)),
        ('c', 'd') => Ok(Command::Column(index, ColumnShift::Down)),
        _ => Err(CommandError::Unknown(word.to_string())),
    }
}

fn parse_index(word: Option<&str>, axis: &'static str) -> Result<usize, CommandError> {
    let word = word.ok_or(CommandError::MissingIndex(axis))?;
    word.parse().map_err(|_| CommandError::InvalidIndex(word.to_string()))
}

fn parse_row_shift(word: Option<&str>) -> Result<RowShift, CommandError> {
    match word {
        Some("left" | "l") => Ok(RowShift::Left),
        Some("right" | "r") => Ok(RowShift::Right),
        other => Err(CommandError::InvalidDirection { axis: "row", word: other.unwrap_or_default().to_string() }),
    }
}

fn parse_column_shift(word: Option<&str>) -> Result<ColumnShift, CommandError> {
    match word {
        Some("up" | "u") => Ok(ColumnShift::Up),
        Some("down" | "d") => Ok(ColumnShift::Down),
        other => Err(CommandError::InvalidDirection { axis: "column", word: other.unwrap_or_default().to_string() }),
    }
}

#[cfg(test)]
#[path = "command_test.rs"]
mod tests;

//! Driving a board from text commands.
//!
//! DESIGN
//! ======
//! [`apply`] is the only place commands touch the board; it does no I/O and
//! reports what happened as a [`Flow`]. The interactive loop and the script
//! runner decide what to print for each flow.
//!
//! ERROR HANDLING
//! ==============
//! In interactive play, parse errors and out-of-range shifts are printed
//! and play continues. Scripts stop at the first out-of-range shift.

use std::io::{BufRead, Write};

use gameboard::board::{Board, ShiftOutcome};
use gameboard::grid::GridError;
use tracing::{debug, info};

use crate::command::{Command, HELP, parse_command};
use crate::render::{Glyphs, render_board};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("failed to encode snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// How [`run`] reports the final board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    Board,
    /// A pretty-printed snapshot is the only output; script `show`/`help` output is dropped.
    Json,
}

/// What a command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Shifted(ShiftOutcome),
    Reset,
    Show,
    Help,
    Quit,
}

/// Apply one command to the board.
///
/// # Errors
///
/// Returns the board's [`GridError`] for an out-of-range shift.
pub fn apply(board: &mut Board, command: Command) -> Result<Flow, GridError> {
    debug!(?command, "applying command");
    match command {
        Command::Row(row, dir) => board.shift_row(row, dir).map(Flow::Shifted),
        Command::Column(col, dir) => board.shift_column(col, dir).map(Flow::Shifted),
        Command::Reset => {
            board.reset();
            Ok(Flow::Reset)
        }
        Command::Show => Ok(Flow::Show),
        Command::Help => Ok(Flow::Help),
        Command::Quit => Ok(Flow::Quit),
    }
}

/// Interactive loop: prompt, read a line, apply, print. Ends on `quit` or end of input.
///
/// # Errors
///
/// Returns [`SessionError::Io`] if reading input or writing output fails.
pub fn play<R: BufRead, W: Write>(
    board: &mut Board,
    input: R,
    out: &mut W,
    glyphs: Glyphs,
) -> Result<(), SessionError> {
    writeln!(out, "{}", render_board(board, glyphs))?;
    writeln!(out, "type 'help' for commands")?;
    prompt(out)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            prompt(out)?;
            continue;
        }
        let flow = match parse_command(&line) {
            Ok(command) => apply(board, command),
            Err(e) => {
                writeln!(out, "error: {e}")?;
                prompt(out)?;
                continue;
            }
        };
        match flow {
            Ok(Flow::Quit) => return Ok(()),
            Ok(Flow::Help) => writeln!(out, "{HELP}")?,
            Ok(Flow::Shifted(ShiftOutcome::Ignored)) => {
                writeln!(out, "the board is solved; type 'reset' to play again")?;
            }
            Ok(Flow::Shifted(ShiftOutcome::Solved)) => {
                writeln!(out, "{}", render_board(board, glyphs))?;
                writeln!(out, "every critter is powered! type 'reset' to play again")?;
            }
            Ok(Flow::Shifted(ShiftOutcome::Moved) | Flow::Reset | Flow::Show) => {
                writeln!(out, "{}", render_board(board, glyphs))?;
            }
            Err(e) => writeln!(out, "error: {e}")?,
        }
        prompt(out)?;
    }
    Ok(())
}

/// Apply a parsed script without prompting. `show` and `help` print; `quit` stops early.
///
/// # Errors
///
/// Returns [`SessionError::Grid`] at the first out-of-range shift and
/// [`SessionError::Io`] if writing output fails.
pub fn run_script<W: Write>(
    board: &mut Board,
    commands: &[Command],
    out: &mut W,
    glyphs: Glyphs,
) -> Result<(), SessionError> {
    for (step, command) in commands.iter().enumerate() {
        match apply(board, *command)? {
            Flow::Quit => break,
            Flow::Show => writeln!(out, "{}", render_board(board, glyphs))?,
            Flow::Help => writeln!(out, "{HELP}")?,
            Flow::Shifted(ShiftOutcome::Solved) => info!(step, "solved by script"),
            Flow::Shifted(_) | Flow::Reset => {}
        }
    }
    Ok(())
}

/// Run a script and print the final board in the requested form.
///
/// # Errors
///
/// As [`run_script`], plus [`SessionError::Json`] if the snapshot cannot be encoded.
pub fn run<W: Write>(
    board: &mut Board,
    commands: &[Command],
    out: &mut W,
    glyphs: Glyphs,
    report: Report,
) -> Result<(), SessionError> {
    match report {
        Report::Board => {
            run_script(board, commands, out, glyphs)?;
            writeln!(out, "{}", render_board(board, glyphs))?;
        }
        Report::Json => {
            run_script(board, commands, &mut std::io::sink(), glyphs)?;
            writeln!(out, "{}", serde_json::to_string_pretty(&board.snapshot())?)?;
        }
    }
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> std::io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use std::io::Cursor;

use gameboard::board::Status;
use gameboard::grid::{ColumnShift, RowShift};
use gameboard::level::Level;

use super::*;
use crate::command::parse_script;

const SOLUTION: &str = "r2r; c2u; r0l";

fn reference_board() -> Board {
    Board::new(Level::reference())
}

fn play_lines(board: &mut Board, input: &str) -> String {
    let mut out = Vec::new();
    play(board, Cursor::new(input.to_string()), &mut out, Glyphs::Unicode).unwrap();
    String::from_utf8(out).unwrap()
}

// =============================================================
// apply
// =============================================================

#[test]
fn apply_shifts_and_reports_outcome() {
    let mut board = reference_board();
    assert_eq!(
        apply(&mut board, Command::Row(2, RowShift::Right)),
        Ok(Flow::Shifted(ShiftOutcome::Moved))
    );
    assert_eq!(
        apply(&mut board, Command::Column(2, ColumnShift::Up)),
        Ok(Flow::Shifted(ShiftOutcome::Moved))
    );
    assert_eq!(
        apply(&mut board, Command::Row(0, RowShift::Left)),
        Ok(Flow::Shifted(ShiftOutcome::Solved))
    );
}

#[test]
fn apply_reset_restores_playing() {
    let mut board = reference_board();
    run_script(&mut board, &parse_script(SOLUTION).unwrap(), &mut Vec::new(), Glyphs::Unicode).unwrap();
    assert_eq!(board.status(), Status::Solved);
    assert_eq!(apply(&mut board, Command::Reset), Ok(Flow::Reset));
    assert_eq!(board.status(), Status::Playing);
}

#[test]
fn apply_surfaces_out_of_range() {
    let mut board = reference_board();
    assert_eq!(
        apply(&mut board, Command::Column(4, ColumnShift::Up)),
        Err(GridError::ColumnOutOfBounds { index: 4, size: 4 })
    );
}

#[test]
fn apply_passes_through_queries() {
    let mut board = reference_board();
    assert_eq!(apply(&mut board, Command::Show), Ok(Flow::Show));
    assert_eq!(apply(&mut board, Command::Help), Ok(Flow::Help));
    assert_eq!(apply(&mut board, Command::Quit), Ok(Flow::Quit));
}

// =============================================================
// run_script
// =============================================================

#[test]
fn script_solves_reference_level() {
    let mut board = reference_board();
    let mut out = Vec::new();
    run_script(&mut board, &parse_script(SOLUTION).unwrap(), &mut out, Glyphs::Unicode).unwrap();
    assert_eq!(board.status(), Status::Solved);
    assert!(out.is_empty());
}

#[test]
fn script_stops_at_quit() {
    let mut board = reference_board();
    let commands = parse_script("r2r; quit; c2u; r0l").unwrap();
    run_script(&mut board, &commands, &mut Vec::new(), Glyphs::Unicode).unwrap();
    assert_eq!(board.status(), Status::Playing);
}

#[test]
fn script_fails_on_out_of_range() {
    let mut board = reference_board();
    let commands = parse_script("r2r; r9l; c2u").unwrap();
    let err = run_script(&mut board, &commands, &mut Vec::new(), Glyphs::Unicode).unwrap_err();
    assert!(matches!(err, SessionError::Grid(GridError::RowOutOfBounds { index: 9, .. })));
}

#[test]
fn script_show_prints_board() {
    let mut board = reference_board();
    let mut out = Vec::new();
    run_script(&mut board, &[Command::Show], &mut out, Glyphs::Unicode).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("status: playing"));
}

// =============================================================
// run
// =============================================================

#[test]
fn json_report_is_only_the_snapshot() {
    let mut board = reference_board();
    let commands = parse_script("show; help; r2r; show; c2u; r0l").unwrap();
    let mut out = Vec::new();
    run(&mut board, &commands, &mut out, Glyphs::Unicode, Report::Json).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["status"], "solved");
    assert_eq!(json["powered"].as_array().unwrap().len(), 7);
}

#[test]
fn board_report_keeps_script_output() {
    let mut board = reference_board();
    let commands = parse_script("show; r2r").unwrap();
    let mut out = Vec::new();
    run(&mut board, &commands, &mut out, Glyphs::Unicode, Report::Board).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("status: playing").count(), 2);
}

#[test]
fn json_report_still_fails_on_out_of_range() {
    let mut board = reference_board();
    let commands = parse_script("r9l").unwrap();
    let mut out = Vec::new();
    let err = run(&mut board, &commands, &mut out, Glyphs::Unicode, Report::Json).unwrap_err();
    assert!(matches!(err, SessionError::Grid(GridError::RowOutOfBounds { index: 9, .. })));
    assert!(out.is_empty());
}

// =============================================================
// play
// =============================================================

#[test]
fn play_prints_board_and_prompt() {
    let mut board = reference_board();
    let text = play_lines(&mut board, "");
    assert!(text.starts_with("    0  1  2  3 \n"));
    assert!(text.contains("type 'help' for commands"));
    assert!(text.ends_with("> "));
}

#[test]
fn play_to_solution_announces_win() {
    let mut board = reference_board();
    let text = play_lines(&mut board, "row 2 right\ncol 2 up\nrow 0 left\n");
    assert!(text.contains("every critter is powered!"));
    assert!(text.contains("status: SOLVED"));
    assert_eq!(board.status(), Status::Solved);
}

#[test]
fn play_ignores_shifts_after_solving() {
    let mut board = reference_board();
    let text = play_lines(&mut board, "r2r\nc2u\nr0l\nr1l\n");
    assert!(text.contains("the board is solved"));
    assert_eq!(board.status(), Status::Solved);
}

#[test]
fn play_reports_errors_and_continues() {
    let mut board = reference_board();
    let text = play_lines(&mut board, "dance\nrow 7 left\nr2r\n");
    assert!(text.contains("error: unknown command 'dance'"));
    assert!(text.contains("error: row index 7 out of bounds for grid of size 4"));
    assert_eq!(board.grid().row(2).unwrap()[0].id, 11);
}

#[test]
fn play_stops_at_quit() {
    let mut board = reference_board();
    let text = play_lines(&mut board, "quit\nr2r\n");
    assert_eq!(board.grid(), &Level::reference().to_grid());
    assert!(!text.contains("error"));
}

#[test]
fn play_help_lists_commands() {
    let mut board = reference_board();
    let text = play_lines(&mut board, "help\n");
    assert!(text.contains("row <i> left|right"));
}

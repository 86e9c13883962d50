//! Text rendering of the board.
//!
//! `TextRenderer` implements the core's render contracts. Piece glyphs are
//! chosen from the open edges the connection model reports, so a rotated
//! piece is drawn exactly the way it conducts.
//!
//! Cell legend (three columns per cell):
//!
//! | Cell | Drawn as |
//! |------|----------|
//! | source | `[g]` |
//! | powered piece | `*g*` |
//! | unpowered piece | ` g ` |
//! | powered / unpowered target | `(@)` / `(o)` |
//! | empty | ` . ` |

use gameboard::board::{Board, Status};
use gameboard::connection::{Direction, Edges};
use gameboard::grid::CellKind;
use gameboard::view::{CritterView, PieceView, PuzzlePieceView, render_cell};

/// Glyph set for pieces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Glyphs {
    #[default]
    Unicode,
    Ascii,
}

impl Glyphs {
    /// The glyph for a piece with these open edges.
    #[must_use]
    pub fn for_edges(self, edges: Edges) -> char {
        let open = |dir| edges.is_open(dir);
        let key = (
            open(Direction::North),
            open(Direction::East),
            open(Direction::South),
            open(Direction::West),
        );
        match self {
            Self::Unicode => match key {
                (true, false, true, false) => '│',
                (false, true, false, true) => '─',
                (true, true, false, false) => '└',
                (false, true, true, false) => '┌',
                (false, false, true, true) => '┐',
                (true, false, false, true) => '┘',
                (true, true, false, true) => '┴',
                (true, true, true, false) => '├',
                (false, true, true, true) => '┬',
                (true, false, true, true) => '┤',
                (true, true, true, true) => '┼',
                (true, false, false, false) => '╵',
                (false, true, false, false) => '╶',
                (false, false, true, false) => '╷',
                (false, false, false, true) => '╴',
                (false, false, false, false) => '·',
            },
            Self::Ascii => match key {
                (true, false, true, false) => '|',
                (false, true, false, true) => '-',
                (true, true, false, false) => 'L',
                (false, true, true, false) => 'r',
                (false, false, true, true) => '7',
                (true, false, false, true) => 'J',
                (true, true, false, true) => 'W',
                (true, true, true, false) => 'E',
                (false, true, true, true) => 'T',
                (true, false, true, true) => '3',
                (true, true, true, true) => '+',
                (true, false, false, false) => '^',
                (false, true, false, false) => '>',
                (false, false, true, false) => 'v',
                (false, false, false, true) => '<',
                (false, false, false, false) => '.',
            },
        }
    }
}

/// Renders single cells as three-column strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    pub glyphs: Glyphs,
}

impl PuzzlePieceView for TextRenderer {
    type Output = String;

    fn piece(&mut self, piece: &PieceView) -> String {
        let glyph = self.glyphs.for_edges(piece.edges);
        if piece.is_source {
            format!("[{glyph}]")
        } else if piece.powered {
            format!("*{glyph}*")
        } else {
            format!(" {glyph} ")
        }
    }

    fn empty(&mut self) -> String {
        " . ".to_string()
    }
}

impl CritterView for TextRenderer {
    type Output = String;

    fn critter(&mut self, powered: bool) -> String {
        if powered { "(@)".to_string() } else { "(o)".to_string() }
    }
}

/// Draw the whole board with row/column indices and a status line.
#[must_use]
pub fn render_board(board: &Board, glyphs: Glyphs) -> String {
    let mut renderer = TextRenderer { glyphs };
    let size = board.grid().size();
    let mut out = String::from("   ");
    for col in 0..size {
        out.push_str(&format!("{col:^3}"));
    }
    out.push('\n');

    let mut targets = 0;
    let mut lit = 0;
    for view in board.cell_views() {
        if view.coord.col == 0 {
            out.push_str(&format!("{:>2} ", view.coord.row));
        }
        if view.kind == CellKind::Target {
            targets += 1;
            if view.powered {
                lit += 1;
            }
        }
        out.push_str(&render_cell(&mut renderer, &view));
        if view.coord.col + 1 == size {
            out.push('\n');
        }
    }

    let status = match board.status() {
        Status::Playing => "playing",
        Status::Solved => "SOLVED",
    };
    out.push_str(&format!("status: {status}  critters powered: {lit}/{targets}"));
    out
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;

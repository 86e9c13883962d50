#[cfg(test)]
#[path = "win_test.rs"]
mod win_test;

use crate::grid::{CellKind, Grid};
use crate::power::PoweredSet;

/// Whether every target is powered. A grid without targets is never solved.
#[must_use]
pub fn evaluate(grid: &Grid, powered: &PoweredSet) -> bool {
    let mut targets = grid.iter().filter(|(_, cell)| cell.kind == CellKind::Target).peekable();
    if targets.peek().is_none() {
        return false;
    }
    targets.all(|(coord, _)| powered.contains(coord))
}

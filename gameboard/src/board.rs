//! Board controller.
//!
//! DESIGN
//! ======
//! `Board` exclusively owns the grid. Each shift runs to completion before
//! returning: the grid is mutated, the powered set is recomputed from
//! scratch, and the solved check is re-derived. There are two states:
//!
//! - `Playing`: shifts are applied.
//! - `Solved`: entered when a shift leaves every target powered. Shifts are
//!   ignored until [`Board::reset`].
//!
//! ERROR HANDLING
//! ==============
//! An out-of-range row or column index is an error in either state and
//! leaves the board untouched. An in-range shift while solved is not an
//! error; it reports [`ShiftOutcome::Ignored`].

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::grid::{ColumnShift, Grid, GridError, RowShift};
use crate::level::Level;
use crate::power::{PoweredSet, compute_powered};
use crate::win::evaluate;

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Playing,
    Solved,
}

/// What a shift request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftOutcome {
    /// The board was solved; nothing moved.
    Ignored,
    /// Cells moved and the puzzle is still unsolved.
    Moved,
    /// Cells moved and the puzzle is now solved.
    Solved,
}

/// Serializable view of the whole board at one moment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub grid: Grid,
    pub powered: PoweredSet,
    pub status: Status,
}

/// Owns the grid and keeps the powered set and status in step with it.
#[derive(Debug, Clone)]
pub struct Board {
    level: Level,
    grid: Grid,
    powered: PoweredSet,
    solved: bool,
    status: Status,
}

impl Board {
    /// Start playing `level`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        let grid = level.to_grid();
        let powered = compute_powered(&grid);
        let solved = evaluate(&grid, &powered);
        debug!(size = grid.size(), powered = powered.len(), "board created");
        Self { level, grid, powered, solved, status: Status::Playing }
    }

    // --- Queries ---

    /// Read-only view of the current grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn powered(&self) -> &PoweredSet {
        &self.powered
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Whether every target is powered right now, independent of controller state.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// The level this board was built from and resets to.
    #[must_use]
    pub fn level(&self) -> &Level {
        &self.level
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot { grid: self.grid.clone(), powered: self.powered.clone(), status: self.status }
    }

    // --- Commands ---

    /// Shift row `row` one step.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::RowOutOfBounds`] if `row` is not a valid row index.
    pub fn shift_row(&mut self, row: usize, dir: RowShift) -> Result<ShiftOutcome, GridError> {
        let size = self.grid.size();
        if row >= size {
            return Err(GridError::RowOutOfBounds { index: row, size });
        }
        if self.status == Status::Solved {
            debug!(row, ?dir, "shift ignored, board is solved");
            return Ok(ShiftOutcome::Ignored);
        }
        self.grid.shift_row(row, dir)?;
        debug!(row, ?dir, "row shifted");
        Ok(self.recompute())
    }

    /// Shift column `col` one step.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ColumnOutOfBounds`] if `col` is not a valid column index.
    pub fn shift_column(&mut self, col: usize, dir: ColumnShift) -> Result<ShiftOutcome, GridError> {
        let size = self.grid.size();
        if col >= size {
            return Err(GridError::ColumnOutOfBounds { index: col, size });
        }
        if self.status == Status::Solved {
            debug!(col, ?dir, "shift ignored, board is solved");
            return Ok(ShiftOutcome::Ignored);
        }
        self.grid.shift_column(col, dir)?;
        debug!(col, ?dir, "column shifted");
        Ok(self.recompute())
    }

    /// Restore the level's initial grid and resume play.
    pub fn reset(&mut self) {
        self.grid = self.level.to_grid();
        self.powered = compute_powered(&self.grid);
        self.solved = evaluate(&self.grid, &self.powered);
        self.status = Status::Playing;
        info!(powered = self.powered.len(), "board reset");
    }

    fn recompute(&mut self) -> ShiftOutcome {
        self.powered = compute_powered(&self.grid);
        self.solved = evaluate(&self.grid, &self.powered);
        debug!(powered = self.powered.len(), solved = self.solved, "power recomputed");
        if self.solved {
            self.status = Status::Solved;
            info!("puzzle solved");
            ShiftOutcome::Solved
        } else {
            ShiftOutcome::Moved
        }
    }
}

//! Level definitions.
//!
//! A level is an N×N table of [`LevelCell`] records. It carries no ids; those
//! are assigned row-major when the level is turned into a [`Grid`], so
//! building the same level twice yields equal grids. The reference level is
//! compiled in; other levels can be loaded from JSON (a 2-D array of records)
//! and are validated structurally on the way in.

#[cfg(test)]
#[path = "level_test.rs"]
mod level_test;

use serde::{Deserialize, Serialize};

use crate::connection::Orientation::{Deg0, Deg90, Deg180, Deg270};
use crate::connection::Shape::{Corner, Cross, End, Straight, TJunction};
use crate::connection::{Orientation, Shape};
use crate::consts::REFERENCE_SIZE;
use crate::grid::{Cell, CellId, CellKind, Grid};

/// Error returned when a level is structurally invalid.
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("level has no rows")]
    Empty,
    #[error("row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
    #[error("cell ({row}, {col}) is conductive but has no shape")]
    MissingShape { row: usize, col: usize },
    #[error("cell ({row}, {col}) is not conductive but has a shape or orientation")]
    UnexpectedShape { row: usize, col: usize },
    #[error("invalid level JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One cell of a level definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCell {
    pub kind: CellKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<Shape>,
    /// Defaults to 0° for conductive cells when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
}

impl LevelCell {
    #[must_use]
    pub const fn source(shape: Shape, orientation: Orientation) -> Self {
        Self { kind: CellKind::Source, shape: Some(shape), orientation: Some(orientation) }
    }

    #[must_use]
    pub const fn piece(shape: Shape, orientation: Orientation) -> Self {
        Self { kind: CellKind::Piece, shape: Some(shape), orientation: Some(orientation) }
    }

    #[must_use]
    pub const fn target() -> Self {
        Self { kind: CellKind::Target, shape: None, orientation: None }
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self { kind: CellKind::Empty, shape: None, orientation: None }
    }

    fn to_cell(self, id: CellId) -> Cell {
        match (self.kind, self.shape) {
            (CellKind::Source, Some(shape)) => Cell::source(id, shape, self.orientation.unwrap_or_default()),
            (CellKind::Piece, Some(shape)) => Cell::piece(id, shape, self.orientation.unwrap_or_default()),
            (CellKind::Target, _) => Cell::target(id),
            // Validated levels never reach here with a shapeless conductive cell.
            _ => Cell::empty(id),
        }
    }
}

/// The compiled-in reference level. `row 2 right`, `col 2 up`, `row 0 left` solves it.
pub const REFERENCE_LEVEL: [[LevelCell; REFERENCE_SIZE]; REFERENCE_SIZE] = [
    [
        LevelCell::target(),
        LevelCell::source(End, Deg90),
        LevelCell::piece(Corner, Deg0),
        LevelCell::piece(TJunction, Deg180),
    ],
    [
        LevelCell::piece(Cross, Deg0),
        LevelCell::piece(End, Deg0),
        LevelCell::piece(Straight, Deg90),
        LevelCell::piece(Corner, Deg90),
    ],
    [
        LevelCell::target(),
        LevelCell::piece(Straight, Deg0),
        LevelCell::empty(),
        LevelCell::piece(Straight, Deg0),
    ],
    [
        LevelCell::piece(End, Deg180),
        LevelCell::piece(TJunction, Deg90),
        LevelCell::piece(Corner, Deg270),
        LevelCell::empty(),
    ],
];

/// A validated square level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Level {
    rows: Vec<Vec<LevelCell>>,
}

impl Level {
    /// The compiled-in reference level.
    #[must_use]
    pub fn reference() -> Self {
        Self { rows: REFERENCE_LEVEL.iter().map(|row| row.to_vec()).collect() }
    }

    /// Validate rows of records into a level.
    ///
    /// # Errors
    ///
    /// Returns a [`LevelError`] if the table is empty or not square, or if a
    /// cell's shape does not match its kind.
    pub fn from_rows(rows: Vec<Vec<LevelCell>>) -> Result<Self, LevelError> {
        let size = rows.len();
        if size == 0 {
            return Err(LevelError::Empty);
        }
        for (r, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(LevelError::NotSquare { row: r, len: row.len(), size });
            }
            for (c, cell) in row.iter().enumerate() {
                if cell.kind.is_conductive() {
                    if cell.shape.is_none() {
                        return Err(LevelError::MissingShape { row: r, col: c });
                    }
                } else if cell.shape.is_some() || cell.orientation.is_some() {
                    return Err(LevelError::UnexpectedShape { row: r, col: c });
                }
            }
        }
        Ok(Self { rows })
    }

    /// Parse and validate a level from a JSON 2-D array of records.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::Json`] for malformed JSON and the structural
    /// errors of [`Level::from_rows`] otherwise.
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let rows: Vec<Vec<LevelCell>> = serde_json::from_str(json)?;
        Self::from_rows(rows)
    }

    /// Side length N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Level records, row-major.
    #[must_use]
    pub fn rows(&self) -> &[Vec<LevelCell>] {
        &self.rows
    }

    /// Build a fresh grid, assigning ids row-major from zero.
    #[must_use]
    pub fn to_grid(&self) -> Grid {
        let mut next_id: CellId = 0;
        let mut cells = Vec::with_capacity(self.size() * self.size());
        for record in self.rows.iter().flatten() {
            cells.push(record.to_cell(next_id));
            next_id += 1;
        }
        Grid::from_cells(self.size(), cells)
    }
}

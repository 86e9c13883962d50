//! Grid store: cells and the square grid they live in.
//!
//! The grid is an N×N row-major matrix. Its only mutations are toroidal
//! one-step shifts of a whole row or column, which move cells without
//! touching their attributes. Cell ids travel with the cells, so the set of
//! ids is the same before and after every shift.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use serde::{Deserialize, Serialize};

use crate::connection::{Direction, Edges, Orientation, Shape, open_edges};

/// Stable identity of a cell. Survives shifts.
pub type CellId = u32;

/// What a cell does in the circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    /// Originates power.
    Source,
    /// Conducts power through its open edges.
    Piece,
    /// Must receive power for the puzzle to be solved.
    Target,
    /// Never conducts.
    Empty,
}

impl CellKind {
    /// Whether cells of this kind carry a shape and orientation.
    #[must_use]
    pub fn is_conductive(self) -> bool {
        matches!(self, Self::Source | Self::Piece)
    }
}

/// One grid position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub id: CellId,
    pub kind: CellKind,
    /// Present for sources and pieces only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<Shape>,
    /// Present for sources and pieces only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
}

impl Cell {
    #[must_use]
    pub fn source(id: CellId, shape: Shape, orientation: Orientation) -> Self {
        Self { id, kind: CellKind::Source, shape: Some(shape), orientation: Some(orientation) }
    }

    #[must_use]
    pub fn piece(id: CellId, shape: Shape, orientation: Orientation) -> Self {
        Self { id, kind: CellKind::Piece, shape: Some(shape), orientation: Some(orientation) }
    }

    #[must_use]
    pub fn target(id: CellId) -> Self {
        Self { id, kind: CellKind::Target, shape: None, orientation: None }
    }

    #[must_use]
    pub fn empty(id: CellId) -> Self {
        Self { id, kind: CellKind::Empty, shape: None, orientation: None }
    }

    /// Edges through which this cell conducts. Targets and empty cells have none.
    #[must_use]
    pub fn open_edges(&self) -> Edges {
        if !self.kind.is_conductive() {
            return Edges::NONE;
        }
        self.shape
            .map_or(Edges::NONE, |shape| open_edges(shape, self.orientation.unwrap_or_default()))
    }
}

/// A grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Direction of a row shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowShift {
    /// The leftmost cell wraps to the right end.
    Left,
    /// The rightmost cell wraps to the left end.
    Right,
}

impl RowShift {
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Direction of a column shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnShift {
    /// The top cell wraps to the bottom.
    Up,
    /// The bottom cell wraps to the top.
    Down,
}

impl ColumnShift {
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

/// Error returned by grid shifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("row index {index} out of bounds for grid of size {size}")]
    RowOutOfBounds { index: usize, size: usize },
    #[error("column index {index} out of bounds for grid of size {size}")]
    ColumnOutOfBounds { index: usize, size: usize },
}

/// Square row-major matrix of cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from row-major cells. Callers guarantee `cells.len() == size * size`;
    /// [`crate::level::Level`] is the checked way in.
    pub(crate) fn from_cells(size: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// Side length N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The cell at `coord`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        if coord.row >= self.size || coord.col >= self.size {
            return None;
        }
        self.cells.get(coord.row * self.size + coord.col)
    }

    /// Cells of row `row`, left to right.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.size {
            return None;
        }
        self.cells.get(row * self.size..(row + 1) * self.size)
    }

    /// Every cell with its coordinate, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Cell)> {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Coord::new(i / size, i % size), cell))
    }

    /// The coordinate one step from `coord` in `dir`, if it is inside the grid.
    #[must_use]
    pub fn neighbor(&self, coord: Coord, dir: Direction) -> Option<Coord> {
        let (dr, dc) = dir.offset();
        let row = coord.row.checked_add_signed(dr)?;
        let col = coord.col.checked_add_signed(dc)?;
        (row < self.size && col < self.size).then_some(Coord::new(row, col))
    }

    /// Rotate row `row` by one position.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::RowOutOfBounds`] if `row` is not a valid row index.
    pub fn shift_row(&mut self, row: usize, dir: RowShift) -> Result<(), GridError> {
        if row >= self.size {
            return Err(GridError::RowOutOfBounds { index: row, size: self.size });
        }
        let cells = &mut self.cells[row * self.size..(row + 1) * self.size];
        match dir {
            RowShift::Left => cells.rotate_left(1),
            RowShift::Right => cells.rotate_right(1),
        }
        Ok(())
    }

    /// Rotate column `col` by one position.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ColumnOutOfBounds`] if `col` is not a valid column index.
    pub fn shift_column(&mut self, col: usize, dir: ColumnShift) -> Result<(), GridError> {
        if col >= self.size {
            return Err(GridError::ColumnOutOfBounds { index: col, size: self.size });
        }
        let n = self.size;
        match dir {
            ColumnShift::Up => {
                for row in 0..n.saturating_sub(1) {
                    self.cells.swap(row * n + col, (row + 1) * n + col);
                }
            }
            ColumnShift::Down => {
                for row in (1..n).rev() {
                    self.cells.swap(row * n + col, (row - 1) * n + col);
                }
            }
        }
        Ok(())
    }
}

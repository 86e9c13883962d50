//! Read-only render data and the contracts presentation layers implement.
//!
//! Renderers never touch the grid directly. They receive a [`CellView`] per
//! coordinate, built from the current grid and powered set, and dispatch it
//! through [`render_cell`] to a [`PuzzlePieceView`] for conductive and empty
//! cells or a [`CritterView`] for targets.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::board::Board;
use crate::connection::{Edges, Orientation, Shape};
use crate::grid::{Cell, CellId, CellKind, Coord};
use crate::power::PoweredSet;

/// Everything a renderer needs to draw one conductive cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceView {
    pub shape: Shape,
    pub orientation: Orientation,
    pub edges: Edges,
    pub is_source: bool,
    pub powered: bool,
}

/// Per-coordinate render data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub coord: Coord,
    /// Stable across shifts; renderers can key animations on it.
    pub id: CellId,
    pub kind: CellKind,
    pub piece: Option<PieceView>,
    pub powered: bool,
}

impl CellView {
    #[must_use]
    pub fn new(coord: Coord, cell: &Cell, powered: &PoweredSet) -> Self {
        let is_powered = powered.contains(coord);
        let piece = match (cell.kind.is_conductive(), cell.shape) {
            (true, Some(shape)) => Some(PieceView {
                shape,
                orientation: cell.orientation.unwrap_or_default(),
                edges: cell.open_edges(),
                is_source: cell.kind == CellKind::Source,
                powered: is_powered,
            }),
            _ => None,
        };
        Self { coord, id: cell.id, kind: cell.kind, piece, powered: is_powered }
    }
}

/// Draws pieces (and the blank space of empty cells).
pub trait PuzzlePieceView {
    type Output;

    fn piece(&mut self, piece: &PieceView) -> Self::Output;

    fn empty(&mut self) -> Self::Output;
}

/// Draws a target in its powered or unpowered state.
pub trait CritterView {
    type Output;

    fn critter(&mut self, powered: bool) -> Self::Output;
}

/// Route a cell to the matching render contract.
pub fn render_cell<R>(renderer: &mut R, cell: &CellView) -> <R as PuzzlePieceView>::Output
where
    R: PuzzlePieceView + CritterView<Output = <R as PuzzlePieceView>::Output>,
{
    match (cell.kind, &cell.piece) {
        (CellKind::Target, _) => renderer.critter(cell.powered),
        (_, Some(piece)) => renderer.piece(piece),
        (_, None) => renderer.empty(),
    }
}

impl Board {
    /// Render data for every cell, row-major.
    pub fn cell_views(&self) -> impl Iterator<Item = CellView> + '_ {
        let powered = self.powered();
        self.grid().iter().map(move |(coord, cell)| CellView::new(coord, cell, powered))
    }
}

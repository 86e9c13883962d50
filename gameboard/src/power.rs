//! Power propagation.
//!
//! DESIGN
//! ======
//! Multi-source breadth-first search over an implicit graph whose nodes are
//! grid coordinates. Every source is seeded and marked visited up front. Power
//! crosses from a cell to an orthogonal neighbor when the cell's edge toward
//! the neighbor is open and the neighbor accepts power on the facing side.
//! Acceptance is decided by [`accepts_power`] alone, keyed on the neighbor's
//! kind: targets take power from any side, pieces and sources only through an
//! open facing edge, empty cells never.
//!
//! The result is always computed from scratch; reachability does not depend
//! on visiting order.

#[cfg(test)]
#[path = "power_test.rs"]
mod power_test;

use std::collections::{BTreeSet, VecDeque};

use serde::Serialize;

use crate::connection::Direction;
use crate::grid::{Cell, CellKind, Coord, Grid};

/// Coordinates reachable from any source, sources included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PoweredSet(BTreeSet<Coord>);

impl PoweredSet {
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.0.contains(&coord)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Powered coordinates in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Coord> for PoweredSet {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Whether `neighbor` takes power arriving on its `side`.
#[must_use]
pub fn accepts_power(neighbor: &Cell, side: Direction) -> bool {
    match neighbor.kind {
        CellKind::Target => true,
        CellKind::Source | CellKind::Piece => neighbor.open_edges().is_open(side),
        CellKind::Empty => false,
    }
}

/// Compute every coordinate reachable from the grid's sources.
#[must_use]
pub fn compute_powered(grid: &Grid) -> PoweredSet {
    let size = grid.size();
    let mut visited = vec![false; size * size];
    let mut queue: VecDeque<Coord> = VecDeque::new();

    for (coord, cell) in grid.iter() {
        if cell.kind == CellKind::Source {
            visited[coord.row * size + coord.col] = true;
            queue.push_back(coord);
        }
    }

    while let Some(coord) = queue.pop_front() {
        let Some(cell) = grid.get(coord) else {
            continue;
        };
        if cell.kind == CellKind::Empty {
            continue;
        }

        let edges = cell.open_edges();
        for dir in edges.open() {
            let Some(next) = grid.neighbor(coord, dir) else {
                continue;
            };
            let idx = next.row * size + next.col;
            if visited[idx] {
                continue;
            }
            let Some(neighbor) = grid.get(next) else {
                continue;
            };
            if accepts_power(neighbor, dir.opposite()) {
                visited[idx] = true;
                queue.push_back(next);
            }
        }
    }

    grid.iter()
        .map(|(coord, _)| coord)
        .filter(|coord| visited[coord.row * size + coord.col])
        .collect()
}

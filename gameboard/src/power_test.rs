use super::*;
use crate::connection::{Orientation, Shape};
use crate::grid::{ColumnShift, RowShift};
use crate::level::{Level, LevelCell};

// =============================================================
// Helpers
// =============================================================

/// An N×N grid of empty cells with `placed` cells overlaid.
fn grid_with(size: usize, placed: &[((usize, usize), LevelCell)]) -> Grid {
    let mut rows = vec![vec![LevelCell::empty(); size]; size];
    for ((row, col), cell) in placed {
        rows[*row][*col] = *cell;
    }
    Level::from_rows(rows).unwrap().to_grid()
}

fn coords(list: &[(usize, usize)]) -> PoweredSet {
    list.iter().map(|(r, c)| Coord::new(*r, *c)).collect()
}

fn source(shape: Shape, orientation: Orientation) -> LevelCell {
    LevelCell::source(shape, orientation)
}

fn piece(shape: Shape, orientation: Orientation) -> LevelCell {
    LevelCell::piece(shape, orientation)
}

// =============================================================
// Edge matching
// =============================================================

#[test]
fn end_source_powers_facing_end_piece() {
    let grid = grid_with(
        4,
        &[((0, 0), source(Shape::End, Orientation::Deg90)), ((0, 1), piece(Shape::End, Orientation::Deg270))],
    );
    assert_eq!(compute_powered(&grid), coords(&[(0, 0), (0, 1)]));
}

#[test]
fn turning_piece_away_cuts_power() {
    let grid = grid_with(
        4,
        &[((0, 0), source(Shape::End, Orientation::Deg90)), ((0, 1), piece(Shape::End, Orientation::Deg0))],
    );
    assert_eq!(compute_powered(&grid), coords(&[(0, 0)]));
}

#[test]
fn north_facing_source_powers_nothing_on_top_row() {
    let grid = grid_with(
        4,
        &[((0, 0), source(Shape::End, Orientation::Deg0)), ((0, 1), piece(Shape::End, Orientation::Deg270))],
    );
    assert_eq!(compute_powered(&grid), coords(&[(0, 0)]));
}

#[test]
fn neighbor_open_toward_closed_edge_is_not_powered() {
    let grid = grid_with(
        3,
        &[((1, 0), source(Shape::End, Orientation::Deg0)), ((1, 1), piece(Shape::End, Orientation::Deg270))],
    );
    assert_eq!(compute_powered(&grid), coords(&[(1, 0)]));
}

#[test]
fn power_travels_along_a_path() {
    let grid = grid_with(
        3,
        &[
            ((0, 0), source(Shape::End, Orientation::Deg90)),
            ((0, 1), piece(Shape::Corner, Orientation::Deg180)),
            ((1, 1), piece(Shape::Straight, Orientation::Deg0)),
            ((2, 1), piece(Shape::TJunction, Orientation::Deg0)),
            ((2, 0), piece(Shape::End, Orientation::Deg90)),
            ((2, 2), piece(Shape::Cross, Orientation::Deg0)),
        ],
    );
    assert_eq!(compute_powered(&grid), coords(&[(0, 0), (0, 1), (1, 1), (2, 0), (2, 1), (2, 2)]));
}

#[test]
fn loops_terminate() {
    let grid = grid_with(
        2,
        &[
            ((0, 0), source(Shape::Corner, Orientation::Deg90)),
            ((0, 1), piece(Shape::Corner, Orientation::Deg180)),
            ((1, 1), piece(Shape::Corner, Orientation::Deg270)),
            ((1, 0), piece(Shape::Corner, Orientation::Deg0)),
        ],
    );
    assert_eq!(compute_powered(&grid).len(), 4);
}

// =============================================================
// Targets and empty cells
// =============================================================

#[test]
fn target_accepts_from_any_open_edge() {
    for (src, dir) in [
        ((0, 1), Orientation::Deg180),
        ((1, 2), Orientation::Deg270),
        ((2, 1), Orientation::Deg0),
        ((1, 0), Orientation::Deg90),
    ] {
        let grid = grid_with(3, &[(src, source(Shape::End, dir)), ((1, 1), LevelCell::target())]);
        assert!(compute_powered(&grid).contains(Coord::new(1, 1)), "source at {src:?}");
    }
}

#[test]
fn target_does_not_forward_power() {
    let grid = grid_with(
        3,
        &[
            ((0, 0), source(Shape::End, Orientation::Deg90)),
            ((0, 1), LevelCell::target()),
            ((0, 2), piece(Shape::Cross, Orientation::Deg0)),
        ],
    );
    assert_eq!(compute_powered(&grid), coords(&[(0, 0), (0, 1)]));
}

#[test]
fn target_next_to_closed_edge_stays_dark() {
    let grid = grid_with(3, &[((0, 0), source(Shape::End, Orientation::Deg180)), ((0, 1), LevelCell::target())]);
    assert!(!compute_powered(&grid).contains(Coord::new(0, 1)));
}

#[test]
fn empty_cells_block_power() {
    let grid = grid_with(
        3,
        &[((1, 1), source(Shape::Cross, Orientation::Deg0)), ((0, 0), piece(Shape::Cross, Orientation::Deg0))],
    );
    assert_eq!(compute_powered(&grid), coords(&[(1, 1)]));
}

#[test]
fn no_sources_means_nothing_powered() {
    let grid = grid_with(2, &[((0, 0), piece(Shape::Cross, Orientation::Deg0)), ((0, 1), LevelCell::target())]);
    assert!(compute_powered(&grid).is_empty());
}

#[test]
fn multiple_sources_union_their_reach() {
    let grid = grid_with(
        4,
        &[
            ((0, 0), source(Shape::End, Orientation::Deg90)),
            ((0, 1), LevelCell::target()),
            ((3, 3), source(Shape::End, Orientation::Deg270)),
            ((3, 2), LevelCell::target()),
        ],
    );
    assert_eq!(compute_powered(&grid), coords(&[(0, 0), (0, 1), (3, 2), (3, 3)]));
}

#[test]
fn sources_are_powered_even_when_isolated() {
    let grid = grid_with(2, &[((1, 1), source(Shape::End, Orientation::Deg0))]);
    assert_eq!(compute_powered(&grid), coords(&[(1, 1)]));
}

// =============================================================
// accepts_power
// =============================================================

#[test]
fn accepts_power_is_keyed_on_kind() {
    let target = Cell::target(0);
    let empty = Cell::empty(1);
    let piece = Cell::piece(2, Shape::End, Orientation::Deg0);
    for side in Direction::ALL {
        assert!(accepts_power(&target, side));
        assert!(!accepts_power(&empty, side));
    }
    assert!(accepts_power(&piece, Direction::North));
    assert!(!accepts_power(&piece, Direction::South));
}

// =============================================================
// Reference level
// =============================================================

#[test]
fn reference_level_starts_with_only_the_source() {
    let grid = Level::reference().to_grid();
    assert_eq!(compute_powered(&grid), coords(&[(0, 1)]));
}

#[test]
fn reference_level_solution_powers_both_targets() {
    let mut grid = Level::reference().to_grid();
    grid.shift_row(2, RowShift::Right).unwrap();
    grid.shift_column(2, ColumnShift::Up).unwrap();
    grid.shift_row(0, RowShift::Left).unwrap();
    assert_eq!(
        compute_powered(&grid),
        coords(&[(0, 0), (0, 1), (0, 2), (0, 3), (1, 2), (2, 1), (2, 2)])
    );
}

#[test]
fn powered_set_serializes_sorted() {
    let set = coords(&[(1, 0), (0, 2)]);
    let json = serde_json::to_value(&set).unwrap();
    assert_eq!(json, serde_json::json!([{ "row": 0, "col": 2 }, { "row": 1, "col": 0 }]));
}

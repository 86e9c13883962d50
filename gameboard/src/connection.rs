//! Connection model: which edges of a piece conduct power.
//!
//! Every conductive cell has a [`Shape`] and an [`Orientation`]. The shape
//! fixes which edges are open at 0°, and the orientation rotates that set
//! clockwise in quarter turns. [`open_edges`] is the only place this rotation
//! happens; propagation and rendering both go through it.

#[cfg(test)]
#[path = "connection_test.rs"]
mod connection_test;

use serde::{Deserialize, Serialize};

use crate::consts::{EDGE_COUNT, QUARTER_TURN_DEGREES};

/// One of the four orthogonal sides of a cell, in clockwise order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions, clockwise from north.
    pub const ALL: [Direction; EDGE_COUNT] = [Self::North, Self::East, Self::South, Self::West];

    /// Position of this direction in an edge vector.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// The side facing this one across a shared edge.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Row/column step taken when moving one cell in this direction.
    #[must_use]
    pub fn offset(self) -> (isize, isize) {
        match self {
            Self::North => (-1, 0),
            Self::East => (0, 1),
            Self::South => (1, 0),
            Self::West => (0, -1),
        }
    }
}

/// Conductive piece shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// Open north and south.
    Straight,
    /// Open north and east.
    Corner,
    /// Open north, east and west.
    TJunction,
    /// Open on every side.
    Cross,
    /// Open north only. Used for sources and dead ends.
    End,
}

impl Shape {
    /// Edge openness at 0°.
    #[must_use]
    pub fn canonical_edges(self) -> Edges {
        match self {
            Self::Straight => Edges([true, false, true, false]),
            Self::Corner => Edges([true, true, false, false]),
            Self::TJunction => Edges([true, true, false, true]),
            Self::Cross => Edges([true, true, true, true]),
            Self::End => Edges([true, false, false, false]),
        }
    }
}

/// Error returned when converting a degree value that is not a quarter turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid orientation: {0} (expected 0, 90, 180 or 270)")]
pub struct OrientationError(pub u16);

/// Clockwise rotation of a piece in quarter turns.
///
/// Serialized as its degree value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Orientation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Orientation {
    /// Number of clockwise quarter turns.
    #[must_use]
    pub fn quarter_turns(self) -> usize {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 1,
            Self::Deg180 => 2,
            Self::Deg270 => 3,
        }
    }

    /// Rotation in degrees.
    #[must_use]
    pub fn degrees(self) -> u16 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => QUARTER_TURN_DEGREES,
            Self::Deg180 => 2 * QUARTER_TURN_DEGREES,
            Self::Deg270 => 3 * QUARTER_TURN_DEGREES,
        }
    }
}

impl TryFrom<u16> for Orientation {
    type Error = OrientationError;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Self::Deg0),
            90 => Ok(Self::Deg90),
            180 => Ok(Self::Deg180),
            270 => Ok(Self::Deg270),
            other => Err(OrientationError(other)),
        }
    }
}

impl From<Orientation> for u16 {
    fn from(orientation: Orientation) -> Self {
        orientation.degrees()
    }
}

/// Open/closed state of the four edges, indexed by [`Direction::index`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Edges(pub [bool; EDGE_COUNT]);

impl Edges {
    /// No open edges.
    pub const NONE: Edges = Edges([false; EDGE_COUNT]);

    /// Whether the edge on side `dir` conducts.
    #[must_use]
    pub fn is_open(self, dir: Direction) -> bool {
        self.0[dir.index()]
    }

    /// Open sides, clockwise from north.
    pub fn open(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |dir| self.is_open(*dir))
    }

    /// Rotate clockwise by `turns` quarter turns; north moves to east.
    #[must_use]
    pub fn rotated(self, turns: usize) -> Self {
        let mut out = [false; EDGE_COUNT];
        for (i, open) in self.0.iter().enumerate() {
            out[(i + turns) % EDGE_COUNT] = *open;
        }
        Edges(out)
    }
}

/// Open edges of `shape` rotated clockwise by `orientation`.
#[must_use]
pub fn open_edges(shape: Shape, orientation: Orientation) -> Edges {
    shape.canonical_edges().rotated(orientation.quarter_turns())
}

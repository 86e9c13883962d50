//! Shared constants for the gameboard crate.

// ── Grid ────────────────────────────────────────────────────────

/// Side length of the reference level.
pub const REFERENCE_SIZE: usize = 4;

// ── Connection model ────────────────────────────────────────────

/// Number of orthogonal edges on a cell.
pub const EDGE_COUNT: usize = 4;

/// Degrees per quarter turn.
pub const QUARTER_TURN_DEGREES: u16 = 90;

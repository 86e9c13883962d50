//! Circuit-routing sliding puzzle core.
//!
//! A square grid of conductive pieces is rearranged by cyclically shifting
//! whole rows and columns. After every shift the set of cells reachable from
//! the power sources is recomputed, and the puzzle is solved once every
//! target cell ("critter") is powered. Nothing in this crate knows how cells
//! are drawn; presentation layers read the board through [`board::Board`]'s
//! accessors and the contracts in [`view`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`connection`] | Open edges of a piece for a given shape and orientation |
//! | [`grid`] | Cell types and the mutable grid with toroidal shifts |
//! | [`power`] | Breadth-first power propagation from every source |
//! | [`win`] | Solved check over targets and the powered set |
//! | [`board`] | Controller tying shifts, propagation and status together |
//! | [`level`] | Level records, the reference level and JSON loading |
//! | [`view`] | Read-only per-cell render data and render contracts |
//! | [`consts`] | Shared constants |

pub mod board;
pub mod connection;
pub mod consts;
pub mod grid;
pub mod level;
pub mod power;
pub mod view;
pub mod win;

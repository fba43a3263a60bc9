//! **knightquest-core** — lattice geometry for knight paths (core types).
//!
//! This crate provides the foundational types shared across the
//! *knightquest* workspace: the [`Point`] lattice vector and the knight's
//! move set.

pub mod geom;
pub mod knight;

pub use geom::Point;
pub use knight::{BASE_U, BASE_V, KNIGHT_MOVES, is_knight_move, is_knight_walk};

//! Knight distances and shortest paths on an unbounded board.
//!
//! This crate answers two questions for a lone knight on an infinite,
//! empty chessboard without searching the board:
//!
//! - **Distance**: the minimum number of moves between two squares, in
//!   constant time ([`knight_distance`]).
//! - **Path**: a concrete shortest route between them, built one move at a
//!   time from the distance formula ([`knight_path`], [`KnightQuest`]).
//!
//! Both rest on a symmetry reduction ([`symmetry`]) that folds any
//! displacement into the octant `0 <= y <= x`, and on a closed-form move
//! count over that octant ([`SequenceIndices`]).
//!
//! A breadth-first [`BfsOracle`] is provided as ground truth for testing.
//!
//! | Item | Cost |
//! |---|---|
//! | [`knight_distance`] | O(1) |
//! | [`knight_path`] | O(distance) |
//! | [`BfsOracle::path`] | O(distance²) squares visited |

mod bfs;
mod distance;
mod neighbors;
mod quest;
mod sequence;
pub mod symmetry;
mod traits;

pub use bfs::BfsOracle;
pub use distance::{displacement_distance, knight_distance};
pub use neighbors::KnightPather;
pub use quest::{KnightQuest, QuestOutcome, Step, knight_path};
pub use sequence::{SequenceIndices, canonical_distance};
pub use traits::Pather;

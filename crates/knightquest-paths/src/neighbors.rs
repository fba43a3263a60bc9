use knightquest_core::{KNIGHT_MOVES, Point};

use crate::traits::Pather;

/// [`Pather`] for a lone knight on an empty, unbounded board.
#[derive(Copy, Clone, Debug, Default)]
pub struct KnightPather;

impl Pather for KnightPather {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(KNIGHT_MOVES.iter().map(|&k| p + k));
    }
}

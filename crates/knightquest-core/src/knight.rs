//! The knight's move set.

use crate::geom::Point;

/// Base knight vector `(1, 2)`.
pub const BASE_U: Point = Point::new(1, 2);

/// Base knight vector `(2, 1)`.
pub const BASE_V: Point = Point::new(2, 1);

/// All eight knight moves, clockwise from `(-2, -1)`.
pub const KNIGHT_MOVES: [Point; 8] = [
    Point::new(-2, -1),
    Point::new(-1, -2),
    Point::new(1, -2),
    Point::new(2, -1),
    Point::new(2, 1),
    Point::new(1, 2),
    Point::new(-1, 2),
    Point::new(-2, 1),
];

/// Whether `d` is a single knight move, i.e. its components are a
/// permutation of `(±1, ±2)`.
#[inline]
pub fn is_knight_move(d: Point) -> bool {
    let a = d.abs();
    (a.x == 1 && a.y == 2) || (a.x == 2 && a.y == 1)
}

/// Whether every consecutive pair in `path` is one knight move apart.
///
/// Empty and single-square paths are trivially connected.
pub fn is_knight_walk(path: &[Point]) -> bool {
    path.windows(2).all(|w| is_knight_move(w[1] - w[0]))
}

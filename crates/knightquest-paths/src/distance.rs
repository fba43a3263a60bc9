use knightquest_core::Point;

use crate::sequence::canonical_distance;

/// Minimum number of knight moves between two squares.
///
/// Symmetric in its arguments. Evaluates in constant time and is defined
/// for every pair of `i32` squares: the difference is taken in `i64`.
#[inline]
pub fn knight_distance(a: Point, b: Point) -> i64 {
    offset_distance(
        i64::from(a.x) - i64::from(b.x),
        i64::from(a.y) - i64::from(b.y),
    )
}

/// Minimum number of knight moves covering displacement `d`.
#[inline]
pub fn displacement_distance(d: Point) -> i64 {
    offset_distance(i64::from(d.x), i64::from(d.y))
}

// Fold into the canonical octant and evaluate.
fn offset_distance(dx: i64, dy: i64) -> i64 {
    let (ax, ay) = (dx.abs(), dy.abs());
    canonical_distance(ax.max(ay), ax.min(ay))
}

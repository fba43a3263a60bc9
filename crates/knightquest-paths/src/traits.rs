use knightquest_core::Point;

/// Minimal search interface: neighbor enumeration on the unbounded lattice.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

//! Dihedral symmetry reduction of knight displacements.
//!
//! Knight distance is invariant under reflection across both axes and the
//! main diagonal, so any displacement can be folded into the canonical
//! octant `0 <= y <= x` before evaluation. The quadrant index records how
//! far the base knight vectors must be rotated to point back along the
//! original displacement.

use knightquest_core::Point;

/// Rotation index for a displacement: the number of counter-clockwise
/// quarter-turns that carry the first-quadrant base vectors into the
/// quadrant of `d`.
///
/// Axes belong to the quadrant on their counter-clockwise side except the
/// negative y-axis, which belongs to quadrant 3. The unit diagonals
/// (`|dx| == |dy| == 1`) get one extra turn: from those squares the base
/// vectors of their own quadrant overshoot, while the next quadrant's pair
/// reaches them in two moves. The result is therefore in `0..=4`; rotating
/// by 4 is the identity.
#[inline]
pub fn quadrant_index(d: Point) -> i32 {
    let base = match (d.x >= 0, d.y >= 0) {
        (true, true) => 0,
        (false, true) => 1,
        (false, false) => 2,
        (true, false) => 3,
    };
    if d.x.abs() == 1 && d.y.abs() == 1 {
        base + 1
    } else {
        base
    }
}

/// Fold `d` into the canonical octant: `(max(|dx|, |dy|), min(|dx|, |dy|))`.
#[inline]
pub fn canonical(d: Point) -> Point {
    let a = d.abs();
    Point::new(a.x.max(a.y), a.x.min(a.y))
}

/// A displacement reduced by symmetry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Reduction {
    /// Quarter-turns to apply to the base vectors, see [`quadrant_index`].
    pub quadrant: i32,
    /// Canonical representative, see [`canonical`].
    pub canonical: Point,
}

impl Reduction {
    /// Reduce displacement `d`.
    #[inline]
    pub fn of(d: Point) -> Self {
        Self {
            quadrant: quadrant_index(d),
            canonical: canonical(d),
        }
    }

    /// Rotate a base vector into this displacement's quadrant.
    #[inline]
    pub fn orient(self, base: Point) -> Point {
        base.rotate(self.quadrant)
    }
}

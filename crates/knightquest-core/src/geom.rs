//! Geometry primitives: [`Point`] on the unbounded integer lattice.
//!
//! Points double as squares and as displacements between squares. X grows
//! right and Y grows up, so [`Point::rotate90`] is a counter-clockwise
//! quarter-turn.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Rotate by 90° counter-clockwise: `(x, y) -> (-y, x)`.
    #[inline]
    pub const fn rotate90(self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }

    /// Rotate by `quarter_turns` × 90° counter-clockwise.
    ///
    /// Negative counts rotate clockwise; any multiple of four is the identity.
    /// The result is always an exact lattice point.
    #[inline]
    pub const fn rotate(self, quarter_turns: i32) -> Self {
        match quarter_turns.rem_euclid(4) {
            0 => self,
            1 => Self::new(-self.y, self.x),
            2 => Self::new(-self.x, -self.y),
            _ => Self::new(self.y, -self.x),
        }
    }

    /// Dot product with `other`.
    #[inline]
    pub const fn dot(self, other: Self) -> i32 {
        self.x * other.x + self.y * other.y
    }

    /// Component-wise absolute value.
    #[inline]
    pub const fn abs(self) -> Self {
        Self {
            x: self.x.abs(),
            y: self.y.abs(),
        }
    }

    /// Whether this is the origin.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Chebyshev (L∞) norm.
    #[inline]
    pub fn chebyshev_norm(self) -> i32 {
        self.x.abs().max(self.y.abs())
    }
}

// --- trait impls for Point ---

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<i32> for Point {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<i32> for Point {
    type Output = Self;
    #[inline]
    fn div(self, rhs: i32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
        assert_eq!(a * 3, Point::new(3, 6));
        assert_eq!(b / 2, Point::new(1, 2));
        assert_eq!(-a, Point::new(-1, -2));
    }

    #[test]
    fn rotate90_is_counter_clockwise() {
        assert_eq!(Point::new(1, 0).rotate90(), Point::new(0, 1));
        assert_eq!(Point::new(0, 1).rotate90(), Point::new(-1, 0));
        assert_eq!(Point::new(1, 2).rotate90(), Point::new(-2, 1));
    }

    #[test]
    fn rotate_matches_repeated_quarter_turns() {
        let p = Point::new(2, 1);
        let mut q = p;
        for k in 0..8 {
            assert_eq!(p.rotate(k), q, "k = {k}");
            q = q.rotate90();
        }
        assert_eq!(p.rotate(4), p);
        assert_eq!(p.rotate(-1), Point::new(1, -2));
    }

    #[test]
    fn dot_and_abs() {
        assert_eq!(Point::new(1, 2).dot(Point::new(-3, 4)), 5);
        assert_eq!(Point::new(-3, 4).abs(), Point::new(3, 4));
        assert_eq!(Point::new(-3, 4).chebyshev_norm(), 4);
        assert!(Point::ZERO.is_zero());
        assert!(!Point::new(0, 1).is_zero());
    }

    #[test]
    fn display_format() {
        assert_eq!(Point::new(-4, 7).to_string(), "(-4, 7)");
    }

    #[test]
    fn hash_follows_value() {
        let mut set = HashSet::new();
        set.insert(Point::new(1, 2));
        set.insert(Point::from((1, 2)));
        set.insert(Point::new(2, 1));
        assert_eq!(set.len(), 2);
    }
}

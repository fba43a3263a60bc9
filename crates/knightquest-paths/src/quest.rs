//! Greedy shortest-path reconstruction from the closed-form distance.
//!
//! The path is grown backwards from the target. At every square the two
//! base knight vectors are rotated into the quadrant of the remaining
//! displacement and whichever one lowers the remaining distance by exactly
//! one is taken. When neither does, the move best aligned with the
//! displacement is taken instead and counted as a fallback.

use knightquest_core::{BASE_U, BASE_V, Point};

use crate::distance::displacement_distance;
use crate::symmetry::Reduction;

/// What a single [`KnightQuest::advance`] call did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// The endpoint already is the start square; nothing was appended.
    Done,
    /// The displacement was `count` repetitions of knight move `unit`; all
    /// of them were appended at once.
    Run { unit: Point, count: i32 },
    /// A move that lowers the remaining distance by exactly one.
    Exact(Point),
    /// A move chosen by alignment because no candidate lowered the
    /// remaining distance by exactly one.
    Fallback(Point),
}

/// Result of a finished reconstruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestOutcome {
    /// Start-to-target path, both endpoints included.
    pub path: Vec<Point>,
    /// Number of fallback moves taken.
    pub fallbacks: u32,
}

/// Path reconstructor between two squares.
///
/// Works in `i32` squares: the displacement between `start` and `target`
/// must fit in an `i32` on each axis, and the path may pass up to two
/// squares outside the rectangle the two span. Memory grows with the
/// distance; evaluate [`knight_distance`](crate::knight_distance) first
/// when the endpoints may be far apart.
///
/// ```
/// use knightquest_core::Point;
/// use knightquest_paths::KnightQuest;
///
/// let path = KnightQuest::new(Point::new(0, 0), Point::new(7, 3)).path();
/// assert_eq!(path.first(), Some(&Point::new(0, 0)));
/// assert_eq!(path.last(), Some(&Point::new(7, 3)));
/// assert_eq!(path.len(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct KnightQuest {
    start: Point,
    target: Point,
    // Target first, grows towards `start`.
    trail: Vec<Point>,
    fallbacks: u32,
}

impl KnightQuest {
    /// Create a reconstructor for a path from `start` to `target`.
    pub fn new(start: Point, target: Point) -> Self {
        Self {
            start,
            target,
            trail: vec![target],
            fallbacks: 0,
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn target(&self) -> Point {
        self.target
    }

    /// Number of fallback moves taken so far.
    pub fn fallback_count(&self) -> u32 {
        self.fallbacks
    }

    /// Current end of the partial path (the square closest to `start`).
    #[inline]
    pub fn endpoint(&self) -> Point {
        // `trail` starts non-empty and is only ever appended to.
        self.trail[self.trail.len() - 1]
    }

    /// Knight distance still to cover.
    #[inline]
    pub fn remaining(&self) -> i64 {
        displacement_distance(self.start - self.endpoint())
    }

    /// The partial path, target first.
    pub fn trail(&self) -> &[Point] {
        &self.trail
    }

    /// Extend the partial path by one decision.
    pub fn advance(&mut self) -> Step {
        let last = self.endpoint();
        let d = self.start - last;
        if d.is_zero() {
            return Step::Done;
        }

        if let Some((unit, count)) = base_multiple(d) {
            self.trail.extend((1..=count).map(|i| last + unit * i));
            log::trace!("run of {count} x {unit} from {last}");
            return Step::Run { unit, count };
        }

        let reduction = Reduction::of(d);
        let s = displacement_distance(d);
        let u = reduction.orient(BASE_U);
        let v = reduction.orient(BASE_V);
        let su = displacement_distance(d - u);
        let sv = displacement_distance(d - v);

        let step = if s - su == 1 {
            Step::Exact(u)
        } else if s - sv == 1 {
            Step::Exact(v)
        } else {
            let k = if u.dot(d) >= v.dot(d) { u } else { v };
            self.fallbacks += 1;
            log::debug!(
                "fallback move {k} at {last} (remaining {d}, distance {s}, candidates {su}/{sv})"
            );
            Step::Fallback(k)
        };

        if let Step::Exact(k) | Step::Fallback(k) = step {
            self.trail.push(last + k);
            log::trace!("{last} -> {}", last + k);
        }
        step
    }

    /// Run to completion and return the path from start to target.
    pub fn path(self) -> Vec<Point> {
        self.into_outcome().path
    }

    /// Run to completion and return the path together with the number of
    /// fallback moves it needed.
    pub fn into_outcome(mut self) -> QuestOutcome {
        while self.remaining() > 0 {
            self.advance();
        }
        let mut path = self.trail;
        path.reverse();
        QuestOutcome {
            path,
            fallbacks: self.fallbacks,
        }
    }
}

/// Shortest knight path from `a` to `b`, both endpoints included.
pub fn knight_path(a: Point, b: Point) -> Vec<Point> {
    KnightQuest::new(a, b).path()
}

/// If `d` is a nonzero multiple of a knight move, return the unit move and
/// the multiple.
fn base_multiple(d: Point) -> Option<(Point, i32)> {
    let a = d.abs();
    let (hi, lo) = (a.x.max(a.y), a.x.min(a.y));
    if lo != 0 && hi == 2 * lo {
        Some((d / lo, lo))
    } else {
        None
    }
}

//! A single start/target check against the breadth-first oracle.

use std::time::{Duration, Instant};

use knightquest_core::{Point, is_knight_walk};
use knightquest_paths::{BfsOracle, KnightQuest, knight_distance};

/// Whether `path` begins at `start`, ends at `target` and consists only of
/// knight moves.
pub fn is_valid_knight_path(path: &[Point], start: Point, target: Point) -> bool {
    path.first() == Some(&start) && path.last() == Some(&target) && is_knight_walk(path)
}

/// `baseline / measured`, or `None` when `measured` is too short to time.
fn speedup(baseline: Duration, measured: Duration) -> Option<f64> {
    if measured.is_zero() {
        None
    } else {
        Some(baseline.as_secs_f64() / measured.as_secs_f64())
    }
}

/// Everything measured for one case.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaseResult {
    pub start: Point,
    pub target: Point,
    /// Path from the closed-form reconstructor.
    pub path_kq: Vec<Point>,
    /// Closed-form distance.
    pub kq_eval: i64,
    /// Path from the oracle; empty when the oracle gave up.
    pub path_bfs: Vec<Point>,
    pub valid_kq: bool,
    pub valid_bfs: bool,
    /// `kq_eval` equals the oracle's move count.
    pub eval_matches: bool,
    pub same_length: bool,
    pub same_path: bool,
    pub time_kq: Duration,
    pub time_bfs: Duration,
    pub time_eval: Duration,
    /// Oracle time over reconstruction time.
    pub kq_speedup: Option<f64>,
    /// Oracle time over evaluation time.
    pub eval_speedup: Option<f64>,
    pub fallbacks: u32,
    pub failed: bool,
}

/// One `(start, target)` pair to check.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KnightPathCase {
    pub start: Point,
    pub target: Point,
}

impl KnightPathCase {
    pub fn new(start: Point, target: Point) -> Self {
        Self { start, target }
    }

    /// Reconstruct, evaluate and search, timing each, and compare.
    ///
    /// The case fails unless both paths are valid, have the same length,
    /// and the evaluated distance equals the oracle's move count.
    pub fn run(&self, oracle: &mut BfsOracle) -> CaseResult {
        let (start, target) = (self.start, self.target);

        let t0 = Instant::now();
        let outcome = KnightQuest::new(start, target).into_outcome();
        let time_kq = t0.elapsed();

        let t0 = Instant::now();
        let kq_eval = knight_distance(start, target);
        let time_eval = t0.elapsed();

        let t0 = Instant::now();
        let path_bfs = oracle.path(start, target).unwrap_or_default();
        let time_bfs = t0.elapsed();

        let path_kq = outcome.path;
        let valid_kq = is_valid_knight_path(&path_kq, start, target);
        let valid_bfs = is_valid_knight_path(&path_bfs, start, target);
        let eval_matches = valid_bfs && kq_eval as usize + 1 == path_bfs.len();
        let same_length = path_kq.len() == path_bfs.len();
        let same_path = path_kq == path_bfs;
        let failed = !(valid_kq && valid_bfs && same_length && eval_matches);

        if failed {
            log::warn!(
                "case {start} -> {target} failed: eval {kq_eval}, kq {} moves, bfs {} squares",
                path_kq.len() as i64 - 1,
                path_bfs.len()
            );
        }

        CaseResult {
            start,
            target,
            path_kq,
            kq_eval,
            path_bfs,
            valid_kq,
            valid_bfs,
            eval_matches,
            same_length,
            same_path,
            time_kq,
            time_bfs,
            time_eval,
            kq_speedup: speedup(time_bfs, time_kq),
            eval_speedup: speedup(time_bfs, time_eval),
            fallbacks: outcome.fallbacks,
            failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_validation() {
        let a = Point::new(0, 0);
        let b = Point::new(3, 3);
        let good = [a, Point::new(1, 2), b];
        assert!(is_valid_knight_path(&good, a, b));
        assert!(!is_valid_knight_path(&[], a, b));
        assert!(!is_valid_knight_path(&good, b, a));
        assert!(!is_valid_knight_path(&[a, Point::new(1, 1), b], a, b));
        assert!(is_valid_knight_path(&[a], a, a));
    }

    #[test]
    fn passing_case() {
        let mut oracle = BfsOracle::new();
        let r = KnightPathCase::new(Point::new(-3, 2), Point::new(5, -4)).run(&mut oracle);
        assert!(r.valid_kq && r.valid_bfs);
        assert!(r.eval_matches && r.same_length);
        assert!(!r.failed);
        assert_eq!(r.kq_eval as usize + 1, r.path_kq.len());
        assert_eq!(r.fallbacks, 0);
    }

    #[test]
    fn identity_case() {
        let mut oracle = BfsOracle::new();
        let a = Point::new(4, 4);
        let r = KnightPathCase::new(a, a).run(&mut oracle);
        assert_eq!(r.path_kq, vec![a]);
        assert_eq!(r.path_bfs, vec![a]);
        assert!(r.same_path);
        assert_eq!(r.kq_eval, 0);
        assert!(!r.failed);
    }

    #[test]
    fn capped_oracle_fails_the_case() {
        let mut oracle = BfsOracle::new().with_max_radius(2);
        let r = KnightPathCase::new(Point::ZERO, Point::new(20, 20)).run(&mut oracle);
        assert!(r.valid_kq);
        assert!(!r.valid_bfs);
        assert!(r.path_bfs.is_empty());
        assert!(!r.eval_matches);
        assert!(r.failed);
    }

    #[test]
    fn speedup_ratio() {
        assert_eq!(speedup(Duration::from_millis(10), Duration::ZERO), None);
        assert_eq!(
            speedup(Duration::from_millis(10), Duration::from_millis(5)),
            Some(2.0)
        );
    }
}

use std::time::Duration;

use crate::case::CaseResult;

/// Aggregate figures over a batch of cases.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    pub total_tests: usize,
    pub failed_tests: usize,
    pub total_fallbacks: u64,
    pub avg_kq_time: Duration,
    pub avg_bfs_time: Duration,
    pub avg_eval_time: Duration,
    /// Mean over measurable cases; 0 when there are none.
    pub avg_kq_speedup: f64,
    /// Mean over measurable cases; 0 when there are none.
    pub avg_eval_speedup: f64,
    /// Coordinate bound the cases were drawn from, when known.
    pub max_coord: Option<i32>,
    /// Seed the cases were drawn with, when known.
    pub seed: Option<u64>,
}

/// Collects [`CaseResult`]s.
#[derive(Clone, Debug, Default)]
pub struct Statistics {
    results: Vec<CaseResult>,
}

fn mean_duration(total: Duration, n: usize) -> Duration {
    match u32::try_from(n) {
        Ok(0) => Duration::ZERO,
        Ok(n) => total / n,
        Err(_) => Duration::from_secs_f64(total.as_secs_f64() / n as f64),
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 { 0.0 } else { sum / n as f64 }
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result(&mut self, result: CaseResult) {
        self.results.push(result);
    }

    pub fn results(&self) -> &[CaseResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Summarise everything added so far.
    pub fn summary(&self) -> Summary {
        let r = &self.results;
        let n = r.len();
        Summary {
            total_tests: n,
            failed_tests: r.iter().filter(|c| c.failed).count(),
            total_fallbacks: r.iter().map(|c| u64::from(c.fallbacks)).sum(),
            avg_kq_time: mean_duration(r.iter().map(|c| c.time_kq).sum(), n),
            avg_bfs_time: mean_duration(r.iter().map(|c| c.time_bfs).sum(), n),
            avg_eval_time: mean_duration(r.iter().map(|c| c.time_eval).sum(), n),
            avg_kq_speedup: mean(r.iter().filter_map(|c| c.kq_speedup)),
            avg_eval_speedup: mean(r.iter().filter_map(|c| c.eval_speedup)),
            max_coord: None,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knightquest_core::Point;

    fn result(failed: bool, fallbacks: u32, ms: u64, speedup: Option<f64>) -> CaseResult {
        CaseResult {
            start: Point::ZERO,
            target: Point::new(1, 2),
            path_kq: vec![Point::ZERO, Point::new(1, 2)],
            kq_eval: 1,
            path_bfs: vec![Point::ZERO, Point::new(1, 2)],
            valid_kq: true,
            valid_bfs: true,
            eval_matches: true,
            same_length: true,
            same_path: true,
            time_kq: Duration::from_millis(ms),
            time_bfs: Duration::from_millis(2 * ms),
            time_eval: Duration::ZERO,
            kq_speedup: speedup,
            eval_speedup: None,
            fallbacks,
            failed,
        }
    }

    #[test]
    fn empty_summary() {
        let s = Statistics::new().summary();
        assert_eq!(s.total_tests, 0);
        assert_eq!(s.avg_kq_time, Duration::ZERO);
        assert_eq!(s.avg_kq_speedup, 0.0);
        assert_eq!(s.avg_eval_speedup, 0.0);
    }

    #[test]
    fn aggregates() {
        let mut st = Statistics::new();
        st.add_result(result(false, 0, 2, Some(2.0)));
        st.add_result(result(true, 3, 4, Some(4.0)));
        st.add_result(result(false, 1, 6, None));
        assert_eq!(st.len(), 3);
        let s = st.summary();
        assert_eq!(s.total_tests, 3);
        assert_eq!(s.failed_tests, 1);
        assert_eq!(s.total_fallbacks, 4);
        assert_eq!(s.avg_kq_time, Duration::from_millis(4));
        assert_eq!(s.avg_bfs_time, Duration::from_millis(8));
        assert_eq!(s.avg_eval_time, Duration::ZERO);
        assert_eq!(s.avg_kq_speedup, 3.0);
        assert_eq!(s.avg_eval_speedup, 0.0);
    }
}

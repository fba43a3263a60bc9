//! Randomised batches of oracle checks.

use std::io;
use std::path::Path;

use knightquest_core::Point;
use knightquest_paths::BfsOracle;
use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

use crate::case::{CaseResult, KnightPathCase};
use crate::error::BenchError;
use crate::report::{format_case, format_summary, write_report};
use crate::stats::{Statistics, Summary};

/// Batch parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TesterConfig {
    /// Number of random cases.
    pub num_cases: usize,
    /// Coordinates are drawn from `-max_coord..=max_coord`; the sign is
    /// ignored.
    pub max_coord: i32,
    /// Seed for case generation; a random one is drawn when `None`.
    pub seed: Option<u64>,
}

impl Default for TesterConfig {
    fn default() -> Self {
        Self {
            num_cases: 100,
            max_coord: 100,
            seed: None,
        }
    }
}

/// Draw `num_cases` start/target pairs uniformly from the square
/// `[-|max_coord|, |max_coord|]²`.
pub fn generate_cases(
    rng: &mut impl Rng,
    num_cases: usize,
    max_coord: i32,
) -> Vec<KnightPathCase> {
    let m = max_coord.saturating_abs();
    let mut square = || Point::new(rng.random_range(-m..=m), rng.random_range(-m..=m));
    (0..num_cases)
        .map(|_| {
            let start = square();
            KnightPathCase::new(start, square())
        })
        .collect()
}

/// Runs a generated batch through [`KnightPathCase`] and reports it.
pub struct KnightPathTester {
    config: TesterConfig,
    seed: u64,
    cases: Vec<KnightPathCase>,
    stats: Statistics,
    oracle: BfsOracle,
}

impl KnightPathTester {
    pub fn new(config: TesterConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = StdRng::seed_from_u64(seed);
        let cases = generate_cases(&mut rng, config.num_cases, config.max_coord);
        Self {
            config,
            seed,
            cases,
            stats: Statistics::new(),
            oracle: BfsOracle::new(),
        }
    }

    pub fn config(&self) -> &TesterConfig {
        &self.config
    }

    /// The seed the cases were generated from, drawn or configured.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn cases(&self) -> &[KnightPathCase] {
        &self.cases
    }

    /// Results of the last run.
    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    fn summary(&self) -> Summary {
        Summary {
            max_coord: Some(self.config.max_coord.saturating_abs()),
            seed: Some(self.seed),
            ..self.stats.summary()
        }
    }

    /// Run every case in order, handing each result to `on_case` together
    /// with its 1-based number.
    fn execute<E>(
        &mut self,
        mut on_case: impl FnMut(usize, &CaseResult) -> Result<(), E>,
    ) -> Result<Summary, E> {
        self.stats = Statistics::new();
        log::info!(
            "running {} cases over [-{m}, {m}] with seed {}",
            self.cases.len(),
            self.seed,
            m = self.config.max_coord
        );
        for i in 0..self.cases.len() {
            let result = self.cases[i].run(&mut self.oracle);
            on_case(i + 1, &result)?;
            self.stats.add_result(result);
        }
        let summary = self.summary();
        log::info!(
            "{} cases run, {} failed, {} fallback moves",
            summary.total_tests,
            summary.failed_tests,
            summary.total_fallbacks
        );
        Ok(summary)
    }

    /// Run the batch, writing every case block and then the summary to `out`.
    pub fn run_all_console(&mut self, out: &mut impl io::Write) -> io::Result<Summary> {
        let summary = self.execute(|_, r| out.write_all(format_case(r).as_bytes()))?;
        out.write_all(format_summary(&summary).as_bytes())?;
        Ok(summary)
    }

    /// Run the batch and write the full report to `path`.
    pub fn run_all_file(&mut self, path: &Path) -> Result<Summary, BenchError> {
        let summary = self.execute(|n, r| {
            log::info!("case {n} from {} to {} done", r.start, r.target);
            Ok::<(), BenchError>(())
        })?;
        write_report(path, self.stats.results(), &summary)?;
        log::info!("all cases written to {}", path.display());
        Ok(summary)
    }
}

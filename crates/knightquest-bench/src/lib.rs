//! Randomised validation of the closed-form knight engine.
//!
//! Each [`KnightPathCase`] runs the reconstructor, the distance formula and
//! the breadth-first oracle on one start/target pair and compares them.
//! [`KnightPathTester`] draws a seeded batch of cases, aggregates the
//! results into [`Statistics`] and renders them with the [`report`]
//! functions, to any writer or to a file.

pub mod case;
mod error;
pub mod report;
pub mod stats;
pub mod tester;

pub use case::{CaseResult, KnightPathCase, is_valid_knight_path};
pub use error::BenchError;
pub use stats::{Statistics, Summary};
pub use tester::{KnightPathTester, TesterConfig, generate_cases};

//! Command-line front end for the knightquest engine.
//!
//! Two binaries share this library: `knightquest` answers a single
//! start/target query, `knightquest-bench` runs a randomised batch against
//! the breadth-first oracle.

pub mod cli;
pub mod logging;
pub mod point_arg;

pub use cli::{BenchArgs, LogMode, QueryArgs, format_path, run_bench, run_query};
pub use logging::init_logging;
pub use point_arg::{COORD_LIMIT, PointParseError, parse_point};

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use knightquest_bench::{KnightPathTester, Summary, TesterConfig};
use knightquest_core::Point;
use knightquest_paths::{KnightQuest, knight_distance};

use crate::point_arg::{COORD_LIMIT, parse_point};

/// Minimum knight moves and a shortest path between two squares.
#[derive(Debug, Parser)]
#[command(name = "knightquest", version)]
pub struct QueryArgs {
    /// Starting square, "x,y".
    #[arg(long, default_value = "0,0", value_parser = parse_point, allow_hyphen_values = true)]
    pub start: Point,

    /// Target square, "x,y".
    #[arg(long, default_value = "10,10", value_parser = parse_point, allow_hyphen_values = true)]
    pub end: Point,

    /// Print the path only when it has at most this many moves.
    #[arg(long, default_value_t = 1_000_000)]
    pub max_path_moves: u64,
}

/// Where the batch report goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogMode {
    Console,
    File,
}

/// Check random start/target pairs against breadth-first search.
#[derive(Debug, Parser)]
#[command(name = "knightquest-bench", version)]
pub struct BenchArgs {
    /// Number of test cases to generate.
    #[arg(long, default_value_t = 100)]
    pub num_cases: usize,

    /// Coordinates are drawn from -max_coord..=max_coord.
    #[arg(
        long,
        default_value_t = 100,
        value_parser = clap::value_parser!(i32).range(0..=i64::from(COORD_LIMIT))
    )]
    pub max_coord: i32,

    /// Random seed for reproducibility.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output mode.
    #[arg(long, value_enum, default_value_t = LogMode::Console)]
    pub log: LogMode,

    /// Report file for `--log file`.
    #[arg(long, default_value = "tests/output/log.txt")]
    pub path: PathBuf,
}

impl BenchArgs {
    pub fn tester_config(&self) -> TesterConfig {
        TesterConfig {
            num_cases: self.num_cases,
            max_coord: self.max_coord,
            seed: self.seed,
        }
    }
}

/// Join a path as `(x, y) -> (x, y) -> ...`.
pub fn format_path(path: &[Point]) -> String {
    path.iter()
        .map(Point::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Evaluate and reconstruct one query, writing the report to `out`.
pub fn run_query(args: &QueryArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let eval = knight_distance(args.start, args.end);
    write_query(args, eval, out).context("writing query result")
}

fn write_query(args: &QueryArgs, eval: i64, out: &mut impl Write) -> std::io::Result<()> {
    let (start, end) = (args.start, args.end);
    writeln!(out)?;
    writeln!(out, "Starting point: {start}")?;
    writeln!(out, "Ending point: {end}")?;
    writeln!(out)?;
    writeln!(out, "Evaluation Result: {eval}")?;

    if u64::try_from(eval).is_ok_and(|moves| moves > args.max_path_moves) {
        tracing::warn!(
            eval,
            limit = args.max_path_moves,
            "path too long to reconstruct"
        );
        writeln!(
            out,
            "Path omitted: {eval} moves exceeds --max-path-moves {}.",
            args.max_path_moves
        )?;
        return Ok(());
    }

    let outcome = KnightQuest::new(start, end).into_outcome();
    if outcome.fallbacks > 0 {
        tracing::debug!(fallbacks = outcome.fallbacks, "path used fallback moves");
    }
    if outcome.path.len() as i64 - 1 != eval {
        tracing::warn!(
            eval,
            moves = outcome.path.len() - 1,
            "reconstructed path length disagrees with evaluation"
        );
    }
    writeln!(out, "{}", format_path(&outcome.path))
}

/// Run a batch as configured by `args`, console output going to `out`.
pub fn run_bench(args: &BenchArgs, out: &mut impl Write) -> anyhow::Result<Summary> {
    let mut tester = KnightPathTester::new(args.tester_config());
    let summary = match args.log {
        LogMode::Console => tester
            .run_all_console(out)
            .context("writing batch report to the console")?,
        LogMode::File => {
            let summary = tester
                .run_all_file(&args.path)
                .with_context(|| format!("running batch into {}", args.path.display()))?;
            writeln!(out, "All test cases written to {}.", args.path.display())?;
            summary
        }
    };
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_defaults() {
        let args = QueryArgs::try_parse_from(["knightquest"]).unwrap();
        assert_eq!(args.start, Point::new(0, 0));
        assert_eq!(args.end, Point::new(10, 10));
    }

    #[test]
    fn query_accepts_negative_points() {
        let args =
            QueryArgs::try_parse_from(["knightquest", "--start", "-3,4", "--end", "'5,-6'"])
                .unwrap();
        assert_eq!(args.start, Point::new(-3, 4));
        assert_eq!(args.end, Point::new(5, -6));
    }

    #[test]
    fn query_rejects_malformed_point() {
        let err = QueryArgs::try_parse_from(["knightquest", "--start", "3;4"]).unwrap_err();
        assert!(err.to_string().contains("Invalid point format: '3;4'"));
    }

    #[test]
    fn query_output() {
        let args = QueryArgs {
            start: Point::new(0, 0),
            end: Point::new(7, 3),
            max_path_moves: 1_000_000,
        };
        let mut out = Vec::new();
        run_query(&args, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Starting point: (0, 0)"));
        assert!(text.contains("Ending point: (7, 3)"));
        assert!(text.contains("Evaluation Result: 4"));
        assert!(text.contains("(0, 0) -> (2, 1) -> (4, 0) -> (6, 1) -> (7, 3)"));
    }

    fn query_text(argv: &[&str]) -> String {
        let args = QueryArgs::try_parse_from(argv).unwrap();
        let mut out = Vec::new();
        run_query(&args, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn query_at_coordinate_limit() {
        let text = query_text(&[
            "knightquest",
            "--start",
            "1000000000,0",
            "--end",
            "-1000000000,0",
        ]);
        assert!(text.contains("Evaluation Result: 1000000000"));
        assert!(
            text.contains("Path omitted: 1000000000 moves exceeds --max-path-moves 1000000.")
        );

        let text = query_text(&[
            "knightquest",
            "--start",
            "1000000000,1000000000",
            "--end",
            "-1000000000,-1000000000",
        ]);
        assert!(text.contains("Evaluation Result: 1333333334"));
        assert!(text.contains("Path omitted"));
    }

    #[test]
    fn query_near_limit_with_short_path() {
        let text = query_text(&[
            "knightquest",
            "--start",
            "1000000000,-1000000000",
            "--end",
            "999999998,-999999999",
        ]);
        assert!(text.contains("Evaluation Result: 1"));
        assert!(text.contains("(1000000000, -1000000000) -> (999999998, -999999999)"));
    }

    #[test]
    fn query_rejects_coordinates_beyond_limit() {
        let err =
            QueryArgs::try_parse_from(["knightquest", "--start", "2000000000,0"]).unwrap_err();
        assert!(err.to_string().contains("Point '2000000000,0' is out of range"));
        let err =
            QueryArgs::try_parse_from(["knightquest", "--end", "0,-2147483648"]).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn path_move_limit() {
        let text = query_text(&["knightquest", "--end", "7,3", "--max-path-moves", "4"]);
        assert!(text.contains("(6, 1) -> (7, 3)"));
        let text = query_text(&["knightquest", "--end", "7,3", "--max-path-moves", "3"]);
        assert!(text.contains("Evaluation Result: 4"));
        assert!(text.contains("Path omitted: 4 moves exceeds --max-path-moves 3."));
        assert!(!text.contains("->"));
    }

    #[test]
    fn bench_defaults() {
        let args = BenchArgs::try_parse_from(["knightquest-bench"]).unwrap();
        assert_eq!(args.tester_config(), TesterConfig::default());
        assert_eq!(args.log, LogMode::Console);
        assert_eq!(args.path, PathBuf::from("tests/output/log.txt"));
    }

    #[test]
    fn bench_console_run() {
        let args = BenchArgs::try_parse_from([
            "knightquest-bench",
            "--num-cases",
            "5",
            "--max-coord",
            "12",
            "--seed",
            "42",
        ])
        .unwrap();
        let mut out = Vec::new();
        let summary = run_bench(&args, &mut out).unwrap();
        assert_eq!(summary.total_tests, 5);
        assert_eq!(summary.failed_tests, 0);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Seed: 42"));
    }

    #[test]
    fn bench_file_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/report.txt");
        let args = BenchArgs {
            num_cases: 3,
            max_coord: 8,
            seed: Some(1),
            log: LogMode::File,
            path: path.clone(),
        };
        let mut out = Vec::new();
        run_bench(&args, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("All test cases written to"));
        assert!(path.exists());
    }

    #[test]
    fn bench_rejects_negative_range() {
        let err = BenchArgs::try_parse_from(["knightquest-bench", "--max-coord=-5"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        let too_wide = ["knightquest-bench", "--max-coord", "2000000000"];
        assert!(BenchArgs::try_parse_from(too_wide).is_err());
        let args = BenchArgs::try_parse_from(["knightquest-bench", "--max-coord", "0"]).unwrap();
        assert_eq!(args.max_coord, 0);
    }

    #[test]
    fn bench_file_error_names_the_report() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as the report file.
        let args = BenchArgs {
            num_cases: 1,
            max_coord: 4,
            seed: Some(5),
            log: LogMode::File,
            path: dir.path().to_path_buf(),
        };
        let err = run_bench(&args, &mut Vec::new()).unwrap_err();
        assert!(err.to_string().starts_with("running batch into"));
        assert!(
            err.chain()
                .any(|e| e.to_string().starts_with("failed to write report to"))
        );
    }

    #[test]
    fn path_formatting() {
        assert_eq!(format_path(&[Point::new(0, 0)]), "(0, 0)");
        assert_eq!(
            format_path(&[Point::new(0, 0), Point::new(1, -2)]),
            "(0, 0) -> (1, -2)"
        );
    }
}

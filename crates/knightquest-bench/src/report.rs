//! Plain-text rendering of case results and summaries.

use std::fmt::Write as _;
use std::fs;
use std::io::Write as _;
use std::path::Path;

use crate::case::CaseResult;
use crate::error::BenchError;
use crate::stats::Summary;

/// Render one case as a block of lines (leading blank line included).
pub fn format_case(r: &CaseResult) -> String {
    let mut out = String::new();
    // Writing into a `String` cannot fail.
    let _ = write_case(&mut out, r);
    out
}

fn write_case(out: &mut String, r: &CaseResult) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "Testing from {} to {}", r.start, r.target)?;
    writeln!(
        out,
        "Minimum number of moves (eval): {}, Matches: {}",
        r.kq_eval, r.eval_matches
    )?;
    writeln!(
        out,
        "KQ valid: {}, length: {}, time: {:.6}s",
        r.valid_kq,
        r.path_kq.len(),
        r.time_kq.as_secs_f64()
    )?;
    writeln!(
        out,
        "BF valid: {}, length: {}, time: {:.6}s",
        r.valid_bfs,
        r.path_bfs.len(),
        r.time_bfs.as_secs_f64()
    )?;
    writeln!(out, "Same length: {}, Same path: {}", r.same_length, r.same_path)?;
    writeln!(out, "Fallbacks used: {}", r.fallbacks)?;

    match r.kq_speedup {
        None => writeln!(out, "KQ ran too fast to measure speedup reliably.")?,
        Some(s) if s > 1.0 => writeln!(out, "KQ is {s:.2}x faster than BFS")?,
        Some(s) => writeln!(out, "BFS is {:.2}x faster than KQ", 1.0 / s)?,
    }
    match r.eval_speedup {
        None => writeln!(out, "eval too fast to measure reliably.")?,
        Some(s) => writeln!(out, "eval is {s:.2}x faster than BFS")?,
    }
    Ok(())
}

/// Render the batch summary (leading blank line included).
pub fn format_summary(s: &Summary) -> String {
    let mut out = String::new();
    let _ = write_summary(&mut out, s);
    out
}

fn write_summary(out: &mut String, s: &Summary) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "Summary:")?;
    if let Some(m) = s.max_coord {
        writeln!(out, "  Tested over the range: ({}, {m})", -m)?;
    }
    if let Some(seed) = s.seed {
        writeln!(out, "  Seed: {seed}")?;
    }
    writeln!(out, "  Total test runs: {}", s.total_tests)?;
    writeln!(out, "  Failed tests: {}", s.failed_tests)?;
    writeln!(out, "  Total fallback moves used: {}", s.total_fallbacks)?;
    writeln!(out, "  Average KQ path time: {:.8}s", s.avg_kq_time.as_secs_f64())?;
    writeln!(out, "  Average BFS path time: {:.8}s", s.avg_bfs_time.as_secs_f64())?;
    writeln!(out, "  Average eval time: {:.8}s", s.avg_eval_time.as_secs_f64())?;
    writeln!(out, "  Average KQ speedup: {:.2}x", s.avg_kq_speedup)?;
    writeln!(out, "  Average eval speedup: {:.2}x", s.avg_eval_speedup)?;
    Ok(())
}

/// Write every case block followed by the summary to `path`, creating
/// missing parent directories.
pub fn write_report(
    path: &Path,
    results: &[CaseResult],
    summary: &Summary,
) -> Result<(), BenchError> {
    let io_err = |source| BenchError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(io_err)?;
    }
    let mut file = std::io::BufWriter::new(fs::File::create(path).map_err(io_err)?);
    for r in results {
        file.write_all(format_case(r).as_bytes()).map_err(io_err)?;
    }
    file.write_all(format_summary(summary).as_bytes()).map_err(io_err)?;
    file.flush().map_err(io_err)?;
    Ok(())
}

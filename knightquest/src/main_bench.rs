//! knightquest-bench: randomised checks of the closed-form engine against BFS.

use anyhow::bail;
use clap::Parser;
use knightquest_cli::{BenchArgs, init_logging, run_bench};

fn main() -> anyhow::Result<()> {
    init_logging("warn,knightquest_bench=info");
    let args = BenchArgs::parse();
    let stdout = std::io::stdout();
    let summary = run_bench(&args, &mut stdout.lock())?;
    if summary.failed_tests > 0 {
        bail!(
            "{} of {} cases failed",
            summary.failed_tests,
            summary.total_tests
        );
    }
    Ok(())
}

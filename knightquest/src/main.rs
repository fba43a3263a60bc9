//! knightquest: minimum knight moves and a shortest path between two squares.

use clap::Parser;
use knightquest_cli::{QueryArgs, init_logging, run_query};

fn main() -> anyhow::Result<()> {
    init_logging("warn");
    let args = QueryArgs::parse();
    let stdout = std::io::stdout();
    run_query(&args, &mut stdout.lock())
}

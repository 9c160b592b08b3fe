//! Terminal pathfinding demo.
//!
//! Run: cargo run --bin pathgrid-demo -- --no-animate
//! Set RUST_LOG=debug to see search summaries on stderr.

use clap::Parser;
use pathgrid_demos::{Args, run};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let config = Args::parse().into_config()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let reports = run(&mut out, &config)?;
    log::debug!("finished {} runs", reports.len());
    Ok(())
}

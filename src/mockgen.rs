//! logiview-mockgen: writes demo fleet snapshots.
//!
//! ```text
//! logiview-mockgen --vehicles 200 --shipments 1000 -o fleet.json.br
//! ```

use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use logiview::logging::init_logging;
use logiview::MockFleet;

/// Generates a reproducible demo fleet snapshot.
#[derive(Parser, Debug)]
#[command(name = "logiview-mockgen", about = "Generate demo fleet snapshots", version)]
struct Args {
    /// Number of vehicle records.
    #[arg(long, default_value_t = 48)]
    vehicles: usize,

    /// Number of shipment records.
    #[arg(long, default_value_t = 120)]
    shipments: usize,

    /// Number of compliance records.
    #[arg(long, default_value_t = 36)]
    compliance: usize,

    /// Random seed; the same seed always produces the same snapshot.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Output path. A `.br` suffix enables brotli compression.
    #[arg(short, long, value_name = "PATH")]
    output: PathBuf,

    /// Increase logging verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    if args.vehicles + args.shipments + args.compliance == 0 {
        bail!("Nothing to generate: all record counts are zero");
    }

    let fleet = MockFleet::with_config(args.vehicles, args.shipments, args.compliance, args.seed);
    let snapshot = fleet.generate();
    snapshot.write(&args.output)?;

    info!(
        path = %args.output.display(),
        rows = snapshot.total_rows(),
        seed = args.seed,
        "snapshot written"
    );
    Ok(())
}

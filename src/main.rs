//! Compares the precision of two saturating-add algorithms over all unsigned
//! range pairs of a given bit width.
//!
//! Run with:
//! ```bash
//! cargo run --release -- --width 6
//! ```

use clap::Parser;
use color_eyre::eyre::{bail, eyre};
use uaddsat_rs::enumerate::MAX_ENUM_BITS;
use uaddsat_rs::harness::{Harness, HarnessConfig};
use uaddsat_rs::report::Report;
use uaddsat_rs::sat::{DecomposedSat, DirectSat, SaturatingAdd};
use uaddsat_rs::soundness::check_all;
use uaddsat_rs::types::Width;

#[derive(Debug, Parser)]
#[command(author, version, about = "Precision comparison of saturating-add algorithms over unsigned ranges")]
struct Cli {
    /// Bit width of the enumerated ranges
    #[arg(short, long, default_value_t = HarnessConfig::DEFAULT_WIDTH.bits())]
    width: u32,

    /// Split the enumeration across all CPU cores
    #[arg(long)]
    parallel: bool,

    /// Print bare counters, one per line
    #[arg(long)]
    raw: bool,

    /// Also verify both algorithms by brute force (slow beyond width 4)
    #[arg(long)]
    check_soundness: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    simplelog::TermLogger::init(
        if cli.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    if cli.width == 0 || cli.width > MAX_ENUM_BITS {
        bail!("Width must be in 1..={}, got {}", MAX_ENUM_BITS, cli.width);
    }
    let width = Width::new(cli.width)?;

    if cli.check_soundness {
        let algorithms: [&dyn SaturatingAdd; 2] = [&DirectSat, &DecomposedSat];
        for alg in algorithms {
            let violations = check_all(alg, width)?;
            if let Some(first) = violations.first() {
                return Err(eyre!("{} is unsound ({} violations), first: {}", alg.name(), violations.len(), first));
            }
        }
    }

    let config = HarnessConfig::new(width).with_parallel(cli.parallel);
    let counters = Harness::new(config).run()?;

    let report = Report::new(&counters);
    if cli.raw {
        print!("{}", report.raw());
    } else {
        print!("{}", report);
    }

    Ok(())
}

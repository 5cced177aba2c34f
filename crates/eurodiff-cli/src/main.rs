//! Command-line entry point.
//!
//! Usage: `eurodiff [--input FILE] [--max-days N] [--no-connectivity-check] [-v]`
//!
//! Reads cases from `FILE` (stdin by default) and prints results to
//! stdout. Diagnostics go to stderr; set `RUST_LOG` to override the
//! level chosen by `--verbose`.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use eurodiff_cli::run_cases;
use eurodiff_engine::CaseConfig;

#[derive(Parser, Debug)]
#[command(name = "eurodiff")]
#[command(about = "Simulate coin diffusion across the cities of a European grid")]
struct Cli {
    /// Input file (defaults to stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Skip a case that has not completed after this many days
    #[arg(long)]
    max_days: Option<u32>,

    /// Do not reject cases whose cities are not all connected.
    /// Use together with --max-days.
    #[arg(long)]
    no_connectivity_check: bool,

    /// Log case setup and completion events
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = CaseConfig {
        check_connectivity: !cli.no_connectivity_check,
        max_days: cli.max_days,
    };
    config.validate().context("invalid options")?;

    let input: Box<dyn BufRead> = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open input file {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = run_cases(input, &config, &mut out);
    out.flush().context("failed to flush results")?;

    let summary = result?;
    info!(
        cases = summary.cases,
        completed = summary.completed,
        skipped = summary.skipped,
        "done"
    );
    Ok(())
}

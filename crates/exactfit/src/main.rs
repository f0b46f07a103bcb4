//! `exactfit` — fit the exact polynomial through a JSON document's points.
//!
//! **Usage:**
//! ```text
//! exactfit [INPUT] [-k <K>] [--format text|json] [--strict] [--parallel-verify]
//! ```
//!
//! Reads stdin when `INPUT` is absent or `-`. The report goes to stdout;
//! logs go to stderr and are controlled by `RUST_LOG`, `-v` and `-q`.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use exactfit::{Config, OutputFormat};
use tracing::{debug, info_span};
use tracing_subscriber::EnvFilter;

/// Reconstruct the unique degree k-1 polynomial through base-encoded points.
#[derive(Parser, Debug)]
#[command(name = "exactfit", author, version, about, long_about = None)]
struct Cli {
    /// JSON document to read; `-` or absent reads stdin.
    input: Option<PathBuf>,

    /// Number of points to fit, overriding the document's `k`.
    #[arg(short = 'k', long = "points")]
    k: Option<usize>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Reject repeated indices anywhere in the input.
    #[arg(long)]
    strict: bool,

    /// Verify the fit against all points in parallel.
    #[arg(long)]
    parallel_verify: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            k: self.k,
            format: self.format,
            strict: self.strict,
            parallel_verify: self.parallel_verify,
        }
    }

    fn log_filter(&self) -> EnvFilter {
        let level = match (self.quiet, self.verbose) {
            (true, _) => Some("error"),
            (false, 0) => None,
            (false, 1) => Some("debug"),
            (false, _) => Some("trace"),
        };
        match level {
            Some(level) => EnvFilter::new(level),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging.
    tracing_subscriber::fmt()
        .with_env_filter(cli.log_filter())
        .with_writer(io::stderr)
        .without_time()
        .compact()
        .init();
    let span = info_span!("exactfit");
    let _enter = span.enter();

    let config = cli.config();
    debug!(?config, "starting");

    let report = match cli.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            exactfit::run_reader(BufReader::new(file), &config)
                .with_context(|| format!("failed to process {}", path.display()))?
        }
        _ => exactfit::run_reader(io::stdin().lock(), &config)
            .context("failed to process standard input")?,
    };

    match config.format {
        OutputFormat::Text => println!("{report}"),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}

//! Run configuration.

use clap::ValueEnum;
use exactfit_poly::InterpolationOptions;

/// How the report is written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one field per line.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

/// Settings for a single run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Point count override; the document's `k` is used when `None`.
    pub k: Option<usize>,
    /// Report format.
    pub format: OutputFormat,
    /// Reject any repeated index instead of only those among the fitted points.
    pub strict: bool,
    /// Verify the fit in parallel.
    pub parallel_verify: bool,
}

impl Config {
    /// Returns the interpolation options these settings imply.
    #[must_use]
    pub fn options(&self) -> InterpolationOptions {
        InterpolationOptions::default()
            .reject_duplicate_indices(self.strict)
            .parallel_verify(self.parallel_verify)
    }
}

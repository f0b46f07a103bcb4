//! # exactfit
//!
//! Reconstructs the unique degree k-1 polynomial through a set of points
//! whose values are written in arbitrary bases, using exact arithmetic.
//!
//! ## Features
//!
//! - **Exact**: arbitrary precision integers and canonical rationals, no floats
//! - **Newton interpolation**: divided differences expanded to the power basis
//! - **Verification**: the fit is checked against every supplied point
//! - **Structured input**: JSON documents parsed with `serde_json`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use exactfit::prelude::*;
//!
//! let json = r#"{ "keys": { "n": 3, "k": 2 },
//!                 "1": { "base": "10", "value": "1" },
//!                 "2": { "base": "2", "value": "10" },
//!                 "3": { "base": "16", "value": "3" } }"#;
//! let report = exactfit::run(json, &Config::default())?;
//! assert_eq!(report.coefficients, vec!["0", "1"]);
//! assert!(report.fits_all_points);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod input;
pub mod report;

pub use exactfit_integers as integers;
pub use exactfit_poly as poly;

pub use config::{Config, OutputFormat};
pub use error::Error;
pub use input::{Document, InputError, RawPoint};
pub use report::Report;

use std::io::Read;

use tracing::{debug, info};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::{Config, OutputFormat};
    pub use crate::input::Document;
    pub use crate::report::Report;
    pub use exactfit_integers::{decode, Integer, Rational};
    pub use exactfit_poly::{
        interpolate, interpolate_with, DensePoly, Interpolation, InterpolationOptions, NewtonForm,
        Point,
    };
}

/// Parses a JSON document, fits its points and builds the report.
///
/// The point count comes from `config.k` when set, otherwise from the
/// document.
///
/// # Errors
///
/// Returns [`Error::Input`] for malformed documents or undecodable values,
/// and [`Error::Interpolation`] when the fit itself is impossible.
pub fn run(json: &str, config: &Config) -> Result<Report, Error> {
    fit_document(&Document::parse(json)?, config)
}

/// Reads a JSON document from `reader`, then behaves like [`run`].
///
/// # Errors
///
/// As [`run`], plus [`InputError::Io`] if reading fails.
pub fn run_reader<R: Read>(reader: R, config: &Config) -> Result<Report, Error> {
    fit_document(&Document::read(reader)?, config)
}

/// Decodes and fits an already parsed document.
///
/// # Errors
///
/// As [`run`].
pub fn fit_document(document: &Document, config: &Config) -> Result<Report, Error> {
    let k = config.k.or(document.k).ok_or(InputError::MissingK)?;
    if config.k.is_some() {
        debug!(k, document_k = ?document.k, "point count overridden");
    }

    let points = document.decode()?;
    info!(points = points.len(), k, "decoded points");

    let fit = exactfit_poly::interpolate_with(&points, k, &config.options())?;
    info!(
        degree = fit.degree,
        fits_all_points = fit.fits_all_points,
        "interpolation complete"
    );

    Ok(Report::from(&fit))
}

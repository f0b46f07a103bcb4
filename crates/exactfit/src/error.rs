//! Top-level errors.

use thiserror::Error;

use crate::input::InputError;
use exactfit_poly::InterpolationError;

/// Any failure between reading a document and producing a report.
#[derive(Debug, Error)]
pub enum Error {
    /// The document could not be read or decoded.
    #[error("invalid input")]
    Input(#[from] InputError),

    /// The decoded points do not admit a fit.
    #[error("interpolation failed")]
    Interpolation(#[from] InterpolationError),
}

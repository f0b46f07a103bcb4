//! Interpolation errors.

use exactfit_integers::{ArithmeticError, Integer};
use thiserror::Error;

/// Errors that can occur while fitting a polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InterpolationError {
    /// The requested point count was zero.
    #[error("point count k must be at least 1")]
    InvalidCount,

    /// Fewer points were supplied than the fit requires.
    #[error("not enough points for degree k-1: {required} required, {available} available")]
    InsufficientPoints {
        /// Number of points the fit needs (k).
        required: usize,
        /// Number of points actually supplied.
        available: usize,
    },

    /// Two of the selected points share an index.
    #[error("degenerate nodes: index {index} occurs more than once among the selected points")]
    DegenerateNodes {
        /// The repeated index.
        index: Integer,
    },

    /// An index occurs more than once in the input and duplicates are rejected.
    #[error("duplicate index {index} in input")]
    DuplicateIndex {
        /// The repeated index.
        index: Integer,
    },

    /// Exact arithmetic failed.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

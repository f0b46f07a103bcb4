//! Rendering fit results.

use std::fmt;

use exactfit_poly::Interpolation;
use serde::Serialize;

/// The user-facing result of a fit.
///
/// Coefficients are kept as exact strings (`"n"` or `"n/d"`), constant
/// term first, so arbitrarily large values survive JSON output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Degree of the fitted polynomial (k - 1).
    pub degree: usize,
    /// Power-basis coefficients a0..am.
    pub coefficients: Vec<String>,
    /// Whether the polynomial passes through every supplied point.
    pub fits_all_points: bool,
}

impl Report {
    /// Renders the report as a single-line JSON object.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<&Interpolation> for Report {
    fn from(fit: &Interpolation) -> Self {
        Self {
            degree: fit.degree,
            coefficients: fit
                .coefficients
                .coeffs()
                .iter()
                .map(ToString::to_string)
                .collect(),
            fits_all_points: fit.fits_all_points,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "degree: {}", self.degree)?;
        writeln!(f, "coefficients a0..am:")?;
        writeln!(f, "{}", self.coefficients.join(" "))?;
        write!(f, "fits_all_points: {}", self.fits_all_points)
    }
}

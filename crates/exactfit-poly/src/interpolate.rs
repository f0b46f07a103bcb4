//! The interpolation pipeline.
//!
//! Points are sorted by index, the first k are fitted exactly, and the
//! resulting polynomial is checked against every supplied point, not only
//! the k used for the fit.

use tracing::{debug, instrument, warn};

use crate::dense::DensePoly;
use crate::error::InterpolationError;
use crate::newton::NewtonForm;
use crate::point::{first_repeated_index, sorted_by_index, Point};
use crate::verify::{first_mismatch, par_verify_all};

/// Options controlling [`interpolate_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InterpolationOptions {
    /// Reject any repeated index, including ones outside the fitted points.
    ///
    /// When false, a repeated index among the points that are only
    /// verified is tolerated (and logged); it simply fails verification if
    /// its values disagree with the fit.
    pub reject_duplicate_indices: bool,
    /// Verify the fit on the rayon thread pool.
    pub parallel_verify: bool,
}

impl InterpolationOptions {
    /// Sets whether repeated indices are rejected.
    #[must_use]
    pub fn reject_duplicate_indices(mut self, reject: bool) -> Self {
        self.reject_duplicate_indices = reject;
        self
    }

    /// Sets whether verification runs in parallel.
    #[must_use]
    pub fn parallel_verify(mut self, parallel: bool) -> Self {
        self.parallel_verify = parallel;
        self
    }
}

/// The outcome of a successful fit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interpolation {
    /// Nominal degree of the fit: k - 1.
    pub degree: usize,
    /// Power-basis coefficients, constant term first; always k of them.
    pub coefficients: DensePoly,
    /// Whether the fit reproduces every supplied point.
    pub fits_all_points: bool,
    /// The first point (in index order) the fit does not reproduce.
    pub mismatch: Option<Point>,
}

/// Fits the unique degree k-1 polynomial through the k lowest-indexed
/// points, with default options.
///
/// # Errors
///
/// See [`interpolate_with`].
pub fn interpolate(points: &[Point], k: usize) -> Result<Interpolation, InterpolationError> {
    interpolate_with(points, k, &InterpolationOptions::default())
}

/// Fits the unique degree k-1 polynomial through the k lowest-indexed
/// points and verifies it against all of them.
///
/// # Errors
///
/// - [`InterpolationError::InvalidCount`] if `k` is zero.
/// - [`InterpolationError::InsufficientPoints`] if fewer than `k` points
///   are given; no arithmetic is attempted.
/// - [`InterpolationError::DuplicateIndex`] if duplicates are rejected and
///   any index repeats.
/// - [`InterpolationError::DegenerateNodes`] if two of the selected points
///   share an index.
#[instrument(level = "debug", skip(points, options), fields(available = points.len()))]
pub fn interpolate_with(
    points: &[Point],
    k: usize,
    options: &InterpolationOptions,
) -> Result<Interpolation, InterpolationError> {
    if k == 0 {
        return Err(InterpolationError::InvalidCount);
    }
    if points.len() < k {
        return Err(InterpolationError::InsufficientPoints {
            required: k,
            available: points.len(),
        });
    }

    let sorted = sorted_by_index(points);

    if let Some(index) = first_repeated_index(&sorted) {
        if options.reject_duplicate_indices {
            return Err(InterpolationError::DuplicateIndex {
                index: index.clone(),
            });
        }
        if first_repeated_index(&sorted[..k]).is_none() {
            warn!(%index, "repeated index outside the fitted points; it is only verified");
        }
    }

    let newton = NewtonForm::from_points(&sorted[..k])?;
    debug!(coeffs = newton.len(), "computed divided differences");

    let coefficients = newton.to_power_basis();
    debug!(degree = coefficients.degree(), "expanded to power basis");

    let mismatch = if options.parallel_verify && par_verify_all(&coefficients, &sorted) {
        None
    } else {
        first_mismatch(&coefficients, &sorted).cloned()
    };
    if let Some(point) = &mismatch {
        debug!(%point, "fit does not reproduce point");
    }

    Ok(Interpolation {
        degree: k - 1,
        coefficients,
        fits_all_points: mismatch.is_none(),
        mismatch,
    })
}

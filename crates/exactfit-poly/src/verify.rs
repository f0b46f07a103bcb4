//! Checking a fitted polynomial against points.
//!
//! A point matches when the polynomial evaluated at its index equals its
//! value exactly, compared by cross multiplication with the value taken as
//! a rational with denominator 1.

use exactfit_integers::Rational;
use rayon::prelude::*;

use crate::dense::DensePoly;
use crate::point::Point;

fn reproduces(poly: &DensePoly, point: &Point) -> bool {
    let value = poly.eval(&point.index);
    value.cross_eq(&Rational::from(&point.value))
}

/// Returns true if `poly` passes through every point.
///
/// Stops at the first mismatch.
#[must_use]
pub fn verify_all(poly: &DensePoly, points: &[Point]) -> bool {
    points.iter().all(|p| reproduces(poly, p))
}

/// Returns the first point, in slice order, that `poly` does not reproduce.
#[must_use]
pub fn first_mismatch<'a>(poly: &DensePoly, points: &'a [Point]) -> Option<&'a Point> {
    points.iter().find(|p| !reproduces(poly, p))
}

/// Parallel version of [`verify_all`].
///
/// Each check is independent and read-only, so the points are split across
/// the rayon thread pool. The answer is identical to [`verify_all`].
#[must_use]
pub fn par_verify_all(poly: &DensePoly, points: &[Point]) -> bool {
    points.par_iter().all(|p| reproduces(poly, p))
}

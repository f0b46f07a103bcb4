//! # exactfit-poly
//!
//! Exact polynomial interpolation for exactfit.
//!
//! This crate provides:
//! - Dense power-basis polynomials over exact rationals
//! - Newton divided differences and conversion to the power basis
//! - The interpolation pipeline: sort, select, fit, verify
//! - Verification of a fit against every supplied point
//!
//! ## Pipeline
//!
//! ```text
//! points ─ sort by index ─ first k ─ divided differences ─ power basis
//!                                                             │
//!                       all points ─────────── verify ◄───────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dense;
pub mod error;
pub mod interpolate;
pub mod newton;
pub mod point;
pub mod verify;

#[cfg(test)]
mod proptests;

pub use dense::DensePoly;
pub use error::InterpolationError;
pub use interpolate::{interpolate, interpolate_with, Interpolation, InterpolationOptions};
pub use newton::NewtonForm;
pub use point::Point;
pub use verify::{first_mismatch, par_verify_all, verify_all};

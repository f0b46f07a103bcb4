//! # exactfit-integers
//!
//! Exact arithmetic foundation for exactfit.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Canonical rationals in lowest terms (`Rational`)
//! - Decoding of digit strings written in bases 2 through 36 (`radix`)
//!
//! Nothing here ever rounds: every operation is exact, and fallible
//! operations (zero denominators, division by zero, bad digits) report an
//! [`ArithmeticError`] instead of panicking.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod integer;
pub mod radix;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::ArithmeticError;
pub use integer::Integer;
pub use radix::decode;
pub use rational::Rational;

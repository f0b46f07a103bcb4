//! Errors raised by exact arithmetic and digit decoding.

use thiserror::Error;

/// Errors that can occur in integer/rational arithmetic or base-N decoding.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// A rational was constructed with a zero denominator.
    #[error("denominator cannot be zero")]
    ZeroDenominator,

    /// A rational was divided by zero, or zero was inverted.
    #[error("division by zero")]
    DivisionByZero,

    /// The requested base lies outside `2..=36`.
    #[error("base {base} is outside the supported range 2..=36")]
    InvalidBase {
        /// The rejected base.
        base: u32,
    },

    /// A character is not a digit of the stated base.
    #[error("invalid digit {digit:?} at position {position} for base {base}")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// Character offset of the digit within the encoded string.
        position: usize,
        /// The base the string was decoded in.
        base: u32,
    },
}

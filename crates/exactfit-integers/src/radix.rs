//! Base-N digit decoding.
//!
//! Values arrive as digit strings in any base from 2 to 36, using the
//! alphabet `0-9` followed by `a-z` (case-insensitive). Decoding is
//! exact; there is no size limit on the result.

use num_traits::Zero;

use crate::{ArithmeticError, Integer};

/// Smallest supported base.
pub const MIN_BASE: u32 = 2;

/// Largest supported base.
pub const MAX_BASE: u32 = 36;

/// Returns the value of a single digit character, independent of base.
///
/// `'0'..='9'` map to 0-9 and letters map to 10-35 in either case.
#[must_use]
pub fn digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'a'..='z' => Some(c as u32 - 'a' as u32 + 10),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

/// Decodes `digits`, most significant digit first, in the given base.
///
/// The empty string decodes to zero. No sign is accepted, so the result is
/// never negative.
///
/// # Errors
///
/// - [`ArithmeticError::InvalidBase`] if `base` is outside `2..=36`.
/// - [`ArithmeticError::InvalidDigit`] for the first character that is not
///   a digit of `base`.
pub fn decode(digits: &str, base: u32) -> Result<Integer, ArithmeticError> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(ArithmeticError::InvalidBase { base });
    }

    let radix = Integer::from(base);
    let mut result = Integer::zero();

    for (position, c) in digits.chars().enumerate() {
        let d = digit_value(c)
            .filter(|&d| d < base)
            .ok_or(ArithmeticError::InvalidDigit {
                digit: c,
                position,
                base,
            })?;
        result = result * &radix + Integer::from(d);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_values() {
        assert_eq!(digit_value('0'), Some(0));
        assert_eq!(digit_value('9'), Some(9));
        assert_eq!(digit_value('a'), Some(10));
        assert_eq!(digit_value('Z'), Some(35));
        assert_eq!(digit_value('-'), None);
        assert_eq!(digit_value(' '), None);
    }

    #[test]
    fn test_decode_hex_and_binary() {
        assert_eq!(decode("ff", 16).unwrap(), Integer::new(255));
        assert_eq!(decode("FF", 16).unwrap(), Integer::new(255));
        assert_eq!(decode("10", 2).unwrap(), Integer::new(2));
        assert_eq!(decode("213", 4).unwrap(), Integer::new(39));
        assert_eq!(decode("zz", 36).unwrap(), Integer::new(1295));
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode("", 10).unwrap(), Integer::new(0));
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(decode("000101", 2).unwrap(), Integer::new(5));
    }

    #[test]
    fn test_invalid_digit() {
        assert_eq!(
            decode("g", 16),
            Err(ArithmeticError::InvalidDigit {
                digit: 'g',
                position: 0,
                base: 16
            })
        );
        assert_eq!(
            decode("1012", 2),
            Err(ArithmeticError::InvalidDigit {
                digit: '2',
                position: 3,
                base: 2
            })
        );
        assert!(decode("-5", 10).is_err());
    }

    #[test]
    fn test_invalid_base() {
        assert_eq!(decode("1", 1), Err(ArithmeticError::InvalidBase { base: 1 }));
        assert_eq!(decode("1", 37), Err(ArithmeticError::InvalidBase { base: 37 }));
    }

    #[test]
    fn test_large_value() {
        // 2^100 written in base 2
        let digits = format!("1{}", "0".repeat(100));
        let value = decode(&digits, 2).unwrap();
        assert_eq!(value.to_string(), "1267650600228229401496703205376");
    }
}

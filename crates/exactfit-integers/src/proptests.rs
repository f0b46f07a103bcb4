//! Property-based tests for exact arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{decode, ArithmeticError, Integer, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d).unwrap())
    }

    fn assert_canonical(r: &Rational) -> Result<(), TestCaseError> {
        let num = r.numerator();
        let den = r.denominator();
        prop_assert_eq!(den.signum(), 1);
        prop_assert!(num.gcd(&den).is_one());
        Ok(())
    }

    proptest! {
        // Integer ring axioms

        #[test]
        fn integer_add_commutative(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn integer_division_identity(a in small_int(), b in non_zero_int()) {
            // a = (a / b) * b + a % b, with truncating division
            let q = Integer::new(a) / Integer::new(b);
            let r = Integer::new(a) % Integer::new(b);
            prop_assert_eq!(q * Integer::new(b) + r, Integer::new(a));
            prop_assert_eq!(
                (Integer::new(a) / Integer::new(b)).to_i64(),
                Some(a / b)
            );
        }

        // GCD properties

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);

            prop_assert!((a % g.clone()).is_zero());
            prop_assert!((b % g).is_zero());
        }

        #[test]
        fn gcd_commutative(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.gcd(&b), b.gcd(&a));
        }

        // Canonical form survives every operation

        #[test]
        fn rational_construction_is_canonical(n in small_int(), d in non_zero_int()) {
            let r = Rational::from_i64(n, d).unwrap();
            assert_canonical(&r)?;
            // value is preserved: n/d == num/den
            prop_assert_eq!(
                Integer::new(n) * r.denominator(),
                r.numerator() * Integer::new(d)
            );
        }

        #[test]
        fn rational_ops_are_canonical(a in rational(), b in rational()) {
            assert_canonical(&(&a + &b))?;
            assert_canonical(&(&a - &b))?;
            assert_canonical(&(&a * &b))?;
            if !b.is_zero() {
                assert_canonical(&a.checked_div(&b).unwrap())?;
            }
        }

        // Rational field axioms

        #[test]
        fn rational_add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn rational_distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn rational_multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den).unwrap();
            let inv = a.recip().unwrap();
            prop_assert!((a * inv).is_one());
        }

        #[test]
        fn rational_division_undoes_multiplication(a in rational(), b in rational()) {
            prop_assume!(!b.is_zero());
            let product = &a * &b;
            prop_assert_eq!(product.checked_div(&b).unwrap(), a);
        }

        #[test]
        fn cross_eq_agrees_with_eq(a in rational(), b in rational()) {
            prop_assert_eq!(a.cross_eq(&b), a == b);
        }

        #[test]
        fn zero_denominator_rejected(n in small_int()) {
            prop_assert_eq!(
                Rational::from_i64(n, 0),
                Err(ArithmeticError::ZeroDenominator)
            );
        }

        // Base-N decoding agrees with the standard formatter

        #[test]
        fn decode_matches_hex_formatting(n in any::<u64>()) {
            prop_assert_eq!(decode(&format!("{n:x}"), 16).unwrap(), Integer::from(n));
            prop_assert_eq!(decode(&format!("{n:X}"), 16).unwrap(), Integer::from(n));
            prop_assert_eq!(decode(&format!("{n:b}"), 2).unwrap(), Integer::from(n));
            prop_assert_eq!(decode(&format!("{n:o}"), 8).unwrap(), Integer::from(n));
        }
    }
}

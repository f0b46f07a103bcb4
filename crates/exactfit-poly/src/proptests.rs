//! Property-based tests for interpolation.

#[cfg(test)]
mod tests {
    use num_traits::One;
    use proptest::prelude::*;

    use crate::{interpolate, verify_all, NewtonForm, Point};
    use exactfit_integers::{Integer, Rational};

    // Strategy for generating point sets with distinct indices (1-8 points)
    fn distinct_points() -> impl Strategy<Value = Vec<Point>> {
        proptest::collection::btree_set(-50i64..50i64, 1..=8).prop_flat_map(|xs| {
            let n = xs.len();
            let xs: Vec<i64> = xs.into_iter().collect();
            proptest::collection::vec(-1000i64..1000i64, n).prop_map(move |ys| {
                xs.iter()
                    .zip(ys)
                    .map(|(&x, y)| Point::from_i64(x, y))
                    .collect()
            })
        })
    }

    // Strategy for point sets together with a fit size k <= len
    fn points_and_k() -> impl Strategy<Value = (Vec<Point>, usize)> {
        distinct_points().prop_flat_map(|pts| {
            let n = pts.len();
            (Just(pts), 1..=n)
        })
    }

    proptest! {
        #[test]
        fn fit_reproduces_every_point(pts in distinct_points()) {
            let k = pts.len();
            let fit = interpolate(&pts, k).unwrap();
            prop_assert!(fit.fits_all_points);
            for p in &pts {
                let value = fit.coefficients.eval(&p.index);
                prop_assert!(value.is_integer());
                prop_assert_eq!(value, Rational::from(&p.value));
            }
        }

        #[test]
        fn fit_has_k_coefficients((pts, k) in points_and_k()) {
            let fit = interpolate(&pts, k).unwrap();
            prop_assert_eq!(fit.coefficients.coeffs().len(), k);
            prop_assert_eq!(fit.degree, k - 1);
        }

        #[test]
        fn coefficients_are_canonical((pts, k) in points_and_k()) {
            let fit = interpolate(&pts, k).unwrap();
            for c in fit.coefficients.coeffs() {
                let den = c.denominator();
                prop_assert_eq!(den.signum(), 1);
                prop_assert!(c.numerator().gcd(&den).is_one());
            }
        }

        #[test]
        fn fit_is_deterministic((pts, k) in points_and_k()) {
            prop_assert_eq!(interpolate(&pts, k).unwrap(), interpolate(&pts, k).unwrap());
        }

        #[test]
        fn fit_ignores_input_order(
            (pts, k, shuffled) in points_and_k().prop_flat_map(|(pts, k)| {
                let shuffled = Just(pts.clone()).prop_shuffle();
                (Just(pts), Just(k), shuffled)
            })
        ) {
            prop_assert_eq!(interpolate(&pts, k).unwrap(), interpolate(&shuffled, k).unwrap());
        }

        #[test]
        fn verification_matches_full_fit((pts, k) in points_and_k()) {
            // A partial fit reproduces everything iff it equals the full fit
            let partial = interpolate(&pts, k).unwrap();
            let full = interpolate(&pts, pts.len()).unwrap();
            let same_poly = (0..pts.len())
                .all(|i| partial.coefficients.coeff(i) == full.coefficients.coeff(i));
            prop_assert_eq!(partial.fits_all_points, same_poly);
            prop_assert_eq!(verify_all(&partial.coefficients, &pts), same_poly);
        }

        #[test]
        fn newton_form_agrees_with_power_basis(pts in distinct_points(), x in -100i64..100i64) {
            let newton = NewtonForm::from_points(&pts).unwrap();
            let x = Integer::new(x);
            prop_assert_eq!(newton.eval(&x), newton.to_power_basis().eval(&x));
        }
    }
}

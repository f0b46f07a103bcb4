//! Dense univariate polynomials in the power basis.
//!
//! Coefficients are exact rationals stored in ascending degree order.

use exactfit_integers::{Integer, Rational};
use num_traits::Zero;

/// A dense univariate polynomial with rational coefficients.
///
/// The coefficient vector keeps the length it was built with: trailing
/// zeros are not trimmed. A fit through k points therefore always has k
/// coefficients, and [`DensePoly::degree`] is the nominal degree k-1 even
/// when the leading coefficient vanishes.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DensePoly {
    /// Coefficients in ascending degree order.
    coeffs: Vec<Rational>,
}

impl DensePoly {
    /// Creates a new polynomial from coefficients, constant term first.
    ///
    /// An empty vector becomes the zero polynomial.
    #[must_use]
    pub fn new(mut coeffs: Vec<Rational>) -> Self {
        if coeffs.is_empty() {
            coeffs.push(Rational::zero());
        }
        Self { coeffs }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(Vec::new())
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: Rational) -> Self {
        Self::new(vec![c])
    }

    /// Returns the nominal degree (number of coefficients minus one).
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns true if every coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(Zero::is_zero)
    }

    /// Returns the coefficient of x^i.
    #[must_use]
    pub fn coeff(&self, i: usize) -> Rational {
        self.coeffs.get(i).cloned().unwrap_or_else(Rational::zero)
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[Rational] {
        &self.coeffs
    }

    /// Evaluates the polynomial at an integer using Horner's method.
    #[must_use]
    pub fn eval(&self, x: &Integer) -> Rational {
        self.eval_rational(&Rational::from(x))
    }

    /// Evaluates the polynomial at a rational point using Horner's method.
    #[must_use]
    pub fn eval_rational(&self, x: &Rational) -> Rational {
        let mut result = Rational::zero();
        for c in self.coeffs.iter().rev() {
            result = result * x + c;
        }
        result
    }

    /// Multiplies by the linear factor (x - root).
    ///
    /// The result has one more coefficient than `self`.
    #[must_use]
    pub fn mul_linear(&self, root: &Rational) -> Self {
        let mut result = vec![Rational::zero(); self.coeffs.len() + 1];

        // x * P
        for (i, c) in self.coeffs.iter().enumerate() {
            result[i + 1] = &result[i + 1] + c;
        }

        // - root * P
        for (i, c) in self.coeffs.iter().enumerate() {
            result[i] = &result[i] - &(root * c);
        }

        Self { coeffs: result }
    }

    /// Adds a scalar to the constant term.
    #[must_use]
    pub fn add_constant(mut self, c: &Rational) -> Self {
        self.coeffs[0] = &self.coeffs[0] + c;
        self
    }
}

impl std::fmt::Display for DensePoly {
    /// Writes the coefficients low to high, separated by single spaces.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, c) in self.coeffs.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

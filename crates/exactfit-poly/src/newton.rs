//! Newton divided-difference interpolation.
//!
//! Given points with distinct indices x_0 < x_1 < ... < x_{k-1}, the
//! divided differences c_j define the interpolant in the Newton basis:
//!
//! ```text
//! P(x) = c_0 + c_1(x - x_0) + c_2(x - x_0)(x - x_1) + ...
//!        + c_{k-1}(x - x_0)...(x - x_{k-2})
//! ```
//!
//! The table is computed column by column in a single buffer, writing from
//! the highest slot down so that each slot's old value is read before it
//! is overwritten. Everything is exact, so the cost is O(k²) rational
//! operations.

use exactfit_integers::{Integer, Rational};
use num_traits::Zero;

use crate::dense::DensePoly;
use crate::error::InterpolationError;
use crate::point::{first_repeated_index, sorted_by_index, Point};

/// An interpolating polynomial in Newton form.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NewtonForm {
    /// Sorted interpolation nodes x_0 < ... < x_{k-1}.
    nodes: Vec<Rational>,
    /// Divided differences c_0, ..., c_{k-1}.
    coeffs: Vec<Rational>,
}

impl NewtonForm {
    /// Computes the divided differences of the given points.
    ///
    /// The points are sorted by index first, so their input order is
    /// irrelevant.
    ///
    /// # Errors
    ///
    /// - [`InterpolationError::InsufficientPoints`] if `points` is empty.
    /// - [`InterpolationError::DegenerateNodes`] if two points share an index.
    pub fn from_points(points: &[Point]) -> Result<Self, InterpolationError> {
        if points.is_empty() {
            return Err(InterpolationError::InsufficientPoints {
                required: 1,
                available: 0,
            });
        }

        let sorted = sorted_by_index(points);
        if let Some(index) = first_repeated_index(&sorted) {
            return Err(InterpolationError::DegenerateNodes {
                index: index.clone(),
            });
        }

        let nodes: Vec<Rational> = sorted.iter().map(|p| Rational::from(&p.index)).collect();
        let mut table: Vec<Rational> = sorted.iter().map(|p| Rational::from(&p.value)).collect();

        let k = table.len();
        for j in 1..k {
            for i in (j..k).rev() {
                let numerator = &table[i] - &table[i - 1];
                let denominator = &nodes[i] - &nodes[i - j];
                table[i] = numerator.checked_div(&denominator)?;
            }
        }

        Ok(Self {
            nodes,
            coeffs: table,
        })
    }

    /// Returns the sorted nodes.
    #[must_use]
    pub fn nodes(&self) -> &[Rational] {
        &self.nodes
    }

    /// Returns the divided-difference coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[Rational] {
        &self.coeffs
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Always false: a Newton form has at least one node.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Evaluates the Newton form directly by nested multiplication.
    #[must_use]
    pub fn eval(&self, x: &Integer) -> Rational {
        let x = Rational::from(x);
        let mut result = Rational::zero();
        for (c, node) in self.coeffs.iter().zip(&self.nodes).rev() {
            result = result * &(&x - node) + c;
        }
        result
    }

    /// Expands into the power basis.
    ///
    /// Starting from the constant c_{k-1}, each step multiplies the
    /// accumulated polynomial by (x - x_m) and adds c_m, for m from k-2
    /// down to 0. The result has exactly k coefficients.
    #[must_use]
    pub fn to_power_basis(&self) -> DensePoly {
        let k = self.coeffs.len();
        let mut poly = DensePoly::constant(self.coeffs[k - 1].clone());

        for m in (0..k - 1).rev() {
            poly = poly.mul_linear(&self.nodes[m]).add_constant(&self.coeffs[m]);
        }

        poly
    }
}

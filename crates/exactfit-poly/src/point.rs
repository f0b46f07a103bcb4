//! Interpolation nodes.

use exactfit_integers::Integer;
use std::fmt;

/// A decoded point: an integer index and the integer value at that index.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Point {
    /// The x coordinate.
    pub index: Integer,
    /// The y coordinate.
    pub value: Integer,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(index: Integer, value: Integer) -> Self {
        Self { index, value }
    }

    /// Creates a point from machine integers.
    #[must_use]
    pub fn from_i64(index: i64, value: i64) -> Self {
        Self::new(Integer::new(index), Integer::new(value))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.index, self.value)
    }
}

/// Returns a copy of `points` sorted by index.
///
/// The sort is stable: points sharing an index keep their input order.
#[must_use]
pub fn sorted_by_index(points: &[Point]) -> Vec<Point> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.index.cmp(&b.index));
    sorted
}

/// Returns the first repeated index in an index-sorted slice.
pub(crate) fn first_repeated_index(sorted: &[Point]) -> Option<&Integer> {
    sorted
        .windows(2)
        .find(|pair| pair[0].index == pair[1].index)
        .map(|pair| &pair[0].index)
}

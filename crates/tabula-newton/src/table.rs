//! The triangular divided-difference table.

use tabula_integers::Rational;

use crate::error::InterpolationError;
use crate::point::SupportPoint;

/// The triangular table of divided differences.
///
/// Entry `(k, l)` with `k <= l` holds the divided difference
/// `[y_k, ..., y_l]`. Storage is by interval length: `rows[d][k]` is the
/// entry `(k, k + d)`. The table is filled bottom-up by increasing `d`,
/// which is the dynamic-programming form of the memoized recursion
///
/// ```text
/// [y_k..y_l] = ([y_{k+1}..y_l] - [y_k..y_{l-1}]) / (x_l - x_k)
/// ```
///
/// so every entry is computed exactly once and lookups never recompute.
#[derive(Clone, Debug)]
pub struct DividedDifferenceTable {
    rows: Vec<Vec<Rational>>,
}

impl DividedDifferenceTable {
    /// Builds the full table for the given point set.
    ///
    /// # Errors
    ///
    /// Returns [`InterpolationError::DivisionByZero`] if two support
    /// points share an x-coordinate.
    pub fn build(points: &[SupportPoint]) -> Result<Self, InterpolationError> {
        let n = points.len();
        let mut rows = Vec::with_capacity(n);
        rows.push(points.iter().map(|p| p.y.clone()).collect::<Vec<_>>());

        for d in 1..n {
            let mut row = Vec::with_capacity(n - d);
            for k in 0..n - d {
                let l = k + d;
                let num = &rows[d - 1][k + 1] - &rows[d - 1][k];
                let den = &points[l].x - &points[k].x;
                let entry =
                    num.checked_div(&den)
                        .ok_or_else(|| InterpolationError::DivisionByZero {
                            k,
                            l,
                            x: points[k].x.clone(),
                        })?;
                row.push(entry);
            }
            rows.push(row);
        }

        Ok(Self { rows })
    }

    /// Returns the divided difference over points `k..=l`, if in range.
    #[must_use]
    pub fn get(&self, k: usize, l: usize) -> Option<&Rational> {
        if k > l {
            return None;
        }
        self.rows.get(l - k)?.get(k)
    }

    /// Table lookup for indices known to be valid.
    pub(crate) fn at(&self, k: usize, l: usize) -> &Rational {
        &self.rows[l - k][k]
    }

    /// Number of entries computed while building the table.
    ///
    /// For `n + 1` points this is `(n + 1)(n + 2) / 2`.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

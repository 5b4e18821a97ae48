//! The interpolation engine.

use num_traits::One;
use tabula_integers::Rational;

use crate::error::InterpolationError;
use crate::point::SupportPoint;
use crate::scheme::{SchemeConfig, SchemeReport};
use crate::table::DividedDifferenceTable;

/// Newton divided-difference interpolation over one fixed point set.
///
/// The point set is immutable for the lifetime of the engine; each call
/// to [`NewtonInterpolator::evaluate`] rebuilds the divided-difference
/// table from scratch, so one engine can serve many evaluation points
/// without stale state. The table and coefficients are only populated
/// after a successful `evaluate`; a failed call leaves them cleared.
///
/// Not safe for concurrent evaluation: `evaluate` takes `&mut self`.
#[derive(Clone, Debug)]
pub struct NewtonInterpolator {
    points: Vec<SupportPoint>,
    config: SchemeConfig,
    table: Option<DividedDifferenceTable>,
    coefficients: Vec<Rational>,
}

impl NewtonInterpolator {
    /// Creates an engine over the given support points.
    ///
    /// # Errors
    ///
    /// Returns [`InterpolationError::InvalidInput`] if `points` is empty.
    /// Duplicate x-coordinates are not checked here; they surface as
    /// [`InterpolationError::DivisionByZero`] on the first `evaluate`.
    pub fn new(points: Vec<SupportPoint>) -> Result<Self, InterpolationError> {
        Self::with_config(points, SchemeConfig::default())
    }

    /// Creates an engine with explicit renderer layout settings.
    ///
    /// # Errors
    ///
    /// Returns [`InterpolationError::InvalidInput`] if `points` is empty.
    pub fn with_config(
        points: Vec<SupportPoint>,
        config: SchemeConfig,
    ) -> Result<Self, InterpolationError> {
        if points.is_empty() {
            return Err(InterpolationError::InvalidInput {
                reason: "at least one support point is required".to_owned(),
            });
        }
        Ok(Self {
            points,
            config,
            table: None,
            coefficients: Vec::new(),
        })
    }

    /// The support points, in input order.
    #[must_use]
    pub fn points(&self) -> &[SupportPoint] {
        &self.points
    }

    /// Evaluates the interpolation polynomial at `x`.
    ///
    /// Rebuilds the divided-difference table, derives the coefficients
    /// `a_l = [y_0, ..., y_l]`, and accumulates
    /// `P(x) = sum a_l * (x - x_0)...(x - x_{l-1})` with a running
    /// product, all in exact rational arithmetic. On success the table
    /// and coefficients stay populated for subsequent queries.
    ///
    /// # Errors
    ///
    /// Returns [`InterpolationError::DivisionByZero`] if two support
    /// points share an x-coordinate.
    pub fn evaluate(&mut self, x: &Rational) -> Result<Rational, InterpolationError> {
        self.table = None;
        self.coefficients.clear();

        let (table, coefficients, y) = self.compute(x)?;
        self.table = Some(table);
        self.coefficients = coefficients;
        Ok(y)
    }

    /// The Newton-form coefficients of the most recent successful
    /// [`NewtonInterpolator::evaluate`]; empty before the first one.
    #[must_use]
    pub fn coefficients(&self) -> &[Rational] {
        &self.coefficients
    }

    /// The divided difference over points `k..=l` from the most recent
    /// successful evaluation, or `None` before the first one or when the
    /// indices fall outside the triangle.
    #[must_use]
    pub fn divided_difference(&self, k: usize, l: usize) -> Option<&Rational> {
        self.table.as_ref()?.get(k, l)
    }

    /// Number of table entries computed by the most recent evaluation.
    #[must_use]
    pub fn table_entry_count(&self) -> usize {
        self.table.as_ref().map_or(0, DividedDifferenceTable::entry_count)
    }

    /// Evaluates at `x` and renders the full scheme document for that
    /// evaluation: tableau, coefficients, polynomial, and result.
    ///
    /// # Errors
    ///
    /// Returns [`InterpolationError::DivisionByZero`] if two support
    /// points share an x-coordinate; no partial document is produced.
    pub fn report(&mut self, x: &Rational) -> Result<String, InterpolationError> {
        self.table = None;
        self.coefficients.clear();

        let (table, coefficients, y) = self.compute(x)?;
        let text = SchemeReport {
            points: &self.points,
            table: &table,
            coefficients: &coefficients,
            x,
            y: &y,
            config: &self.config,
        }
        .to_string();

        self.table = Some(table);
        self.coefficients = coefficients;
        Ok(text)
    }

    /// One full computation pass: table, coefficients, evaluation.
    fn compute(
        &self,
        x: &Rational,
    ) -> Result<(DividedDifferenceTable, Vec<Rational>, Rational), InterpolationError> {
        let table = DividedDifferenceTable::build(&self.points)?;
        let coefficients: Vec<Rational> = (0..self.points.len())
            .map(|l| table.at(0, l).clone())
            .collect();

        let mut y = coefficients[0].clone();
        let mut product = Rational::one();
        for (l, a) in coefficients.iter().enumerate().skip(1) {
            product = product * (x - &self.points[l - 1].x);
            y = y + a * &product;
        }

        Ok((table, coefficients, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(pairs: &[(i64, i64)]) -> NewtonInterpolator {
        NewtonInterpolator::new(pairs.iter().map(|&p| p.into()).collect()).unwrap()
    }

    #[test]
    fn test_quadratic_scenario() {
        // (0,1), (1,2), (2,5): P(x) = 1 + 1(x-0) + 1(x-0)(x-1)
        let mut e = engine(&[(0, 1), (1, 2), (2, 5)]);
        let y = e.evaluate(&Rational::from_i64(3, 2)).unwrap();
        assert_eq!(y, Rational::from_i64(13, 4));
        assert_eq!(
            e.coefficients(),
            &[Rational::from(1), Rational::from(1), Rational::from(1)]
        );
    }

    #[test]
    fn test_interpolation_exactness_at_nodes() {
        let pairs = [(-2, 9), (0, -1), (1, 4), (3, 0)];
        let mut e = engine(&pairs);
        for &(x, y) in &pairs {
            assert_eq!(e.evaluate(&Rational::from(x)).unwrap(), Rational::from(y));
        }
    }

    #[test]
    fn test_single_point_is_constant() {
        let mut e = engine(&[(3, 7)]);
        for x in [-10, 0, 3, 100] {
            assert_eq!(e.evaluate(&Rational::from(x)).unwrap(), Rational::from(7));
        }
        assert_eq!(e.coefficients(), &[Rational::from(7)]);
    }

    #[test]
    fn test_empty_points_rejected() {
        let err = NewtonInterpolator::new(Vec::new()).unwrap_err();
        assert!(matches!(err, InterpolationError::InvalidInput { .. }));
    }

    #[test]
    fn test_duplicate_x_fails_at_evaluate() {
        let mut e = engine(&[(1, 1), (1, 2)]);
        let err = e.evaluate(&Rational::from(0)).unwrap_err();
        assert!(matches!(err, InterpolationError::DivisionByZero { .. }));
        // failed evaluation leaves no partial state behind
        assert!(e.coefficients().is_empty());
        assert_eq!(e.divided_difference(0, 0), None);
    }

    #[test]
    fn test_not_populated_before_first_evaluate() {
        let e = engine(&[(0, 1), (1, 2)]);
        assert!(e.coefficients().is_empty());
        assert_eq!(e.divided_difference(0, 1), None);
        assert_eq!(e.table_entry_count(), 0);
    }

    #[test]
    fn test_memoization_entry_count() {
        let mut e = engine(&[(0, 1), (1, 2), (2, 5), (4, 0), (5, 5)]);
        e.evaluate(&Rational::from(2)).unwrap();
        // n + 1 = 5 points: 5 * 6 / 2 = 15 distinct (k, l) pairs
        assert_eq!(e.table_entry_count(), 15);
        // repeated lookups are reads, not recomputations
        let before = e.table_entry_count();
        for _ in 0..3 {
            e.divided_difference(0, 4).unwrap();
        }
        assert_eq!(e.table_entry_count(), before);
    }

    #[test]
    fn test_reuse_across_evaluation_points() {
        let mut e = engine(&[(0, 0), (1, 1), (2, 8)]);
        let first = e.evaluate(&Rational::from(3)).unwrap();
        let second = e.evaluate(&Rational::from_i64(1, 2)).unwrap();
        // P(x) = 3x^2 - 2x through these points
        assert_eq!(first, Rational::from(21));
        assert_eq!(second, Rational::from_i64(-1, 4));
    }

    #[test]
    fn test_rational_result_round_trips_through_display() {
        let mut e = engine(&[(0, 1), (1, 2), (2, 5)]);
        let y = e.evaluate(&Rational::from_i64(3, 2)).unwrap();
        let reparsed: Rational = y.to_string().parse().unwrap();
        assert_eq!(reparsed, y);
    }
}

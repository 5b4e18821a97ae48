//! Support points.

use tabula_integers::Rational;

use crate::error::InterpolationError;

/// A single interpolation support point `(x, y)`.
///
/// Immutable once constructed. The engine requires all `x` values in a
/// point set to be pairwise distinct; a violation surfaces as
/// [`InterpolationError::DivisionByZero`] when the tableau is built.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SupportPoint {
    /// The x-coordinate.
    pub x: Rational,
    /// The function value at `x`.
    pub y: Rational,
}

impl SupportPoint {
    /// Creates a support point from anything convertible to rationals.
    pub fn new(x: impl Into<Rational>, y: impl Into<Rational>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Creates a support point from float coordinates, exactly.
    ///
    /// # Errors
    ///
    /// Returns [`InterpolationError::InvalidInput`] if either coordinate
    /// is NaN or infinite.
    pub fn try_from_f64(x: f64, y: f64) -> Result<Self, InterpolationError> {
        let exact = |v: f64| {
            Rational::try_from_f64(v).ok_or_else(|| InterpolationError::InvalidInput {
                reason: format!("coordinate {v} is not representable as an exact rational"),
            })
        };
        Ok(Self {
            x: exact(x)?,
            y: exact(y)?,
        })
    }
}

// Concrete tuple impls rather than a blanket one: a generic
// `From<(X, Y)>` would overlap with the `TryFrom<(f64, f64)>` impl
// below through core's `TryFrom<U> for T where U: Into<T>`.
impl From<(i64, i64)> for SupportPoint {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl From<(i32, i32)> for SupportPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[i64; 2]> for SupportPoint {
    fn from([x, y]: [i64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl TryFrom<(f64, f64)> for SupportPoint {
    type Error = InterpolationError;

    fn try_from((x, y): (f64, f64)) -> Result<Self, Self::Error> {
        Self::try_from_f64(x, y)
    }
}

//! Errors that can occur during interpolation.

use tabula_integers::Rational;
use thiserror::Error;

/// Errors surfaced by [`crate::NewtonInterpolator`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InterpolationError {
    /// The input could not be turned into a valid point set: it was
    /// empty, or a coordinate is not representable as an exact rational.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input.
        reason: String,
    },

    /// Two support points share an x-coordinate, so the divided
    /// difference over them would divide by zero.
    #[error("division by zero: support points {k} and {l} share x = {x}")]
    DivisionByZero {
        /// Index of the first offending point.
        k: usize,
        /// Index of the second offending point.
        l: usize,
        /// The shared x-coordinate.
        x: Rational,
    },
}

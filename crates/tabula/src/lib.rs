//! # Tabula
//!
//! Exact Newton divided-difference interpolation.
//!
//! Tabula computes the interpolation polynomial through a set of
//! rational support points, evaluates it at arbitrary rational
//! arguments, and renders the classical Newton scheme, with every
//! intermediate value carried as an exact fraction.
//!
//! ## Quick start
//!
//! ```
//! use tabula::prelude::*;
//!
//! let points = vec![(0, 1).into(), (1, 2).into(), (2, 5).into()];
//! let mut engine = NewtonInterpolator::new(points).unwrap();
//! let y = engine.evaluate(&Rational::from_i64(3, 2)).unwrap();
//! assert_eq!(y, Rational::from_i64(13, 4));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use tabula_integers as integers;
pub use tabula_newton as newton;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use tabula_integers::{Integer, Rational};
    pub use tabula_newton::{
        DividedDifferenceTable, InterpolationError, NewtonInterpolator, SchemeConfig, SupportPoint,
    };
}

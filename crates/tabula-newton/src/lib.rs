//! # tabula-newton
//!
//! Newton (divided-difference) interpolation over exact rationals.
//!
//! Given support points with pairwise distinct x-coordinates, the engine
//! computes the divided-difference tableau, the Newton-form coefficients
//! `a_l = [y_0, ..., y_l]`, and evaluates
//!
//! ```text
//! P(x) = a_0 + a_1(x - x_0) + ... + a_n(x - x_0)...(x - x_{n-1})
//! ```
//!
//! entirely in rational arithmetic, so every intermediate value is exact.
//! Besides the numeric result, the engine renders the classical Newton
//! scheme as a text document: the staggered triangular tableau, the
//! coefficient list, the reconstructed polynomial, and the evaluation.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use tabula_newton::{NewtonInterpolator, SupportPoint};
//! use tabula_integers::Rational;
//!
//! let points = vec![(0, 1).into(), (1, 2).into(), (2, 5).into()];
//! let mut engine = NewtonInterpolator::new(points)?;
//! let report = engine.report(&Rational::from_i64(3, 2))?;
//! println!("{report}");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod engine;
pub mod error;
pub mod point;
pub mod scheme;
pub mod table;

#[cfg(test)]
mod proptests;

pub use engine::NewtonInterpolator;
pub use error::InterpolationError;
pub use point::SupportPoint;
pub use scheme::SchemeConfig;
pub use table::DividedDifferenceTable;

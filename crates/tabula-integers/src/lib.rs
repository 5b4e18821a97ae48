//! # tabula-integers
//!
//! Arbitrary precision integer and rational arithmetic for Tabula.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals (`Rational`)
//!
//! Rationals are the workhorse of the interpolation engine: they are
//! always kept in lowest terms with a positive denominator, so the
//! rendered `p/q` form is canonical and round-trips through parsing.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use rational::{ParseRationalError, Rational};

//! Renders the Newton scheme for a small quadratic point set.
//!
//! Run with: `cargo run --example newton_scheme`

use tabula::prelude::*;

fn main() -> Result<(), InterpolationError> {
    let points = vec![(0, 1).into(), (1, 2).into(), (2, 5).into()];
    let mut engine = NewtonInterpolator::new(points)?;

    let x = Rational::from_i64(3, 2);
    println!("{}", engine.report(&x)?);

    Ok(())
}

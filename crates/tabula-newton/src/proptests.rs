//! Property-based tests for the interpolation engine.

#[cfg(test)]
mod tests {
    use proptest::collection::btree_map;
    use proptest::prelude::*;
    use tabula_integers::Rational;

    use crate::{NewtonInterpolator, SupportPoint};

    // Point sets with pairwise distinct x, keyed by x to enforce it
    fn point_set() -> impl Strategy<Value = Vec<SupportPoint>> {
        btree_map(-50i64..50, -50i64..50, 1..7).prop_map(|m| {
            m.into_iter()
                .map(|(x, y)| SupportPoint::new(x, y))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn interpolant_is_exact_at_every_node(points in point_set()) {
            let nodes = points.clone();
            let mut engine = NewtonInterpolator::new(points).unwrap();
            for p in &nodes {
                let y = engine.evaluate(&p.x).unwrap();
                prop_assert_eq!(y, p.y.clone());
            }
        }

        #[test]
        fn zero_order_differences_are_the_values(points in point_set()) {
            let nodes = points.clone();
            let mut engine = NewtonInterpolator::new(points).unwrap();
            engine.evaluate(&Rational::from(0)).unwrap();
            for (k, p) in nodes.iter().enumerate() {
                prop_assert_eq!(engine.divided_difference(k, k), Some(&p.y));
            }
        }

        #[test]
        fn table_size_is_triangular(points in point_set()) {
            let n = points.len();
            let mut engine = NewtonInterpolator::new(points).unwrap();
            engine.evaluate(&Rational::from(0)).unwrap();
            prop_assert_eq!(engine.table_entry_count(), n * (n + 1) / 2);
        }

        #[test]
        fn report_never_recomputes_differently(points in point_set(), x in -50i64..50) {
            let x = Rational::from(x);
            let mut engine = NewtonInterpolator::new(points).unwrap();
            let y = engine.evaluate(&x).unwrap();
            let report = engine.report(&x).unwrap();
            // the rendered evaluation line matches the raw result
            let tail = format!("P({x}) = {y}\n");
            prop_assert!(report.ends_with(&tail));
        }
    }
}

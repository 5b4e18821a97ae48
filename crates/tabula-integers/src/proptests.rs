//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::Rational;

    // Strategy for generating small fractions
    fn small_rational() -> impl Strategy<Value = Rational> {
        ((-1000i64..1000i64), (1i64..1000i64)).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    fn non_zero_rational() -> impl Strategy<Value = Rational> {
        small_rational().prop_filter("non-zero", |r| !r.is_zero())
    }

    proptest! {
        #[test]
        fn add_commutative(a in small_rational(), b in small_rational()) {
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn add_associative(a in small_rational(), b in small_rational(), c in small_rational()) {
            prop_assert_eq!(
                (a.clone() + b.clone()) + c.clone(),
                a + (b + c)
            );
        }

        #[test]
        fn mul_distributes_over_add(
            a in small_rational(),
            b in small_rational(),
            c in small_rational(),
        ) {
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn sub_is_add_neg(a in small_rational(), b in small_rational()) {
            prop_assert_eq!(a.clone() - b.clone(), a + (-b));
        }

        #[test]
        fn checked_div_inverts_mul(a in small_rational(), b in non_zero_rational()) {
            let q = (a.clone() * b.clone()).checked_div(&b).unwrap();
            prop_assert_eq!(q, a);
        }

        #[test]
        fn denominator_always_positive(a in small_rational()) {
            prop_assert!(!a.denominator().is_negative());
        }

        #[test]
        fn display_parse_round_trip(a in small_rational()) {
            let parsed: Rational = a.to_string().parse().unwrap();
            prop_assert_eq!(parsed, a);
        }
    }
}

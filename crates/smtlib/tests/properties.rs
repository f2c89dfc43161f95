//! Property tests for encoding, coercion, and rendering.

use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};
use proptest::prelude::*;
use smtkit_smtlib::literal::exact_rational;
use smtkit_smtlib::{Notation, Sort, Term, TermError, render};

/// Integer terms over a few variables and small constants.
fn int_term() -> impl Strategy<Value = Term> {
    let leaf = prop_oneof![
        "[a-e]".prop_map(Term::int),
        (-100i64..100).prop_map(|n| Sort::Int.from_const(n).unwrap()),
    ];
    leaf.prop_recursive(4, 32, 2, |inner| {
        (inner.clone(), inner, 0..5u8).prop_map(|(lhs, rhs, op)| {
            let built = match op {
                0 => &lhs + &rhs,
                1 => &lhs - &rhs,
                2 => &lhs * &rhs,
                3 => lhs.modulo(&rhs),
                _ => -&lhs,
            };
            built.unwrap()
        })
    })
}

fn only_twos_and_fives(mut n: num_bigint::BigInt) -> bool {
    for p in [2u8, 5] {
        let p = num_bigint::BigInt::from(p);
        while n.is_multiple_of(&p) && !n.is_zero() {
            n /= &p;
        }
    }
    n == num_bigint::BigInt::from(1)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Rendering is a pure function of the tree.
    #[test]
    fn rendering_is_deterministic(term in int_term()) {
        prop_assert_eq!(render(&term, Notation::Canonical), term.to_string());
        prop_assert_eq!(term.to_canonical(), term.to_canonical());
        prop_assert_eq!(term.to_infix(), term.clone().to_infix());
    }

    /// Both notations keep parentheses balanced.
    #[test]
    fn parentheses_are_balanced(term in int_term()) {
        for text in [term.to_canonical(), term.to_infix()] {
            let mut depth = 0i64;
            for ch in text.chars() {
                match ch {
                    '(' => depth += 1,
                    ')' => depth -= 1,
                    _ => {}
                }
                prop_assert!(depth >= 0, "unbalanced: {}", text);
            }
            prop_assert_eq!(depth, 0);
        }
    }

    /// Integer arithmetic never leaves the `Int` sort.
    #[test]
    fn integer_trees_stay_integer(term in int_term()) {
        prop_assert_eq!(term.sort(), Sort::Int);
    }

    /// Float literals become reduced rationals with a decimal denominator
    /// that are as close to the float as its shortest text.
    #[test]
    fn float_encoding_is_exact_and_reduced(x in -1.0e6f64..1.0e6) {
        let r = exact_rational(x).unwrap();
        prop_assert!(r.denom().is_positive());
        prop_assert!(r.numer().gcd(r.denom()) == num_bigint::BigInt::from(1)
            || r.numer().is_zero());
        prop_assert!(only_twos_and_fives(r.denom().clone()));

        let approx = r.numer().to_f64().unwrap() / r.denom().to_f64().unwrap();
        prop_assert!((approx - x).abs() <= 1e-9 * x.abs().max(1.0));
    }

    /// Integer-valued constants print the same as `Int` and as `Real`.
    #[test]
    fn integer_constants_print_alike_in_both_sorts(n in any::<i64>()) {
        let as_int = Sort::Int.from_const(n).unwrap();
        let as_real = Sort::Real.from_const(n).unwrap();
        prop_assert_eq!(as_int.to_string(), n.to_string());
        prop_assert_eq!(as_real.to_string(), n.to_string());
    }

    /// Numeric and boolean operands never combine, in either order.
    #[test]
    fn cross_family_operands_always_fail(n in any::<i64>(), b in any::<bool>(), x in -1.0e3f64..1.0e3) {
        let a = Term::int("a");
        let e = Term::real("e");
        let c = Term::bool("c");
        let results = [
            a.equal(b),
            e.equal(b),
            c.equal(n),
            c.equal(x),
            Term::bool_const(b).equal(&a),
            Sort::Int.from_const(n).unwrap().distinct(&c),
            &a + b,
            &c * n,
            n - &c,
            x / &c,
            c.ge(x),
        ];
        for result in results {
            let is_mismatch = matches!(result, Err(TermError::SortMismatch { .. }));
            prop_assert!(is_mismatch);
        }
    }
}

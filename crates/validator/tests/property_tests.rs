//! Property-based tests for the outcome algebra and rule composition.

use proptest::prelude::*;
use verdict_validator::prelude::*;

fn outcome() -> impl Strategy<Value = Outcome<i32>> {
    prop_oneof![
        any::<i32>().prop_map(Outcome::success),
        prop::collection::vec("[a-z]{1,6}", 1..4).prop_map(Outcome::<i32>::failures),
    ]
}

fn failure_messages() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z ]{1,10}", 1..4)
}

/// A rule whose result depends on the input, so laws are checked on both
/// variants.
fn small_positive() -> impl Rule<Input = i32, Output = i32> {
    from_fn(|n: &i32| {
        if (1..1000).contains(n) {
            Outcome::success(*n)
        } else {
            Outcome::failure("out of range")
        }
    })
}

fn halve(n: i32) -> Outcome<i32> {
    if n % 2 == 0 {
        Outcome::success(n / 2)
    } else {
        Outcome::failure("odd")
    }
}

fn nonzero(n: i32) -> Outcome<i32> {
    if n == 0 {
        Outcome::failure("zero")
    } else {
        Outcome::success(n)
    }
}

// ============================================================================
// FUNCTOR LAWS
// ============================================================================

proptest! {
    #[test]
    fn map_identity(o in outcome()) {
        prop_assert_eq!(o.clone().map(|x| x), o);
    }

    #[test]
    fn map_composition(o in outcome()) {
        let f = |x: i32| x.wrapping_mul(3);
        let g = |x: i32| x.wrapping_sub(7);
        prop_assert_eq!(o.clone().map(f).map(g), o.map(|x| g(f(x))));
    }
}

// ============================================================================
// MONAD LAWS
// ============================================================================

proptest! {
    #[test]
    fn flat_map_left_identity(a in any::<i32>()) {
        prop_assert_eq!(Outcome::success(a).flat_map(halve), halve(a));
    }

    #[test]
    fn flat_map_right_identity(o in outcome()) {
        prop_assert_eq!(o.clone().flat_map(Outcome::success), o);
    }

    #[test]
    fn flat_map_failure_absorbs(messages in failure_messages()) {
        let failed = Outcome::<i32>::failures(messages.clone());
        prop_assert_eq!(failed.flat_map(halve), Outcome::<i32>::failures(messages));
    }

    #[test]
    fn flat_map_associative(o in outcome()) {
        let nested = o.clone().flat_map(halve).flat_map(nonzero);
        let grouped = o.flat_map(|x| halve(x).flat_map(nonzero));
        prop_assert_eq!(nested, grouped);
    }
}

// ============================================================================
// ERROR ACCUMULATION
// ============================================================================

proptest! {
    #[test]
    fn and_concatenates_failures(m1 in failure_messages(), m2 in failure_messages()) {
        let left = Outcome::<i32>::failures(m1.clone());
        let right = Outcome::<i32>::failures(m2.clone());
        let expected: Vec<String> = m1.into_iter().chain(m2).collect();
        prop_assert_eq!(left.and(right, |a, b| a + b), Outcome::failures(expected));
    }

    #[test]
    fn ap_chain_accumulates_every_failure(groups in prop::collection::vec(failure_messages(), 3)) {
        let [a, b, c] = [&groups[0], &groups[1], &groups[2]]
            .map(|m| Outcome::<i32>::failures(m.clone()));
        let combined = combine3(a, b, c, |x, y, z| x + y + z);
        let expected: Vec<String> = groups.into_iter().flatten().collect();
        prop_assert_eq!(combined, Outcome::failures(expected));
    }

    #[test]
    fn and_agrees_with_ap_derivation(a in outcome(), b in outcome()) {
        let direct = a.clone().and(b.clone(), |x, y| (x, y));
        let derived = b.ap(a.map(|x| move |y| (x, y)));
        prop_assert_eq!(direct, derived);
    }
}

// ============================================================================
// RULE COMPOSITION PRESERVES OUTCOME SEMANTICS
// ============================================================================

proptest! {
    #[test]
    fn rule_map_matches_outcome_map(x in any::<i32>()) {
        let rule = small_positive().map(|n| n * 2);
        prop_assert_eq!(rule.apply(&x), small_positive().apply(&x).map(|n| n * 2));
    }

    #[test]
    fn rule_flat_map_matches_outcome_flat_map(x in any::<i32>()) {
        let second = from_fn(|n: &i32| halve(*n));
        let rule = small_positive().flat_map(&second);
        let expected = small_positive().apply(&x).flat_map(|n| second.apply(&n));
        prop_assert_eq!(rule.apply(&x), expected);
    }

    #[test]
    fn rule_and_matches_outcome_and(x in any::<i32>()) {
        let second = from_fn(|n: &i32| halve(*n));
        let rule = small_positive().and(&second, |a, b| (a, b));
        let expected = small_positive().apply(&x).and(second.apply(&x), |a, b| (a, b));
        prop_assert_eq!(rule.apply(&x), expected);
    }

    #[test]
    fn parse_int_never_panics(s in ".*") {
        let outcome = parse_int().apply(&s);
        prop_assert_eq!(outcome.is_success(), s.parse::<i64>().is_ok());
    }
}

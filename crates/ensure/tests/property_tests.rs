//! Property-based tests for ensure.

use ensure::prelude::*;
use proptest::prelude::*;

// ============================================================================
// MODE EQUIVALENCE: fail-fast and collect-all agree on pass/fail
// ============================================================================

proptest! {
    #[test]
    fn number_modes_agree(n in any::<i64>()) {
        let v = number::<i64>().is_in_range(-50, 50).is_odd().is_not_one_of([7, 9]);
        let fast = v.validate_with(&n, &ValidationOptions::new()).is_ok();
        let all = v.validate_with(&n, &ValidationOptions::collect_all()).is_ok();
        prop_assert_eq!(fast, all);
    }

    #[test]
    fn string_modes_agree(s in ".{0,20}") {
        let v = string()
            .is_not_empty()
            .is_shorter_than(10)
            .does_not_contain(" ")
            .matches(patterns::ALPHANUM);
        let fast = v.validate_with(&s, &ValidationOptions::new()).is_ok();
        let all = v.validate_with(&s, &ValidationOptions::collect_all()).is_ok();
        prop_assert_eq!(fast, all);
    }

    #[test]
    fn array_modes_agree(items in proptest::collection::vec(-10i32..10, 0..8)) {
        let v = array::<i32>()
            .has_fewer_than(6)
            .each(number::<i32>().is_greater_than_or_equal_to(0))
            .each_index(number::<usize>().is_less_than(5));
        let fast = v.validate_with(&items, &ValidationOptions::new()).is_ok();
        let all = v.validate_with(&items, &ValidationOptions::collect_all()).is_ok();
        prop_assert_eq!(fast, all);
    }
}

// ============================================================================
// RANGE: lower bound inclusive, upper bound exclusive
// ============================================================================

proptest! {
    #[test]
    fn range_is_half_open(min in -1_000i32..1_000, span in 0i32..1_000, n in -3_000i32..3_000) {
        let max = min + span;
        let passes = number::<i32>().is_in_range(min, max).validate(&n).is_ok();
        prop_assert_eq!(passes, min <= n && n < max);
    }
}

// ============================================================================
// LENGTH SLOT: N length constraints behave like their conjunction
// ============================================================================

proptest! {
    #[test]
    fn length_constraints_form_one_unit(
        s in ".{0,12}",
        longer in 0usize..6,
        shorter in 4usize..12,
    ) {
        let v = string().is_longer_than(longer).is_shorter_than(shorter);
        let len = s.chars().count();
        prop_assert_eq!(v.validate(&s).is_ok(), len > longer && len < shorter);

        // the slot runs before checks appended after it
        let guarded = string()
            .is_longer_than(longer)
            .is(|_| Err("unreachable when the length fails".into()));
        let err = guarded.validate(&s).unwrap_err().to_string();
        if len <= longer {
            prop_assert!(err.starts_with("must have a length greater than"));
        } else {
            prop_assert_eq!(err, "unreachable when the length fails");
        }
    }
}

// ============================================================================
// FLATTENING: aggregates never nest
// ============================================================================

proptest! {
    #[test]
    fn aggregates_flatten(types in 0usize..4, inner in 0usize..4, outer in 0usize..4) {
        let mut nested = ValidationErrors::new();
        for i in 0..types {
            nested.append(TypeError::new(format!("type {i}")));
        }
        for i in 0..inner {
            nested.append(ValidationError::new(format!("inner {i}")));
        }

        let mut top: ValidationErrors =
            (0..outer).map(|i| ValidationError::new(format!("outer {i}"))).collect();
        top.append(nested);

        prop_assert_eq!(top.type_errors().len(), types);
        prop_assert_eq!(top.validation_errors().len(), inner + outer);
    }
}

//! Error-detection guarantees over random payloads.
//!
//! For every payload `s` with check digit `k`, the number `s ++ [k]`:
//! - validates,
//! - stops validating after any single-digit substitution,
//! - stops validating after any swap of two adjacent, distinct digits.

use super::common::{substitute, swap_adjacent};
use proptest::prelude::*;
use verhoeff::analysis::{adjacent_transpositions, detection_report, single_digit_errors};
use verhoeff::{generate, validate, Digits};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Random payloads, including long ones that wrap the permutation cycle.
fn payload_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..10, 1..40)
}

/// A payload followed by its check digit.
fn valid_number_strategy() -> impl Strategy<Value = Vec<u8>> {
    payload_strategy().prop_map(|mut payload| {
        let check = generate(&payload).unwrap();
        payload.push(check);
        payload
    })
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    /// Property: appending the generated digit always validates.
    #[test]
    fn prop_round_trip(payload in payload_strategy()) {
        let check = generate(&payload).unwrap();
        let mut full = payload;
        full.push(check);
        prop_assert_eq!(validate(&full), Ok(true));
    }

    /// Property: every single-digit substitution is detected.
    #[test]
    fn prop_single_digit_errors_detected(number in valid_number_strategy()) {
        for position in 0..number.len() {
            for replacement in (0..10u8).filter(|&v| v != number[position]) {
                let mutated = substitute(&number, position, replacement);
                prop_assert_eq!(
                    validate(&mutated),
                    Ok(false),
                    "substitution at {} with {} went undetected",
                    position,
                    replacement
                );
            }
        }
    }

    /// Property: every adjacent transposition of distinct digits is detected.
    #[test]
    fn prop_adjacent_transpositions_detected(number in valid_number_strategy()) {
        for position in 0..number.len().saturating_sub(1) {
            if number[position] == number[position + 1] {
                continue;
            }
            let mutated = swap_adjacent(&number, position);
            prop_assert_eq!(
                validate(&mutated),
                Ok(false),
                "swap at {} went undetected",
                position
            );
        }
    }

    /// Property: the analysis module agrees and finds nothing undetected.
    #[test]
    fn prop_detection_report_is_clean(number in valid_number_strategy()) {
        let digits = Digits::new(number.clone()).unwrap();
        let report = detection_report(&digits);

        prop_assert!(report.number_is_valid);
        prop_assert!(report.all_detected());
        prop_assert_eq!(report.substitutions_tried, 9 * number.len());

        let distinct_pairs = number.windows(2).filter(|w| w[0] != w[1]).count();
        prop_assert_eq!(report.transpositions_tried, distinct_pairs);
    }

    /// Property: enumerated mutations really differ from the source.
    #[test]
    fn prop_mutations_differ_from_source(number in valid_number_strategy()) {
        let digits = Digits::new(number).unwrap();
        for mutation in single_digit_errors(&digits).chain(adjacent_transpositions(&digits)) {
            prop_assert_ne!(&mutation.digits, &digits);
            prop_assert_eq!(mutation.digits.len(), digits.len());
        }
    }
}

/// Exhaustive over all two-digit payloads: small enough to try every one.
#[test]
fn exhaustive_short_payloads() {
    for a in 0..10u8 {
        for b in 0..10u8 {
            let payload = [a, b];
            let check = generate(&payload).unwrap();
            let number = [a, b, check];
            assert_eq!(validate(&number), Ok(true));

            for position in 0..3 {
                for replacement in (0..10u8).filter(|&v| v != number[position]) {
                    let mutated = substitute(&number, position, replacement);
                    assert_eq!(validate(&mutated), Ok(false), "{:?}", mutated);
                }
            }
            for position in 0..2 {
                if number[position] != number[position + 1] {
                    let mutated = swap_adjacent(&number, position);
                    assert_eq!(validate(&mutated), Ok(false), "{:?}", mutated);
                }
            }
        }
    }
}

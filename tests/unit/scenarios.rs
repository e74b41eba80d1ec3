//! Concrete numbers with pinned answers.

use super::common::{
    digits, substitute, KNOWN_CHECK_DIGITS, SCENARIO_CHECK_DIGIT, SCENARIO_NUMBER,
    SCENARIO_PAYLOAD,
};
use verhoeff::{append_check_digit, generate, generate_str, validate, validate_str};

#[test]
fn scenario_payload_generates_eight() {
    assert_eq!(generate_str(SCENARIO_PAYLOAD), Ok(SCENARIO_CHECK_DIGIT));
    assert_eq!(
        generate(&[8, 2, 3, 5, 1, 9, 7, 4, 0, 6, 2]),
        Ok(SCENARIO_CHECK_DIGIT)
    );
}

#[test]
fn scenario_number_validates() {
    assert_eq!(append_check_digit(SCENARIO_PAYLOAD).unwrap(), SCENARIO_NUMBER);
    assert_eq!(validate_str(SCENARIO_NUMBER), Ok(true));
}

#[test]
fn flipping_the_check_digit_invalidates() {
    let values = digits(SCENARIO_NUMBER).to_values();
    let last = values.len() - 1;
    for replacement in (0..10u8).filter(|&d| d != SCENARIO_CHECK_DIGIT) {
        let mutated = substitute(&values, last, replacement);
        assert_eq!(
            validate(&mutated),
            Ok(false),
            "last digit {} should not validate",
            replacement
        );
    }
}

#[test]
fn published_examples() {
    for &(payload, check) in KNOWN_CHECK_DIGITS {
        assert_eq!(generate_str(payload), Ok(check), "payload {}", payload);
    }
    assert_eq!(validate_str("2363"), Ok(true));
    assert_eq!(validate_str("2364"), Ok(false));
    assert_eq!(validate_str("123451"), Ok(true));
    assert_eq!(validate_str("1428570"), Ok(true));
}

#[test]
fn digit_string_with_whitespace_around_is_accepted() {
    assert_eq!(validate_str("  823519740628\n"), Ok(true));
}

#[test]
fn check_digit_for_every_single_digit_payload() {
    // p[1] maps x, d[0][.] is identity, so the check digit is inv[p[1][x]].
    let expected = [4, 5, 7, 6, 3, 8, 2, 0, 9, 1];
    for (x, &check) in expected.iter().enumerate() {
        assert_eq!(generate(&[x as u8]), Ok(check), "payload {}", x);
    }
}

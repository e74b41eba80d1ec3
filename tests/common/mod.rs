//! Shared test utilities and fixtures.

#![allow(dead_code)]

use verhoeff::Digits;

// Re-export canonical fixtures from verhoeff::testing
pub use verhoeff::testing::{digits, valid_number, KNOWN_CHECK_DIGITS};

/// The 11-digit payload of the worked example.
pub const SCENARIO_PAYLOAD: &str = "82351974062";

/// Its check digit, as produced by every canonical Verhoeff implementation.
pub const SCENARIO_CHECK_DIGIT: u8 = 8;

/// The full 12-digit number.
pub const SCENARIO_NUMBER: &str = "823519740628";

/// Replace the digit at `position` (from the left).
pub fn substitute(values: &[u8], position: usize, replacement: u8) -> Vec<u8> {
    let mut out = values.to_vec();
    out[position] = replacement;
    out
}

/// Swap the digits at `position` and `position + 1`.
pub fn swap_adjacent(values: &[u8], position: usize) -> Vec<u8> {
    let mut out = values.to_vec();
    out.swap(position, position + 1);
    out
}

/// Assert that `number` validates, with a readable failure message.
pub fn assert_valid(number: &Digits) {
    assert!(number.is_valid(), "expected {} to validate", number);
}

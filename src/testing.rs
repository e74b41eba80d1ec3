//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use crate::digits::{parse_digits, Digits};

/// Payloads with their published Verhoeff check digits.
pub const KNOWN_CHECK_DIGITS: &[(&str, u8)] = &[
    ("236", 3),
    ("12345", 1),
    ("142857", 0),
    ("82351974062", 8),
    ("89462597507", 8),
    ("8473643095483728456789", 2),
];

/// Parse a fixture string. Panics on bad fixtures, which is what a test wants.
pub fn digits(s: &str) -> Digits {
    parse_digits(s).unwrap_or_else(|e| panic!("bad test fixture {:?}: {}", s, e))
}

/// `payload` with its check digit appended.
pub fn valid_number(payload: &str) -> Digits {
    digits(payload).with_check_digit()
}

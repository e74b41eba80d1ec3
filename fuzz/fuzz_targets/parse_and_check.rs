// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the string path: parse, validate, batch.
//!
//! Any UTF-8 goes in. Parsing either yields digits that round-trip through
//! `Display`, or a `ParseError`. The batch checker must produce one outcome
//! per non-blank, non-comment line and never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use verhoeff::batch::check_lines;
use verhoeff::{parse_digits, validate_str};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    match parse_digits(text) {
        Ok(digits) => {
            assert_eq!(digits.to_string(), text.trim());
            assert_eq!(validate_str(text), Ok(digits.is_valid()));
        }
        Err(_) => assert!(validate_str(text).is_err()),
    }

    let expected = text
        .lines()
        .filter(|l| {
            let t = l.trim();
            !t.is_empty() && !t.starts_with('#')
        })
        .count();
    assert_eq!(check_lines(text).len(), expected);
});

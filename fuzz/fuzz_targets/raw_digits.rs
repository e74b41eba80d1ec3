// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the raw-slice engine entry points.
//!
//! Arbitrary bytes go straight into `validate` and `generate`. Values above 9
//! must come back as `InvalidInput`, never as a panic or a table overrun. For
//! in-range input, the generated digit must validate.

#![no_main]

use libfuzzer_sys::fuzz_target;
use verhoeff::{generate, validate, InvalidInput};

fuzz_target!(|data: &[u8]| {
    let in_range = !data.is_empty() && data.iter().all(|&v| v <= 9);

    match (validate(data), generate(data)) {
        (Ok(_), Ok(check)) => {
            assert!(in_range, "accepted out-of-range input {:?}", data);
            assert!(check <= 9, "check digit {} out of range", check);

            let mut full = data.to_vec();
            full.push(check);
            assert_eq!(validate(&full), Ok(true), "roundtrip failed for {:?}", data);
        }
        (Err(a), Err(b)) => {
            assert!(!in_range, "rejected valid input {:?}", data);
            assert_eq!(a, b, "validate and generate disagree on the error");
            if data.is_empty() {
                assert_eq!(a, InvalidInput::Empty);
            }
        }
        (v, g) => panic!("validate {:?} and generate {:?} disagree", v, g),
    }
});

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the checksum loop.
//!
//! Debug-mode assertions that the accumulator and every table index stay in
//! range. They are zero-cost in release builds (`debug_assert!`). The table
//! shape itself is checked at compile time in `tables`; these cover what the
//! compiler cannot see, the values flowing through the loop.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function           | Property                                  |
//! |-----------------------------|-------------------------------------------|
//! | `check_digit_in_range`      | every input value indexes a table column  |
//! | `check_accumulator_in_range`| `c` is a group element after every step   |
//! | `check_round_trip`          | `validate(s ++ [generate(s)])` holds      |

use crate::tables::GROUP_ORDER;

/// Check that a value fed to the loop is a decimal digit.
///
/// # Panics (debug builds only)
/// Panics if `value > 9`.
#[inline]
pub fn check_digit_in_range(position: usize, value: u8) {
    debug_assert!(
        (value as usize) < GROUP_ORDER,
        "Contract violation: digit at position {} is {}, outside 0-9",
        position,
        value
    );
}

/// Check that the running product is still a group element.
///
/// # Panics (debug builds only)
/// Panics if `c > 9`.
#[inline]
pub fn check_accumulator_in_range(position: usize, c: u8) {
    debug_assert!(
        (c as usize) < GROUP_ORDER,
        "Contract violation: accumulator {} after position {} is not a D5 element",
        c,
        position
    );
}

/// Check that a freshly generated check digit validates.
///
/// # Panics (debug builds only)
/// Panics if appending `check` to `payload` does not give a zero product.
#[inline]
pub fn check_round_trip(payload_product_with_check: u8, check: u8) {
    debug_assert!(
        payload_product_with_check == 0,
        "Contract violation: check digit {} does not validate (product {})",
        check,
        payload_product_with_check
    );
}

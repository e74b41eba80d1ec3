// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The Verhoeff engine: validate a number, generate a check digit.
//!
//! Both operations run the same recurrence over the digits, rightmost first:
//!
//! ```text
//! c = 0
//! for (pos, x) in digits from the right:
//!     c = d[c][ p[(pos + offset) mod 8][x] ]
//! ```
//!
//! `validate` uses `offset = 0` and accepts iff `c == 0`. `generate` uses
//! `offset = 1`, as if the (not yet known) check digit already sat at position
//! 0, and returns `inv[c]`. Appending that digit then closes the product to 0.
//!
//! Input is validated in full before the accumulator is touched, so a call
//! either succeeds or fails without doing any work.

use crate::contracts;
use crate::digits::{parse_digits, Digit, Digits};
use crate::error::{Error, InvalidInput};
use crate::tables::{inverse, multiply, permute};

/// Run the recurrence with the permutation index shifted by `offset`.
#[inline]
fn accumulate(digits: &Digits, offset: usize) -> u8 {
    digits.iter_from_right().fold(0u8, |c, (pos, x)| {
        contracts::check_digit_in_range(pos, x.value());
        let next = multiply(c, permute(pos + offset, x.value()));
        contracts::check_accumulator_in_range(pos, next);
        next
    })
}

impl Digits {
    /// True if the rightmost digit is a correct Verhoeff check digit.
    pub fn is_valid(&self) -> bool {
        accumulate(self, 0) == 0
    }

    /// The check digit to append to this payload.
    pub fn check_digit(&self) -> Digit {
        let c = accumulate(self, 1);
        let check = inverse(c);
        contracts::check_round_trip(multiply(c, permute(0, check)), check);
        // INVERSE entries are 0-9 (checked at compile time in `tables`)
        Digit::ALL[check as usize]
    }

    /// This payload followed by its check digit.
    pub fn with_check_digit(&self) -> Digits {
        self.with_appended(self.check_digit())
    }
}

/// Validate a digit sequence whose last element is the check digit.
///
/// Fails with [`InvalidInput`] if `input` is empty or holds a value above 9.
///
/// ```
/// assert_eq!(verhoeff::validate(&[2, 3, 6, 3]), Ok(true));
/// assert_eq!(verhoeff::validate(&[2, 3, 6, 4]), Ok(false));
/// ```
pub fn validate(input: &[u8]) -> Result<bool, InvalidInput> {
    let digits = Digits::try_from(input)?;
    Ok(digits.is_valid())
}

/// Compute the check digit for a payload (the digits without a checksum).
///
/// Fails with [`InvalidInput`] if `input` is empty or holds a value above 9.
///
/// ```
/// assert_eq!(verhoeff::generate(&[2, 3, 6]), Ok(3));
/// ```
pub fn generate(input: &[u8]) -> Result<u8, InvalidInput> {
    let digits = Digits::try_from(input)?;
    Ok(digits.check_digit().value())
}

/// Parse `number` and validate it.
pub fn validate_str(number: &str) -> Result<bool, Error> {
    Ok(parse_digits(number)?.is_valid())
}

/// Parse `payload` and compute its check digit.
pub fn generate_str(payload: &str) -> Result<u8, Error> {
    Ok(parse_digits(payload)?.check_digit().value())
}

/// Parse `payload` and return it with its check digit appended.
///
/// ```
/// assert_eq!(verhoeff::append_check_digit("82351974062").unwrap(), "823519740628");
/// ```
pub fn append_check_digit(payload: &str) -> Result<String, Error> {
    Ok(parse_digits(payload)?.with_check_digit().to_string())
}

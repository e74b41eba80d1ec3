// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Validated digit types.
//!
//! Same trick as any "make invalid states unrepresentable" wrapper: check once
//! at construction, then rely on it. A [`Digit`] is always in 0-9 and a
//! [`Digits`] is never empty, so the engine methods on `Digits` cannot fail
//! and cannot index outside the tables.
//!
//! # Position convention
//!
//! Verhoeff counts positions from the right. [`Digits::iter_from_right`] is
//! the one place that convention lives: position 0 is the rightmost digit
//! (the check digit, when there is one).

use crate::error::{InvalidInput, ParseError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single decimal digit, 0 through 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    /// All ten digits in ascending order.
    pub const ALL: [Digit; 10] = [
        Digit(0),
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
    ];

    /// Wrap a raw value, or `None` if it is not 0-9.
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Digit(value))
        } else {
            None
        }
    }

    /// Checked conversion from an ASCII digit character.
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|v| Digit(v as u8))
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    pub fn to_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Digit> for u8 {
    fn from(d: Digit) -> u8 {
        d.0
    }
}

impl TryFrom<u8> for Digit {
    type Error = InvalidInput;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Digit::new(value).ok_or(InvalidInput::OutOfRange { position: 0, value })
    }
}

/// A non-empty sequence of decimal digits, most significant first.
///
/// Serializes as its string form (`"823519740628"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Digits(Vec<Digit>);

impl Digits {
    /// Build from raw values, rejecting empty input and anything above 9.
    pub fn new(values: Vec<u8>) -> Result<Self, InvalidInput> {
        Self::try_from(values.as_slice())
    }

    /// Wrap an already-validated digit vector. `None` if empty.
    pub fn from_digits(digits: Vec<Digit>) -> Option<Self> {
        if digits.is_empty() {
            None
        } else {
            Some(Digits(digits))
        }
    }

    /// Wrap a vector the caller knows is non-empty (a copy of another `Digits`).
    pub(crate) fn from_nonempty(digits: Vec<Digit>) -> Self {
        debug_assert!(!digits.is_empty());
        Digits(digits)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Digit] {
        &self.0
    }

    /// Raw values, most significant first.
    pub fn to_values(&self) -> Vec<u8> {
        self.0.iter().map(|d| d.value()).collect()
    }

    /// Number of digits. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Digits paired with their distance from the right end.
    ///
    /// Yields `(0, rightmost)`, `(1, next)`, ... up to the leftmost digit.
    pub fn iter_from_right(&self) -> impl Iterator<Item = (usize, Digit)> + '_ {
        self.0.iter().rev().copied().enumerate()
    }

    /// A new sequence with `digit` appended on the right.
    pub fn with_appended(&self, digit: Digit) -> Digits {
        let mut digits = Vec::with_capacity(self.0.len() + 1);
        digits.extend_from_slice(&self.0);
        digits.push(digit);
        Digits(digits)
    }

    /// The rightmost digit.
    pub fn last(&self) -> Digit {
        // Non-empty by construction.
        self.0[self.0.len() - 1]
    }

    /// Everything but the rightmost digit, or `None` for a single digit.
    pub fn payload(&self) -> Option<Digits> {
        Digits::from_digits(self.0[..self.0.len() - 1].to_vec())
    }
}

impl TryFrom<&[u8]> for Digits {
    type Error = InvalidInput;

    fn try_from(values: &[u8]) -> Result<Self, Self::Error> {
        if values.is_empty() {
            return Err(InvalidInput::Empty);
        }
        let digits = values
            .iter()
            .enumerate()
            .map(|(position, &value)| {
                Digit::new(value).ok_or(InvalidInput::OutOfRange { position, value })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Digits(digits))
    }
}

/// Parse a numeric string into digits.
///
/// Surrounding whitespace is ignored. Anything else that is not `0`-`9`
/// (signs, separators, non-ASCII digits) is a [`ParseError::NonDigit`].
pub fn parse_digits(input: &str) -> Result<Digits, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    let digits = trimmed
        .chars()
        .enumerate()
        .map(|(position, found)| {
            Digit::from_char(found).ok_or(ParseError::NonDigit { position, found })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Digits(digits))
}

impl FromStr for Digits {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_digits(s)
    }
}

impl TryFrom<String> for Digits {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        parse_digits(&s)
    }
}

impl From<Digits> for String {
    fn from(digits: Digits) -> String {
        digits.to_string()
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.0 {
            write!(f, "{}", d.0)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_rejects_values_above_nine() {
        assert_eq!(Digit::new(9).map(Digit::value), Some(9));
        assert_eq!(Digit::new(10), None);
        assert_eq!(Digit::new(255), None);
    }

    #[test]
    fn digit_char_conversion_is_checked() {
        assert_eq!(Digit::from_char('7'), Digit::new(7));
        assert_eq!(Digit::from_char('a'), None);
        // Arabic-Indic digit seven: a digit, but not a decimal ASCII one
        assert_eq!(Digit::from_char('\u{0667}'), None);
        assert_eq!(Digit::ALL[3].to_char(), '3');
    }

    #[test]
    fn parse_trims_and_keeps_order() {
        let digits = parse_digits("  0123 \n").unwrap();
        assert_eq!(digits.to_values(), vec![0, 1, 2, 3]);
        assert_eq!(digits.to_string(), "0123");
    }

    #[test]
    fn parse_reports_first_bad_character() {
        assert_eq!(
            parse_digits("12-34"),
            Err(ParseError::NonDigit {
                position: 2,
                found: '-'
            })
        );
        assert_eq!(
            parse_digits("1234 5678"),
            Err(ParseError::NonDigit {
                position: 4,
                found: ' '
            })
        );
        assert_eq!(parse_digits("   "), Err(ParseError::Empty));
        assert_eq!(parse_digits(""), Err(ParseError::Empty));
    }

    #[test]
    fn raw_values_are_range_checked() {
        assert_eq!(Digits::new(vec![]), Err(InvalidInput::Empty));
        assert_eq!(
            Digits::new(vec![1, 2, 10, 3]),
            Err(InvalidInput::OutOfRange {
                position: 2,
                value: 10
            })
        );
        assert!(Digits::new(vec![0]).is_ok());
    }

    #[test]
    fn iter_from_right_numbers_positions_from_the_end() {
        let digits = parse_digits("123").unwrap();
        let seen: Vec<(usize, u8)> = digits
            .iter_from_right()
            .map(|(pos, d)| (pos, d.value()))
            .collect();
        assert_eq!(seen, vec![(0, 3), (1, 2), (2, 1)]);
    }

    #[test]
    fn payload_and_last_split_the_check_digit() {
        let digits = parse_digits("2363").unwrap();
        assert_eq!(digits.last().value(), 3);
        assert_eq!(digits.payload().unwrap().to_string(), "236");
        assert_eq!(parse_digits("5").unwrap().payload(), None);
    }

    #[test]
    fn serde_uses_string_form() {
        let digits = parse_digits("0042").unwrap();
        let json = serde_json::to_string(&digits).unwrap();
        assert_eq!(json, "\"0042\"");
        let back: Digits = serde_json::from_str(&json).unwrap();
        assert_eq!(back, digits);
        assert!(serde_json::from_str::<Digits>("\"12a\"").is_err());
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Two layers. The engine only ever sees digit values,
//! so it can only complain about [`InvalidInput`]. Turning text into digits is
//! the parser's job and the parser's failure, [`ParseError`]. [`Error`] joins
//! the two for callers that go from string to answer in one step.

use thiserror::Error;

/// A digit sequence handed to the engine is unusable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// No digits at all.
    #[error("digit sequence is empty")]
    Empty,

    /// A raw value outside 0-9. `position` counts from the left, starting at 0.
    #[error("value {value} at position {position} is not a decimal digit")]
    OutOfRange { position: usize, value: u8 },
}

/// A string could not be converted into digits.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing left after trimming whitespace.
    #[error("no digits found in input")]
    Empty,

    /// A character that is not `0`-`9`. `position` is the char index in the
    /// trimmed input.
    #[error("unexpected character {found:?} at position {position}")]
    NonDigit { position: usize, found: char },
}

/// Any failure on the string-to-result path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

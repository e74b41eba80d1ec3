//! Verhoeff check digits over the dihedral group D5.
//!
//! The Verhoeff scheme appends one decimal digit to a number so that every
//! single-digit typo and every swap of two neighbouring digits is caught. That
//! is strictly stronger than mod-10 schemes like Luhn, which miss some swaps.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  tables.rs  │────▶│ checksum.rs  │◀────│  digits.rs   │
//! │ (d, p, inv) │     │ (validate,   │     │ (Digit,      │
//! │             │     │  generate)   │     │  Digits)     │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        ▲                   │
//!        │                   ▼
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  group.rs   │     │ analysis.rs  │     │  batch.rs    │
//! │ (D5 audit)  │     │ (error sims) │     │ (many lines) │
//! └─────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! The engine (`tables` + `checksum`) is pure and allocation-free on the raw
//! slice path. Everything else is built on top of it.
//!
//! # Usage
//!
//! ```
//! use verhoeff::{generate, validate, append_check_digit};
//!
//! assert_eq!(generate(&[2, 3, 6]), Ok(3));
//! assert_eq!(validate(&[2, 3, 6, 3]), Ok(true));
//! assert_eq!(append_check_digit("82351974062").unwrap(), "823519740628");
//! ```

pub mod analysis;
pub mod batch;
mod checksum;
pub mod contracts;
mod digits;
mod error;
pub mod group;
pub mod tables;
pub mod testing;

pub use checksum::{append_check_digit, generate, generate_str, validate, validate_str};
pub use digits::{parse_digits, Digit, Digits};
pub use error::{Error, InvalidInput, ParseError};
pub use tables::{INVERSE, MULTIPLICATION, PERMUTATION};

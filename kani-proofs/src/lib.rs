// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the Verhoeff checksum loop.
//!
//! This standalone crate extracts the tables and the accumulation loop and
//! proves them with Kani, without pulling in the main crate's dependencies.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: validate and generate never panic on any input
//! 2. **Rejection**: empty input and values above 9 are always rejected
//! 3. **Roundtrip**: validate(s ++ [generate(s)]) for all payloads up to 6 digits
//! 4. **Detection**: any single substitution in a valid 4-digit number fails

// ============================================================================
// TABLES AND LOOP (copied from src/tables.rs and src/checksum.rs)
// ============================================================================

pub const MULTIPLICATION: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

pub const PERMUTATION: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

pub const INVERSE: [u8; 10] = [0, 4, 3, 2, 1, 5, 6, 7, 8, 9];

/// Why an input was rejected
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    Empty,
    OutOfRange,
}

fn check(input: &[u8]) -> Result<(), InputError> {
    if input.is_empty() {
        return Err(InputError::Empty);
    }
    if input.iter().any(|&v| v > 9) {
        return Err(InputError::OutOfRange);
    }
    Ok(())
}

fn product(input: &[u8], offset: usize) -> u8 {
    let mut c = 0u8;
    for (pos, &x) in input.iter().rev().enumerate() {
        c = MULTIPLICATION[c as usize][PERMUTATION[(pos + offset) % 8][x as usize] as usize];
    }
    c
}

pub fn validate(input: &[u8]) -> Result<bool, InputError> {
    check(input)?;
    Ok(product(input, 0) == 0)
}

pub fn generate(input: &[u8]) -> Result<u8, InputError> {
    check(input)?;
    Ok(INVERSE[product(input, 1) as usize])
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    const MAX_LEN: usize = 6;

    /// Verify validate and generate never panic, whatever the bytes.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_no_panic() {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let mut bytes = [0u8; MAX_LEN];
        for i in 0..len {
            bytes[i] = kani::any();
        }
        let slice = &bytes[..len];

        // These must not panic (Err is fine)
        let _ = validate(slice);
        if let Ok(check) = generate(slice) {
            kani::assert(check <= 9, "check digit must be a decimal digit");
        }
    }

    /// Verify out-of-range values are always rejected.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_out_of_range_rejected() {
        let bad: u8 = kani::any_where(|&v| v > 9);
        let pos: usize = kani::any_where(|&p| p < 4);
        let mut bytes = [1u8; 4];
        bytes[pos] = bad;

        kani::assert(
            validate(&bytes) == Err(InputError::OutOfRange),
            "validate must reject values above 9",
        );
        kani::assert(
            generate(&bytes) == Err(InputError::OutOfRange),
            "generate must reject values above 9",
        );
    }

    /// Verify the empty sequence is rejected by both operations.
    #[kani::proof]
    fn verify_empty_rejected() {
        let empty: &[u8] = &[];
        kani::assert(validate(empty) == Err(InputError::Empty), "empty validate");
        kani::assert(generate(empty) == Err(InputError::Empty), "empty generate");
    }

    /// Verify roundtrip: the generated digit always validates.
    #[kani::proof]
    #[kani::unwind(9)]
    fn verify_roundtrip() {
        let len: usize = kani::any_where(|&n| n >= 1 && n <= MAX_LEN);
        let mut bytes = [0u8; MAX_LEN + 1];
        for i in 0..len {
            bytes[i] = kani::any_where(|&v: &u8| v <= 9);
        }
        let check = generate(&bytes[..len]).unwrap();
        bytes[len] = check;
        kani::assert(
            validate(&bytes[..len + 1]) == Ok(true),
            "payload plus generated digit must validate",
        );
    }

    /// Verify any single substitution in a valid 4-digit number is caught.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_single_substitution_detected() {
        let mut number = [0u8; 4];
        for i in 0..3 {
            number[i] = kani::any_where(|&v: &u8| v <= 9);
        }
        number[3] = generate(&number[..3]).unwrap();

        let pos: usize = kani::any_where(|&p| p < 4);
        let replacement: u8 = kani::any_where(|&v: &u8| v <= 9);
        kani::assume(replacement != number[pos]);
        number[pos] = replacement;

        kani::assert(validate(&number) == Ok(false), "substitution must be detected");
    }
}

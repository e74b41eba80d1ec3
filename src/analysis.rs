// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error-detection analysis.
//!
//! Verhoeff's two guarantees are about two kinds of transcription mistakes:
//! replacing one digit, and swapping two neighbouring ones. This module
//! enumerates every such mistake for a given number and checks which of them
//! still validate. For a correct number the answer is always "none".

use crate::digits::{Digit, Digits};
use serde::Serialize;

/// The kind of transcription error a [`Mutation`] simulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MutationKind {
    /// Digit at `position` replaced by `replacement`.
    Substitution { position: usize, replacement: u8 },
    /// Digits at `position` and `position + 1` swapped.
    Transposition { position: usize },
}

/// A mistyped copy of a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mutation {
    #[serde(flatten)]
    pub kind: MutationKind,
    pub digits: Digits,
}

impl Mutation {
    /// True if the mistake would slip past validation.
    pub fn is_undetected(&self) -> bool {
        self.digits.is_valid()
    }
}

/// Every number that differs from `digits` in exactly one position.
///
/// Positions count from the left. Yields `9 * len` mutations.
pub fn single_digit_errors(digits: &Digits) -> impl Iterator<Item = Mutation> + '_ {
    let source = digits.as_slice();
    (0..source.len()).flat_map(move |position| {
        Digit::ALL
            .into_iter()
            .filter(move |&replacement| replacement != source[position])
            .map(move |replacement| {
                let mut changed = source.to_vec();
                changed[position] = replacement;
                Mutation {
                    kind: MutationKind::Substitution {
                        position,
                        replacement: replacement.value(),
                    },
                    digits: Digits::from_nonempty(changed),
                }
            })
    })
}

/// Every swap of two adjacent, distinct digits in `digits`.
///
/// Equal neighbours are skipped: swapping them is not an error.
pub fn adjacent_transpositions(digits: &Digits) -> impl Iterator<Item = Mutation> + '_ {
    let source = digits.as_slice();
    source
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0] != pair[1])
        .map(move |(position, _)| {
            let mut changed = source.to_vec();
            changed.swap(position, position + 1);
            Mutation {
                kind: MutationKind::Transposition { position },
                digits: Digits::from_nonempty(changed),
            }
        })
}

/// Summary of how many simulated mistakes validation catches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectionReport {
    pub number: Digits,
    pub number_is_valid: bool,
    pub substitutions_tried: usize,
    pub substitutions_undetected: usize,
    pub transpositions_tried: usize,
    pub transpositions_undetected: usize,
    /// Mutations that still validate. Empty whenever `number_is_valid`.
    pub undetected: Vec<Mutation>,
}

impl DetectionReport {
    /// True if every simulated mistake was caught.
    pub fn all_detected(&self) -> bool {
        self.substitutions_undetected == 0 && self.transpositions_undetected == 0
    }
}

/// Try every single-digit error and adjacent transposition of `number`.
pub fn detection_report(number: &Digits) -> DetectionReport {
    let mut undetected = Vec::new();

    let mut substitutions_tried = 0;
    let mut substitutions_undetected = 0;
    for mutation in single_digit_errors(number) {
        substitutions_tried += 1;
        if mutation.is_undetected() {
            substitutions_undetected += 1;
            undetected.push(mutation);
        }
    }

    let mut transpositions_tried = 0;
    let mut transpositions_undetected = 0;
    for mutation in adjacent_transpositions(number) {
        transpositions_tried += 1;
        if mutation.is_undetected() {
            transpositions_undetected += 1;
            undetected.push(mutation);
        }
    }

    DetectionReport {
        number: number.clone(),
        number_is_valid: number.is_valid(),
        substitutions_tried,
        substitutions_undetected,
        transpositions_tried,
        transpositions_undetected,
        undetected,
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Checking many numbers at once.
//!
//! Input is plain text, one number per line. Blank lines and lines starting
//! with `#` are skipped. Every other line gets exactly one [`LineOutcome`], in
//! input order, so callers can line results up with their source file.
//!
//! Lines are independent, so with the `parallel` feature they are checked on
//! rayon's pool. Order is preserved either way (`par_iter().collect()` keeps
//! it).

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;

use crate::digits::parse_digits;

/// What happened to one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LineStatus {
    Valid,
    Invalid,
    /// The line is not a digit string.
    Malformed { reason: String },
}

/// The result for one input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineOutcome {
    /// 1-based line number in the source text.
    pub line: usize,
    /// The line with surrounding whitespace removed.
    pub input: String,
    #[serde(flatten)]
    pub status: LineStatus,
}

fn check_line(line: usize, raw: &str) -> LineOutcome {
    let input = raw.trim();
    let status = match parse_digits(input) {
        Ok(digits) if digits.is_valid() => LineStatus::Valid,
        Ok(_) => LineStatus::Invalid,
        Err(e) => LineStatus::Malformed {
            reason: e.to_string(),
        },
    };
    LineOutcome {
        line,
        input: input.to_string(),
        status,
    }
}

fn is_skipped(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Check every non-blank, non-comment line of `text`.
pub fn check_lines(text: &str) -> Vec<LineOutcome> {
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(i, raw)| (i + 1, raw))
        .filter(|(_, raw)| !is_skipped(raw))
        .collect();

    tracing::debug!(lines = lines.len(), "checking batch");

    let outcomes: Vec<LineOutcome> = {
        #[cfg(feature = "parallel")]
        {
            lines
                .par_iter()
                .map(|&(line, raw)| check_line(line, raw))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            lines
                .iter()
                .map(|&(line, raw)| check_line(line, raw))
                .collect()
        }
    };

    for outcome in &outcomes {
        if let LineStatus::Malformed { reason } = &outcome.status {
            tracing::warn!(line = outcome.line, %reason, "malformed line");
        }
    }

    outcomes
}

/// Totals over a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub malformed: usize,
}

impl BatchSummary {
    /// True if every checked line was valid.
    pub fn all_valid(&self) -> bool {
        self.valid == self.total
    }
}

impl From<&[LineOutcome]> for BatchSummary {
    fn from(outcomes: &[LineOutcome]) -> Self {
        outcomes
            .iter()
            .fold(BatchSummary::default(), |mut summary, outcome| {
                summary.total += 1;
                match outcome.status {
                    LineStatus::Valid => summary.valid += 1,
                    LineStatus::Invalid => summary.invalid += 1,
                    LineStatus::Malformed { .. } => summary.malformed += 1,
                }
                summary
            })
    }
}

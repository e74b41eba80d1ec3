// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Re-deriving the tables from the dihedral group D5.
//!
//! The engine trusts the literals in `tables`. This module is how you check
//! that trust: build D5 as permutations of the five pentagon vertices, label
//! its elements 0-9, and read off the multiplication table, the inverses and
//! the position permutations. [`audit`] then compares the result with the
//! compiled-in constants cell by cell.
//!
//! # Labeling
//!
//! ```text
//! r = [1, 2, 3, 4, 0]   rotation by 72°
//! s = [0, 4, 3, 2, 1]   reflection through vertex 0
//!
//! 0..=4  ->  r^0 .. r^4
//! 5      ->  s
//! 6..=9  ->  r^1 s .. r^4 s      ("apply r^k, then s")
//! ```
//!
//! Composition is "apply the left element, then the right one", which is the
//! order that reproduces the canonical table.
//!
//! The permutation table is not part of D5: it is the powers `σ^0 .. σ^7` of
//! `σ = (0 1 5 8 9 4 2 7)(3 6)` acting on the ten digits.

use crate::tables::{GROUP_ORDER, INVERSE, MULTIPLICATION, PERMUTATION, PERMUTATION_CYCLE};
use serde::Serialize;

/// A symmetry of the pentagon, as the image of each vertex.
pub type Symmetry = [u8; 5];

const IDENTITY: Symmetry = [0, 1, 2, 3, 4];
const ROTATION: Symmetry = [1, 2, 3, 4, 0];
const REFLECTION: Symmetry = [0, 4, 3, 2, 1];

/// `σ` in array form: `σ[d]` is the image of digit `d`.
pub const SIGMA: [u8; GROUP_ORDER] = [1, 5, 7, 6, 2, 8, 3, 0, 9, 4];

/// "Do `a`, then `b`": `x -> b[a[x]]`.
pub fn compose(a: &Symmetry, b: &Symmetry) -> Symmetry {
    let mut out = [0u8; 5];
    for (x, slot) in out.iter_mut().enumerate() {
        *slot = b[a[x] as usize];
    }
    out
}

fn power(base: &Symmetry, exp: usize) -> Symmetry {
    (0..exp).fold(IDENTITY, |acc, _| compose(&acc, base))
}

/// The ten elements of D5, indexed by their Verhoeff label.
pub fn elements() -> [Symmetry; GROUP_ORDER] {
    let mut out = [IDENTITY; GROUP_ORDER];
    for k in 0..5 {
        out[k] = power(&ROTATION, k);
        out[5 + k] = compose(&power(&ROTATION, k), &REFLECTION);
    }
    out
}

fn label_of(symmetry: &Symmetry, elements: &[Symmetry; GROUP_ORDER]) -> Option<u8> {
    elements
        .iter()
        .position(|e| e == symmetry)
        .map(|i| i as u8)
}

/// Tables computed from the group rather than read from literals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedTables {
    pub multiplication: [[u8; GROUP_ORDER]; GROUP_ORDER],
    pub permutation: [[u8; GROUP_ORDER]; PERMUTATION_CYCLE],
    pub inverse: [u8; GROUP_ORDER],
}

/// Build `d`, `p` and `inv` from first principles.
///
/// Returns `None` only if the labeled elements fail to be closed under
/// composition, which cannot happen for the fixed generators above.
pub fn derive_tables() -> Option<DerivedTables> {
    let elements = elements();

    let mut multiplication = [[0u8; GROUP_ORDER]; GROUP_ORDER];
    for a in 0..GROUP_ORDER {
        for b in 0..GROUP_ORDER {
            multiplication[a][b] = label_of(&compose(&elements[a], &elements[b]), &elements)?;
        }
    }

    // Right inverse: the b with d[a][b] == 0
    let mut inverse = [0u8; GROUP_ORDER];
    for a in 0..GROUP_ORDER {
        inverse[a] = multiplication[a].iter().position(|&v| v == 0)? as u8;
    }

    // p[0] = identity, p[i + 1] = σ ∘ p[i]
    let mut permutation = [[0u8; GROUP_ORDER]; PERMUTATION_CYCLE];
    let mut current: [u8; GROUP_ORDER] = std::array::from_fn(|d| d as u8);
    for row in permutation.iter_mut() {
        *row = current;
        current = current.map(|d| SIGMA[d as usize]);
    }

    Some(DerivedTables {
        multiplication,
        permutation,
        inverse,
    })
}

/// Which table a mismatch was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TableName {
    Multiplication,
    Permutation,
    Inverse,
}

/// One cell where the derived and compiled-in tables disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub table: TableName,
    pub row: usize,
    pub col: usize,
    pub derived: u8,
    pub canonical: u8,
}

/// Result of comparing derived tables against the constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableAudit {
    pub derived: Option<DerivedTables>,
    pub mismatches: Vec<Mismatch>,
}

impl TableAudit {
    /// True when derivation succeeded and every cell matched.
    pub fn is_clean(&self) -> bool {
        self.derived.is_some() && self.mismatches.is_empty()
    }
}

fn diff_rows<const W: usize>(
    table: TableName,
    derived: &[[u8; W]],
    canonical: &[[u8; W]],
    out: &mut Vec<Mismatch>,
) {
    for (row, (d_row, c_row)) in derived.iter().zip(canonical).enumerate() {
        for (col, (&d, &c)) in d_row.iter().zip(c_row).enumerate() {
            if d != c {
                out.push(Mismatch {
                    table,
                    row,
                    col,
                    derived: d,
                    canonical: c,
                });
            }
        }
    }
}

/// Compare `derived` against the compiled-in tables.
pub fn compare(derived: &DerivedTables) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();
    diff_rows(
        TableName::Multiplication,
        &derived.multiplication,
        &MULTIPLICATION,
        &mut mismatches,
    );
    diff_rows(
        TableName::Permutation,
        &derived.permutation,
        &PERMUTATION,
        &mut mismatches,
    );
    diff_rows(
        TableName::Inverse,
        &[derived.inverse],
        &[INVERSE],
        &mut mismatches,
    );
    mismatches
}

/// Derive the tables from D5 and compare them with the constants.
pub fn audit() -> TableAudit {
    match derive_tables() {
        Some(derived) => TableAudit {
            mismatches: compare(&derived),
            derived: Some(derived),
        },
        None => TableAudit {
            derived: None,
            mismatches: Vec::new(),
        },
    }
}

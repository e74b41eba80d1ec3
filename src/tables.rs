// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The three Verhoeff tables, compiled in as literals.
//!
//! These are the canonical published values. Every Verhoeff implementation in
//! the wild uses exactly these, so a single changed entry makes our check
//! digits disagree with externally issued numbers (Aadhaar and friends). The
//! `group` module can re-derive them from D5 for auditing, but the engine
//! never recomputes anything at runtime.
//!
//! | Table            | Shape    | Meaning                                   |
//! |------------------|----------|-------------------------------------------|
//! | `MULTIPLICATION` | 10 x 10  | Cayley table of D5 (`d`)                  |
//! | `PERMUTATION`    | 8 x 10   | `σ^i` for `σ = (0 1 5 8 9 4 2 7)(3 6)` (`p`) |
//! | `INVERSE`        | 10       | `d[j][inv[j]] == 0` (`inv`)               |

/// Number of elements in D5, and the size of the decimal alphabet.
pub const GROUP_ORDER: usize = 10;

/// Number of rows in the permutation table. Positions cycle modulo this.
pub const PERMUTATION_CYCLE: usize = 8;

/// Multiplication table `d` of the dihedral group D5.
///
/// Elements 0-4 are rotations, 5-9 are reflections.
pub const MULTIPLICATION: [[u8; GROUP_ORDER]; GROUP_ORDER] = [
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

/// Position-dependent permutation table `p`.
///
/// Row `i` is applied to the digit at distance `i mod 8` from the right.
pub const PERMUTATION: [[u8; GROUP_ORDER]; PERMUTATION_CYCLE] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

/// Inverse table `inv`: the group inverse of each element under `d`.
pub const INVERSE: [u8; GROUP_ORDER] = [0, 4, 3, 2, 1, 5, 6, 7, 8, 9];

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// Every row is a permutation of 0-9.
const fn is_permutation(row: &[u8; GROUP_ORDER]) -> bool {
    let mut seen = [false; GROUP_ORDER];
    let mut i = 0;
    while i < GROUP_ORDER {
        let v = row[i] as usize;
        if v >= GROUP_ORDER || seen[v] {
            return false;
        }
        seen[v] = true;
        i += 1;
    }
    true
}

const _: () = {
    // Identity element is 0: d[0][j] == j and d[j][0] == j
    let mut j = 0;
    while j < GROUP_ORDER {
        assert!(MULTIPLICATION[0][j] as usize == j);
        assert!(MULTIPLICATION[j][0] as usize == j);
        j += 1;
    }

    // d is a Latin square (rows are permutations; group tables always are)
    let mut row = 0;
    while row < GROUP_ORDER {
        assert!(is_permutation(&MULTIPLICATION[row]));
        row += 1;
    }

    // p rows are permutations, and p[0] is the identity
    let mut row = 0;
    while row < PERMUTATION_CYCLE {
        assert!(is_permutation(&PERMUTATION[row]));
        row += 1;
    }
    let mut j = 0;
    while j < GROUP_ORDER {
        assert!(PERMUTATION[0][j] as usize == j);
        j += 1;
    }

    // p[i + 1] = σ ∘ p[i], with σ = p[1]
    let mut row = 0;
    while row + 1 < PERMUTATION_CYCLE {
        let mut j = 0;
        while j < GROUP_ORDER {
            let next = PERMUTATION[1][PERMUTATION[row][j] as usize];
            assert!(PERMUTATION[row + 1][j] == next);
            j += 1;
        }
        row += 1;
    }

    // inv really is the inverse: d[j][inv[j]] == 0
    let mut j = 0;
    while j < GROUP_ORDER {
        assert!(MULTIPLICATION[j][INVERSE[j] as usize] == 0);
        j += 1;
    }
};

/// Look up `d[a][b]`.
#[inline]
pub(crate) fn multiply(a: u8, b: u8) -> u8 {
    MULTIPLICATION[a as usize][b as usize]
}

/// Look up `p[position mod 8][digit]`.
#[inline]
pub(crate) fn permute(position: usize, digit: u8) -> u8 {
    PERMUTATION[position % PERMUTATION_CYCLE][digit as usize]
}

/// Look up `inv[element]`.
#[inline]
pub(crate) fn inverse(element: u8) -> u8 {
    INVERSE[element as usize]
}

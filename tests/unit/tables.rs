//! Full-table equality against the published Verhoeff tables.
//!
//! The reference data is written out again here rather than imported, so a
//! typo in `src/tables.rs` cannot also hide in the expectation.

use verhoeff::group::{audit, derive_tables};
use verhoeff::{INVERSE, MULTIPLICATION, PERMUTATION};

const REFERENCE_D: [[u8; 10]; 10] = [
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

const REFERENCE_P: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

const REFERENCE_INV: [u8; 10] = [0, 4, 3, 2, 1, 5, 6, 7, 8, 9];

#[test]
fn multiplication_table_matches_reference() {
    assert_eq!(MULTIPLICATION, REFERENCE_D);
}

#[test]
fn permutation_table_matches_reference() {
    assert_eq!(PERMUTATION, REFERENCE_P);
}

#[test]
fn inverse_table_matches_reference() {
    assert_eq!(INVERSE, REFERENCE_INV);
}

#[test]
fn multiplication_is_associative() {
    for a in 0..10 {
        for b in 0..10 {
            for c in 0..10 {
                let left = MULTIPLICATION[MULTIPLICATION[a][b] as usize][c];
                let right = MULTIPLICATION[a][MULTIPLICATION[b][c] as usize];
                assert_eq!(left, right, "({} * {}) * {} != {} * ({} * {})", a, b, c, a, b, c);
            }
        }
    }
}

#[test]
fn inverse_is_two_sided() {
    for j in 0..10 {
        let inv = INVERSE[j] as usize;
        assert_eq!(MULTIPLICATION[j][inv], 0);
        assert_eq!(MULTIPLICATION[inv][j], 0);
    }
}

#[test]
fn d5_derivation_reproduces_reference() {
    let derived = derive_tables().expect("D5 is closed under composition");
    assert_eq!(derived.multiplication, REFERENCE_D);
    assert_eq!(derived.permutation, REFERENCE_P);
    assert_eq!(derived.inverse, REFERENCE_INV);
    assert!(audit().is_clean());
}

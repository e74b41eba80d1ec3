//! Reference oracles for differential testing.
//!
//! The oracle rebuilds the tables from the pentagon symmetries (not from the
//! literals the engine uses) and runs the textbook loop over a reversed
//! string. It is slow and allocation-heavy but obviously correct. The engine
//! must agree with it on every input.

use proptest::prelude::*;
use verhoeff::group::{derive_tables, DerivedTables};
use verhoeff::{generate_str, validate_str};

// =============================================================================
// ORACLE IMPLEMENTATION
// =============================================================================

fn oracle_tables() -> DerivedTables {
    derive_tables().expect("D5 is closed under composition")
}

/// Product over the reversed string with permutation rows shifted by `offset`.
fn oracle_product(tables: &DerivedTables, number: &str, offset: usize) -> u8 {
    let reversed: Vec<usize> = number
        .chars()
        .rev()
        .map(|c| c.to_digit(10).expect("oracle input is digits") as usize)
        .collect();
    let mut c = 0usize;
    for (pos, &x) in reversed.iter().enumerate() {
        let permuted = tables.permutation[(pos + offset) % 8][x] as usize;
        c = tables.multiplication[c][permuted] as usize;
    }
    c as u8
}

pub fn oracle_validate(tables: &DerivedTables, number: &str) -> bool {
    oracle_product(tables, number, 0) == 0
}

pub fn oracle_generate(tables: &DerivedTables, payload: &str) -> u8 {
    tables.inverse[oracle_product(tables, payload, 1) as usize]
}

// =============================================================================
// DIFFERENTIAL TESTS
// =============================================================================

fn digit_string_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9]{1,32}").unwrap()
}

proptest! {
    #[test]
    fn engine_matches_oracle_on_generate(payload in digit_string_strategy()) {
        let tables = oracle_tables();
        prop_assert_eq!(generate_str(&payload), Ok(oracle_generate(&tables, &payload)));
    }

    #[test]
    fn engine_matches_oracle_on_validate(number in digit_string_strategy()) {
        let tables = oracle_tables();
        prop_assert_eq!(validate_str(&number), Ok(oracle_validate(&tables, &number)));
    }
}

#[test]
fn oracle_agrees_with_pinned_scenario() {
    let tables = oracle_tables();
    assert_eq!(oracle_generate(&tables, "82351974062"), 8);
    assert!(oracle_validate(&tables, "823519740628"));
    assert!(!oracle_validate(&tables, "823519740627"));
}

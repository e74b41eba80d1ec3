// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the verhoeff command-line interface.
//!
//! Five subcommands: `validate` and `generate` for single numbers, `check` for
//! a file of numbers, `tables` to print (and optionally audit) the three
//! tables, and `analyze` to show which transcription errors a number catches.
//! `--json` switches every command to machine-readable output.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "verhoeff",
    about = "Verhoeff check digits: validate, generate, audit",
    version
)]
pub struct Cli {
    /// Emit JSON instead of human-readable text
    #[arg(long, global = true)]
    pub json: bool,

    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that a number ends in a correct check digit
    Validate {
        /// Number including its check digit, e.g. 823519740628
        number: String,
    },

    /// Compute the check digit for a payload
    Generate {
        /// Digits without a check digit, e.g. 82351974062
        payload: String,
    },

    /// Validate every line of a file (one number per line)
    Check {
        /// Input file, or `-` for stdin
        file: PathBuf,
    },

    /// Print the multiplication, permutation and inverse tables
    Tables {
        /// Re-derive the tables from D5 and compare with the built-in ones
        #[arg(long)]
        audit: bool,
    },

    /// Try every single-digit error and adjacent swap of a number
    Analyze {
        /// Number including its check digit
        number: String,
    },
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use verhoeff::analysis::detection_report;
use verhoeff::batch::{check_lines, BatchSummary, LineStatus};
use verhoeff::group::{audit, TableAudit};
use verhoeff::{parse_digits, Digits, INVERSE, MULTIPLICATION, PERMUTATION};

mod cli;
use cli::display::{self, pad_left, row, section_bot, section_top, themed};
use cli::{Cli, Commands};

/// Exit code for a number that parsed but failed validation.
const EXIT_INVALID: u8 = 1;
/// Exit code for input that could not be processed at all.
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Validate { number } => run_validate(&number, cli.json),
        Commands::Generate { payload } => run_generate(&payload, cli.json),
        Commands::Check { file } => run_check(&file, cli.json),
        Commands::Tables { audit } => run_tables(audit, cli.json),
        Commands::Analyze { number } => run_analyze(&number, cli.json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("❌ {:#}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Log to stderr. `RUST_LOG` wins; otherwise `warn`, or `debug` with `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_number(raw: &str) -> Result<Digits> {
    parse_digits(raw).with_context(|| format!("cannot read {:?} as a number", raw))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn verdict_code(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_INVALID)
    }
}

// ============================================================================
// VALIDATE / GENERATE
// ============================================================================

#[derive(Serialize)]
struct ValidateOutput<'a> {
    number: &'a Digits,
    valid: bool,
}

fn run_validate(raw: &str, json: bool) -> Result<ExitCode> {
    let number = read_number(raw)?;
    let valid = number.is_valid();
    tracing::debug!(%number, valid, "validated");

    if json {
        print_json(&ValidateOutput {
            number: &number,
            valid,
        })?;
    } else {
        println!(
            "{}  {}",
            display::with_check_digit(&number.to_string()),
            display::verdict(valid)
        );
    }
    Ok(verdict_code(valid))
}

#[derive(Serialize)]
struct GenerateOutput<'a> {
    payload: &'a Digits,
    check_digit: u8,
    number: Digits,
}

fn run_generate(raw: &str, json: bool) -> Result<ExitCode> {
    let payload = read_number(raw)?;
    let check = payload.check_digit();
    let number = payload.with_appended(check);
    tracing::debug!(%payload, check = check.value(), "generated");

    if json {
        print_json(&GenerateOutput {
            payload: &payload,
            check_digit: check.value(),
            number,
        })?;
    } else {
        println!("Check digit for {} = {}", payload, check);
        println!(
            "Full number:       {}",
            display::with_check_digit(&number.to_string())
        );
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// CHECK (batch)
// ============================================================================

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

#[derive(Serialize)]
struct CheckOutput<'a> {
    outcomes: &'a [verhoeff::batch::LineOutcome],
    summary: BatchSummary,
}

fn run_check(path: &Path, json: bool) -> Result<ExitCode> {
    let text = read_input(path)?;
    let outcomes = check_lines(&text);
    let summary = BatchSummary::from(outcomes.as_slice());
    tracing::info!(
        total = summary.total,
        valid = summary.valid,
        invalid = summary.invalid,
        malformed = summary.malformed,
        "batch checked"
    );

    if json {
        print_json(&CheckOutput {
            outcomes: &outcomes,
            summary,
        })?;
    } else {
        for outcome in &outcomes {
            let badge = match &outcome.status {
                LineStatus::Valid => display::verdict(true),
                LineStatus::Invalid => display::verdict(false),
                LineStatus::Malformed { reason } => {
                    format!("{} ({})", display::malformed(), reason)
                }
            };
            println!("{:>5}  {}  {}", outcome.line, outcome.input, badge);
        }
        println!(
            "\n{} checked: {} valid, {} invalid, {} malformed",
            summary.total, summary.valid, summary.invalid, summary.malformed
        );
    }
    Ok(verdict_code(summary.all_valid()))
}

// ============================================================================
// TABLES
// ============================================================================

#[derive(Serialize)]
struct TablesOutput {
    multiplication: [[u8; 10]; 10],
    permutation: [[u8; 10]; 8],
    inverse: [u8; 10],
    #[serde(skip_serializing_if = "Option::is_none")]
    audit: Option<TableAudit>,
}

fn print_table<const W: usize>(label: &str, rows: &[[u8; W]]) {
    section_top(label);
    for (i, values) in rows.iter().enumerate() {
        row(&display::table_row(i, values));
    }
    section_bot();
}

fn run_tables(with_audit: bool, json: bool) -> Result<ExitCode> {
    let report = with_audit.then(audit);
    let clean = report.as_ref().map_or(true, TableAudit::is_clean);

    if json {
        print_json(&TablesOutput {
            multiplication: MULTIPLICATION,
            permutation: PERMUTATION,
            inverse: INVERSE,
            audit: report,
        })?;
        return Ok(verdict_code(clean));
    }

    print_table("d (multiplication)", &MULTIPLICATION);
    print_table("p (permutation)", &PERMUTATION);
    print_table("inv", &[INVERSE]);

    if let Some(report) = report {
        if report.is_clean() {
            println!(
                "{} tables derived from D5 match the built-in tables",
                themed(display::GREEN, &[display::BOLD], "✓")
            );
        } else if report.derived.is_none() {
            println!(
                "{} D5 derivation failed",
                themed(display::RED, &[display::BOLD], "✗")
            );
        } else {
            println!(
                "{} {} mismatching cells",
                themed(display::RED, &[display::BOLD], "✗"),
                report.mismatches.len()
            );
            for m in &report.mismatches {
                println!(
                    "  {:?}[{}][{}]: derived {} canonical {}",
                    m.table, m.row, m.col, m.derived, m.canonical
                );
            }
        }
    }
    Ok(verdict_code(clean))
}

// ============================================================================
// ANALYZE
// ============================================================================

fn run_analyze(raw: &str, json: bool) -> Result<ExitCode> {
    let number = read_number(raw)?;
    let report = detection_report(&number);

    if json {
        print_json(&report)?;
        return Ok(verdict_code(report.number_is_valid));
    }

    println!(
        "{}  {}",
        display::with_check_digit(&number.to_string()),
        display::verdict(report.number_is_valid)
    );
    println!(
        "  single-digit errors   {} tried, {} undetected",
        pad_left(&report.substitutions_tried.to_string(), 4),
        report.substitutions_undetected
    );
    println!(
        "  adjacent swaps        {} tried, {} undetected",
        pad_left(&report.transpositions_tried.to_string(), 4),
        report.transpositions_undetected
    );
    if !report.number_is_valid {
        // For an invalid number "undetected" means "would validate": the fixes
        for m in &report.undetected {
            println!("  would validate: {}", m.digits);
        }
    }
    Ok(verdict_code(report.number_is_valid))
}

// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! CLI tests for flag parsing and subcommands
//!
//! These tests verify argument parsing, defaults and logging level
//! determination without running the driver.

use std::path::PathBuf;

use clap::Parser;
use junqo_fuzz::config::{Command, Config, OutputFormat};
use tracing::Level;

// ============================================================================
// Global flags
// ============================================================================

#[test]
fn test_short_and_long_seed_equivalent() {
    let short = Config::try_parse_from(["junqo-fuzz", "-s", "/tmp/seed.sql"]).expect("short parse");
    let long =
        Config::try_parse_from(["junqo-fuzz", "--seed", "/tmp/seed.sql"]).expect("long parse");
    assert_eq!(short.seed, long.seed);
    assert_eq!(short.seed_path(), PathBuf::from("/tmp/seed.sql"));
}

#[test]
fn test_rng_seed_parses_u64() {
    let config = Config::try_parse_from(["junqo-fuzz", "--rng-seed", "42"]).expect("parse");
    assert_eq!(config.rng_seed, Some(42));
    assert!(Config::try_parse_from(["junqo-fuzz", "--rng-seed", "-1"]).is_err());
}

#[test]
fn test_verbose_and_quiet_levels() {
    let verbose = Config::try_parse_from(["junqo-fuzz", "-v"]).expect("parse");
    assert_eq!(verbose.log_level(), Level::DEBUG);

    let quiet = Config::try_parse_from(["junqo-fuzz", "--quiet"]).expect("parse");
    assert_eq!(quiet.log_level(), Level::WARN);

    let both = Config::try_parse_from(["junqo-fuzz", "-vq"]).expect("parse");
    assert_eq!(both.log_level(), Level::DEBUG);
}

#[test]
fn test_boolean_flags_reject_values() {
    assert!(Config::try_parse_from(["junqo-fuzz", "--verbose=true"]).is_err());
}

// ============================================================================
// Subcommands
// ============================================================================

#[test]
fn test_no_subcommand_defaults_to_run() {
    let config = Config::try_parse_from(["junqo-fuzz"]).expect("parse");
    assert!(config.command.is_none());
    assert!(matches!(config.resolved_command(), Command::Run { jobs: 1, .. }));
}

#[test]
fn test_run_options() {
    let config = Config::try_parse_from([
        "junqo-fuzz",
        "--seed",
        "seed.sql",
        "run",
        "-j",
        "4",
        "--format",
        "graphql",
        "--input",
        "cases.jsonl",
    ])
    .expect("parse");

    match config.command {
        Some(Command::Run {
            input,
            jobs,
            format,
        }) => {
            assert_eq!(input, Some(PathBuf::from("cases.jsonl")));
            assert_eq!(jobs, 4);
            assert_eq!(format, OutputFormat::Graphql);
        }
        other => panic!("expected run, got {other:?}"),
    }
}

#[test]
fn test_run_rejects_unknown_format() {
    assert!(Config::try_parse_from(["junqo-fuzz", "run", "--format", "yaml"]).is_err());
}

#[test]
fn test_zero_jobs_fails_validation() {
    let config = Config::try_parse_from(["junqo-fuzz", "run", "--jobs", "0"]).expect("parse");
    assert!(config.validate().is_err());
}

#[test]
fn test_seeds_count_flag() {
    let config = Config::try_parse_from(["junqo-fuzz", "seeds", "--count"]).expect("parse");
    assert!(matches!(config.command, Some(Command::Seeds { count: true })));
}

#[test]
fn test_scalars_samples() {
    let config = Config::try_parse_from(["junqo-fuzz", "scalars", "-n", "3"]).expect("parse");
    assert!(matches!(config.command, Some(Command::Scalars { samples: 3 })));
}

// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for the junqo-fuzz driver
//!
//! This module provides the command-line and environment configuration:
//! seed data location, RNG seeding, logging options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Seed script used when neither `--seed` nor `TEST_DATA_SQL_PATH` is given
pub const DEFAULT_SEED_PATH: &str = "db/test_data.sql";

/// junqo-fuzz - keep fuzzed junqo GraphQL cases referentially valid
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "junqo-fuzz")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Subcommand to run (defaults to `run` with default options)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the seed data script
    ///
    /// Every UUID in this file is treated as the id of an existing entity.
    /// Defaults to db/test_data.sql.
    #[arg(short, long, env = "TEST_DATA_SQL_PATH")]
    pub seed: Option<PathBuf>,

    /// Seed for the identifier draw RNG
    ///
    /// With a fixed value, lookups and updates target the same identifiers
    /// on every run over the same input.
    #[arg(long, env = "JUNQO_FUZZ_RNG_SEED")]
    pub rng_seed: Option<u64>,

    /// Enable verbose logging (debug level)
    ///
    /// Logs every rejected case and every substituted identifier. Logs go
    /// to stderr so stdout stays machine-readable.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Apply the filter and map hooks to generated cases
    ///
    /// Reads one JSON document per line and writes the accepted, rewritten
    /// documents to stdout in input order.
    ///
    /// Example:
    ///   generate-cases | junqo-fuzz run --jobs 4 --format graphql
    Run {
        /// Read cases from this file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Number of worker threads sharing the harness
        #[arg(short, long, default_value_t = 1)]
        jobs: usize,

        /// Output format for accepted cases
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// List the identifiers extracted from the seed data
    Seeds {
        /// Print only the number of identifiers
        #[arg(long)]
        count: bool,
    },

    /// Print sample values for each custom scalar
    Scalars {
        /// Samples per scalar
        #[arg(short = 'n', long, default_value_t = 1)]
        samples: usize,
    },
}

/// How accepted cases are written
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One JSON document per line
    #[default]
    Json,
    /// GraphQL source text
    Graphql,
}

impl Config {
    /// Get the seed data path, using the default if not specified
    #[must_use]
    pub fn seed_path(&self) -> PathBuf {
        self.seed
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SEED_PATH))
    }

    /// The subcommand to execute, `run` with defaults when none was given
    #[must_use]
    pub fn resolved_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run {
            input: None,
            jobs: 1,
            format: OutputFormat::Json,
        })
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `run --input` names a file that doesn't exist
    /// - `run --jobs` is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(Command::Run { input, jobs, .. }) = &self.command {
            if let Some(input) = input {
                if !input.is_file() {
                    return Err(ConfigError::InputNotFound(input.clone()));
                }
            }
            if *jobs == 0 {
                return Err(ConfigError::InvalidJobs);
            }
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Case input file not found
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    /// Worker count of zero
    #[error("--jobs must be at least 1")]
    InvalidJobs,
}

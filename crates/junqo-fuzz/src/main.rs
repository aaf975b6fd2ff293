// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! junqo-fuzz: apply the fuzz hooks to generated junqo GraphQL cases
//!
//! This binary loads the seed identifiers, builds the hook harness and runs
//! generated cases through `filter` and `map`, or inspects the seed data and
//! custom scalar mapping.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use junqo_fuzz::config::{Command, Config};
use junqo_fuzz::runner;
use junqo_fuzz_hooks::{CustomScalars, Harness};
use junqo_fuzz_seed::UuidPool;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{error, info, warn};

fn main() -> ExitCode {
    let config = Config::parse();

    // Logs go to stderr; stdout carries the rewritten cases
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(io::stderr)
        .init();

    match execute(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %format!("{e:#}"), "junqo-fuzz failed");
            eprintln!("junqo-fuzz: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn execute(config: &Config) -> anyhow::Result<()> {
    config.validate()?;

    match config.resolved_command() {
        Command::Run {
            input,
            jobs,
            format,
        } => {
            let harness = load_harness(config)?;
            let stdout = io::stdout();
            let mut out = stdout.lock();
            let summary = match input {
                Some(path) => {
                    let file = File::open(&path)
                        .with_context(|| format!("Failed to open {}", path.display()))?;
                    runner::run_cases(&harness, BufReader::new(file), &mut out, jobs, format)?
                }
                None => runner::run_cases(&harness, io::stdin().lock(), &mut out, jobs, format)?,
            };
            if summary.invalid > 0 {
                warn!(invalid = summary.invalid, "Some input lines were not valid documents");
            }
            // Machine-readable totals on stderr; stdout carries only cases
            if !config.quiet {
                let line = serde_json::to_string(&summary).context("Failed to serialize run summary")?;
                eprintln!("{line}");
            }
            Ok(())
        }
        Command::Seeds { count } => {
            let path = config.seed_path();
            let pool = UuidPool::from_path(&path)?;
            let mut out = io::stdout().lock();
            if count {
                writeln!(out, "{}", pool.len())?;
            } else {
                for id in pool.snapshot() {
                    writeln!(out, "{id}")?;
                }
            }
            Ok(())
        }
        Command::Scalars { samples } => {
            let mut rng = match config.rng_seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let mut out = io::stdout().lock();
            for (name, kind) in CustomScalars::default().iter() {
                for _ in 0..samples {
                    writeln!(out, "{name}\t{}", kind.sample(&mut rng))?;
                }
            }
            Ok(())
        }
    }
}

fn load_harness(config: &Config) -> anyhow::Result<Harness> {
    let path = config.seed_path();
    let mut pool = UuidPool::from_path(&path)?;
    if let Some(seed) = config.rng_seed {
        info!(seed, "Using deterministic identifier draws");
        pool = pool.with_rng_seed(seed);
    }
    Harness::new(pool)
        .with_context(|| format!("Cannot start without seed identifiers from {}", path.display()))
}

// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Batch execution of the hooks over generated cases
//!
//! Cases arrive as newline-delimited JSON documents. Each one goes through
//! `filter` and, if accepted, `map`; accepted documents are written out in
//! input order. Workers share one [`Hooks`] implementation, exactly as
//! concurrent fuzz workers would.

use std::io::{BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use junqo_fuzz_hooks::{Document, HookContext, HookError, Hooks};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::OutputFormat;

/// Counts for one batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Non-blank input lines
    pub total: usize,
    /// Cases that passed the filter and were written out
    pub accepted: usize,
    /// Cases the filter discarded
    pub rejected: usize,
    /// Lines that were not valid documents
    pub invalid: usize,
}

/// What happened to one case
#[derive(Debug, Clone, PartialEq)]
pub enum CaseOutcome {
    /// Passed the filter; holds the mapped body
    Accepted(Document),
    /// Discarded by the filter
    Rejected,
    /// Not a valid document
    Invalid(String),
}

/// Errors that stop a batch
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// Reading cases or writing results failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A hook failed fatally (seed pool exhausted)
    #[error("Hook failed on case {case}: {source}")]
    Hook {
        /// Case number, counted from 1
        case: u64,
        /// Underlying hook error
        #[source]
        source: HookError,
    },

    /// An accepted case could not be serialized
    #[error("Failed to serialize case {case}: {source}")]
    Serialize {
        /// Case number, counted from 1
        case: u64,
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
    },
}

/// Run one case through `filter` then `map`
///
/// # Errors
///
/// Returns the hook error if `map` fails fatally.
pub fn process_case(
    hooks: &dyn Hooks,
    ctx: &HookContext,
    line: &str,
) -> Result<CaseOutcome, HookError> {
    let body = match Document::from_json(line) {
        Ok(body) => body,
        Err(e) => return Ok(CaseOutcome::Invalid(e.to_string())),
    };
    if !hooks.filter(ctx, &body) {
        return Ok(CaseOutcome::Rejected);
    }
    hooks.map(ctx, body).map(CaseOutcome::Accepted)
}

/// Process every case in `input` with `jobs` workers, writing accepted cases to `output`
///
/// Case `i` (counted from 1, blank lines skipped) is handled by worker
/// `(i - 1) % jobs`. Output order always matches input order.
///
/// # Errors
///
/// Returns [`RunError::Hook`] for the first fatal hook error; remaining
/// workers stop at their next case.
pub fn run_cases<R: BufRead, W: Write>(
    hooks: &dyn Hooks,
    input: R,
    output: &mut W,
    jobs: usize,
    format: OutputFormat,
) -> Result<RunSummary, RunError> {
    let lines: Vec<String> = input
        .lines()
        .filter(|line| !matches!(line, Ok(l) if l.trim().is_empty()))
        .collect::<Result<_, _>>()?;
    let jobs = jobs.max(1);
    info!(cases = lines.len(), jobs, "Processing fuzz cases");

    let outcomes = process_all(hooks, &lines, jobs)?;

    let mut summary = RunSummary {
        total: lines.len(),
        ..RunSummary::default()
    };
    for (idx, outcome) in outcomes.into_iter().enumerate() {
        let case = idx as u64 + 1;
        match outcome {
            CaseOutcome::Accepted(body) => {
                summary.accepted += 1;
                write_case(output, case, &body, format)?;
            }
            CaseOutcome::Rejected => summary.rejected += 1,
            CaseOutcome::Invalid(reason) => {
                warn!(case, reason = %reason, "Skipping invalid case");
                summary.invalid += 1;
            }
        }
    }
    output.flush()?;

    info!(
        total = summary.total,
        accepted = summary.accepted,
        rejected = summary.rejected,
        invalid = summary.invalid,
        "Run complete"
    );
    Ok(summary)
}

fn process_all(hooks: &dyn Hooks, lines: &[String], jobs: usize) -> Result<Vec<CaseOutcome>, RunError> {
    let stop = AtomicBool::new(false);

    let per_worker: Vec<Result<Vec<(usize, CaseOutcome)>, RunError>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..jobs)
            .map(|worker| {
                let stop = &stop;
                scope.spawn(move || {
                    let mut done = Vec::new();
                    for idx in (worker..lines.len()).step_by(jobs) {
                        if stop.load(Ordering::Relaxed) {
                            break;
                        }
                        let case = idx as u64 + 1;
                        let ctx = HookContext::new(case, worker);
                        match process_case(hooks, &ctx, &lines[idx]) {
                            Ok(outcome) => done.push((idx, outcome)),
                            Err(source) => {
                                stop.store(true, Ordering::Relaxed);
                                return Err(RunError::Hook { case, source });
                            }
                        }
                    }
                    debug!(worker, cases = done.len(), "Worker finished");
                    Ok(done)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(result) => result,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    });

    let mut outcomes: Vec<Option<CaseOutcome>> = vec![None; lines.len()];
    let mut first_error: Option<RunError> = None;
    for result in per_worker {
        match result {
            Ok(done) => {
                for (idx, outcome) in done {
                    outcomes[idx] = Some(outcome);
                }
            }
            Err(e) => {
                let earlier = match (&first_error, &e) {
                    (Some(RunError::Hook { case: seen, .. }), RunError::Hook { case, .. }) => case < seen,
                    _ => first_error.is_none(),
                };
                if earlier {
                    first_error = Some(e);
                }
            }
        }
    }
    if let Some(e) = first_error {
        return Err(e);
    }
    Ok(outcomes.into_iter().flatten().collect())
}

fn write_case<W: Write>(
    output: &mut W,
    case: u64,
    body: &Document,
    format: OutputFormat,
) -> Result<(), RunError> {
    match format {
        OutputFormat::Json => {
            let json = body
                .to_json()
                .map_err(|source| RunError::Serialize { case, source })?;
            writeln!(output, "{json}")?;
        }
        OutputFormat::Graphql => writeln!(output, "{body}")?,
    }
    Ok(())
}

// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Hook entry points and the shared state they operate on
//!
//! The generation engine calls [`Hooks::filter`] on every candidate case and,
//! for accepted ones, [`Hooks::map`] before sending the body. Both run on
//! whatever worker thread produced the case; [`Harness`] is `Sync` and is
//! shared by reference.

use std::path::Path;

use junqo_fuzz_registry::DedupRegistry;
use junqo_fuzz_seed::UuidPool;
use tracing::{debug, info, warn};

use crate::body::Document;
use crate::error::HookError;
use crate::rewriter::{self, Rewrite};
use crate::validator::{self, Verdict};

/// Per-call information supplied by the engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HookContext {
    /// Sequence number of the fuzz case within the run
    pub case: u64,
    /// Index of the worker running the case
    pub worker: usize,
}

impl HookContext {
    /// Context for case number `case` on worker `worker`
    #[must_use]
    pub fn new(case: u64, worker: usize) -> Self {
        Self { case, worker }
    }
}

/// The two extension points the generation engine calls into
pub trait Hooks: Send + Sync {
    /// Decide whether a generated case may run
    ///
    /// Total over every document: never panics, never errors.
    fn filter(&self, ctx: &HookContext, body: &Document) -> bool;

    /// Rewrite an accepted case before it runs
    ///
    /// # Errors
    ///
    /// Only fatal errors (an exhausted seed pool) are returned; structural
    /// problems pass the body through unchanged.
    fn map(&self, ctx: &HookContext, body: Document) -> Result<Document, HookError>;
}

/// Shared state for one fuzzing run
#[derive(Debug)]
pub struct Harness {
    pool: UuidPool,
    registry: DedupRegistry,
}

impl Harness {
    /// Build a harness around a loaded seed pool
    ///
    /// # Errors
    ///
    /// Returns [`HookError::Seed`] if the pool was loaded without identifiers.
    pub fn new(pool: UuidPool) -> Result<Self, HookError> {
        pool.ensure_non_empty("seed pool")?;
        Ok(Self {
            pool,
            registry: DedupRegistry::new(),
        })
    }

    /// Load the seed file at `path` and build a harness around it
    ///
    /// # Errors
    ///
    /// Returns [`HookError::Seed`] if the file is unreadable or holds no
    /// identifiers.
    pub fn from_seed_file(path: impl AsRef<Path>) -> Result<Self, HookError> {
        let path = path.as_ref();
        let pool = UuidPool::from_path(path)?;
        pool.ensure_non_empty(&path.display().to_string())?;
        info!(path = %path.display(), identifiers = pool.len(), "Hook harness ready");
        Ok(Self {
            pool,
            registry: DedupRegistry::new(),
        })
    }

    /// Seed identifier pool
    #[must_use]
    pub fn pool(&self) -> &UuidPool {
        &self.pool
    }

    /// Names and emails committed so far
    #[must_use]
    pub fn registry(&self) -> &DedupRegistry {
        &self.registry
    }

    /// Return to the state right after construction, for a fresh run
    pub fn reset(&self) {
        self.registry.clear();
        self.pool.reset();
        debug!(identifiers = self.pool.len(), "Harness reset");
    }
}

impl Hooks for Harness {
    fn filter(&self, ctx: &HookContext, body: &Document) -> bool {
        match validator::validate(body, &self.registry) {
            Ok(Verdict::Accept) => true,
            Ok(Verdict::Reject(reason)) => {
                debug!(case = ctx.case, worker = ctx.worker, ?reason, "Rejected fuzz case");
                false
            }
            Err(e) => {
                warn!(case = ctx.case, worker = ctx.worker, error = %e, "Hook error in filter; accepting case");
                true
            }
        }
    }

    fn map(&self, ctx: &HookContext, mut body: Document) -> Result<Document, HookError> {
        match rewriter::rewrite(&mut body, &self.pool) {
            Ok(Rewrite::Unchanged | Rewrite::Substituted(_)) => Ok(body),
            Err(e) if !e.is_fatal() => {
                warn!(case = ctx.case, worker = ctx.worker, error = %e, "Hook error in map; passing body through");
                Ok(body)
            }
            Err(e) => Err(e),
        }
    }
}

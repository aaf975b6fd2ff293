// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for junqo-fuzz-hooks

use junqo_fuzz_seed::SeedError;
use thiserror::Error;

/// Errors raised while inspecting or rewriting a fuzz case
#[derive(Debug, Error)]
pub enum HookError {
    /// The seed pool could not serve an identifier
    #[error(transparent)]
    Seed(#[from] SeedError),

    /// The body did not have the shape the hook expected
    ///
    /// Never leaves the hooks: `filter` accepts and `map` passes the body
    /// through unchanged, logging the error at warning level.
    #[error("Malformed {operation} body: {reason}")]
    MalformedBody {
        /// Root field the hook was inspecting
        operation: String,
        /// What was unexpected
        reason: String,
    },
}

impl HookError {
    pub(crate) fn malformed(operation: &str, reason: impl Into<String>) -> Self {
        HookError::MalformedBody {
            operation: operation.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether this error is fatal for the run
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, HookError::Seed(_))
    }
}

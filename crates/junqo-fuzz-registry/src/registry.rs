// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Dedup registry of values committed by accepted mutations
//!
//! Names and emails live in separate [`OrderedSet`]s, each with its own lock,
//! so registering a name never waits on an email lookup.

use tracing::debug;

use crate::ordered_set::OrderedSet;

/// Names and normalized emails already used by accepted fuzz cases
#[derive(Debug, Default)]
pub struct DedupRegistry {
    names: OrderedSet<String>,
    emails: OrderedSet<String>,
}

impl DedupRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Display names registered so far
    #[must_use]
    pub fn names(&self) -> &OrderedSet<String> {
        &self.names
    }

    /// Normalized emails registered so far
    #[must_use]
    pub fn emails(&self) -> &OrderedSet<String> {
        &self.emails
    }

    /// Forget every registered value
    pub fn clear(&self) {
        debug!(
            names = self.names.len(),
            emails = self.emails.len(),
            "Clearing dedup registry"
        );
        self.names.clear();
        self.emails.clear();
    }
}

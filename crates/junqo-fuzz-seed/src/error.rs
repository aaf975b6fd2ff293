// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for junqo-fuzz-seed

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or consuming the seed pool
#[derive(Debug, Error)]
pub enum SeedError {
    /// The seed source could not be read
    #[error("Failed to read seed data {}: {source}", path.display())]
    Load {
        /// Path of the seed source
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// A draw or take was attempted on an exhausted pool
    #[error("Seed identifier pool is exhausted; the seed data is too small for this run")]
    EmptyPool,

    /// The seed source contained no identifiers at all
    #[error("No seed identifiers found in {source_name}")]
    NoIdentifiers {
        /// Human-readable name of the seed source
        source_name: String,
    },
}

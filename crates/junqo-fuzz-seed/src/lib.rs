// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! junqo-fuzz-seed: Seed identifier pool for the junqo fuzz hooks
//!
//! This library crate extracts the identifiers of pre-seeded entities from a
//! seed data script and serves them to the hook harness, so fuzzed lookups,
//! updates and deletes target entities that really exist.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use junqo_fuzz_seed::UuidPool;
//!
//! let pool = UuidPool::from_path("db/test_data.sql").expect("read seed data");
//! pool.ensure_non_empty("db/test_data.sql").expect("seed data has identifiers");
//!
//! let existing = pool.draw().expect("pool not exhausted");
//! println!("lookup target: {existing}");
//! ```

pub mod error;
pub mod pool;

pub use error::SeedError;
pub use pool::{UuidPool, extract_identifiers};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::SeedError;
    pub use crate::pool::UuidPool;
}

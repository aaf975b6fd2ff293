// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! junqo-fuzz-registry: Shared dedup state for the junqo fuzz hooks
//!
//! Fuzz cases run concurrently, and accepted `createUser`/`updateUser` cases
//! must not reuse an email another case already committed. This crate provides
//! the insertion-ordered, mutex-guarded sets that record those values.
//!
//! # Example
//!
//! ```
//! use junqo_fuzz_registry::DedupRegistry;
//!
//! let registry = DedupRegistry::new();
//! assert!(registry.emails().insert_new("a@test.com".to_string()));
//! assert!(!registry.emails().insert_new("a@test.com".to_string()));
//! assert_eq!(registry.emails().peek_first().as_deref(), Some("a@test.com"));
//! ```

#![warn(missing_docs)]

pub mod ordered_set;
pub mod registry;

pub use ordered_set::OrderedSet;
pub use registry::DedupRegistry;

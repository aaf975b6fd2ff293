// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! junqo-fuzz-hooks: Filter and map hooks for fuzzing the junqo GraphQL API
//!
//! A property-based generator produces GraphQL bodies at random. Left alone,
//! most of them fail for boring reasons: a `deleteUser` aimed at an id that
//! never existed, a `createUser` reusing an email an earlier case already
//! registered. The hooks in this crate sit between the generator and the
//! backend and keep cases meaningful:
//!
//! - [`Hooks::filter`] rejects user mutations with empty names or reused
//!   emails, recording accepted values in a shared [`DedupRegistry`].
//! - [`Hooks::map`] points `user`, `updateUser` and `deleteUser` at real
//!   seeded identifiers from a [`UuidPool`].
//!
//! Malformed bodies never abort a run: both hooks fail open and log a warning.
//!
//! # Example
//!
//! ```
//! use junqo_fuzz_hooks::prelude::*;
//!
//! let pool = UuidPool::load("('11111111-1111-1111-1111-111111111111')");
//! let harness = Harness::new(pool).expect("seed pool is not empty");
//! let ctx = HookContext::default();
//!
//! let body = Document::mutation(
//!     Selection::new("deleteUser").with_argument("id", Value::string("x")),
//! );
//! assert!(harness.filter(&ctx, &body));
//! let body = harness.map(&ctx, body).expect("pool not exhausted");
//! assert_eq!(
//!     body.to_string(),
//!     "mutation {\n  deleteUser(id: \"11111111-1111-1111-1111-111111111111\")\n}\n"
//! );
//! ```

#![warn(missing_docs)]

pub mod body;
pub mod error;
pub mod harness;
pub mod rewriter;
pub mod scalars;
pub mod validator;

pub use body::{Argument, Definition, Document, ObjectField, OperationType, Selection, Value};
pub use error::HookError;
pub use harness::{Harness, HookContext, Hooks};
pub use junqo_fuzz_registry::DedupRegistry;
pub use junqo_fuzz_seed::{SeedError, UuidPool};
pub use scalars::{CustomScalars, ScalarKind};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::body::{Document, Selection, Value};
    pub use crate::error::HookError;
    pub use crate::harness::{Harness, HookContext, Hooks};
    pub use junqo_fuzz_seed::UuidPool;
}

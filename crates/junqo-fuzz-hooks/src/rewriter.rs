// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Identifier substitution for id-addressed operations
//!
//! A fuzzed `user(id: ...)` almost never names an existing user, so the case
//! would only ever exercise the "not found" path. The rewriter swaps the
//! generated `id` for one from the seed pool: a drawn one for lookups and
//! updates, a taken one for deletes.

use junqo_fuzz_seed::UuidPool;
use tracing::debug;

use crate::body::{Document, Value};
use crate::error::HookError;

/// How an operation sources its replacement identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdSource {
    /// Random pick that stays in the pool
    Draw,
    /// Oldest identifier, removed from the pool
    Take,
}

impl IdSource {
    /// The source used for a root field, if the field is id-addressed
    #[must_use]
    pub fn for_operation(operation: &str) -> Option<Self> {
        match operation {
            "user" | "updateUser" => Some(IdSource::Draw),
            "deleteUser" => Some(IdSource::Take),
            _ => None,
        }
    }

    /// `count` replacement identifiers; a take removes all of them or none
    fn next_ids(self, pool: &UuidPool, count: usize) -> Result<Vec<String>, HookError> {
        let ids = match self {
            IdSource::Draw => (0..count).map(|_| pool.draw()).collect::<Result<_, _>>()?,
            IdSource::Take => pool.take_many(count)?,
        };
        Ok(ids)
    }
}

/// What the rewriter did to a body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    /// Nothing to substitute
    Unchanged,
    /// `id` arguments now carry these seed identifiers
    Substituted(Vec<String>),
}

/// Replace the `id` argument of an id-addressed root field with a seed identifier
///
/// The body is only modified once every `id` argument has been checked, so a
/// malformed body comes back untouched.
///
/// # Errors
///
/// - [`HookError::MalformedBody`] if an `id` argument holds a variable, list
///   or object instead of a literal scalar.
/// - [`HookError::Seed`] if the pool is exhausted. The body is untouched and
///   a delete consumes no identifier.
pub fn rewrite(body: &mut Document, pool: &UuidPool) -> Result<Rewrite, HookError> {
    let Some(root) = body.root_field_mut() else {
        return Ok(Rewrite::Unchanged);
    };
    let Some(source) = IdSource::for_operation(&root.name) else {
        return Ok(Rewrite::Unchanged);
    };

    let mut targets = Vec::new();
    for arg in root.arguments.iter_mut().filter(|arg| arg.name == "id") {
        // Unknown shape: pass through
        if !matches!(arg.value, Value::String(_) | Value::Int(_) | Value::Null) {
            return Err(HookError::malformed(
                &root.name,
                format!("id is a {} value, expected a literal", arg.value.kind()),
            ));
        }
        targets.push(&mut arg.value);
    }
    if targets.is_empty() {
        return Ok(Rewrite::Unchanged);
    }

    let substituted = source.next_ids(pool, targets.len())?;
    for (value, id) in targets.into_iter().zip(&substituted) {
        *value = Value::String(id.clone());
    }
    debug!(operation = %root.name, ids = ?substituted, ?source, "Substituted seed identifiers");
    Ok(Rewrite::Substituted(substituted))
}

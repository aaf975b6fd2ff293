// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Mutation field validation for `createUser` / `updateUser`
//!
//! Decides whether a generated user mutation may reach the backend and records
//! the values it commits. Emails are the real uniqueness constraint: a
//! normalized email is admitted at most once per run. Names are registered but
//! never rejected as duplicates; only an empty (or, on update, null) name is
//! refused.

use junqo_fuzz_registry::DedupRegistry;
use tracing::debug;

use crate::body::{Document, ObjectField, Value};
use crate::error::HookError;

/// The user mutations whose input fields are validated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserMutation {
    /// `createUser(createUserInput: {...})`
    Create,
    /// `updateUser(updateUserInput: {...})`
    Update,
}

impl UserMutation {
    /// Map a root field name to the mutation it names
    #[must_use]
    pub fn from_operation(operation: &str) -> Option<Self> {
        match operation {
            "createUser" => Some(UserMutation::Create),
            "updateUser" => Some(UserMutation::Update),
            _ => None,
        }
    }

    /// Root field name
    #[must_use]
    pub fn operation(self) -> &'static str {
        match self {
            UserMutation::Create => "createUser",
            UserMutation::Update => "updateUser",
        }
    }

    /// Name of the input-object argument carrying the user fields
    #[must_use]
    pub fn input_argument(self) -> &'static str {
        match self {
            UserMutation::Create => "createUserInput",
            UserMutation::Update => "updateUserInput",
        }
    }
}

/// Why a case was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// `name` was empty after trimming
    EmptyName,
    /// `name` was explicitly null on an update
    NullName,
    /// `email` was empty after normalization
    EmptyEmail,
    /// The normalized email was already committed by an earlier case
    DuplicateEmail(String),
}

/// Outcome of validating one body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Let the case through
    Accept,
    /// Discard the case
    Reject(RejectReason),
}

impl Verdict {
    /// Whether the case may proceed
    #[must_use]
    pub fn is_accept(&self) -> bool {
        matches!(self, Verdict::Accept)
    }
}

/// Lower-case an email and drop every whitespace character
#[must_use]
pub fn normalize_email(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Validate a generated body, registering accepted values in `registry`
///
/// Bodies that are not user mutations, or that lack the input argument, are
/// accepted untouched. Fields are checked in order and registration happens
/// as each field passes, so values seen before a rejecting field stay
/// registered.
///
/// # Errors
///
/// Returns [`HookError::MalformedBody`] when the input argument or one of its
/// checked fields has an unexpected shape. Callers treat that as "accept".
pub fn validate(body: &Document, registry: &DedupRegistry) -> Result<Verdict, HookError> {
    let Some(root) = body.root_field() else {
        return Ok(Verdict::Accept);
    };
    let Some(mutation) = UserMutation::from_operation(&root.name) else {
        return Ok(Verdict::Accept);
    };
    let Some(input) = root.argument(mutation.input_argument()) else {
        return Ok(Verdict::Accept);
    };

    let fields = match &input.value {
        Value::Object(fields) => fields,
        other => {
            return Err(HookError::malformed(
                mutation.operation(),
                format!(
                    "{} is a {} value, expected an input object",
                    mutation.input_argument(),
                    other.kind()
                ),
            ));
        }
    };

    for field in fields {
        if let Verdict::Reject(reason) = check_field(mutation, field, registry)? {
            return Ok(Verdict::Reject(reason));
        }
    }
    Ok(Verdict::Accept)
}

fn check_field(
    mutation: UserMutation,
    field: &ObjectField,
    registry: &DedupRegistry,
) -> Result<Verdict, HookError> {
    match (field.name.as_str(), &field.value) {
        ("name", Value::String(raw)) => {
            let name = raw.trim();
            if name.is_empty() {
                return Ok(Verdict::Reject(RejectReason::EmptyName));
            }
            registry.names().add(name.to_string());
            Ok(Verdict::Accept)
        }
        ("name", Value::Null) if mutation == UserMutation::Update => {
            Ok(Verdict::Reject(RejectReason::NullName))
        }
        ("email", Value::String(raw)) => {
            let email = normalize_email(raw);
            if email.is_empty() {
                return Ok(Verdict::Reject(RejectReason::EmptyEmail));
            }
            if !registry.emails().insert_new(email.clone()) {
                debug!(email = %email, "Email already committed");
                return Ok(Verdict::Reject(RejectReason::DuplicateEmail(email)));
            }
            Ok(Verdict::Accept)
        }
        // Unknown shape: fail open
        (checked @ ("name" | "email"), other) => Err(HookError::malformed(
            mutation.operation(),
            format!("{checked} is a {} value, expected a string", other.kind()),
        )),
        _ => Ok(Verdict::Accept),
    }
}

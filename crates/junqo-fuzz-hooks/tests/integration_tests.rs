// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! End-to-end tests for the hook harness
//!
//! Each test drives `filter` and `map` the way the generation engine does:
//! filter first, map only accepted cases.

use junqo_fuzz_hooks::prelude::*;
use junqo_fuzz_hooks::{SeedError, body::OperationType};
use similar_asserts::assert_eq;

const SEED_ID: &str = "11111111-1111-1111-1111-111111111111";

fn create_user(name: &str, email: &str) -> Document {
    Document::mutation(
        Selection::new("createUser")
            .with_argument(
                "createUserInput",
                Value::object([("name", Value::string(name)), ("email", Value::string(email))]),
            )
            .with_field("id"),
    )
}

fn delete_user(id: &str) -> Document {
    Document::mutation(Selection::new("deleteUser").with_argument("id", Value::string(id)))
}

/// Run one case through both hooks; `None` means the case was filtered out
fn run_case(harness: &Harness, case: u64, body: Document) -> Result<Option<Document>, HookError> {
    let ctx = HookContext::new(case, 0);
    if !harness.filter(&ctx, &body) {
        return Ok(None);
    }
    harness.map(&ctx, body).map(Some)
}

#[test]
fn test_delete_uses_seed_identifier_then_exhausts_pool() {
    let harness = Harness::new(UuidPool::from_ids([SEED_ID])).expect("non-empty pool");

    let mapped = run_case(&harness, 1, delete_user("x"))
        .expect("pool not exhausted")
        .expect("delete is never filtered");
    assert_eq!(
        mapped.to_string(),
        format!("mutation {{\n  deleteUser(id: \"{SEED_ID}\")\n}}\n")
    );

    let err = run_case(&harness, 2, delete_user("y")).expect_err("pool is exhausted");
    assert!(matches!(err, HookError::Seed(SeedError::EmptyPool)));
    assert!(err.to_string().contains("exhausted"));
}

#[test]
fn test_same_email_with_different_case_and_spacing_is_rejected() {
    let harness = Harness::new(UuidPool::from_ids([SEED_ID])).expect("non-empty pool");

    let first = run_case(&harness, 1, create_user("Alice", "A@Test.com ")).unwrap();
    assert!(first.is_some());
    assert!(harness.registry().emails().contains("a@test.com"));

    let second = run_case(&harness, 2, create_user("Alice", "A@Test.com ")).unwrap();
    assert!(second.is_none());
}

#[test]
fn test_blank_name_rejected_regardless_of_email() {
    let harness = Harness::new(UuidPool::from_ids([SEED_ID])).expect("non-empty pool");
    assert!(run_case(&harness, 1, create_user("   ", "fresh@test.com")).unwrap().is_none());
    assert!(run_case(&harness, 2, create_user("\t\n", "other@test.com")).unwrap().is_none());
}

#[test]
fn test_update_is_validated_and_rewritten() {
    let harness = Harness::new(UuidPool::from_ids([SEED_ID])).expect("non-empty pool");
    let body = Document::mutation(
        Selection::new("updateUser")
            .with_argument("id", Value::string("generated"))
            .with_argument(
                "updateUserInput",
                Value::object([("name", Value::string(" Bob ")), ("email", Value::string("bob@test.com"))]),
            ),
    );

    let mapped = run_case(&harness, 1, body).unwrap().expect("accepted");
    let root = mapped.root_field().expect("root field");
    assert_eq!(root.argument("id").map(|a| &a.value), Some(&Value::string(SEED_ID)));
    assert!(harness.registry().names().contains("Bob"));
    // update draws, it does not consume
    assert_eq!(harness.pool().len(), 1);
}

#[test]
fn test_user_lookup_query_is_rewritten() {
    let harness = Harness::new(UuidPool::from_ids([SEED_ID])).expect("non-empty pool");
    let body = Document::query(
        Selection::new("user")
            .with_argument("id", Value::string("0"))
            .with_field("name"),
    );
    let mapped = run_case(&harness, 1, body).unwrap().expect("accepted");
    assert_eq!(mapped.definitions[0].operation, OperationType::Query);
    assert_eq!(
        mapped.to_string(),
        format!("query {{\n  user(id: \"{SEED_ID}\") {{\n    name\n  }}\n}}\n")
    );
}

#[test]
fn test_json_bodies_round_trip_through_hooks() {
    let harness = Harness::new(UuidPool::from_ids([SEED_ID])).expect("non-empty pool");
    let json = r#"{"definitions":[{"operation":"mutation","selections":[{"name":"deleteUser","arguments":[{"name":"id","value":{"kind":"string","value":"fuzz"}}],"selections":[{"name":"id"}]}]}]}"#;
    let body = Document::from_json(json).expect("valid document");
    let mapped = run_case(&harness, 1, body).unwrap().expect("accepted");
    let out = mapped.to_json().expect("serializes");
    assert!(out.contains(SEED_ID));
    assert!(!out.contains("fuzz"));
}

#[test]
fn test_seed_file_harness() {
    let path = std::env::temp_dir().join(format!("junqo-fuzz-hooks-seed-{}.sql", std::process::id()));
    std::fs::write(&path, format!("INSERT INTO users VALUES ('{SEED_ID}');")).expect("write seed");

    let harness = Harness::from_seed_file(&path).expect("seed file has identifiers");
    assert_eq!(harness.pool().snapshot(), vec![SEED_ID.to_string()]);

    let _ = std::fs::remove_file(path);
}

#[test]
fn test_missing_seed_file_is_fatal() {
    let err = Harness::from_seed_file("/nonexistent/junqo/test_data.sql").unwrap_err();
    assert!(err.is_fatal());
    assert!(matches!(err, HookError::Seed(SeedError::Load { .. })));
}

// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Integration tests for junqo-fuzz-seed
//!
//! These tests exercise seed files on disk and concurrent consumers of a
//! shared pool.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

use junqo_fuzz_seed::{SeedError, UuidPool};
use proptest::prelude::*;

static FILE_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Write `content` to a unique file under the system temp directory
fn write_seed_file(test_name: &str, content: &str) -> PathBuf {
    let counter = FILE_COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!(
        "junqo-fuzz-seed-{}-{}-{}.sql",
        test_name,
        std::process::id(),
        counter
    ));
    std::fs::write(&path, content).expect("Failed to write seed file");
    path
}

fn sequential_ids(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("{i:08x}-aaaa-bbbb-cccc-{i:012x}"))
        .collect()
}

#[test]
fn test_load_seed_file_from_disk() {
    let sql = r#"
-- Users
INSERT INTO "users" ("id", "name", "email") VALUES
('0b8f2a4e-6c1d-4e2f-9a3b-5c7d8e9f0a1b', 'Alice', 'alice@example.com'),
('1C9E3B5F-7D2E-4F30-AB4C-6D8E9FA0B1C2', 'Bob', 'bob@example.com');
-- Offers reference users
INSERT INTO "offers" ("id", "userId") VALUES
('2da04c60-8e3f-4041-bc5d-7e9fa0b1c2d3', '0b8f2a4e-6c1d-4e2f-9a3b-5c7d8e9f0a1b');
"#;
    let path = write_seed_file("disk", sql);

    let pool = UuidPool::from_path(&path).expect("Should load seed file");
    assert_eq!(pool.len(), 3);
    assert!(pool.contains("1C9E3B5F-7D2E-4F30-AB4C-6D8E9FA0B1C2"));
    pool.ensure_non_empty("seed").expect("pool has identifiers");

    let _ = std::fs::remove_file(path);
}

#[test]
fn test_missing_seed_file_is_load_error() {
    let path = std::env::temp_dir().join("junqo-fuzz-seed-does-not-exist-12345.sql");
    let err = UuidPool::from_path(&path).expect_err("missing file must fail");
    assert!(matches!(err, SeedError::Load { .. }));
    assert!(err.to_string().contains("junqo-fuzz-seed-does-not-exist-12345.sql"));
}

#[test]
fn test_empty_seed_file_loads_empty_pool() {
    let path = write_seed_file("empty", "-- nothing seeded yet\n");
    let pool = UuidPool::from_path(&path).expect("readable file is not an error");
    assert!(pool.is_empty());
    assert!(pool.ensure_non_empty("empty.sql").is_err());
    let _ = std::fs::remove_file(path);
}

#[test]
fn test_concurrent_takes_never_hand_out_twice() {
    let pool = UuidPool::from_ids(sequential_ids(400));
    let taken: Vec<Vec<String>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    let mut mine = Vec::new();
                    while let Ok(id) = pool.take() {
                        mine.push(id);
                    }
                    mine
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("worker panicked"))
            .collect()
    });

    let all: Vec<&String> = taken.iter().flatten().collect();
    let unique: HashSet<&String> = all.iter().copied().collect();
    assert_eq!(all.len(), 400);
    assert_eq!(unique.len(), 400);
    assert!(pool.is_empty());
}

proptest! {
    #[test]
    fn prop_take_shrinks_pool_by_one(size in 0usize..40, takes in 0usize..60) {
        let pool = UuidPool::from_ids(sequential_ids(size));
        let mut seen = HashSet::new();
        for n in 1..=takes {
            match pool.take() {
                Ok(id) => {
                    prop_assert!(n <= size);
                    prop_assert!(seen.insert(id));
                }
                Err(SeedError::EmptyPool) => {
                    prop_assert!(n > size);
                }
                Err(other) => {
                    prop_assert!(false, "unexpected error: {}", other);
                }
            }
        }
        prop_assert_eq!(pool.len(), size.saturating_sub(takes));
    }

    #[test]
    fn prop_draw_returns_load_time_values_not_taken(size in 1usize..30, takes in 0usize..30, seed: u64) {
        let ids = sequential_ids(size);
        let pool = UuidPool::from_ids(ids.clone()).with_rng_seed(seed);
        let mut taken = HashSet::new();
        for _ in 0..takes.min(size - 1) {
            taken.insert(pool.take().expect("pool not exhausted"));
        }
        for _ in 0..20 {
            let drawn = pool.draw().expect("pool not exhausted");
            prop_assert!(ids.contains(&drawn));
            prop_assert!(!taken.contains(&drawn));
        }
    }
}

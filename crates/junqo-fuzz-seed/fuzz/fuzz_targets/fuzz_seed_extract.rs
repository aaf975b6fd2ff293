// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for seed identifier extraction
//!
//! Arbitrary seed text must never panic the extractor, and every identifier
//! handed out by `take` must be unique.

#![no_main]

use std::collections::HashSet;

use libfuzzer_sys::fuzz_target;

use junqo_fuzz_seed::UuidPool;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let pool = UuidPool::load(&text);

    let mut seen = HashSet::new();
    while let Ok(id) = pool.take() {
        assert_eq!(id.len(), 36);
        assert!(seen.insert(id.to_ascii_lowercase()));
    }
});

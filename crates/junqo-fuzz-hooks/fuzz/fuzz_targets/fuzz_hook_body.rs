// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the filter and map hooks
//!
//! Any document that deserializes must pass through both hooks without a
//! panic; `map` may only fail once the seed pool runs dry.

#![no_main]

use libfuzzer_sys::fuzz_target;

use junqo_fuzz_hooks::prelude::*;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(body) = Document::from_json(input) else {
        return;
    };

    let pool = UuidPool::from_ids(["11111111-1111-1111-1111-111111111111"]);
    let harness = Harness::new(pool).expect("non-empty pool");
    let ctx = HookContext::default();

    if harness.filter(&ctx, &body) {
        match harness.map(&ctx, body) {
            Ok(mapped) => {
                let _ = mapped.to_string();
            }
            Err(e) => assert!(e.is_fatal()),
        }
    }
});

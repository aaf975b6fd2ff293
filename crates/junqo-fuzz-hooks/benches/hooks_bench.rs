// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use junqo_fuzz_hooks::prelude::*;

fn seed_pool(size: usize) -> UuidPool {
    UuidPool::from_ids((0..size).map(|i| format!("{i:08x}-0000-4000-8000-{i:012x}")))
}

fn create_user(i: usize) -> Document {
    Document::mutation(Selection::new("createUser").with_argument(
        "createUserInput",
        Value::object([
            ("name", Value::string(format!(" user {i} "))),
            ("email", Value::string(format!("User{i}@Bench.com"))),
        ]),
    ))
}

fn filter_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for registered in [0usize, 1_000, 100_000] {
        let harness = Harness::new(seed_pool(1)).expect("non-empty pool");
        let ctx = HookContext::default();
        for i in 0..registered {
            harness.filter(&ctx, &create_user(i));
        }
        let mut next = registered;
        group.bench_with_input(
            BenchmarkId::new("create_user", registered),
            &registered,
            |b, _| {
                b.iter(|| {
                    next += 1;
                    std::hint::black_box(harness.filter(&ctx, &create_user(next)))
                })
            },
        );
    }

    group.finish();
}

fn map_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("map");
    let harness = Harness::new(seed_pool(10_000)).expect("non-empty pool");
    let ctx = HookContext::default();
    let lookup = Document::query(
        Selection::new("user")
            .with_argument("id", Value::string("fuzz"))
            .with_field("name"),
    );

    group.bench_function("user_lookup", |b| {
        b.iter(|| std::hint::black_box(harness.map(&ctx, lookup.clone())))
    });

    group.finish();
}

criterion_group!(benches, filter_benchmarks, map_benchmarks);
criterion_main!(benches);

//! Benchmarks for example bundle operations.
//!
//! Run with: cargo bench

use axide_examples::{Bundle, Entry};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

/// Generates a chain of entries where each imports the previous one.
fn generate_chain(len: usize) -> Vec<Entry> {
    (0..len)
        .map(|i| {
            let content = if i == 0 {
                "contract C0 {}\n".to_string()
            } else {
                format!("import \"./{}_C.sol\";\ncontract C{} {{}}\n", i - 1, i)
            };
            Entry::new(format!("c{i}"), format!("{i}_C.sol"), content)
        })
        .collect()
}

/// Benchmarks building the shipped bundle.
fn bench_builtin(c: &mut Criterion) {
    c.bench_function("builtin", |b| b.iter(|| black_box(Bundle::builtin())));
}

/// Benchmarks key lookup and snapshots.
fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    let bundle = Bundle::builtin();

    group.bench_function("get_hit", |b| {
        b.iter(|| black_box(bundle.get(black_box("testToken")).is_ok()))
    });

    group.bench_function("get_miss", |b| {
        b.iter(|| black_box(bundle.get(black_box("erc20")).is_err()))
    });

    group.bench_function("list", |b| b.iter(|| black_box(bundle.list())));

    group.finish();
}

/// Benchmarks validation on growing import chains.
fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    for size in [4, 64, 1024].iter() {
        let bundle = Bundle::from_entries(generate_chain(*size));

        group.bench_with_input(BenchmarkId::new("chain", size), &bundle, |b, bundle| {
            b.iter(|| black_box(bundle.validate().is_ok()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_builtin, bench_lookup, bench_validate);

criterion_main!(benches);

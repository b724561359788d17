use std::collections::{BTreeSet, HashSet};
use std::hint::black_box;

use container_utils::{contains, filter, merge, remove_duplicates, split, transform};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn input(n: usize) -> Vec<u64> {
    (0..n as u64).map(|i| i.wrapping_mul(2_654_435_761) % 1_024).collect()
}

fn bench_borrowed_vs_owned(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");
    for n in [1_000, 100_000] {
        let v = input(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("borrowed", n), &v, |b, v| {
            b.iter(|| filter(black_box(v), |x| x % 3 == 0))
        });
        group.bench_with_input(BenchmarkId::new("owned", n), &v, |b, v| {
            b.iter_batched(|| v.clone(), |v| filter(v, |x| x % 3 == 0), criterion::BatchSize::LargeInput)
        });
    }
    group.finish();
}

fn bench_merge_transform_split(c: &mut Criterion) {
    let a = input(10_000);
    let b: BTreeSet<u64> = input(10_000).into_iter().collect();
    c.bench_function("merge/vec+set", |bench| bench.iter(|| merge((black_box(&a), black_box(&b)))));
    c.bench_function("transform/square", |bench| bench.iter(|| transform(black_box(&a), |x| x * x)));
    c.bench_function("split/zero", |bench| bench.iter(|| split(black_box(&a), &0)));
}

fn bench_contains(c: &mut Criterion) {
    let v = input(10_000);
    let set: HashSet<u64> = v.iter().copied().collect();
    let mut group = c.benchmark_group("contains");
    group.bench_function("linear_scan", |b| b.iter(|| contains(black_box(&v), &1_023)));
    group.bench_function("native", |b| b.iter(|| contains(black_box(&set), &1_023)));
    group.finish();
}

fn bench_remove_duplicates(c: &mut Criterion) {
    let v = input(2_000);
    c.bench_function("remove_duplicates/2000", |b| {
        b.iter_batched(
            || v.clone(),
            |mut v| {
                remove_duplicates(&mut v);
                v
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_borrowed_vs_owned,
    bench_merge_transform_split,
    bench_contains,
    bench_remove_duplicates
);
criterion_main!(benches);

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use orderly::prelude::*;
use rand::Rng;
use std::collections::BTreeSet;
use std::hint::black_box;

fn bench_include(c: &mut Criterion) {
    let mut group = c.benchmark_group("Include");
    group.sample_size(10);

    // Dataset generation
    let mut rng = rand::rng();
    let count = 10_000;
    let input: Vec<u64> = (0..count).map(|_| rng.random_range(0..count as u64)).collect();

    group.bench_function("OrderedCollection (sorted, unique)", |b| {
        b.iter_batched(
            || OrderedCollection::sorted(Natural, true),
            |mut collection| {
                for &item in &input {
                    collection.include(black_box(item));
                }
                collection
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("OrderedCollection (unsorted) + set_sorted", |b| {
        b.iter_batched(
            || OrderedCollection::with_comparator(Natural),
            |mut collection| {
                collection.push_multiple(input.iter().copied());
                collection.set_sorted(true).unwrap();
                collection
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("BTreeSet::insert", |b| {
        b.iter_batched(
            BTreeSet::new,
            |mut set| {
                for &item in &input {
                    set.insert(black_box(item));
                }
                set
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_set_algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("Set Algebra");
    group.sample_size(10);

    let mut rng = rand::rng();
    let count = 100_000;

    let mut left = OrderedCollection::with_comparator(Natural);
    left.push_multiple((0..count).map(|_| rng.random_range(0..4 * count as u64)));
    left.set_sorted(true).unwrap();
    let mut right = OrderedCollection::with_comparator(Natural);
    right.push_multiple((0..count).map(|_| rng.random_range(0..4 * count as u64)));
    right.set_sorted(true).unwrap();

    group.bench_function("add (unique)", |b| {
        b.iter(|| left.add(black_box(&right), true).unwrap())
    });
    group.bench_function("add (keep ties)", |b| {
        b.iter(|| left.add(black_box(&right), false).unwrap())
    });
    group.bench_function("sub", |b| b.iter(|| left.sub(black_box(&right)).unwrap()));

    let left_set: BTreeSet<u64> = left.iter().copied().collect();
    let right_set: BTreeSet<u64> = right.iter().copied().collect();
    group.bench_function("BTreeSet::union", |b| {
        b.iter(|| left_set.union(black_box(&right_set)).count())
    });

    group.finish();
}

criterion_group!(benches, bench_include, bench_set_algebra);
criterion_main!(benches);

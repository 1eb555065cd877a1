//! Raw indexed heap benchmarks
//!
//! Measures the three operations Dijkstra leans on (insert, decrease_key,
//! pop_min) for several arities on a reproducible workload.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_indexed_dijkstra::dary::IndexedDaryHeap;

const ARITIES: [usize; 5] = [2, 3, 4, 8, 16];
const SIZE: usize = 100_000;

/// Reproducible pseudo-random values
fn values(seed: u64) -> Vec<u64> {
    let mut state = seed;
    (0..SIZE)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            (state >> 24) | 1
        })
        .collect()
}

fn benchmark_insert_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_pop");
    let input = values(99);

    for arity in ARITIES {
        group.bench_with_input(BenchmarkId::new("arity", arity), &input, |b, input| {
            b.iter(|| {
                let mut heap = IndexedDaryHeap::new(arity, SIZE);
                for (key, &value) in input.iter().enumerate() {
                    heap.insert(key, value).unwrap();
                }
                let mut checksum = 0u64;
                while let Ok((_, value)) = heap.pop_min() {
                    checksum = checksum.wrapping_add(value);
                }
                black_box(checksum)
            })
        });
    }

    group.finish();
}

fn benchmark_decrease_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("decrease_key");
    let input = values(7);

    for arity in ARITIES {
        group.bench_with_input(BenchmarkId::new("arity", arity), &input, |b, input| {
            b.iter(|| {
                let mut heap = IndexedDaryHeap::new(arity, SIZE);
                for (key, &value) in input.iter().enumerate() {
                    heap.insert(key, value).unwrap();
                }
                for (key, &value) in input.iter().enumerate() {
                    heap.decrease_key(key, value / 2).unwrap();
                }
                black_box(heap.peek_min_key().unwrap())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_insert_pop, benchmark_decrease_key);

criterion_main!(benches);

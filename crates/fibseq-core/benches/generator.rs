//! Criterion benchmarks for the shared generator.
//!
//! `Emulation` is a bare single-threaded CAS loop over the same recurrence;
//! the generator should stay within a few percent of it when uncontended.

use std::hint::black_box;
use std::sync::atomic::{AtomicU64, Ordering};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use fibseq_core::{Generator, SEQUENCE_LEN};

fn drain(generator: &Generator) -> u64 {
    let mut last = 0;
    for _ in 0..SEQUENCE_LEN {
        last = generator.next().unwrap();
    }
    last
}

fn emulate() -> u64 {
    let prev = AtomicU64::new(0);
    let mut cur = 1u64;
    let mut last = 0;
    for _ in 0..SEQUENCE_LEN {
        let tmp = prev.load(Ordering::Relaxed);
        let _ = prev.compare_exchange(tmp, cur, Ordering::AcqRel, Ordering::Relaxed);
        last = tmp;
        cur = cur.wrapping_add(tmp);
    }
    last
}

fn bench_uncontended(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sequence94");
    group.bench_function("Generator", |b| {
        b.iter(|| drain(black_box(&Generator::new())));
    });
    group.bench_function("Emulation", |b| b.iter(|| black_box(emulate())));
    group.finish();
}

fn bench_contended(c: &mut Criterion) {
    let mut group = c.benchmark_group("Contended");
    for workers in [2usize, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(workers), &workers, |b, &workers| {
            b.iter(|| {
                let generator = Generator::new();
                crossbeam::thread::scope(|s| {
                    for _ in 0..workers {
                        s.spawn(|_| generator.iter().count());
                    }
                })
                .unwrap();
                black_box(generator.is_exhausted())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_uncontended, bench_contended);
criterion_main!(benches);

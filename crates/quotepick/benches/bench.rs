use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use quotepick::{QUOTES, RandSource, RandomPicker, SeededRandom, SequenceRandom, ThreadRandom};
use std::{sync::Barrier, thread::scope, time::Instant};

// Number of picks per benchmark iteration (per-thread for multi-threaded).
const TOTAL_PICKS: usize = 4096;

/// Benchmarks back-to-back picks on a single thread.
fn bench_picker<R>(c: &mut Criterion, group_name: &str, rng_factory: impl Fn() -> R)
where
    R: RandSource,
{
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_PICKS as u64));

    group.bench_function(format!("elems/{}", TOTAL_PICKS), |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();

            for _ in 0..iters {
                let picker = RandomPicker::new(QUOTES, rng_factory());
                for _ in 0..TOTAL_PICKS {
                    black_box(picker.pick().unwrap());
                }
            }

            start.elapsed()
        });
    });

    group.finish();
}

/// Benchmarks one picker shared by several threads.
fn bench_picker_contended<R>(c: &mut Criterion, group_name: &str, rng_factory: impl Fn() -> R)
where
    R: RandSource + Sync,
{
    let mut group = c.benchmark_group(group_name);

    for thread_count in [1, 2, 4, 8] {
        let total = TOTAL_PICKS * thread_count;
        group.throughput(Throughput::Elements(total as u64));

        group.bench_function(format!("elems/{total}/threads/{thread_count}"), |b| {
            b.iter_custom(|iters| {
                let picker = RandomPicker::new(QUOTES, rng_factory());
                let barrier = Barrier::new(thread_count + 1);
                scope(|s| {
                    for _ in 0..thread_count {
                        s.spawn(|| {
                            barrier.wait();
                            for _ in 0..iters {
                                for _ in 0..TOTAL_PICKS {
                                    black_box(picker.pick().unwrap());
                                }
                            }
                        });
                    }

                    let start = Instant::now();
                    barrier.wait();
                    start
                })
                .elapsed()
            });
        });
    }

    group.finish();
}

fn benchmark_sequential_thread_random(c: &mut Criterion) {
    bench_picker(c, "sequential/thread_random", || ThreadRandom);
}

fn benchmark_sequential_seeded(c: &mut Criterion) {
    bench_picker(c, "sequential/seeded", || SeededRandom::new(42));
}

fn benchmark_sequential_sequence(c: &mut Criterion) {
    bench_picker(c, "sequential/sequence", || {
        SequenceRandom::new([0.0, 0.25, 0.5, 0.75, 0.999])
    });
}

fn benchmark_contended_thread_random(c: &mut Criterion) {
    bench_picker_contended(c, "contended/thread_random", || ThreadRandom);
}

fn benchmark_contended_seeded(c: &mut Criterion) {
    bench_picker_contended(c, "contended/seeded", || SeededRandom::new(42));
}

criterion_group!(
    benches,
    benchmark_sequential_thread_random,
    benchmark_sequential_seeded,
    benchmark_sequential_sequence,
    benchmark_contended_thread_random, // no shared state
    benchmark_contended_seeded,        // serializes on the mutex
);
criterion_main!(benches);

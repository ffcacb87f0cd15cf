use criterion::measurement::WallTime;
use criterion::{BenchmarkGroup, Criterion, criterion_group, criterion_main};
use crossbeam::queue::SegQueue;
use fairq::{BlockingQueue, FairPriorityQueue};
use std::hint::black_box;
use std::sync::Arc;
use std::thread;
use std::thread::JoinHandle;

fn bench_blocking_queue(c: &mut Criterion) {
    let mut group: BenchmarkGroup<WallTime> = c.benchmark_group("blocking_queue");

    group.bench_function("add_remove_single_thread", |b| {
        let queue: BlockingQueue<i64> = BlockingQueue::new();

        b.iter(|| {
            queue.add(black_box(42));
            queue.remove().unwrap();
        });
    });

    group.bench_function("segqueue_baseline", |b| {
        let queue: SegQueue<i64> = SegQueue::new();

        b.iter(|| {
            queue.push(black_box(42));
            queue.pop().unwrap();
        });
    });

    group.bench_function("mpmc_threaded", |b| {
        b.iter(|| {
            let queue: Arc<BlockingQueue<i64>> = Arc::new(BlockingQueue::new());

            let mut producers: Vec<JoinHandle<()>> = vec![];
            for _ in 0..2 {
                let queue: Arc<BlockingQueue<i64>> = Arc::clone(&queue);
                producers.push(thread::spawn(move || {
                    for i in 0..1000 {
                        queue.add(i);
                    }
                }));
            }

            let mut consumers: Vec<JoinHandle<()>> = vec![];
            for _ in 0..2 {
                let queue: Arc<BlockingQueue<i64>> = Arc::clone(&queue);
                consumers.push(thread::spawn(move || {
                    while queue.remove_wait().is_some() {}
                }));
            }

            for handle in producers {
                handle.join().unwrap();
            }
            while !queue.is_empty() {
                thread::yield_now();
            }
            queue.close();
            for handle in consumers {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
}

fn bench_priority_queue(c: &mut Criterion) {
    let mut group: BenchmarkGroup<WallTime> = c.benchmark_group("fair_priority_queue");

    for num_levels in [2usize, 8, 32] {
        group.bench_function(format!("add_remove_{num_levels}_levels"), |b| {
            let queue: FairPriorityQueue<i64> =
                FairPriorityQueue::with_wait_limit(num_levels, 1).unwrap();
            let mut level = 1;

            b.iter(|| {
                queue.add(black_box(42), level).unwrap();
                queue.remove().unwrap();
                level = 1 + level % num_levels;
            });
        });
    }

    group.bench_function("scan_sparse_levels", |b| {
        // Worst case for the cursor scan: only the lowest level populated
        let queue: FairPriorityQueue<i64> = FairPriorityQueue::with_wait_limit(64, 1).unwrap();

        b.iter(|| {
            queue.add(black_box(42), 1).unwrap();
            queue.remove().unwrap();
        });
    });

    group.bench_function("remove_level_direct", |b| {
        let queue: FairPriorityQueue<i64> = FairPriorityQueue::with_wait_limit(8, 1).unwrap();

        b.iter(|| {
            queue.add(black_box(42), 0).unwrap();
            queue.remove_level(0).unwrap().unwrap();
        });
    });

    group.finish();
}

criterion_group!(benches, bench_blocking_queue, bench_priority_queue);
criterion_main!(benches);

//! Worker-pool demonstration
//!
//! A handful of producer threads push jobs at mixed priorities while a pool
//! of workers blocks on the queue. Closing the queue shuts the pool down
//! without losing in-flight items.
//!
//! Run with: cargo run --example worker_pool

use anyhow::Result;
use fairq::{FairPriorityQueue, StopWatch};
use std::sync::Arc;
use std::thread;
use std::thread::JoinHandle;

const JOBS_PER_PRODUCER: usize = 5_000;

fn main() -> Result<()> {
    env_logger::init();

    let queue: Arc<FairPriorityQueue<u64>> = Arc::new(FairPriorityQueue::with_wait_limit(4, 8)?);

    let mut sw = StopWatch::new();
    sw.start();

    let mut producers: Vec<JoinHandle<()>> = vec![];
    for p in 0..4u64 {
        let queue: Arc<FairPriorityQueue<u64>> = Arc::clone(&queue);
        producers.push(thread::spawn(move || {
            for i in 0..JOBS_PER_PRODUCER as u64 {
                let level = 1 + ((p + i) % 4) as usize;
                queue.add(p * JOBS_PER_PRODUCER as u64 + i, level).unwrap();
            }
        }));
    }

    let mut workers: Vec<JoinHandle<usize>> = vec![];
    for _ in 0..4 {
        let queue: Arc<FairPriorityQueue<u64>> = Arc::clone(&queue);
        workers.push(thread::spawn(move || {
            let mut served: usize = 0;
            while queue.remove_wait().is_some() {
                served += 1;
            }
            served
        }));
    }

    for handle in producers {
        handle.join().unwrap();
    }
    while !queue.is_empty() {
        thread::yield_now();
    }
    queue.close();

    let mut total: usize = 0;
    for handle in workers {
        let served = handle.join().unwrap();
        println!("worker served {served} jobs");
        total += served;
    }

    sw.stop();
    let elapsed = sw.elapsed();

    println!("\n{total} jobs through the pool in {elapsed:?}");
    println!(
        "throughput: {:.0} jobs/s",
        total as f64 / elapsed.as_secs_f64()
    );

    Ok(())
}

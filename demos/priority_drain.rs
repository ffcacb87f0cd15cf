//! Drain-order demonstration
//!
//! Fills two fairness levels plus the bypass level, then shows the order the
//! round-robin scheduler hands items back.
//!
//! Run with: cargo run --example priority_drain

use anyhow::Result;
use fairq::FairPriorityQueue;

fn main() -> Result<()> {
    env_logger::init();

    let q: FairPriorityQueue<i32> = FairPriorityQueue::with_wait_limit(2, 1)?;

    q.add(5, 1)?;
    q.add(1, 0)?;
    q.add(2, 2)?;
    q.add(3, 1)?;
    q.add(4, 2)?;

    println!("queued {} items across 3 levels", q.len());

    // The bypass level is only reachable by exact level
    println!("bypass head: {:?}", q.peek_level(0)?);
    println!("bypass pop:  {:?}", q.remove_level(0)?);

    // wait_limit = 1 alternates between the two fairness levels,
    // highest-numbered first
    print!("fairness drain order:");
    while let Some(v) = q.remove() {
        print!(" {v}");
    }
    println!();

    Ok(())
}

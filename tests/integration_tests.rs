//! Integration tests

use fairq::*;
use std::sync::Arc;
use std::thread;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

#[test]
fn test_blocking_queue_workflow() {
    let q: BlockingQueue<i32> = BlockingQueue::new();

    q.add(1);
    q.add(2);
    q.add(3);
    assert_eq!(q.len(), 3);

    assert_eq!(q.remove(), Some(1));
    assert_eq!(q.len(), 2);

    q.clear();
    assert_eq!(q.len(), 0);

    // A blocked consumer on the now-empty open queue is released promptly
    // by close from another thread
    let q: Arc<BlockingQueue<i32>> = Arc::new(q);
    let consumer_q: Arc<BlockingQueue<i32>> = Arc::clone(&q);

    let consumer: JoinHandle<(Option<i32>, Duration)> = thread::spawn(move || {
        let start = Instant::now();
        let value = consumer_q.remove_wait();
        (value, start.elapsed())
    });

    thread::sleep(Duration::from_millis(100));
    q.close();

    let (value, waited) = consumer.join().unwrap();
    assert_eq!(value, None);
    // Blocked for roughly as long as we slept, released promptly after
    assert!(waited >= Duration::from_millis(90));
    assert!(waited < Duration::from_secs(2));
}

#[test]
fn test_priority_queue_workflow() {
    let q: FairPriorityQueue<i32> = FairPriorityQueue::with_wait_limit(2, 1).unwrap();

    q.add(5, 1).unwrap();
    q.add(1, 0).unwrap();
    q.add(2, 2).unwrap();
    q.add(3, 1).unwrap();
    q.add(4, 2).unwrap();
    assert_eq!(q.len(), 5);

    assert_eq!(q.peek_level(0).unwrap(), Some(1));
    assert_eq!(q.remove_level(0).unwrap(), Some(1));
    assert_eq!(q.len(), 4);

    assert_eq!(q.remove(), Some(2));
    assert_eq!(q.remove(), Some(5));
    assert_eq!(q.remove(), Some(4));

    assert_eq!(q.peek(), Some(3));
    assert_eq!(q.len(), 1);
    assert_eq!(q.remove(), Some(3));

    q.clear();
    assert_eq!(q.len(), 0);

    // Blocked consumer released by close
    let q: Arc<FairPriorityQueue<i32>> = Arc::new(q);
    let consumer_q: Arc<FairPriorityQueue<i32>> = Arc::clone(&q);

    let consumer: JoinHandle<Option<i32>> = thread::spawn(move || consumer_q.remove_wait());

    thread::sleep(Duration::from_millis(100));
    q.close();

    assert_eq!(consumer.join().unwrap(), None);
}

#[test]
fn test_producers_and_blocking_consumers() {
    let q: Arc<FairPriorityQueue<u64>> = Arc::new(FairPriorityQueue::with_wait_limit(4, 2).unwrap());

    let mut producers: Vec<JoinHandle<()>> = vec![];
    for p in 0..4u64 {
        let q: Arc<FairPriorityQueue<u64>> = Arc::clone(&q);
        producers.push(thread::spawn(move || {
            for i in 0..500 {
                let level = 1 + ((p + i) % 4) as usize;
                q.add(p * 500 + i, level).unwrap();
            }
        }));
    }

    let mut consumers: Vec<JoinHandle<Vec<u64>>> = vec![];
    for _ in 0..3 {
        let q: Arc<FairPriorityQueue<u64>> = Arc::clone(&q);
        consumers.push(thread::spawn(move || {
            let mut received: Vec<u64> = Vec::new();
            while let Some(item) = q.remove_wait() {
                received.push(item);
            }
            received
        }));
    }

    for handle in producers {
        handle.join().unwrap();
    }
    while !q.is_empty() {
        thread::yield_now();
    }
    q.close();

    let mut received: Vec<u64> = vec![];
    for handle in consumers {
        received.extend(handle.join().unwrap());
    }
    received.sort();

    // Every produced item was delivered to exactly one consumer
    assert_eq!(received.len(), 2000);
    for (i, &val) in received.iter().enumerate() {
        assert_eq!(val, i as u64);
    }
}

#[test]
fn test_level_targeted_ops_do_not_disturb_fairness() {
    let q: FairPriorityQueue<i32> = FairPriorityQueue::with_wait_limit(2, 1).unwrap();

    q.add(10, 1).unwrap();
    q.add(11, 1).unwrap();
    q.add(20, 2).unwrap();
    q.add(21, 2).unwrap();

    // Take one item straight off level 1; the cursor never hears about it
    assert_eq!(q.remove_level(1).unwrap(), Some(10));

    // Scheduling proceeds as if level 1 simply had one fewer item
    assert_eq!(q.remove(), Some(20));
    assert_eq!(q.remove(), Some(11));
    assert_eq!(q.remove(), Some(21));
    assert_eq!(q.remove(), None);
}

#[test]
fn test_drained_level_recovers_after_refill() {
    let q: FairPriorityQueue<i32> = FairPriorityQueue::with_wait_limit(2, 1).unwrap();

    q.add(20, 2).unwrap();
    q.add(10, 1).unwrap();
    q.add(11, 1).unwrap();

    assert_eq!(q.remove(), Some(20));
    assert_eq!(q.remove(), Some(10));

    // Level 2 refills and rejoins the rotation
    q.add(21, 2).unwrap();
    assert_eq!(q.remove(), Some(21));
    assert_eq!(q.remove(), Some(11));
}

#[test]
fn test_close_then_drain() {
    let q: FairPriorityQueue<i32> = FairPriorityQueue::with_wait_limit(2, 1).unwrap();

    q.add(1, 1).unwrap();
    q.add(2, 2).unwrap();
    q.add(3, 0).unwrap();

    q.close();

    // Close loses nothing; non-blocking drains still work
    assert_eq!(q.len(), 3);
    assert_eq!(q.remove(), Some(2));
    assert_eq!(q.remove(), Some(1));
    assert_eq!(q.remove_level(0).unwrap(), Some(3));

    // And blocking calls return the sentinel immediately
    let start = Instant::now();
    assert_eq!(q.remove_wait(), None);
    assert!(start.elapsed() < Duration::from_millis(100));
}

#[test]
fn test_add_wakes_exactly_enough_waiters() {
    let q: Arc<FairPriorityQueue<i32>> = Arc::new(FairPriorityQueue::with_wait_limit(2, 1).unwrap());

    let mut waiters: Vec<JoinHandle<Option<i32>>> = vec![];
    for _ in 0..3 {
        let q: Arc<FairPriorityQueue<i32>> = Arc::clone(&q);
        waiters.push(thread::spawn(move || q.remove_wait()));
    }

    thread::sleep(Duration::from_millis(50));

    // One item: exactly one waiter gets it, the other two stay parked
    q.add(7, 1).unwrap();
    thread::sleep(Duration::from_millis(50));

    let finished: usize = waiters.iter().filter(|h| h.is_finished()).count();
    assert_eq!(finished, 1);

    q.close();
    let mut results: Vec<Option<i32>> = waiters
        .into_iter()
        .map(|h| h.join().unwrap())
        .collect();
    results.sort();

    assert_eq!(results, vec![None, None, Some(7)]);
}

#[test]
fn test_util_helpers_end_to_end() {
    // The queue family's trivial collaborators, exercised together
    let mut flags = BitMask::new();
    flags.add("urgent|batch|retry").unwrap();
    let v: u64 = flags.parse("urgent|retry").unwrap();
    assert_eq!(flags.format(v), "urgent|retry");

    let opts = two_dim_split("levels=4:quantum=2", ":", "=");
    let levels: usize = opts["levels"].parse().unwrap();
    let quantum: usize = opts["quantum"].parse().unwrap();

    let q: FairPriorityQueue<u64> = FairPriorityQueue::with_wait_limit(levels, quantum).unwrap();
    q.add(v, clip(9, 0, levels)).unwrap();
    assert_eq!(q.remove(), Some(v));
}

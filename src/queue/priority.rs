//! Fairness-scheduled multi-level priority queue
//!
//! A set of FIFO levels serviced by a round-robin cursor with a per-visit
//! quantum, plus one bypass level that generic scheduling never touches.
//!
//! Level `0` is the bypass level: always present, reachable only through
//! [`peek_level`](FairPriorityQueue::peek_level) /
//! [`remove_level`](FairPriorityQueue::remove_level). Levels `1..=num_levels`
//! are fairness levels, visited in descending-wrapping order starting from
//! the highest. The scheduler serves at most `wait_limit` consecutive items
//! from one fairness level before rotating to the next non-empty one; empty
//! levels are skipped without being charged against the quantum.

use crate::queue::QueueConfig;
use parking_lot::{Condvar, Mutex};
use std::collections::VecDeque;

/// Scheduler state, all guarded by one lock
struct Sched<T> {
    /// Index 0 is the bypass level, 1..=num_levels the fairness levels
    levels: Vec<VecDeque<T>>,
    /// Current fairness level, always in [1, num_levels]
    cursor: usize,
    /// Items served from the cursor level in the current visit
    served: usize,
    closed: bool,
}

impl<T> Sched<T> {
    fn num_levels(&self) -> usize {
        self.levels.len() - 1
    }

    /// Next fairness level in scheduling order (descending, wrapping)
    fn next_after(&self, level: usize) -> usize {
        if level == 1 { self.num_levels() } else { level - 1 }
    }

    /// First non-empty fairness level in scheduling order from the cursor
    ///
    /// Pure scan: neither the cursor nor the quantum counter moves here, so
    /// peeks can share it with removals.
    fn first_schedulable(&self) -> Option<usize> {
        let mut level = self.cursor;
        for _ in 0..self.num_levels() {
            if !self.levels[level].is_empty() {
                return Some(level);
            }
            level = self.next_after(level);
        }
        None
    }

    /// Pop the next fairness-scheduled item and advance the cursor state
    fn take_next(&mut self, wait_limit: usize) -> Option<T> {
        let level = self.first_schedulable()?;
        if level != self.cursor {
            // The cursor actually moved; the new level starts a fresh visit
            self.cursor = level;
            self.served = 0;
        }
        let value = self.levels[level].pop_front();
        self.served += 1;
        if self.served >= wait_limit || self.levels[level].is_empty() {
            self.cursor = self.next_after(level);
            self.served = 0;
        }
        value
    }

    fn total_len(&self) -> usize {
        self.levels.iter().map(VecDeque::len).sum()
    }
}

/// Fairness-scheduled multi-level blocking priority queue
///
/// Producers tag each item with a level; consumers either pull by exact
/// level or let the round-robin scheduler pick. One exclusive lock per
/// instance makes every operation atomic with respect to every other; only
/// [`remove_wait`](Self::remove_wait) blocks.
///
/// # Example
/// ```
/// use fairq::FairPriorityQueue;
///
/// let q: FairPriorityQueue<&str> = FairPriorityQueue::with_wait_limit(2, 1)?;
/// q.add("low", 1)?;
/// q.add("high", 2)?;
///
/// // wait_limit 1 alternates between non-empty levels, highest first
/// assert_eq!(q.remove(), Some("high"));
/// assert_eq!(q.remove(), Some("low"));
/// # Ok::<(), fairq::Error>(())
/// ```
pub struct FairPriorityQueue<T> {
    sched: Mutex<Sched<T>>,
    not_empty: Condvar,
    num_levels: usize,
    wait_limit: usize,
}

impl<T> FairPriorityQueue<T> {
    /// Create a queue with `num_levels` fairness levels and quantum `wait_limit`
    ///
    /// The bypass level `0` always exists on top of the fairness levels. The
    /// cursor starts at the highest fairness level. Fails fast when either
    /// parameter is zero.
    pub fn with_wait_limit(num_levels: usize, wait_limit: usize) -> crate::Result<Self> {
        Self::with_config(&QueueConfig::new(num_levels, wait_limit))
    }

    /// Create a queue from a validated [`QueueConfig`]
    pub fn with_config(config: &QueueConfig) -> crate::Result<Self> {
        config.validate()?;

        let levels: Vec<VecDeque<T>> = (0..=config.num_levels).map(|_| VecDeque::new()).collect();

        Ok(Self {
            sched: Mutex::new(Sched {
                levels,
                cursor: config.num_levels,
                served: 0,
                closed: false,
            }),
            not_empty: Condvar::new(),
            num_levels: config.num_levels,
            wait_limit: config.wait_limit,
        })
    }

    /// Number of fairness levels
    #[inline]
    pub fn num_levels(&self) -> usize {
        self.num_levels
    }

    /// Wait limit (quantum) fixed at construction
    #[inline]
    pub fn wait_limit(&self) -> usize {
        self.wait_limit
    }

    fn check_level(&self, level: usize) -> crate::Result<()> {
        if level > self.num_levels {
            return Err(crate::Error::LevelOutOfRange {
                level,
                max: self.num_levels,
            });
        }
        Ok(())
    }

    /// Append a value to the tail of the given level
    ///
    /// `level` must be in `[0, num_levels]`; anything else is a programmer
    /// error and fails fast rather than being clamped. An item landing on a
    /// fairness level wakes one blocked waiter; a bypass-level item wakes
    /// nobody, since generic scheduling can never reach it.
    pub fn add(&self, value: T, level: usize) -> crate::Result<()> {
        self.check_level(level)?;
        let mut sched = self.sched.lock();
        sched.levels[level].push_back(value);
        if level >= 1 {
            self.not_empty.notify_one();
        }
        Ok(())
    }

    /// Pop the head of the exact named level, bypassing the scheduler
    ///
    /// Valid for every level including the bypass level `0`. Never touches
    /// the cursor or the quantum counter. Returns `Ok(None)` when the level
    /// is empty.
    pub fn remove_level(&self, level: usize) -> crate::Result<Option<T>> {
        self.check_level(level)?;
        Ok(self.sched.lock().levels[level].pop_front())
    }

    /// Pop the next item chosen by the fairness scheduler, without blocking
    ///
    /// Returns `None` when every fairness level is empty, even if the bypass
    /// level holds items: level `0` is reachable only through
    /// [`remove_level`](Self::remove_level).
    pub fn remove(&self) -> Option<T> {
        self.sched.lock().take_next(self.wait_limit)
    }

    /// Pop the next fairness-scheduled item, blocking until one is available
    ///
    /// Parks the calling thread while no fairness level holds an item and
    /// the queue is open. Returns `None` only after [`close`](Self::close).
    /// A bypass-level item never satisfies the wait.
    pub fn remove_wait(&self) -> Option<T> {
        let mut sched = self.sched.lock();
        loop {
            if let Some(value) = sched.take_next(self.wait_limit) {
                return Some(value);
            }
            if sched.closed {
                return None;
            }
            self.not_empty.wait(&mut sched);
        }
    }

    /// Total element count across all levels, bypass included
    pub fn len(&self) -> usize {
        self.sched.lock().total_len()
    }

    /// Check if every level is empty
    pub fn is_empty(&self) -> bool {
        self.sched.lock().levels.iter().all(VecDeque::is_empty)
    }

    /// Atomically discard all elements from every level
    ///
    /// Cursor, quantum counter and closed state are untouched.
    pub fn clear(&self) {
        let mut sched = self.sched.lock();
        let dropped = sched.total_len();
        for level in sched.levels.iter_mut() {
            level.clear();
        }
        log::trace!("priority queue cleared, dropped {dropped} items");
    }

    /// Close the queue
    ///
    /// One-shot and idempotent. Releases every thread blocked in
    /// [`remove_wait`](Self::remove_wait) with `None`, and disables all
    /// future blocking. No data is discarded; remaining items can still be
    /// drained through the non-blocking operations.
    pub fn close(&self) {
        let mut sched = self.sched.lock();
        if sched.closed {
            return;
        }
        sched.closed = true;
        log::debug!("priority queue closed with {} items pending", sched.total_len());
        self.not_empty.notify_all();
    }

    /// Check if the queue has been closed
    pub fn is_closed(&self) -> bool {
        self.sched.lock().closed
    }
}

impl<T: Clone> FairPriorityQueue<T> {
    /// Look at the head of the exact named level without removing it
    ///
    /// Cursor-neutral, like [`remove_level`](Self::remove_level).
    pub fn peek_level(&self, level: usize) -> crate::Result<Option<T>> {
        self.check_level(level)?;
        Ok(self.sched.lock().levels[level].front().cloned())
    }

    /// Look at the item the fairness scheduler would serve next
    ///
    /// Non-mutating: the cursor and quantum counter stay exactly where they
    /// are, so a peek never perturbs fairness.
    pub fn peek(&self) -> Option<T> {
        let sched = self.sched.lock();
        let level = sched.first_schedulable()?;
        sched.levels[level].front().cloned()
    }
}

static_assertions::assert_impl_all!(FairPriorityQueue<i64>: Send, Sync);

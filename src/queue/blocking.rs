//! Unbounded blocking FIFO queue
//!
//! A mutex-protected queue for handing work items between threads. Consumers
//! can pop without blocking, or park on a condvar until an item arrives or
//! the queue is closed.

use parking_lot::{Condvar, Mutex};
use std::collections::VecDeque;

struct Inner<T> {
    items: VecDeque<T>,
    closed: bool,
}

/// Unbounded blocking FIFO queue
///
/// Every operation takes a single exclusive lock, so operations on one
/// instance are totally ordered. Only [`remove_wait`](Self::remove_wait)
/// blocks; everything else returns immediately.
///
/// # Example
/// ```
/// use fairq::BlockingQueue;
///
/// let queue = BlockingQueue::new();
/// queue.add(42);
/// assert_eq!(queue.remove(), Some(42));
/// assert_eq!(queue.remove(), None);
/// ```
pub struct BlockingQueue<T> {
    inner: Mutex<Inner<T>>,
    not_empty: Condvar,
}

impl<T> BlockingQueue<T> {
    /// Create a new empty, open queue
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                items: VecDeque::new(),
                closed: false,
            }),
            not_empty: Condvar::new(),
        }
    }

    /// Append a value to the tail of the queue
    ///
    /// Never fails and never blocks (the queue is unbounded). Wakes one
    /// waiter parked in [`remove_wait`](Self::remove_wait), if any.
    pub fn add(&self, value: T) {
        let mut inner = self.inner.lock();
        inner.items.push_back(value);
        self.not_empty.notify_one();
    }

    /// Pop the head of the queue without blocking
    ///
    /// Returns `None` when the queue is empty.
    #[inline]
    pub fn remove(&self) -> Option<T> {
        self.inner.lock().items.pop_front()
    }

    /// Pop the head of the queue, blocking until one is available
    ///
    /// Parks the calling thread while the queue is empty and open. Returns
    /// `None` only after [`close`](Self::close); items added before or after
    /// closing are still returned. Spurious wakeups re-check the predicate,
    /// so a woken thread never returns empty-handed while open.
    pub fn remove_wait(&self) -> Option<T> {
        let mut inner = self.inner.lock();
        loop {
            if let Some(value) = inner.items.pop_front() {
                return Some(value);
            }
            if inner.closed {
                return None;
            }
            self.not_empty.wait(&mut inner);
        }
    }

    /// Current element count
    ///
    /// Under concurrent mutation this is some valid count observed during
    /// the call, nothing more.
    pub fn len(&self) -> usize {
        self.inner.lock().items.len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.inner.lock().items.is_empty()
    }

    /// Atomically discard all elements
    ///
    /// Does not affect the closed state and does not wake anyone.
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        let dropped = inner.items.len();
        inner.items.clear();
        log::trace!("blocking queue cleared, dropped {dropped} items");
    }

    /// Close the queue
    ///
    /// One-shot and idempotent. Releases every thread blocked in
    /// [`remove_wait`](Self::remove_wait), each receiving `None`. No data is
    /// discarded: remaining items can still be drained with
    /// [`remove`](Self::remove), and `add` keeps working, it just never
    /// blocks anyone again.
    pub fn close(&self) {
        let mut inner = self.inner.lock();
        if inner.closed {
            return;
        }
        inner.closed = true;
        log::debug!("blocking queue closed with {} items pending", inner.items.len());
        self.not_empty.notify_all();
    }

    /// Check if the queue has been closed
    pub fn is_closed(&self) -> bool {
        self.inner.lock().closed
    }
}

impl<T> Default for BlockingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(BlockingQueue<i64>: Send, Sync);

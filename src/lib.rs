//! # fairq
//!
//! Blocking and fairness-scheduled work queues for in-process pipelines.
//!
//! ## Features
//!
//! - Unbounded blocking FIFO queue with graceful shutdown
//! - Multi-level priority queue with round-robin fairness scheduling
//! - Bypass level for out-of-band items, reachable only by explicit level
//! - Condvar-based blocking (no polling, no busy-wait)
//! - Small stateless helpers (stopwatch, bit flags, string parsing)
//!
//! ## Quick Start
//!
//! ```
//! use fairq::*;
//!
//! let q: FairPriorityQueue<u32> = FairPriorityQueue::with_wait_limit(2, 1)?;
//! q.add(7, 2)?;
//! q.add(9, 1)?;
//! assert_eq!(q.remove(), Some(7));
//! assert_eq!(q.remove(), Some(9));
//! # Ok::<(), fairq::Error>(())
//! ```

pub mod queue;
pub mod util;

// Re-exports
pub use queue::{BlockingQueue, FairPriorityQueue, QueueConfig};
pub use util::{BitMask, StopWatch, clip, copy_file, gaussian, lrint, two_dim_split};

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Level {level} out of range [0, {max}]")]
    LevelOutOfRange { level: usize, max: usize },

    #[error("Unknown flag name: {0}")]
    UnknownFlag(String),

    #[error("Flag registry full: cannot add {0}")]
    RegistryFull(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

//! Blocking work queues

mod blocking;
mod config;
mod priority;

pub use blocking::BlockingQueue;
pub use config::QueueConfig;
pub use priority::FairPriorityQueue;

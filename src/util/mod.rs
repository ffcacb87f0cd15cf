//! Utility functions and helpers

mod bitmask;
mod fs;
mod math;
mod split;
mod stopwatch;

pub use bitmask::BitMask;
pub use fs::copy_file;
pub use math::{clip, gaussian, lrint};
pub use split::two_dim_split;
pub use stopwatch::StopWatch;

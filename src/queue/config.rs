use serde::{Deserialize, Serialize};

/// Fair priority queue configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Number of fairness levels (numbered `1..=num_levels`)
    ///
    /// The bypass level `0` always exists on top of these.
    pub num_levels: usize,

    /// Wait limit (quantum)
    ///
    /// Max consecutive items served from one fairness level before the
    /// scheduler rotates to the next.
    pub wait_limit: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            num_levels: 4,
            wait_limit: 1,
        }
    }
}

impl QueueConfig {
    /// Create a configuration from explicit parameters
    pub fn new(num_levels: usize, wait_limit: usize) -> Self {
        Self {
            num_levels,
            wait_limit,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> crate::Result<()> {
        if self.num_levels < 1 {
            return Err(crate::Error::Config(
                "Number of fairness levels must be at least 1".to_string(),
            ));
        }

        if self.wait_limit < 1 {
            return Err(crate::Error::Config(
                "Wait limit must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

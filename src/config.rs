//! Configuration for partitioning.
//!
//! [`PartitionConfig`] carries every knob the partitioner reads. It is passed
//! explicitly to each call; there is no global threshold.
//!
//! # Example
//!
//! ```rust
//! use convsplit::config::PartitionConfig;
//!
//! let config = PartitionConfig::new()
//!     .with_max_days(14.0)
//!     .with_strict(true)
//!     .with_jobs(4);
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.effective_jobs(), 4);
//! ```

use std::num::NonZeroUsize;
use std::thread;

use serde::{Deserialize, Serialize};

use crate::error::{ConvsplitError, Result};

/// Default gap threshold in days.
pub const DEFAULT_MAX_DAYS: f64 = 7.0;

/// Settings for splitting conversations at time gaps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionConfig {
    /// Maximum gap between consecutive messages, in days, before a
    /// conversation is split (default: 7). Fractional values are allowed.
    pub max_days: f64,

    /// Check that `openai_messages` really was derived from
    /// `full_metadata_messages` before splitting, and fail on mismatch
    /// (default: false).
    pub strict: bool,

    /// Number of worker threads for dataset-level partitioning (default: 1).
    ///
    /// `0` uses the available parallelism of the machine.
    pub jobs: usize,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            max_days: DEFAULT_MAX_DAYS,
            strict: false,
            jobs: 1,
        }
    }
}

impl PartitionConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the gap threshold in days.
    #[must_use]
    pub fn with_max_days(mut self, max_days: f64) -> Self {
        self.max_days = max_days;
        self
    }

    /// Enables or disables correspondence validation.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sets the number of worker threads.
    #[must_use]
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    /// Checks that the threshold is a positive, finite number.
    pub fn validate(&self) -> Result<()> {
        if self.max_days.is_finite() && self.max_days > 0.0 {
            Ok(())
        } else {
            Err(ConvsplitError::invalid_threshold(self.max_days))
        }
    }

    /// Resolves `jobs`, mapping `0` to the machine's parallelism.
    pub fn effective_jobs(&self) -> usize {
        match self.jobs {
            0 => thread::available_parallelism().map_or(1, NonZeroUsize::get),
            n => n,
        }
    }
}

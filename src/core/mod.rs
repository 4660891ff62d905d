//! Core processing logic for convsplit.
//!
//! This module contains:
//! - [`models`] - The [`Conversation`] record
//! - [`timestamp`] - ISO-8601 parsing and day arithmetic
//! - [`gaps`] - Finding split points between messages
//! - [`correspondence`] - The full-metadata to content-only index map
//! - [`partition`] - Splitting one conversation into fragments
//! - [`processor`] - Partitioning whole datasets, with statistics
//! - [`input`] / [`output`] - Reading and writing JSON datasets
//!
//! # Quick Start
//!
//! ```rust
//! use convsplit::core::{
//!     Conversation, PartitionStats,
//!     partition_conversation, partition_dataset,
//!     parse_dataset, to_json,
//! };
//! ```

pub mod correspondence;
pub mod gaps;
pub mod input;
pub mod models;
pub mod output;
pub mod partition;
pub mod processor;
pub mod timestamp;

// Re-export main types for convenience
pub use correspondence::ContentIndex;
pub use gaps::find_split_points;
pub use input::{parse_dataset, read_dataset};
pub use models::Conversation;
pub use output::{to_json, write_dataset};
pub use partition::partition_conversation;
pub use processor::{PartitionOutcome, PartitionStats, RecordSplit, partition_dataset};

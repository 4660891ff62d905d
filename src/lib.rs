//! # Convsplit
//!
//! A Rust library for splitting personal chat conversation datasets into
//! separate conversations wherever the chat went quiet for too long.
//!
//! ## Overview
//!
//! A dataset is a JSON array of conversation records. Each record keeps two
//! parallel views of its messages:
//!
//! - **`full_metadata_messages`** - every message, with timestamps and
//!   possibly-empty content
//! - **`openai_messages`** - only the messages with text, in OpenAI chat
//!   format, ready for model training
//!
//! Convsplit cuts a record wherever two consecutive messages are more than a
//! threshold apart (7 days by default), slicing both views along the same
//! boundaries and recomputing each fragment's timestamps and message count.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use convsplit::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let conversations = read_dataset("all_conversations.json")?;
//!
//!     let config = PartitionConfig::new().with_max_days(14.0);
//!     let outcome = partition_dataset(conversations, &config)?;
//!
//!     println!(
//!         "{} conversations became {}",
//!         outcome.stats.original_count, outcome.stats.fragment_count
//!     );
//!     write_dataset(&outcome.conversations, "partitioned.json", true)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`core`] - Core types and functionality
//!   - [`core::models`] - [`Conversation`]
//!   - [`core::gaps`] - [`find_split_points`](core::find_split_points)
//!   - [`core::correspondence`] - [`ContentIndex`](core::ContentIndex)
//!   - [`core::partition`] - [`partition_conversation`]
//!   - [`core::processor`] - [`partition_dataset`], [`PartitionStats`](core::PartitionStats)
//!   - [`core::input`], [`core::output`] - JSON dataset files
//! - [`message`] - [`Message`], [`ContentMessage`](message::ContentMessage)
//! - [`config`] - [`PartitionConfig`](config::PartitionConfig)
//! - [`cli`] - CLI arguments (requires the `cli` feature)
//! - [`error`] - Unified error types ([`ConvsplitError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod message;

// Re-export the main types at the crate root for convenience
pub use crate::core::{
    Conversation, parse_dataset, partition_conversation, partition_dataset, read_dataset,
};
pub use error::{ConvsplitError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use convsplit::prelude::*;
/// ```
pub mod prelude {
    // Records and messages
    pub use crate::core::models::Conversation;
    pub use crate::message::{ContentMessage, Message};

    // Error types
    pub use crate::error::{ConvsplitError, Result};

    // Configuration
    pub use crate::config::{DEFAULT_MAX_DAYS, PartitionConfig};

    // Partitioning
    pub use crate::core::correspondence::ContentIndex;
    pub use crate::core::gaps::find_split_points;
    pub use crate::core::partition::partition_conversation;
    pub use crate::core::processor::{
        PartitionOutcome, PartitionStats, RecordSplit, partition_dataset,
    };

    // Dataset files
    pub use crate::core::input::{parse_dataset, read_dataset};
    pub use crate::core::output::{to_json, write_dataset};
}

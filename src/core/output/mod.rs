//! Writing conversation datasets.
//!
//! - [`write_dataset`] / [`to_json`] - JSON array of conversation records,
//!   pretty-printed with 2-space indentation or compact
//!
//! Non-ASCII text is written as UTF-8, never `\u` escaped.
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> convsplit::Result<()> {
//! use convsplit::core::output::{to_json, write_dataset};
//! use convsplit::Conversation;
//!
//! let records = vec![Conversation::default()];
//!
//! write_dataset(&records, "data/partitioned.json", true)?;
//! let compact = to_json(&records, false)?;
//! # Ok(())
//! # }
//! ```

mod json_writer;

pub use json_writer::{to_json, write_dataset};

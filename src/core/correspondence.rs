//! Mapping between the full-metadata and content-only message views.
//!
//! `openai_messages` is derived from `full_metadata_messages` by dropping
//! every message whose trimmed content is empty. Nothing in the record
//! stores which content message came from which full message, so
//! [`ContentIndex`] rebuilds that link from the same rule:
//!
//! ```text
//! full_metadata_messages:  [ "hi" ,  ""  , "ok" , " " , "bye" ]
//! ContentIndex:            [ 0    , None , 1    , None, 2     ]
//! openai_messages:         [ "hi" , "ok" , "bye" ]
//! ```

use std::ops::Range;

use crate::error::{ConvsplitError, Result};
use crate::message::{ContentMessage, Message};

/// Per-position map from `full_metadata_messages` to `openai_messages`.
///
/// The mapped values, read in order, are exactly `0..content_count()`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentIndex {
    slots: Vec<Option<usize>>,
    content_count: usize,
}

impl ContentIndex {
    /// Builds the map by walking `messages` in order.
    pub fn build(messages: &[Message]) -> Self {
        let mut next = 0;
        let slots = messages
            .iter()
            .map(|msg| {
                msg.has_content().then(|| {
                    let idx = next;
                    next += 1;
                    idx
                })
            })
            .collect();

        Self {
            slots,
            content_count: next,
        }
    }

    /// Returns the `openai_messages` index for full message `position`, or
    /// `None` if that message has no content (or is out of range).
    pub fn get(&self, position: usize) -> Option<usize> {
        self.slots.get(position).copied().flatten()
    }

    /// Number of full-metadata messages covered.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of messages that have a content counterpart.
    pub fn content_count(&self) -> usize {
        self.content_count
    }

    /// Content indices for the full messages in `range`, in order.
    ///
    /// The range is clamped to the messages covered, so positions past the
    /// end contribute nothing.
    pub fn content_indices(&self, range: Range<usize>) -> impl Iterator<Item = usize> + '_ {
        let end = range.end.min(self.slots.len());
        let start = range.start.min(end);
        self.slots[start..end].iter().filter_map(|slot| *slot)
    }

    /// Collects the content messages whose source lies in `range`.
    ///
    /// # Errors
    ///
    /// Returns [`ConvsplitError::Correspondence`] if a mapped index points
    /// past the end of `openai_messages`.
    pub fn slice(
        &self,
        range: Range<usize>,
        openai_messages: &[ContentMessage],
    ) -> Result<Vec<ContentMessage>> {
        self.content_indices(range)
            .map(|idx| {
                openai_messages.get(idx).cloned().ok_or_else(|| {
                    ConvsplitError::correspondence(format!(
                        "{} messages have content but only {} content messages exist",
                        self.content_count,
                        openai_messages.len()
                    ))
                })
            })
            .collect()
    }

    /// Checks that `openai_messages` matches this map one-to-one.
    ///
    /// The counts must agree and each paired message must carry the same
    /// trimmed text.
    pub fn validate(&self, messages: &[Message], openai_messages: &[ContentMessage]) -> Result<()> {
        if self.content_count != openai_messages.len() {
            return Err(ConvsplitError::correspondence(format!(
                "{} messages have content but {} content messages exist",
                self.content_count,
                openai_messages.len()
            )));
        }

        for (position, msg) in messages.iter().enumerate() {
            let Some(idx) = self.get(position) else {
                continue;
            };
            if msg.content().trim() != openai_messages[idx].content.trim() {
                return Err(ConvsplitError::correspondence(format!(
                    "message {position} does not match content message {idx}"
                )));
            }
        }

        Ok(())
    }
}

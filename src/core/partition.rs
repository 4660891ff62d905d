//! Splitting a single conversation at long time gaps.
//!
//! # Algorithm
//!
//! 1. Find split points in `full_metadata_messages` ([`find_split_points`]).
//! 2. With no split points, return a copy of the record unchanged.
//! 3. Otherwise build a [`ContentIndex`] once and cut both message views
//!    along the same boundaries, re-deriving the timestamp range and message
//!    count of every fragment.
//!
//! Concatenating the fragments' `full_metadata_messages` (and likewise their
//! `openai_messages`) in order gives back the original sequences.

use std::ops::Range;

use tracing::{debug, warn};

use crate::config::PartitionConfig;
use crate::core::correspondence::ContentIndex;
use crate::core::gaps::find_split_points;
use crate::core::models::{Conversation, timestamp_range};
use crate::error::Result;

/// Splits `conversation` wherever consecutive messages are more than
/// `config.max_days` apart.
///
/// Always returns at least one record. When nothing is split, the single
/// record is an owned copy of the input, extra keys included. Fragments of a
/// split record carry only the documented conversation keys.
///
/// # Errors
///
/// - [`InvalidTimestamp`](crate::ConvsplitError::InvalidTimestamp) for a
///   timestamp that is not ISO-8601
/// - [`Correspondence`](crate::ConvsplitError::Correspondence) when
///   `openai_messages` cannot have been derived from
///   `full_metadata_messages` (always checked for running past the end,
///   fully checked with `config.strict`)
///
/// The threshold itself is not validated here; see
/// [`PartitionConfig::validate`].
///
/// # Example
///
/// ```
/// use convsplit::config::PartitionConfig;
/// use convsplit::core::partition::partition_conversation;
/// use convsplit::message::{ContentMessage, Message};
/// use convsplit::Conversation;
///
/// let conv = Conversation::new(
///     vec![
///         Message::new("hey").with_timestamp("2024-01-01T00:00:00Z"),
///         Message::new("").with_timestamp("2024-01-03T00:00:00Z"),
///         Message::new("long time").with_timestamp("2024-01-20T00:00:00Z"),
///     ],
///     vec![ContentMessage::user("hey"), ContentMessage::assistant("long time")],
/// );
///
/// let fragments = partition_conversation(&conv, &PartitionConfig::new())?;
/// assert_eq!(fragments.len(), 2);
/// assert_eq!(fragments[0].total_messages, Some(2.into()));
/// assert_eq!(fragments[1].openai_messages[0].content, "long time");
/// # Ok::<(), convsplit::ConvsplitError>(())
/// ```
pub fn partition_conversation(
    conversation: &Conversation,
    config: &PartitionConfig,
) -> Result<Vec<Conversation>> {
    let messages = &conversation.full_metadata_messages;

    if config.strict {
        ContentIndex::build(messages).validate(messages, &conversation.openai_messages)?;
    }

    let split_points = find_split_points(messages, config.max_days)?;
    if split_points.is_empty() {
        return Ok(vec![conversation.clone()]);
    }

    debug!(?split_points, messages = messages.len(), "splitting conversation");

    let index = ContentIndex::build(messages);
    if index.content_count() > 0 && conversation.openai_messages.is_empty() {
        warn!(
            content_count = index.content_count(),
            "conversation has content but no openai_messages"
        );
    }

    ranges(&split_points, messages.len())
        .map(|range| fragment(conversation, &index, range))
        .collect()
}

/// Turns split points into contiguous half-open ranges covering `0..len`.
fn ranges(split_points: &[usize], len: usize) -> impl Iterator<Item = Range<usize>> + '_ {
    let ends = split_points.iter().copied().chain(std::iter::once(len));
    let starts = std::iter::once(0).chain(split_points.iter().copied());
    starts.zip(ends).map(|(start, end)| start..end)
}

fn fragment(
    conversation: &Conversation,
    index: &ContentIndex,
    range: Range<usize>,
) -> Result<Conversation> {
    let full_metadata_messages = conversation.full_metadata_messages[range.clone()].to_vec();
    let openai_messages = index.slice(range, &conversation.openai_messages)?;
    let (first, last) = timestamp_range(&full_metadata_messages);

    Ok(Conversation {
        openai_messages,
        first_message_timestamp: first,
        last_message_timestamp: last,
        recipients: conversation.recipients.clone(),
        num_participants: conversation.num_participants.clone(),
        total_messages: Some(full_metadata_messages.len().into()),
        source: conversation.source.clone(),
        chat_type: conversation.chat_type.clone(),
        full_metadata_messages,
        extra: serde_json::Map::new(),
    })
}

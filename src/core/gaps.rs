//! Gap detection between consecutive messages.

use chrono::{DateTime, Utc};

use crate::core::timestamp::{days_between, parse_timestamp};
use crate::error::{ConvsplitError, Result};
use crate::message::Message;

/// Finds the indices at which a conversation should be split.
///
/// Each returned index `i` means "a new fragment starts at message `i`":
/// the gap between messages `i - 1` and `i` is strictly greater than
/// `max_days`. Indices are strictly increasing and lie in `1..len`.
///
/// Pairs where either message has no timestamp are skipped without looking
/// at the other side. Zero and negative gaps (out-of-order messages) never
/// split.
///
/// # Errors
///
/// Returns [`ConvsplitError::InvalidTimestamp`] if a pair of timestamped
/// messages has a timestamp that is not ISO-8601.
///
/// # Example
///
/// ```
/// use convsplit::core::gaps::find_split_points;
/// use convsplit::message::Message;
///
/// let messages = vec![
///     Message::new("a").with_timestamp("2024-01-01T00:00:00Z"),
///     Message::new("b").with_timestamp("2024-01-03T00:00:00Z"),
///     Message::new("c").with_timestamp("2024-01-20T00:00:00Z"),
/// ];
/// assert_eq!(find_split_points(&messages, 7.0)?, vec![2]);
/// # Ok::<(), convsplit::ConvsplitError>(())
/// ```
pub fn find_split_points(messages: &[Message], max_days: f64) -> Result<Vec<usize>> {
    if messages.len() < 2 {
        return Ok(Vec::new());
    }

    let mut split_points = Vec::new();
    // Parsed time of message `i`, carried over from the previous pair.
    let mut carried: Option<DateTime<Utc>> = None;

    for (i, pair) in messages.windows(2).enumerate() {
        let (Some(current_raw), Some(next_raw)) = (pair[0].timestamp(), pair[1].timestamp()) else {
            carried = None;
            continue;
        };

        let current = match carried.take() {
            Some(time) => time,
            None => parse_at(current_raw, i)?,
        };
        let next = parse_at(next_raw, i + 1)?;

        if days_between(current, next) > max_days {
            split_points.push(i + 1);
        }
        carried = Some(next);
    }

    Ok(split_points)
}

fn parse_at(raw: &str, position: usize) -> Result<DateTime<Utc>> {
    parse_timestamp(raw).ok_or_else(|| ConvsplitError::invalid_timestamp(raw, position))
}

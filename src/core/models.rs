//! The conversation record: the unit of input and output.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::PartitionConfig;
use crate::error::Result;
use crate::message::{ContentMessage, Message, null_as_default};

/// One conversation of the dataset.
///
/// Field names are the dataset's JSON keys and must not change; the loader,
/// filter and merge tools all read them.
///
/// Every field is optional on input. Missing sequences become empty, missing
/// scalars become `None` and are written back as `null`. Participant data
/// and labels are raw JSON values, copied as they are.
///
/// ```
/// use convsplit::Conversation;
///
/// let conv: Conversation = serde_json::from_str(r#"{"source": "discord", "recipients": null}"#)?;
/// assert!(conv.full_metadata_messages.is_empty());
/// assert!(conv.recipients.is_empty());
/// assert_eq!(conv.source, Some("discord".into()));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Conversation {
    /// Content-only view: messages with non-empty text, in OpenAI format.
    #[serde(default)]
    pub openai_messages: Vec<ContentMessage>,

    /// Every message, with timestamps and possibly-empty content.
    #[serde(default)]
    pub full_metadata_messages: Vec<Message>,

    /// Timestamp of the first timestamped message.
    #[serde(default)]
    pub first_message_timestamp: Option<String>,

    /// Timestamp of the last timestamped message.
    #[serde(default)]
    pub last_message_timestamp: Option<String>,

    /// Other participants of the conversation. `null` reads as empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub recipients: Vec<Value>,

    /// Participant count reported by the exporter.
    #[serde(default)]
    pub num_participants: Option<Value>,

    /// Number of entries in `full_metadata_messages`.
    #[serde(default)]
    pub total_messages: Option<Value>,

    /// Platform the conversation was exported from (e.g. `imessage`).
    #[serde(default)]
    pub source: Option<Value>,

    /// `direct` or `group`, as labelled by the exporter.
    #[serde(default)]
    pub chat_type: Option<Value>,

    /// Any other top-level keys, kept for records that are not split.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Conversation {
    /// Builds a record from its two message views, deriving the timestamp
    /// range and message count.
    pub fn new(full_metadata_messages: Vec<Message>, openai_messages: Vec<ContentMessage>) -> Self {
        let (first, last) = timestamp_range(&full_metadata_messages);
        Self {
            total_messages: Some(full_metadata_messages.len().into()),
            first_message_timestamp: first,
            last_message_timestamp: last,
            openai_messages,
            full_metadata_messages,
            ..Self::default()
        }
    }

    /// Builder method to set the recipients.
    #[must_use]
    pub fn with_recipients<I, S>(mut self, recipients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recipients = recipients
            .into_iter()
            .map(|r| Value::String(r.into()))
            .collect();
        self
    }

    /// Builder method to set the participant count.
    #[must_use]
    pub fn with_num_participants(mut self, n: u64) -> Self {
        self.num_participants = Some(n.into());
        self
    }

    /// Builder method to set the source platform.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(Value::String(source.into()));
        self
    }

    /// Builder method to set the chat type.
    #[must_use]
    pub fn with_chat_type(mut self, chat_type: impl Into<String>) -> Self {
        self.chat_type = Some(Value::String(chat_type.into()));
        self
    }

    /// Number of messages in the full-metadata view.
    pub fn len(&self) -> usize {
        self.full_metadata_messages.len()
    }

    /// Returns `true` if the record has no messages at all.
    pub fn is_empty(&self) -> bool {
        self.full_metadata_messages.is_empty()
    }

    /// Splits this record at gaps longer than `max_days`, using defaults for
    /// every other setting.
    ///
    /// ```
    /// use convsplit::Conversation;
    /// use convsplit::message::Message;
    ///
    /// let conv = Conversation::new(
    ///     vec![
    ///         Message::new("").with_timestamp("2024-01-01T00:00:00Z"),
    ///         Message::new("").with_timestamp("2024-03-01T00:00:00Z"),
    ///     ],
    ///     vec![],
    /// );
    /// assert_eq!(conv.partition(7.0)?.len(), 2);
    /// # Ok::<(), convsplit::ConvsplitError>(())
    /// ```
    pub fn partition(&self, max_days: f64) -> Result<Vec<Conversation>> {
        let config = PartitionConfig::new().with_max_days(max_days);
        config.validate()?;
        crate::core::partition::partition_conversation(self, &config)
    }
}

/// Returns the first and last non-empty timestamps among `messages`.
pub(crate) fn timestamp_range(messages: &[Message]) -> (Option<String>, Option<String>) {
    let mut stamped = messages.iter().filter_map(Message::timestamp);
    let first = stamped.next();
    let last = stamped.next_back().or(first);
    (first.map(str::to_owned), last.map(str::to_owned))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_derives_summary_fields() {
        let conv = Conversation::new(
            vec![
                Message::new("").with_field("kind", "call"),
                Message::new("hi").with_timestamp("2024-01-01T00:00:00Z"),
                Message::new("yo").with_timestamp("2024-01-02T00:00:00Z"),
                Message::new(""),
            ],
            vec![ContentMessage::user("hi"), ContentMessage::assistant("yo")],
        );
        assert_eq!(conv.total_messages, Some(json!(4)));
        assert_eq!(
            conv.first_message_timestamp.as_deref(),
            Some("2024-01-01T00:00:00Z")
        );
        assert_eq!(
            conv.last_message_timestamp.as_deref(),
            Some("2024-01-02T00:00:00Z")
        );
    }

    #[test]
    fn test_timestamp_range_single_and_none() {
        let one = [Message::new("a").with_timestamp("2024-01-01T00:00:00Z")];
        let (first, last) = timestamp_range(&one);
        assert_eq!(first, last);
        assert!(first.is_some());

        let none = [Message::new("a"), Message::new("b").with_timestamp("")];
        assert_eq!(timestamp_range(&none), (None, None));
    }

    #[test]
    fn test_missing_fields_default() {
        let conv: Conversation = serde_json::from_str("{}").unwrap();
        assert!(conv.is_empty());
        assert!(conv.recipients.is_empty());
        assert!(conv.num_participants.is_none());
        assert!(conv.total_messages.is_none());
    }

    #[test]
    fn test_serialization_writes_all_keys() {
        let value = serde_json::to_value(Conversation::default()).unwrap();
        for key in [
            "openai_messages",
            "full_metadata_messages",
            "first_message_timestamp",
            "last_message_timestamp",
            "recipients",
            "num_participants",
            "total_messages",
            "source",
            "chat_type",
        ] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
        assert!(value["source"].is_null());
    }

    #[test]
    fn test_unknown_keys_round_trip() {
        let json = r#"{"source":"imessage","conversation_id":"abc","tags":["x"]}"#;
        let conv: Conversation = serde_json::from_str(json).unwrap();
        assert_eq!(conv.extra["conversation_id"], "abc");
        let back = serde_json::to_value(&conv).unwrap();
        assert_eq!(back["tags"][0], "x");
    }

    #[test]
    fn test_null_recipients_read_as_empty() {
        let conv: Conversation = serde_json::from_str(r#"{"recipients": null}"#).unwrap();
        assert!(conv.recipients.is_empty());
    }

    #[test]
    fn test_off_type_fields_copied_verbatim() {
        let json = r#"{
            "recipients": ["bob", {"name": "carol"}, 7],
            "num_participants": 2.0,
            "total_messages": "many",
            "source": 1,
            "chat_type": ["group"]
        }"#;
        let conv: Conversation = serde_json::from_str(json).unwrap();
        assert_eq!(conv.recipients[1], json!({"name": "carol"}));
        assert_eq!(conv.num_participants, Some(json!(2.0)));

        let back = serde_json::to_value(&conv).unwrap();
        assert_eq!(back["num_participants"], json!(2.0));
        assert_eq!(back["total_messages"], "many");
        assert_eq!(back["source"], 1);
        assert_eq!(back["chat_type"], json!(["group"]));
    }

    #[test]
    fn test_unknown_keys_keep_input_order() {
        let json = r#"{"zeta":1,"alpha":2}"#;
        let conv: Conversation = serde_json::from_str(json).unwrap();
        let keys: Vec<_> = conv.extra.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }
}

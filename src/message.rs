//! Message types for the two parallel views of a conversation.
//!
//! A conversation record stores every message twice:
//!
//! - [`Message`] is the **full-metadata** view. It keeps every message,
//!   including ones with empty content (attachments, reactions, calls), along
//!   with its timestamp and any other metadata the exporter produced.
//! - [`ContentMessage`] is the **content-only** view, in the OpenAI chat
//!   schema (`role` + `content`). Only messages with non-empty text appear
//!   here.
//!
//! Unknown keys on either type are preserved in a flattened `extra` map, so
//! metadata such as `sender` or `attachments` survives a round-trip.
//!
//! # Examples
//!
//! ```
//! use convsplit::message::{ContentMessage, Message};
//!
//! let msg = Message::new("see you soon")
//!     .with_timestamp("2024-01-01T09:30:00Z")
//!     .with_field("sender", "alice");
//! assert!(msg.has_content());
//! assert_eq!(msg.timestamp(), Some("2024-01-01T09:30:00Z"));
//!
//! let reply = ContentMessage::assistant("see you soon");
//! assert_eq!(reply.role, "assistant");
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A message in the full-metadata view of a conversation.
///
/// # Serialization
///
/// Messages are written back exactly as they were read:
///
/// - `timestamp` and `content` keep their raw JSON value. `None` means the
///   key was absent, `Some(Value::Null)` means it was present but `null`.
/// - Every other key lands in [`extra`](Self::extra), in input order.
///
/// Use [`timestamp()`](Self::timestamp) and [`content()`](Self::content) to
/// read them as text.
///
/// ```
/// use convsplit::message::Message;
///
/// let json = r#"{"timestamp":"2024-03-01T12:00:00Z","content":null,"sender":"bob"}"#;
/// let msg: Message = serde_json::from_str(json)?;
/// assert!(!msg.has_content());
/// assert_eq!(msg.extra["sender"], "bob");
/// assert_eq!(serde_json::to_string(&msg)?, json);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Message {
    /// When the message was sent, normally an ISO-8601 string.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Value>,

    /// Text content of the message. Empty or missing for media-only messages.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,

    /// Exporter-specific metadata passed through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Message {
    /// Creates a message with the given content and no metadata.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            timestamp: None,
            content: Some(Value::String(content.into())),
            extra: Map::new(),
        }
    }

    /// Builder method to set the timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, ts: impl Into<String>) -> Self {
        self.timestamp = Some(Value::String(ts.into()));
        self
    }

    /// Builder method to attach an arbitrary metadata field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Returns the timestamp text.
    ///
    /// An absent, `null`, empty or non-string timestamp counts as missing.
    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp
            .as_ref()
            .and_then(Value::as_str)
            .filter(|ts| !ts.is_empty())
    }

    /// Returns the content text, or `""` if it is absent, `null` or not a
    /// string.
    pub fn content(&self) -> &str {
        self.content
            .as_ref()
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Returns `true` if the content is non-empty after trimming whitespace.
    ///
    /// This is the rule that decides whether a message has a counterpart in
    /// `openai_messages`.
    pub fn has_content(&self) -> bool {
        !self.content().trim().is_empty()
    }
}

/// A message in the content-only view, in OpenAI chat format.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContentMessage {
    /// Chat role, typically `assistant` (the dataset owner) or `user`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,

    /// Non-empty text content.
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,

    /// Additional keys (e.g. `name`) passed through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContentMessage {
    /// Creates a content message with the given role.
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
            extra: Map::new(),
        }
    }

    /// Creates an `assistant` message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }

    /// Creates a `user` message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    /// Returns `true` if this message was written by the dataset owner.
    pub fn is_assistant(&self) -> bool {
        self.role == "assistant"
    }
}

/// Deserializes `null` as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Keeps a present key as `Some`, even when its value is `null`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

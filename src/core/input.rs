//! Reading conversation datasets.
//!
//! A dataset is a JSON array of conversation records. Anything else at the
//! top level is rejected before a single record is looked at.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::core::models::Conversation;
use crate::error::{ConvsplitError, Result};

/// Parses a dataset from a JSON string.
///
/// # Errors
///
/// - [`ConvsplitError::Json`] if the text is not valid JSON or a record has
///   a field of the wrong type
/// - [`ConvsplitError::InvalidFormat`] if the top-level value is not an array
///
/// # Example
///
/// ```
/// use convsplit::parse_dataset;
///
/// let records = parse_dataset(r#"[{"source": "instagram"}, {}]"#)?;
/// assert_eq!(records.len(), 2);
///
/// assert!(parse_dataset(r#"{"source": "instagram"}"#).is_err());
/// # Ok::<(), convsplit::ConvsplitError>(())
/// ```
pub fn parse_dataset(json: &str) -> Result<Vec<Conversation>> {
    let value: Value = serde_json::from_str(json)?;
    from_value(value)
}

/// Reads a dataset from a JSON file.
pub fn read_dataset(path: impl AsRef<Path>) -> Result<Vec<Conversation>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    parse_dataset(&content).map_err(|e| e.with_path(path))
}

fn from_value(value: Value) -> Result<Vec<Conversation>> {
    if !value.is_array() {
        return Err(ConvsplitError::invalid_format(
            "dataset",
            format!(
                "input must contain a JSON array of conversations, found {}",
                kind(&value)
            ),
        ));
    }
    Ok(serde_json::from_value(value)?)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

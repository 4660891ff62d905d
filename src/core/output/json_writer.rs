//! JSON output writer.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::core::models::Conversation;
use crate::error::Result;

/// Writes conversations to a JSON file as an array.
///
/// Parent directories are created as needed. The records are serialized
/// before the file is opened, so a serialization failure leaves no file
/// behind.
pub fn write_dataset(
    conversations: &[Conversation],
    output_path: impl AsRef<Path>,
    pretty: bool,
) -> Result<()> {
    let output_path = output_path.as_ref();
    let json = to_json(conversations, pretty)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts conversations to a JSON array string.
///
/// Same format as [`write_dataset`], but returns a String instead of writing
/// to a file.
pub fn to_json(conversations: &[Conversation], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(conversations)?
    } else {
        serde_json::to_string(conversations)?
    };
    Ok(json)
}

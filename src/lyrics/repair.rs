//! Cleanup of the generator's raw text reply.
//!
//! Models tend to break their own JSON: real line breaks inside string values,
//! doubled escapes, typographic quotes, markdown fences. The passes below run
//! in a fixed order and each one depends on the previous; keep it that way.

use super::error::LyricsError;
use serde::{Deserialize, Serialize};

/// Placeholder protecting intended `\n` escapes while raw line breaks are removed.
const NEWLINE_SENTINEL: &str = "__NEWLINE__";

/// Fields every generation reply must carry, in reporting order.
pub const REQUIRED_FIELDS: [&str; 4] = [
    "lyrics",
    "explanation",
    "suggested_moods",
    "suggested_themes",
];

/// Structured result of a lyrics generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub lyrics: String,
    pub explanation: String,
    pub suggested_moods: Vec<String>,
    pub suggested_themes: Vec<String>,
}

/// Apply the textual cleanup passes to a raw reply.
///
/// The result is not guaranteed to be valid JSON.
pub fn repair_reply(raw: &str) -> String {
    let cleaned = raw
        .replace("\\n", NEWLINE_SENTINEL)
        .replace(['\n', '\r'], " ")
        .replace(NEWLINE_SENTINEL, "\\n")
        .replace("\\\\\"", "\\\"")
        .replace(['\u{201C}', '\u{201D}'], "\"");

    let trimmed = cleaned.trim();
    if trimmed.starts_with('{') {
        return trimmed.to_string();
    }

    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => trimmed[start..=end].to_string(),
        _ => trimmed.to_string(),
    }
}

/// Names of the required fields absent from `value`.
pub fn missing_fields(value: &serde_json::Value) -> Vec<String> {
    REQUIRED_FIELDS
        .iter()
        .filter(|field| value.get(**field).is_none())
        .map(|field| field.to_string())
        .collect()
}

/// Repair, parse and validate a raw generation reply.
pub fn parse_generation_reply(raw: &str) -> Result<GenerationResult, LyricsError> {
    let cleaned = repair_reply(raw);

    let value: serde_json::Value = match serde_json::from_str(&cleaned) {
        Ok(value) => value,
        Err(source) => return Err(LyricsError::JsonRepairFailed { cleaned, source }),
    };

    let missing = missing_fields(&value);
    if !missing.is_empty() {
        return Err(LyricsError::MissingFields(missing));
    }

    serde_json::from_value(value).map_err(|source| LyricsError::InvalidJson {
        content: cleaned,
        source,
    })
}

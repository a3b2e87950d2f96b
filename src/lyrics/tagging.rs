//! Mood and theme inference for a single lyric body.

use super::error::LyricsError;
use super::prompts::tagging_prompt;
use crate::llm::{CompletionOptions, LlmProvider, Message};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Moods and themes suggested by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSuggestion {
    pub moods: Vec<String>,
    pub themes: Vec<String>,
}

/// Ask the model for 2-3 moods and 2-3 themes describing `lyrics`.
///
/// The reply must be exactly the requested JSON object; no cleanup is applied.
pub fn infer_tags(
    llm: &dyn LlmProvider,
    options: &CompletionOptions,
    lyrics: &str,
) -> Result<TagSuggestion, LyricsError> {
    let messages = [Message::user(tagging_prompt(lyrics))];
    debug!("Requesting tags from {}", options.model_or(llm.model()));
    let response = llm.complete(&messages, options)?;
    if response.is_truncated() {
        warn!("Tagging reply hit the token limit");
    }

    let content = response.text().ok_or(LyricsError::EmptyModelResponse)?;
    debug!("Tagging reply: {}", content);

    parse_tag_suggestion(content)
}

fn parse_tag_suggestion(content: &str) -> Result<TagSuggestion, LyricsError> {
    serde_json::from_str(content).map_err(|source| LyricsError::InvalidJson {
        content: content.to_string(),
        source,
    })
}

//! Lyrics generation grounded on the existing catalog.

use super::error::LyricsError;
use super::prompts::GENERATION_SYSTEM_PROMPT;
use super::relevance::select_relevant;
use super::repair::{parse_generation_reply, GenerationResult};
use super::song::SongRecord;
use crate::llm::{CompletionOptions, LlmProvider, Message};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

/// A catalog song handed to the model as style reference only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceSong {
    #[serde(flatten)]
    pub song: SongRecord,
    pub do_not_copy: bool,
}

impl From<SongRecord> for ReferenceSong {
    fn from(song: SongRecord) -> Self {
        Self {
            song,
            do_not_copy: true,
        }
    }
}

/// Payload of the generation user turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationContext {
    pub reference_songs: Vec<ReferenceSong>,
    #[serde(rename = "user_request")]
    pub prompt: String,
    pub available_moods: BTreeSet<String>,
    pub available_themes: BTreeSet<String>,
}

/// Build the context for `prompt`.
///
/// Reference songs are the relevant subset, the tag vocabulary is taken from
/// the whole catalog.
pub fn build_context(all_songs: &[SongRecord], prompt: &str) -> GenerationContext {
    let reference_songs = select_relevant(all_songs, prompt)
        .into_iter()
        .map(ReferenceSong::from)
        .collect();

    let mut available_moods = BTreeSet::new();
    let mut available_themes = BTreeSet::new();
    for song in all_songs {
        available_moods.extend(song.moods.iter().cloned());
        available_themes.extend(song.themes.iter().cloned());
    }

    GenerationContext {
        reference_songs,
        prompt: prompt.to_string(),
        available_moods,
        available_themes,
    }
}

/// Run one generation call for an already built context.
pub fn generate(
    llm: &dyn LlmProvider,
    options: &CompletionOptions,
    context: &GenerationContext,
) -> Result<GenerationResult, LyricsError> {
    let payload = serde_json::to_string(context).map_err(|source| LyricsError::InvalidJson {
        content: context.prompt.clone(),
        source,
    })?;

    info!(
        "Generating lyrics with {} reference songs on {}",
        context.reference_songs.len(),
        options.model_or(llm.model())
    );

    let messages = [
        Message::system(GENERATION_SYSTEM_PROMPT),
        Message::user(payload),
    ];
    let response = llm.complete(&messages, options)?;

    if let Some(usage) = response.usage {
        debug!(
            "Generation used {} tokens ({} prompt, {} completion)",
            usage.total_tokens, usage.prompt_tokens, usage.completion_tokens
        );
    }
    if response.is_truncated() {
        warn!("Generation reply hit the token limit, it is likely incomplete");
    }

    let content = response.text().ok_or(LyricsError::EmptyModelResponse)?;
    debug!("Generation reply: {}", content);

    parse_generation_reply(content)
}

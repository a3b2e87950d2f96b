//! The lyrics pipeline: tag inference over the stored collection and
//! generation of new lyrics in the style of the existing ones.
//!
//! [`LyricsService`] owns the injected store and model clients. Every call is
//! blocking; async callers go through `spawn_blocking`.

mod batch;
mod error;
mod generator;
mod prompts;
mod relevance;
mod repair;
mod song;
mod tagging;

pub use batch::{process_all, BatchSummary};
pub use error::LyricsError;
pub use generator::{build_context, generate, GenerationContext, ReferenceSong};
pub use prompts::{tagging_prompt, GENERATION_SYSTEM_PROMPT};
pub use relevance::{is_relevant, select_relevant};
pub use repair::{missing_fields, parse_generation_reply, repair_reply, GenerationResult};
pub use song::{normalize_all, normalize_record, SongRecord, UNTITLED};
pub use tagging::{infer_tags, TagSuggestion};

use crate::llm::{CompletionOptions, LlmProvider};
use crate::lyrics_store::{LyricsStore, StoreSchema};
use std::sync::Arc;

pub const DEFAULT_TAGGING_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_GENERATION_MODEL: &str = "gpt-3.5-turbo-16k";

/// Per-call settings of the pipeline.
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub schema: StoreSchema,
    pub tagging: CompletionOptions,
    pub generation: CompletionOptions,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            schema: StoreSchema::default(),
            tagging: CompletionOptions::default().with_model(DEFAULT_TAGGING_MODEL),
            generation: CompletionOptions::default().with_model(DEFAULT_GENERATION_MODEL),
        }
    }
}

pub struct LyricsService {
    store: Arc<dyn LyricsStore>,
    llm: Arc<dyn LlmProvider>,
    settings: PipelineSettings,
}

impl LyricsService {
    pub fn new(
        store: Arc<dyn LyricsStore>,
        llm: Arc<dyn LlmProvider>,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            store,
            llm,
            settings,
        }
    }

    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Every record of the store that carries lyrics, in store order.
    pub fn songs(&self) -> Result<Vec<SongRecord>, LyricsError> {
        let records = self.store.query_all()?;
        Ok(normalize_all(&records, &self.settings.schema))
    }

    /// Tag every record that has neither moods nor themes.
    pub fn process_all(&self) -> Result<BatchSummary, LyricsError> {
        process_all(
            self.store.as_ref(),
            self.llm.as_ref(),
            &self.settings.tagging,
            &self.settings.schema,
        )
    }

    /// Suggest tags for `lyrics` without writing anything.
    pub fn infer_tags(&self, lyrics: &str) -> Result<TagSuggestion, LyricsError> {
        infer_tags(self.llm.as_ref(), &self.settings.tagging, lyrics)
    }

    /// Write new lyrics for `prompt`, using the relevant part of the catalog as
    /// style reference.
    pub fn generate(&self, prompt: &str) -> Result<GenerationResult, LyricsError> {
        let songs = self.songs()?;
        let context = build_context(&songs, prompt);
        generate(self.llm.as_ref(), &self.settings.generation, &context)
    }
}

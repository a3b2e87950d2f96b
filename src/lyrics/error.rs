use crate::llm::LlmError;
use crate::lyrics_store::StoreError;
use thiserror::Error;

/// Errors that can occur in the lyrics pipeline.
#[derive(Debug, Error)]
pub enum LyricsError {
    #[error("Lyrics store request failed: {0}")]
    UpstreamFetch(#[from] StoreError),

    #[error("Model request failed: {0}")]
    ModelRequest(#[from] LlmError),

    #[error("Empty response from model")]
    EmptyModelResponse,

    #[error("Model response is not the expected JSON: {source}")]
    InvalidJson {
        content: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse model response as JSON after cleanup: {source}")]
    JsonRepairFailed {
        cleaned: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Model response is missing fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),
}

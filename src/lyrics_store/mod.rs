//! Access to the external lyrics database.
//!
//! - [`LyricsStore`]: what the pipeline needs from the store (list every record,
//!   write tags back).
//! - [`NotionStore`]: the Notion REST implementation.

mod models;
mod notion;

pub use models::{PropertyValue, RawRecord, RichTextBlock, SelectOption, TextContent};
pub use notion::{NotionStore, DEFAULT_NOTION_BASE_URL, NOTION_VERSION};

use thiserror::Error;

/// Errors returned by a [`LyricsStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request timeout")]
    Timeout,
}

/// Names of the record properties the pipeline reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSchema {
    /// Title property (first block's plain text is the song title).
    pub title_property: String,
    /// Rich text property holding the lyric body.
    pub lyrics_property: String,
    /// Multi-select property holding mood tags.
    pub moods_property: String,
    /// Multi-select property holding theme tags.
    pub themes_property: String,
}

impl Default for StoreSchema {
    fn default() -> Self {
        Self {
            title_property: "Lyrics".to_string(),
            lyrics_property: "Lyrics 1".to_string(),
            moods_property: "Moods".to_string(),
            themes_property: "Themes".to_string(),
        }
    }
}

/// The document store holding the lyrics collection.
///
/// Calls are blocking.
pub trait LyricsStore: Send + Sync {
    /// Every record of the collection, in store order.
    fn query_all(&self) -> Result<Vec<RawRecord>, StoreError>;

    /// Overwrite the mood and theme tags of one record.
    fn update_tags(
        &self,
        record_id: &str,
        moods: &[String],
        themes: &[String],
    ) -> Result<(), StoreError>;
}

//! Typed view over raw store records.

use crate::lyrics_store::{RawRecord, StoreSchema};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const UNTITLED: &str = "Untitled";

/// A song as the pipeline sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongRecord {
    pub title: String,
    pub lyrics: String,
    pub moods: Vec<String>,
    pub themes: Vec<String>,
}

impl SongRecord {
    /// Every mood and theme of the song.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.moods
            .iter()
            .chain(self.themes.iter())
            .map(String::as_str)
    }
}

/// Extract a [`SongRecord`] from a raw record.
///
/// Returns `None` when the record has no lyric text block.
pub fn normalize_record(record: &RawRecord, schema: &StoreSchema) -> Option<SongRecord> {
    let lyrics = record.first_rich_text(&schema.lyrics_property)?;

    let title = record
        .first_title(&schema.title_property)
        .unwrap_or(UNTITLED);

    Some(SongRecord {
        title: title.to_string(),
        lyrics: lyrics.to_string(),
        moods: record.option_names(&schema.moods_property),
        themes: record.option_names(&schema.themes_property),
    })
}

/// Normalize every record, dropping the ones without lyrics. Order is kept.
pub fn normalize_all(records: &[RawRecord], schema: &StoreSchema) -> Vec<SongRecord> {
    records
        .iter()
        .filter_map(|record| {
            let song = normalize_record(record, schema);
            if song.is_none() {
                debug!("Record {} has no lyrics, leaving it out", record.id);
            }
            song
        })
        .collect()
}

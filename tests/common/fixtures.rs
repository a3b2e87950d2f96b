//! Test catalog fixtures

use super::constants::*;
use lyrics_server::lyrics_store::{PropertyValue, RawRecord};

/// Builds a record with the default property names.
pub fn song_record(
    id: &str,
    title: &str,
    lyrics: Option<&str>,
    moods: &[&str],
    themes: &[&str],
) -> RawRecord {
    let mut properties = vec![("Lyrics".to_string(), PropertyValue::title(title))];
    if let Some(text) = lyrics {
        properties.push(("Lyrics 1".to_string(), PropertyValue::rich_text(text)));
    }
    properties.push(("Moods".to_string(), PropertyValue::multi_select(moods)));
    properties.push(("Themes".to_string(), PropertyValue::multi_select(themes)));

    RawRecord {
        id: id.to_string(),
        properties: properties.into_iter().collect(),
    }
}

/// Three tagged songs, matching the relevance example of the docs.
pub fn tagged_catalog() -> Vec<RawRecord> {
    vec![
        song_record(
            SUNRISE_ID,
            "Sunrise",
            Some("The sky is opening its hands"),
            &["hopeful"],
            &[],
        ),
        song_record(
            TURNING_ID,
            "Turning",
            Some("Every leaf lets go eventually"),
            &[],
            &["change"],
        ),
        song_record(
            RIOT_ID,
            "Riot",
            Some("Break the glass and shout my name"),
            &["angry"],
            &[],
        ),
    ]
}

/// The tagged catalog plus two untagged songs and one record without lyrics.
pub fn mixed_catalog() -> Vec<RawRecord> {
    let mut records = tagged_catalog();
    records.push(song_record(
        PAPER_BOATS_ID,
        "Paper Boats",
        Some("We folded every letter into boats"),
        &[],
        &[],
    ));
    records.push(song_record(
        INSTRUMENTAL_ID,
        "Instrumental",
        None,
        &[],
        &[],
    ));
    records.push(song_record(
        NIGHT_DRIVE_ID,
        "Night Drive",
        Some("Headlights painting the pines"),
        &[],
        &[],
    ));
    records
}

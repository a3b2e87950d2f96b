//! Relevance filtering of reference songs for a generation prompt.
//!
//! A song is relevant when one of its moods or themes shows up in the prompt.
//! Matching is plain case-insensitive substring containment, so short tags can
//! match inside longer words ("love" in "glove").

use super::song::SongRecord;

/// True if `tag` appears in the already lower-cased `prompt`.
fn tag_matches(tag: &str, lowercase_prompt: &str) -> bool {
    lowercase_prompt.contains(&tag.to_lowercase())
}

/// True if any mood or theme of `song` appears in the already lower-cased `prompt`.
pub fn is_relevant(song: &SongRecord, lowercase_prompt: &str) -> bool {
    song.tags().any(|tag| tag_matches(tag, lowercase_prompt))
}

/// Songs whose moods or themes appear in `prompt`, in input order.
///
/// Falls back to every song when none matches, so the generator is never left
/// without reference material.
pub fn select_relevant(all_songs: &[SongRecord], prompt: &str) -> Vec<SongRecord> {
    let prompt = prompt.to_lowercase();

    let relevant: Vec<SongRecord> = all_songs
        .iter()
        .filter(|song| is_relevant(song, &prompt))
        .cloned()
        .collect();

    if relevant.is_empty() {
        all_songs.to_vec()
    } else {
        relevant
    }
}

//! Batch tagging of the whole lyrics collection.
//!
//! Every record that has no mood and no theme yet gets its lyrics sent to the
//! model and the suggested tags written back. Records already carrying tags are
//! left alone, so running the batch twice only touches what the first run
//! could not finish.

use super::error::LyricsError;
use super::tagging::infer_tags;
use crate::llm::{CompletionOptions, LlmProvider};
use crate::lyrics_store::{LyricsStore, RawRecord, StoreSchema};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

/// Counters reported at the end of a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub processed: usize,
    pub skipped: usize,
}

enum RecordOutcome {
    Processed,
    AlreadyTagged,
    NoLyrics,
}

fn process_record(
    store: &dyn LyricsStore,
    llm: &dyn LlmProvider,
    options: &CompletionOptions,
    schema: &StoreSchema,
    record: &RawRecord,
) -> Result<RecordOutcome, LyricsError> {
    if record.has_options(&schema.moods_property) || record.has_options(&schema.themes_property) {
        return Ok(RecordOutcome::AlreadyTagged);
    }

    let Some(lyrics) = record.first_rich_text(&schema.lyrics_property) else {
        return Ok(RecordOutcome::NoLyrics);
    };

    let tags = infer_tags(llm, options, lyrics)?;
    debug!(
        "Record {}: moods {:?}, themes {:?}",
        record.id, tags.moods, tags.themes
    );
    store.update_tags(&record.id, &tags.moods, &tags.themes)?;

    Ok(RecordOutcome::Processed)
}

/// Tag every untagged record of the store.
///
/// Only a failure listing the records aborts the run. A failure on a single
/// record is logged and that record is counted neither processed nor skipped.
pub fn process_all(
    store: &dyn LyricsStore,
    llm: &dyn LlmProvider,
    options: &CompletionOptions,
    schema: &StoreSchema,
) -> Result<BatchSummary, LyricsError> {
    let records = store.query_all()?;
    let total = records.len();
    info!("Fetched {} records", total);

    let mut summary = BatchSummary::default();

    for record in &records {
        match process_record(store, llm, options, schema, record) {
            Ok(RecordOutcome::Processed) => {
                summary.processed += 1;
                info!(
                    "Processed {}/{} (skipped {})",
                    summary.processed, total, summary.skipped
                );
            }
            Ok(RecordOutcome::AlreadyTagged) => {
                summary.skipped += 1;
                debug!("Record {} already has tags", record.id);
            }
            Ok(RecordOutcome::NoLyrics) => {
                warn!("Record {} has no lyrics", record.id);
            }
            Err(e) => {
                error!("Failed to process record {}: {}", record.id, e);
            }
        }
    }

    info!(
        "Batch complete: {} processed, {} skipped",
        summary.processed, summary.skipped
    );

    Ok(summary)
}

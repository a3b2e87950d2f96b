//! In-memory stand-ins for the Notion store and the model

use lyrics_server::llm::{CompletionOptions, CompletionResponse, LlmError, LlmProvider, Message};
use lyrics_server::lyrics_store::{LyricsStore, PropertyValue, RawRecord, StoreError};
use std::collections::HashSet;
use std::sync::Mutex;

/// Store keeping its records in memory. Tag updates are applied to the records,
/// so a second batch run sees them.
#[derive(Default)]
pub struct FakeStore {
    records: Mutex<Vec<RawRecord>>,
    fail_query: bool,
    fail_updates_for: HashSet<String>,
    updates: Mutex<Vec<TagUpdate>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TagUpdate {
    pub record_id: String,
    pub moods: Vec<String>,
    pub themes: Vec<String>,
}

impl FakeStore {
    pub fn with_records(records: Vec<RawRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Default::default()
        }
    }

    pub fn failing_query() -> Self {
        Self {
            fail_query: true,
            ..Default::default()
        }
    }

    /// Updates of `record_id` fail with an API error.
    pub fn failing_update_for(mut self, record_id: &str) -> Self {
        self.fail_updates_for.insert(record_id.to_string());
        self
    }

    pub fn updates(&self) -> Vec<TagUpdate> {
        self.updates.lock().unwrap().clone()
    }

    pub fn updated_ids(&self) -> Vec<String> {
        self.updates()
            .into_iter()
            .map(|update| update.record_id)
            .collect()
    }
}

impl LyricsStore for FakeStore {
    fn query_all(&self) -> Result<Vec<RawRecord>, StoreError> {
        if self.fail_query {
            return Err(StoreError::Api {
                status: 401,
                message: "API token is invalid.".to_string(),
            });
        }
        Ok(self.records.lock().unwrap().clone())
    }

    fn update_tags(
        &self,
        record_id: &str,
        moods: &[String],
        themes: &[String],
    ) -> Result<(), StoreError> {
        if self.fail_updates_for.contains(record_id) {
            return Err(StoreError::Api {
                status: 409,
                message: "Conflict occurred while saving.".to_string(),
            });
        }

        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|record| record.id == record_id)
            .ok_or_else(|| StoreError::Api {
                status: 404,
                message: format!("Could not find page with ID: {}", record_id),
            })?;
        record
            .properties
            .insert("Moods".to_string(), PropertyValue::multi_select(moods));
        record
            .properties
            .insert("Themes".to_string(), PropertyValue::multi_select(themes));

        self.updates.lock().unwrap().push(TagUpdate {
            record_id: record_id.to_string(),
            moods: moods.to_vec(),
            themes: themes.to_vec(),
        });
        Ok(())
    }
}

type Responder = dyn Fn(&[Message]) -> Result<CompletionResponse, LlmError> + Send + Sync;

/// Model answering through a closure and recording every request.
pub struct FakeLlm {
    responder: Box<Responder>,
    requests: Mutex<Vec<Vec<Message>>>,
}

impl FakeLlm {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&[Message]) -> Result<CompletionResponse, LlmError> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Always answers with `text`.
    pub fn replying(text: &'static str) -> Self {
        Self::new(move |_| Ok(CompletionResponse::from_text(text)))
    }

    /// Always answers with no choice at all.
    pub fn without_choices() -> Self {
        Self::new(|_| Ok(CompletionResponse::empty()))
    }

    pub fn requests(&self) -> Vec<Vec<Message>> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Whether any request mentioned `text` in one of its messages.
    pub fn was_asked_about(&self, text: &str) -> bool {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .flatten()
            .any(|message| message.content.contains(text))
    }
}

impl LlmProvider for FakeLlm {
    fn model(&self) -> &str {
        "fake-model"
    }

    fn complete(
        &self,
        messages: &[Message],
        _options: &CompletionOptions,
    ) -> Result<CompletionResponse, LlmError> {
        self.requests.lock().unwrap().push(messages.to_vec());
        (self.responder)(messages)
    }
}

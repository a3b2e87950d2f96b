//! Notion API client for the lyrics database.
//!
//! Uses the blocking reqwest client; see [`LyricsStore`].

use super::models::RawRecord;
use super::{LyricsStore, StoreError, StoreSchema};
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_NOTION_BASE_URL: &str = "https://api.notion.com/v1";
pub const NOTION_VERSION: &str = "2022-06-28";

/// Largest page size the query endpoint accepts.
const QUERY_PAGE_SIZE: u32 = 100;

pub struct NotionStore {
    client: Client,
    base_url: String,
    api_key: String,
    database_id: String,
    schema: StoreSchema,
}

#[derive(Serialize)]
struct QueryRequest<'a> {
    page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_cursor: Option<&'a str>,
}

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    results: Vec<RawRecord>,
    #[serde(default)]
    has_more: bool,
    next_cursor: Option<String>,
}

#[derive(Serialize)]
struct PageUpdate<'a> {
    properties: BTreeMap<&'a str, MultiSelectUpdate<'a>>,
}

#[derive(Serialize)]
struct MultiSelectUpdate<'a> {
    multi_select: Vec<OptionName<'a>>,
}

#[derive(Serialize)]
struct OptionName<'a> {
    name: &'a str,
}

impl<'a> MultiSelectUpdate<'a> {
    fn from_names(names: &'a [String]) -> Self {
        Self {
            multi_select: names.iter().map(|name| OptionName { name }).collect(),
        }
    }
}

impl NotionStore {
    /// Create a new client for one database.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the API (e.g., "https://api.notion.com/v1")
    /// * `api_key` - Integration token
    /// * `database_id` - Database holding the lyrics pages
    /// * `schema` - Property names to write tags to
    /// * `timeout` - Per-request timeout
    pub fn new(
        base_url: &str,
        api_key: &str,
        database_id: &str,
        schema: StoreSchema,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::Connection(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            database_id: database_id.to_string(),
            schema,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn database_id(&self) -> &str {
        &self.database_id
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .bearer_auth(&self.api_key)
            .header("Notion-Version", NOTION_VERSION)
    }

    fn send(builder: RequestBuilder) -> Result<Response, StoreError> {
        let response = builder.send().map_err(|e| {
            if e.is_timeout() {
                StoreError::Timeout
            } else {
                StoreError::Connection(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response)
    }

    fn query_page(&self, start_cursor: Option<&str>) -> Result<QueryResponse, StoreError> {
        let url = format!("{}/databases/{}/query", self.base_url, self.database_id);
        let request = QueryRequest {
            page_size: QUERY_PAGE_SIZE,
            start_cursor,
        };

        let response = Self::send(self.authorized(self.client.post(&url)).json(&request))?;
        response
            .json()
            .map_err(|e| StoreError::InvalidResponse(format!("Failed to parse query response: {}", e)))
    }
}

impl LyricsStore for NotionStore {
    fn query_all(&self) -> Result<Vec<RawRecord>, StoreError> {
        let mut records = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let page = self.query_page(cursor.as_deref())?;
            debug!(
                database_id = %self.database_id,
                page_records = page.results.len(),
                has_more = page.has_more,
                "Fetched lyrics database page"
            );
            records.extend(page.results);

            match page.next_cursor {
                Some(next) if page.has_more => cursor = Some(next),
                _ => break,
            }
        }

        Ok(records)
    }

    fn update_tags(
        &self,
        record_id: &str,
        moods: &[String],
        themes: &[String],
    ) -> Result<(), StoreError> {
        let url = format!("{}/pages/{}", self.base_url, record_id);
        let body = build_tags_update(&self.schema, moods, themes);

        debug!(
            record_id = %record_id,
            moods = ?moods,
            themes = ?themes,
            "Updating record tags"
        );

        Self::send(self.authorized(self.client.patch(&url)).json(&body))?;
        Ok(())
    }
}

/// Body of the page update request writing both tag properties.
fn build_tags_update<'a>(
    schema: &'a StoreSchema,
    moods: &'a [String],
    themes: &'a [String],
) -> PageUpdate<'a> {
    let mut properties = BTreeMap::new();
    properties.insert(
        schema.moods_property.as_str(),
        MultiSelectUpdate::from_names(moods),
    );
    properties.insert(
        schema.themes_property.as_str(),
        MultiSelectUpdate::from_names(themes),
    );
    PageUpdate { properties }
}

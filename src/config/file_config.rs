use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Credentials (can override CLI / environment)
    pub notion_api_key: Option<String>,
    pub notion_database_id: Option<String>,
    pub openai_api_key: Option<String>,

    // Server settings
    pub environment: Option<String>,
    pub port: Option<u16>,
    pub logging_level: Option<String>,
    pub api_prefix: Option<String>,
    pub cors_origins: Option<Vec<String>>,

    // Client configs
    pub llm: Option<LlmConfig>,
    pub notion: Option<NotionConfig>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct LlmConfig {
    pub base_url: Option<String>,
    pub tagging_model: Option<String>,
    pub generation_model: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub timeout_sec: Option<u64>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct NotionConfig {
    pub base_url: Option<String>,
    pub timeout_sec: Option<u64>,
    pub title_property: Option<String>,
    pub lyrics_property: Option<String>,
    pub moods_property: Option<String>,
    pub themes_property: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

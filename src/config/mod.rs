mod cli_args;
mod file_config;

pub use cli_args::ServiceArgs;
pub use file_config::{FileConfig, LlmConfig, NotionConfig};

use crate::llm::{CompletionOptions, OpenAIProvider, DEFAULT_OPENAI_BASE_URL};
use crate::lyrics::{
    LyricsService, PipelineSettings, DEFAULT_GENERATION_MODEL, DEFAULT_TAGGING_MODEL,
};
use crate::lyrics_store::{NotionStore, StoreSchema, DEFAULT_NOTION_BASE_URL};
use crate::server::{Environment, RequestsLoggingLevel, ServerConfig};
use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_API_PREFIX: &str = "/api";
pub const DEFAULT_CORS_ORIGIN: &str = "https://lyrics-frontend.onrender.com";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_LLM_TIMEOUT_SEC: u64 = 120;
pub const DEFAULT_NOTION_TIMEOUT_SEC: u64 = 30;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub notion_api_key: Option<String>,
    pub notion_database_id: Option<String>,
    pub openai_api_key: Option<String>,
    pub environment: Environment,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            notion_api_key: None,
            notion_database_id: None,
            openai_api_key: None,
            environment: Environment::default(),
            port: DEFAULT_PORT,
            logging_level: RequestsLoggingLevel::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    // Credentials
    pub notion_api_key: String,
    pub notion_database_id: String,
    pub openai_api_key: String,

    // Server settings
    pub environment: Environment,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub api_prefix: String,
    pub cors_origins: Vec<String>,

    pub llm: LlmSettings,
    pub notion: NotionSettings,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LlmSettings {
    pub base_url: String,
    pub tagging_model: String,
    pub generation_model: String,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
    pub timeout_sec: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            tagging_model: DEFAULT_TAGGING_MODEL.to_string(),
            generation_model: DEFAULT_GENERATION_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: None,
            timeout_sec: DEFAULT_LLM_TIMEOUT_SEC,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotionSettings {
    pub base_url: String,
    pub timeout_sec: u64,
    pub schema: StoreSchema,
}

impl Default for NotionSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_NOTION_BASE_URL.to_string(),
            timeout_sec: DEFAULT_NOTION_TIMEOUT_SEC,
            schema: StoreSchema::default(),
        }
    }
}

fn require(
    file_value: Option<String>,
    cli_value: &Option<String>,
    name: &str,
    flag: &str,
    env_var: &str,
) -> Result<String> {
    match file_value.or_else(|| cli_value.clone()) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => bail!(
            "{} must be specified via {} / {} or in config file",
            name,
            flag,
            env_var
        ),
    }
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let notion_api_key = require(
            file.notion_api_key,
            &cli.notion_api_key,
            "notion_api_key",
            "--notion-api-key",
            "NOTION_API_KEY",
        )?;
        let notion_database_id = require(
            file.notion_database_id,
            &cli.notion_database_id,
            "notion_database_id",
            "--notion-database-id",
            "NOTION_DATABASE_ID",
        )?;
        let openai_api_key = require(
            file.openai_api_key,
            &cli.openai_api_key,
            "openai_api_key",
            "--openai-api-key",
            "OPENAI_API_KEY",
        )?;

        let environment = match file.environment {
            Some(s) => match Environment::from_str(&s, true) {
                Ok(environment) => environment,
                Err(_) => bail!("Unknown environment in config file: {}", s),
            },
            None => cli.environment,
        };

        let port = file.port.unwrap_or(cli.port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let api_prefix =
            normalize_api_prefix(file.api_prefix.as_deref().unwrap_or(DEFAULT_API_PREFIX));

        let cors_origins = file
            .cors_origins
            .unwrap_or_else(|| vec![DEFAULT_CORS_ORIGIN.to_string()]);

        let llm_file = file.llm.unwrap_or_default();
        let llm_defaults = LlmSettings::default();
        let llm = LlmSettings {
            base_url: llm_file.base_url.unwrap_or(llm_defaults.base_url),
            tagging_model: llm_file.tagging_model.unwrap_or(llm_defaults.tagging_model),
            generation_model: llm_file
                .generation_model
                .unwrap_or(llm_defaults.generation_model),
            temperature: llm_file.temperature.unwrap_or(llm_defaults.temperature),
            max_tokens: llm_file.max_tokens,
            timeout_sec: llm_file.timeout_sec.unwrap_or(llm_defaults.timeout_sec),
        };

        let notion_file = file.notion.unwrap_or_default();
        let schema_defaults = StoreSchema::default();
        let notion = NotionSettings {
            base_url: notion_file
                .base_url
                .unwrap_or_else(|| DEFAULT_NOTION_BASE_URL.to_string()),
            timeout_sec: notion_file.timeout_sec.unwrap_or(DEFAULT_NOTION_TIMEOUT_SEC),
            schema: StoreSchema {
                title_property: notion_file
                    .title_property
                    .unwrap_or(schema_defaults.title_property),
                lyrics_property: notion_file
                    .lyrics_property
                    .unwrap_or(schema_defaults.lyrics_property),
                moods_property: notion_file
                    .moods_property
                    .unwrap_or(schema_defaults.moods_property),
                themes_property: notion_file
                    .themes_property
                    .unwrap_or(schema_defaults.themes_property),
            },
        };

        Ok(Self {
            notion_api_key,
            notion_database_id,
            openai_api_key,
            environment,
            port,
            logging_level,
            api_prefix,
            cors_origins,
            llm,
            notion,
        })
    }

    pub fn notion_timeout(&self) -> Duration {
        Duration::from_secs(self.notion.timeout_sec)
    }

    pub fn pipeline_settings(&self) -> PipelineSettings {
        let base = CompletionOptions {
            model: None,
            temperature: self.llm.temperature,
            max_tokens: self.llm.max_tokens,
            timeout: Duration::from_secs(self.llm.timeout_sec),
        };

        PipelineSettings {
            schema: self.notion.schema.clone(),
            tagging: base.clone().with_model(&self.llm.tagging_model),
            generation: base.with_model(&self.llm.generation_model),
        }
    }

    /// Build the Notion and OpenAI clients and wire them into a [`LyricsService`].
    ///
    /// The clients are blocking: call this outside of any async runtime.
    pub fn make_lyrics_service(&self) -> Result<LyricsService> {
        let store = NotionStore::new(
            &self.notion.base_url,
            &self.notion_api_key,
            &self.notion_database_id,
            self.notion.schema.clone(),
            self.notion_timeout(),
        )
        .context("Failed to create Notion client")?;

        let llm = OpenAIProvider::new(
            self.llm.base_url.as_str(),
            self.llm.tagging_model.as_str(),
            Some(self.openai_api_key.clone()),
        )
        .context("Failed to create OpenAI client")?;

        Ok(LyricsService::new(
            Arc::new(store),
            Arc::new(llm),
            self.pipeline_settings(),
        ))
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            requests_logging_level: self.logging_level.clone(),
            port: self.port,
            environment: self.environment,
            api_prefix: self.api_prefix.clone(),
            cors_origins: self.cors_origins.clone(),
        }
    }
}

/// Leading slash, no trailing slash. The root prefix becomes an empty string.
fn normalize_api_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}

use super::{AppConfig, CliConfig, FileConfig, DEFAULT_PORT};
use crate::server::{Environment, RequestsLoggingLevel};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Flags shared by the server and the operator CLI.
///
/// Every flag can also come from the environment (or a `.env` file loaded
/// before parsing).
#[derive(Args, Debug, Clone)]
pub struct ServiceArgs {
    /// Notion integration token.
    #[clap(long, env = "NOTION_API_KEY", hide_env_values = true)]
    pub notion_api_key: Option<String>,

    /// Id of the Notion database holding the lyrics.
    #[clap(long, env = "NOTION_DATABASE_ID")]
    pub notion_database_id: Option<String>,

    /// OpenAI API key.
    #[clap(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    /// Deployment environment, selects the CORS policy.
    #[clap(long, env = "ENVIRONMENT", default_value = "dev")]
    pub environment: Environment,

    /// The port to listen on.
    #[clap(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Optional TOML config file, its values override flags and environment.
    #[clap(long)]
    pub config: Option<PathBuf>,
}

impl ServiceArgs {
    pub fn cli_config(&self) -> CliConfig {
        CliConfig {
            notion_api_key: self.notion_api_key.clone(),
            notion_database_id: self.notion_database_id.clone(),
            openai_api_key: self.openai_api_key.clone(),
            environment: self.environment,
            port: self.port,
            logging_level: self.logging_level.clone(),
        }
    }

    /// Load the config file, if any, and resolve the final configuration.
    pub fn resolve(&self) -> Result<AppConfig> {
        let file_config = match &self.config {
            Some(path) => Some(FileConfig::load(path)?),
            None => None,
        };
        AppConfig::resolve(&self.cli_config(), file_config)
    }
}

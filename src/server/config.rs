use super::RequestsLoggingLevel;

/// Deployment environment, selects the CORS policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Environment {
    #[default]
    #[value(alias = "development")]
    Dev,
    #[value(alias = "production")]
    Prod,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Dev => write!(f, "dev"),
            Environment::Prod => write!(f, "prod"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub port: u16,
    pub environment: Environment,
    /// Path every route is nested under, empty for the root.
    pub api_prefix: String,
    /// Origins allowed in the `prod` environment.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            port: 8000,
            environment: Environment::Dev,
            api_prefix: "/api".to_string(),
            cors_origins: vec!["https://lyrics-frontend.onrender.com".to_string()],
        }
    }
}

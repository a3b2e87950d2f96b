use anyhow::{Context, Result};
use clap::Parser;
use lyrics_server::{run_server, ServiceArgs};
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(version, about = "Lyrics tagging and generation server")]
struct CliArgs {
    #[command(flatten)]
    pub service: ServiceArgs,
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize tracing")
}

// The Notion and OpenAI clients are blocking, so they are created and dropped
// outside of the async runtime.
fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli_args = CliArgs::parse();
    init_tracing()?;

    let config = cli_args.service.resolve()?;
    info!(
        "Starting lyrics-server {} in {} environment",
        env!("GIT_HASH"),
        config.environment
    );
    info!(
        "Tagging with {}, generating with {}",
        config.llm.tagging_model, config.llm.generation_model
    );

    let lyrics = Arc::new(config.make_lyrics_service()?);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    let result = runtime.block_on(run_server(config.server_config(), lyrics.clone()));
    drop(runtime);
    drop(lyrics);

    result
}

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lyrics_server::ServiceArgs;
use serde::Serialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(version, about = "Operator commands for the lyrics collection")]
struct CliArgs {
    #[command(flatten)]
    service: ServiceArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Infers moods and themes for every untagged song and writes them back.
    Process,

    /// Writes new lyrics for the given request, nothing is stored.
    Generate { prompt: String },

    /// Lists the songs of the collection with their tags.
    Songs,

    /// Suggests tags for the given lyrics without touching the collection.
    Tags { lyrics: String },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", text);
    Ok(())
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli_args = CliArgs::parse();

    // Logs go to stderr so stdout stays valid JSON.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize tracing")?;

    let config = cli_args.service.resolve()?;
    let lyrics = config.make_lyrics_service()?;

    match cli_args.command {
        Command::Process => print_json(&lyrics.process_all()?),
        Command::Generate { prompt } => {
            if prompt.trim().is_empty() {
                anyhow::bail!("prompt must not be empty");
            }
            print_json(&lyrics.generate(prompt.trim())?)
        }
        Command::Songs => print_json(&lyrics.songs()?),
        Command::Tags { lyrics: text } => print_json(&lyrics.infer_tags(&text)?),
    }
}

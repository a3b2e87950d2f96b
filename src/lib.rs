//! Lyrics Server Library
//!
//! Tags a Notion lyrics collection with moods and themes and writes new lyrics
//! in the style of the existing ones, using an OpenAI-compatible model.

pub mod config;
pub mod llm;
pub mod lyrics;
pub mod lyrics_store;
pub mod server;

// Re-export commonly used types for convenience
pub use config::{AppConfig, ServiceArgs};
pub use lyrics::{LyricsError, LyricsService};
pub use server::{run_server, RequestsLoggingLevel};

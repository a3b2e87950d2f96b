use axum::extract::FromRef;

use crate::lyrics::LyricsService;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedLyricsService = Arc<LyricsService>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub lyrics: GuardedLyricsService,
    pub hash: String,
}

impl ServerState {
    pub fn new(config: ServerConfig, lyrics: GuardedLyricsService) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            lyrics,
            hash: env!("GIT_HASH").to_string(),
        }
    }
}

impl FromRef<ServerState> for GuardedLyricsService {
    fn from_ref(input: &ServerState) -> Self {
        input.lyrics.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}

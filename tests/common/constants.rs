//! Shared constants for end-to-end tests
//!
//! When the test catalog changes, update only this file.

// ============================================================================
// Test Catalog Record IDs
// ============================================================================

/// "Sunrise", mood "hopeful", not yet themed
pub const SUNRISE_ID: &str = "page-sunrise";

/// "Turning", theme "change"
pub const TURNING_ID: &str = "page-turning";

/// "Riot", mood "angry"
pub const RIOT_ID: &str = "page-riot";

/// "Paper Boats", no tags yet
pub const PAPER_BOATS_ID: &str = "page-paper-boats";

/// "Night Drive", no tags yet
pub const NIGHT_DRIVE_ID: &str = "page-night-drive";

/// Record without any lyric text
pub const INSTRUMENTAL_ID: &str = "page-instrumental";

// ============================================================================
// Model Replies
// ============================================================================

/// Well formed tagging reply
pub const TAGS_REPLY: &str = r#"{"moods": ["tender", "wistful"], "themes": ["memory", "home"]}"#;

/// Well formed generation reply
pub const GENERATION_REPLY: &str = r#"{"lyrics": "Morning folds the dark away\nI keep the light", "explanation": "Borrows the catalog's short lines.", "suggested_moods": ["hopeful", "calm"], "suggested_themes": ["change", "dawn"]}"#;

// ============================================================================
// Server Settings
// ============================================================================

/// Prefix every route is mounted under
pub const API_PREFIX: &str = "/api";

/// Timeout for waiting for server to be ready (milliseconds)
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Polling interval when waiting for server readiness (milliseconds)
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;

/// Request timeout for HTTP client (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

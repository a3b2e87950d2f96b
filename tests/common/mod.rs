//! Common test infrastructure
//!
//! Tests should only import from this module, not from internal submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{tagged_catalog, FakeLlm, FakeStore, TestClient, TestServer, TAGS_REPLY};
//! use reqwest::StatusCode;
//!
//! #[tokio::test]
//! async fn test_process() {
//!     let server = TestServer::spawn(
//!         FakeStore::with_records(tagged_catalog()),
//!         FakeLlm::replying(TAGS_REPLY),
//!     )
//!     .await;
//!     let client = TestClient::new(server.base_url.clone());
//!
//!     let response = client.process().await;
//!     assert_eq!(response.status(), StatusCode::OK);
//! }
//! ```

mod client;
mod constants;
mod fakes;
mod fixtures;
mod server;

// Public API - this is what tests import
#[allow(unused_imports)]
pub use client::TestClient;
#[allow(unused_imports)]
pub use constants::*;
#[allow(unused_imports)]
pub use fakes::{FakeLlm, FakeStore, TagUpdate};
#[allow(unused_imports)]
pub use fixtures::{mixed_catalog, song_record, tagged_catalog};
#[allow(unused_imports)]
pub use server::TestServer;

//! HTTP client for end-to-end tests
//!
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use serde_json::json;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// Base URL of the API, prefix included
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    /// GET the hello endpoint
    pub async fn hello(&self) -> Response {
        self.client
            .get(&self.base_url)
            .send()
            .await
            .expect("Hello request failed")
    }

    /// POST /process
    pub async fn process(&self) -> Response {
        self.client
            .post(format!("{}/process", self.base_url))
            .send()
            .await
            .expect("Process request failed")
    }

    /// POST /generate with the given prompt
    pub async fn generate(&self, prompt: &str) -> Response {
        self.client
            .post(format!("{}/generate", self.base_url))
            .json(&json!({ "prompt": prompt }))
            .send()
            .await
            .expect("Generate request failed")
    }

    /// POST /generate with a raw body and no content type
    pub async fn generate_raw(&self, body: &'static str) -> Response {
        self.client
            .post(format!("{}/generate", self.base_url))
            .body(body)
            .send()
            .await
            .expect("Generate request failed")
    }
}

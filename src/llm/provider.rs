//! LLM provider trait definition.

use super::types::{CompletionResponse, Message};
use std::time::Duration;
use thiserror::Error;

/// Options for a completion request.
#[derive(Debug, Clone)]
pub struct CompletionOptions {
    /// Model to use for this request. Falls back to the provider's default model.
    pub model: Option<String>,
    /// Temperature for sampling (0.0 = deterministic, 1.0 = creative).
    pub temperature: f32,
    /// Maximum tokens to generate.
    pub max_tokens: Option<u32>,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            model: None,
            temperature: 0.7,
            max_tokens: None,
            timeout: Duration::from_secs(120),
        }
    }
}

impl CompletionOptions {
    /// The model a request with these options runs on.
    pub fn model_or<'a>(&'a self, provider_default: &'a str) -> &'a str {
        self.model.as_deref().unwrap_or(provider_default)
    }

    /// Same options, pinned to `model`.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Errors that can occur when interacting with an LLM provider.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Request timeout")]
    Timeout,
}

/// Trait for chat-completion providers.
///
/// Calls are blocking: each completion returns only once the remote service has
/// answered (or failed). Async callers must run them on a blocking thread.
pub trait LlmProvider: Send + Sync {
    /// Get the model used when [`CompletionOptions::model`] is not set.
    fn model(&self) -> &str;

    /// Complete a conversation.
    ///
    /// A response without any choice is not an error at this level: the returned
    /// [`CompletionResponse`] simply carries no message.
    fn complete(
        &self,
        messages: &[Message],
        options: &CompletionOptions,
    ) -> Result<CompletionResponse, LlmError>;
}

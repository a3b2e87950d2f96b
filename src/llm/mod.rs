//! Chat-completion provider abstraction.
//!
//! The lyrics pipeline only talks to [`LlmProvider`], so the OpenAI-compatible
//! client can be swapped for a fake in tests.

mod openai;
mod provider;
mod types;

pub use openai::{OpenAIProvider, DEFAULT_OPENAI_BASE_URL};
pub use provider::{CompletionOptions, LlmError, LlmProvider};
pub use types::{CompletionResponse, FinishReason, Message, MessageRole, TokenUsage};

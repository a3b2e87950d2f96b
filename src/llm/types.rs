//! Common types for LLM interactions.

use serde::{Deserialize, Serialize};

/// Role of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// A message in a conversation with an LLM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Response from an LLM completion request.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// The first choice's message, `None` when the service returned no choice.
    pub message: Option<Message>,
    /// Why the completion finished.
    pub finish_reason: FinishReason,
    /// Token usage information (if available).
    pub usage: Option<TokenUsage>,
}

impl CompletionResponse {
    /// Response carrying a single assistant message.
    pub fn from_text(content: impl Into<String>) -> Self {
        Self {
            message: Some(Message::assistant(content)),
            finish_reason: FinishReason::Stop,
            usage: None,
        }
    }

    /// Response with no choice at all.
    pub fn empty() -> Self {
        Self {
            message: None,
            finish_reason: FinishReason::Error,
            usage: None,
        }
    }

    /// The textual content of the first choice, if there is any non-empty one.
    pub fn text(&self) -> Option<&str> {
        self.message
            .as_ref()
            .map(|m| m.content.as_str())
            .filter(|content| !content.is_empty())
    }

    /// True when the reply was cut at the token limit.
    pub fn is_truncated(&self) -> bool {
        self.finish_reason == FinishReason::MaxTokens
    }
}

/// Why an LLM completion finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    /// Natural end of response.
    Stop,
    /// Hit the maximum token limit.
    MaxTokens,
    /// The provider flagged the content.
    ContentFilter,
    /// No choice was returned.
    Error,
}

/// Token usage information.
#[derive(Debug, Clone, Copy)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

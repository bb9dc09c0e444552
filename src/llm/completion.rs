// src/llm/completion.rs
// Completion client abstraction

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::LlmResult;

/// A single role-tagged chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Anything that can turn an ordered message list into one reply
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &'static str;

    /// Model identifier requested on every call
    fn model(&self) -> &str;

    /// Request a single completion and return the first choice's content
    async fn complete(&self, messages: Vec<ChatMessage>) -> LlmResult<String>;
}

// src/llm/mod.rs
// Completion API clients

pub mod completion;
pub mod openai;

pub use completion::{ChatMessage, CompletionClient};
pub use openai::OpenAiClient;

// src/lib.rs
// Persona gateway: chatbot persona pages and an LLM chat proxy

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
pub mod persona;
pub mod prompt;
pub mod web;

use std::sync::Arc;

use crate::chat::ChatDispatcher;
use crate::config::GatewayConfig;
use crate::error::TemplateError;
use crate::llm::{CompletionClient, OpenAiClient};
use crate::persona::ConfigStore;
use crate::web::{AppState, PageRenderer};

/// Wire up application state from configuration.
///
/// The completion client only exists when an API key is configured; chat
/// requests report the missing credential otherwise.
pub fn build_state(config: &GatewayConfig) -> Result<AppState, TemplateError> {
    let client = config.openai_api_key.as_ref().map(|key| {
        Arc::new(OpenAiClient::new(
            key.clone(),
            config.openai_base_url.clone(),
            config.model.clone(),
        )) as Arc<dyn CompletionClient>
    });

    let dispatcher = ChatDispatcher::new(ConfigStore::new(&config.configs_dir), client);
    let pages = PageRenderer::new(config.templates_dir.as_deref())?;

    Ok(AppState::new(dispatcher, pages))
}

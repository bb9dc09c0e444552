// src/chat/mod.rs
// Chat dispatch: persona lookup -> system prompt -> one completion call

use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::error::PersonaError;
use crate::llm::{ChatMessage, CompletionClient};
use crate::persona::ConfigStore;
use crate::prompt::build_system_prompt;

/// Why a chat request produced no reply
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Missing botType or message")]
    MissingFields,

    #[error("Configuration for '{0}' not found.")]
    NotFound(String),

    #[error("Configuration for '{bot_type}' could not be loaded.")]
    MalformedConfig {
        bot_type: String,
        #[source]
        source: PersonaError,
    },

    #[error("OPENAI_API_KEY environment variable is not set.")]
    NotConfigured,

    #[error("OpenAI request failed: {0}")]
    Provider(String),
}

/// Turns (bot type, message) pairs into completion replies.
///
/// The completion client is optional: without one every otherwise valid
/// request fails with `DispatchError::NotConfigured`.
#[derive(Clone)]
pub struct ChatDispatcher {
    store: ConfigStore,
    client: Option<Arc<dyn CompletionClient>>,
}

impl ChatDispatcher {
    pub fn new(store: ConfigStore, client: Option<Arc<dyn CompletionClient>>) -> Self {
        Self { store, client }
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub async fn dispatch(
        &self,
        bot_type: Option<&str>,
        message: Option<&str>,
    ) -> Result<String, DispatchError> {
        let (bot_type, message) = match (non_empty(bot_type), non_empty(message)) {
            (Some(b), Some(m)) => (b, m),
            _ => return Err(DispatchError::MissingFields),
        };

        let config = match self.store.load(bot_type).await {
            Ok(Some(config)) => config,
            Ok(None) => return Err(DispatchError::NotFound(bot_type.to_string())),
            Err(source) => {
                warn!("Persona '{}' failed to load: {}", bot_type, source);
                return Err(DispatchError::MalformedConfig {
                    bot_type: bot_type.to_string(),
                    source,
                });
            }
        };

        let client = self.client.as_ref().ok_or(DispatchError::NotConfigured)?;

        let messages = vec![
            ChatMessage::system(build_system_prompt(&config)),
            ChatMessage::user(message),
        ];

        info!("Chat for '{}' via {} ({})", bot_type, client.name(), client.model());

        client.complete(messages).await.map_err(|e| {
            error!("Completion for '{}' failed: {}", bot_type, e);
            DispatchError::Provider(e.to_string())
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

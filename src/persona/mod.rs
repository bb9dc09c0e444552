// src/persona/mod.rs
// Persona documents: lookup, storage, and the opaque config type

pub mod resolver;
pub mod store;

pub use resolver::{known_personas, resolve_filename};
pub use store::ConfigStore;

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

/// Label shown when a persona document has no usable `name`.
pub const DEFAULT_DISPLAY_NAME: &str = "Chatbot";

/// A persona definition as authored on disk.
///
/// No schema is enforced. Keys keep their original order so the document can
/// be echoed back verbatim into the system prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PersonaConfig(Map<String, Value>);

impl PersonaConfig {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The `name` field, or `"Chatbot"` when absent or null.
    pub fn display_name(&self) -> String {
        match self.get("name") {
            None | Some(Value::Null) => DEFAULT_DISPLAY_NAME.to_string(),
            Some(Value::String(name)) => name.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// Compact JSON; `{:#}` pretty-prints with two-space indentation.
impl fmt::Display for PersonaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = if f.alternate() {
            serde_json::to_string_pretty(&self.0)
        } else {
            serde_json::to_string(&self.0)
        };
        f.write_str(&json.map_err(|_| fmt::Error)?)
    }
}

impl From<Map<String, Value>> for PersonaConfig {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

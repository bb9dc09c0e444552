// src/persona/store.rs
// Directory of persona documents, read fresh on every lookup

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use super::PersonaConfig;
use super::resolver::resolve_filename;
use crate::error::PersonaError;

/// Read-only view over the persona config directory.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    base_dir: PathBuf,
}

impl ConfigStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Resolve a bot-type token and load its document.
    pub async fn load(&self, bot_type: &str) -> Result<Option<PersonaConfig>, PersonaError> {
        let filename = resolve_filename(bot_type);
        debug!("Resolved bot type '{}' to '{}'", bot_type, filename);
        self.load_file(&filename).await
    }

    /// Load a document by filename.
    ///
    /// Returns `Ok(None)` when no such document exists, including names that
    /// would escape the base directory or that the filesystem cannot look up
    /// at all. An empty document (`{}`, `[]`, `null`, ...) also counts as
    /// missing. Any other document that is not a JSON object is reported as
    /// `PersonaError::Malformed`.
    pub async fn load_file(&self, filename: &str) -> Result<Option<PersonaConfig>, PersonaError> {
        if !is_plain_file_name(filename) {
            warn!("Refusing to open persona document outside config dir: {:?}", filename);
            return Ok(None);
        }

        let path = self.base_dir.join(filename);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if is_missing(&e) => {
                debug!("No persona document at {}: {}", path.display(), e);
                return Ok(None);
            }
            Err(source) => return Err(PersonaError::Io { path, source }),
        };

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(value) if is_empty_document(&value) => {
                debug!("Persona document {} is empty", path.display());
                Ok(None)
            }
            Ok(Value::Object(map)) => Ok(Some(PersonaConfig::from(map))),
            Ok(other) => Err(PersonaError::Malformed {
                path,
                reason: format!("expected a JSON object, found {}", json_kind(&other)),
            }),
            Err(e) => Err(PersonaError::Malformed {
                path,
                reason: e.to_string(),
            }),
        }
    }
}

/// True when `name` is exactly one normal path component.
fn is_plain_file_name(name: &str) -> bool {
    if name.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Lookup failures that mean "there is no such document" rather than a read
/// error: the name is too long, a parent is not a directory, or the name
/// holds bytes the OS rejects.
fn is_missing(err: &std::io::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::NotFound
            | ErrorKind::NotADirectory
            | ErrorKind::InvalidFilename
            | ErrorKind::InvalidInput
    )
}

/// JSON values with no content: `null`, `false`, `0`, `""`, `[]` and `{}`.
fn is_empty_document(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// src/config/mod.rs
// Gateway settings from the environment (and .env), overridable from the CLI

use std::path::PathBuf;
use std::str::FromStr;

use crate::llm::openai::{DEFAULT_BASE_URL, DEFAULT_MODEL};

#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    // ── Server
    pub host: String,
    pub port: u16,

    // ── Persona documents and pages
    pub configs_dir: PathBuf,
    pub templates_dir: Option<PathBuf>,

    // ── Completion API
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub model: String,

    // ── Logging
    pub log_level: String,
}

/// Parse `key` through `lookup`, stripping trailing `# comments` and
/// whitespace. Missing or unparseable values fall back to `default`.
fn var_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        None => default,
    }
}

/// Like `var_or` for optional strings; blank values count as unset.
fn var_opt<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl GatewayConfig {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Self {
        if dotenvy::dotenv().is_err() {
            eprintln!("Warning: .env file not found. Using environment variables and defaults.");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: var_or(&lookup, "GATEWAY_HOST", "0.0.0.0".to_string()),
            port: var_or(&lookup, "GATEWAY_PORT", 5000),
            configs_dir: var_or(&lookup, "GATEWAY_CONFIGS_DIR", PathBuf::from("configs")),
            templates_dir: var_opt(&lookup, "GATEWAY_TEMPLATES_DIR").map(PathBuf::from),
            openai_api_key: var_opt(&lookup, "OPENAI_API_KEY"),
            openai_base_url: var_or(&lookup, "OPENAI_BASE_URL", DEFAULT_BASE_URL.to_string()),
            model: var_or(&lookup, "OPENAI_MODEL", DEFAULT_MODEL.to_string()),
            log_level: var_or(&lookup, "GATEWAY_LOG_LEVEL", "info".to_string()),
        }
    }

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn has_api_key(&self) -> bool {
        self.openai_api_key.is_some()
    }

    /// Max tracing level; unknown names mean INFO
    pub fn tracing_level(&self) -> tracing::Level {
        tracing::Level::from_str(self.log_level.trim()).unwrap_or(tracing::Level::INFO)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

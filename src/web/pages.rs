// src/web/pages.rs
// HTML pages rendered with minijinja

use std::path::Path;

use minijinja::{Environment, context};
use serde::Serialize;
use tracing::info;

use crate::error::TemplateError;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");
const BOT_TEMPLATE: &str = include_str!("../../templates/bot.html");

/// One entry on the directory page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonaEntry {
    pub bot_type: String,
    pub name: String,
}

/// Renders the index and per-persona pages.
///
/// Templates come from `templates_dir` when a file of the same name exists
/// there, otherwise the built-in copies are used. HTML autoescaping is on.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new(templates_dir: Option<&Path>) -> Result<Self, TemplateError> {
        let mut env = Environment::new();

        for (name, builtin) in [("index.html", INDEX_TEMPLATE), ("bot.html", BOT_TEMPLATE)] {
            let override_path = templates_dir
                .map(|dir| dir.join(name))
                .filter(|path| path.is_file());

            match override_path {
                Some(path) => {
                    let source = std::fs::read_to_string(&path)
                        .map_err(|source| TemplateError::Io { path: path.clone(), source })?;
                    info!("Using template {}", path.display());
                    env.add_template_owned(name, source)?;
                }
                None => env.add_template(name, builtin)?,
            }
        }

        Ok(Self { env })
    }

    /// Renderer using only the built-in templates
    pub fn builtin() -> Result<Self, TemplateError> {
        Self::new(None)
    }

    pub fn render_index(&self, personas: &[PersonaEntry]) -> Result<String, TemplateError> {
        let template = self.env.get_template("index.html")?;
        Ok(template.render(context! { personas => personas })?)
    }

    pub fn render_bot(&self, bot_type: &str, bot_name: &str) -> Result<String, TemplateError> {
        let template = self.env.get_template("bot.html")?;
        Ok(template.render(context! { bot_type => bot_type, bot_name => bot_name })?)
    }
}

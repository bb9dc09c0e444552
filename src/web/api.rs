// src/web/api.rs
// Route handlers: directory page, persona page, chat

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde_json::{Value, json};
use tracing::{error, warn};

use super::error::{ApiError, ApiResult};
use super::pages::PersonaEntry;
use super::state::AppState;
use crate::persona::known_personas;

/// GET /
pub async fn index(State(state): State<AppState>) -> Response {
    let mut personas = Vec::new();
    for (bot_type, _) in known_personas() {
        match state.store().load(bot_type).await {
            Ok(Some(config)) => personas.push(PersonaEntry {
                bot_type: bot_type.to_string(),
                name: config.display_name(),
            }),
            Ok(None) => {}
            Err(e) => warn!("Skipping '{}' on index: {}", bot_type, e),
        }
    }

    match state.pages.render_index(&personas) {
        Ok(html) => Html(html).into_response(),
        Err(e) => render_failure(e),
    }
}

/// GET /bot/{bot_type}
pub async fn bot_page(State(state): State<AppState>, Path(bot_type): Path<String>) -> Response {
    let config = match state.store().load(&bot_type).await {
        Ok(Some(config)) => config,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                format!("Configuration for '{bot_type}' not found."),
            )
                .into_response();
        }
        Err(e) => {
            error!("Persona '{}' failed to load: {}", bot_type, e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Configuration for '{bot_type}' could not be loaded."),
            )
                .into_response();
        }
    };

    match state.pages.render_bot(&bot_type, &config.display_name()) {
        Ok(html) => Html(html).into_response(),
        Err(e) => render_failure(e),
    }
}

/// POST /chat
///
/// Body `{"botType": "...", "message": "..."}`. Fields that are absent, empty,
/// or not strings are treated as missing, as is a body that is not JSON.
pub async fn chat(State(state): State<AppState>, body: Bytes) -> ApiResult<Json<Value>> {
    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let bot_type = payload.get("botType").and_then(Value::as_str);
    let message = payload.get("message").and_then(Value::as_str);

    let reply = state
        .dispatcher
        .dispatch(bot_type, message)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(json!({ "reply": reply })))
}

fn render_failure(e: impl std::fmt::Display) -> Response {
    error!("Page render failed: {}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
}

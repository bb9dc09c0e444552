// src/web/mod.rs
// HTTP surface: two pages and the chat endpoint

pub mod api;
pub mod error;
pub mod pages;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use error::{ApiError, ApiResult};
pub use pages::{PageRenderer, PersonaEntry};
pub use state::AppState;

/// Create the web server router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::index))
        .route("/bot/{bot_type}", get(api::bot_page))
        .route("/chat", post(api::chat))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

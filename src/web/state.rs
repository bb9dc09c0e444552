// src/web/state.rs
// Web server state management

use std::sync::Arc;

use crate::chat::ChatDispatcher;
use crate::persona::ConfigStore;
use crate::web::pages::PageRenderer;

/// Shared application state. Immutable once built.
#[derive(Clone)]
pub struct AppState {
    /// Persona lookup + completion client
    pub dispatcher: ChatDispatcher,

    /// Page templates
    pub pages: Arc<PageRenderer>,
}

impl AppState {
    pub fn new(dispatcher: ChatDispatcher, pages: PageRenderer) -> Self {
        Self {
            dispatcher,
            pages: Arc::new(pages),
        }
    }

    pub fn store(&self) -> &ConfigStore {
        self.dispatcher.store()
    }
}

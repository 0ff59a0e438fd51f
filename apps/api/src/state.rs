use std::sync::Arc;

use uuid::Uuid;

use crate::clock::Clock;
use crate::config::{ConfigurationError, GOOGLE_API_KEY_VAR};
use crate::errors::AppError;
use crate::layout::LayoutBackend;
use crate::llm_client::GenerativeTextAdapter;
use crate::session::store::{SessionHandle, SessionStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    /// Absent when no credential is configured; generative operations then fail
    /// with a `ConfigurationError` while everything else keeps working.
    pub generator: Option<GenerativeTextAdapter>,
    /// Source of the cover-letter date.
    pub clock: Arc<dyn Clock>,
    /// PDF layout backend. Called from blocking tasks only.
    pub layout: Arc<dyn LayoutBackend>,
}

impl AppState {
    pub fn generator(&self) -> Result<&GenerativeTextAdapter, ConfigurationError> {
        self.generator
            .as_ref()
            .ok_or(ConfigurationError::MissingCredential {
                key: GOOGLE_API_KEY_VAR,
            })
    }

    pub async fn session(&self, id: Uuid) -> Result<SessionHandle, AppError> {
        self.sessions
            .get(id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
    }
}

pub mod health;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::generation::handlers as generation;
use crate::session::handlers as session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session API
        .route("/api/v1/sessions", post(session::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(session::handle_get_session).delete(session::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/profile",
            patch(session::handle_update_profile),
        )
        .route(
            "/api/v1/sessions/:id/education",
            post(session::handle_add_education),
        )
        .route(
            "/api/v1/sessions/:id/education/:index",
            delete(session::handle_remove_education),
        )
        .route(
            "/api/v1/sessions/:id/experience",
            post(session::handle_add_experience),
        )
        .route(
            "/api/v1/sessions/:id/experience/:index",
            delete(session::handle_remove_experience),
        )
        .route(
            "/api/v1/sessions/:id/projects",
            post(session::handle_add_project),
        )
        .route(
            "/api/v1/sessions/:id/projects/:index",
            delete(session::handle_remove_project),
        )
        .route(
            "/api/v1/sessions/:id/downloads/:kind",
            get(session::handle_download),
        )
        // Generation API
        .route(
            "/api/v1/sessions/:id/summary/generate",
            post(generation::handle_generate_summary),
        )
        .route(
            "/api/v1/sessions/:id/documents/resume",
            post(generation::handle_generate_resume),
        )
        .route(
            "/api/v1/sessions/:id/documents/cover-letter",
            post(generation::handle_generate_cover_letter),
        )
        .route(
            "/api/v1/sessions/:id/documents/portfolio",
            post(generation::handle_generate_portfolio),
        )
        .with_state(state)
}

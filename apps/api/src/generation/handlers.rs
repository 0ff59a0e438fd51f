//! Axum route handlers for the Generation API.
//!
//! Each handler holds the session mutex for the whole action, generation
//! calls included, and stores the result only once it fully succeeded.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::generator::{
    build_cover_letter, build_portfolio, build_resume, enrich_summary, CoverLetterRequest,
};
use crate::models::artifacts::{Artifact, ArtifactKind};
use crate::models::resume::ResumeRecord;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
    pub record: ResumeRecord,
}

#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub kind: ArtifactKind,
    pub file_name: String,
    pub mime_type: &'static str,
    pub size_bytes: usize,
    pub download_url: String,
}

impl DocumentResponse {
    fn new(session_id: Uuid, artifact: &Artifact) -> Self {
        Self {
            kind: artifact.kind,
            file_name: artifact.file_name.clone(),
            mime_type: artifact.mime_type(),
            size_bytes: artifact.content.len(),
            download_url: format!("/api/v1/sessions/{session_id}/downloads/{}", artifact.kind),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions/:id/summary/generate
///
/// Generates a summary from a background description and stores it in the record.
/// On failure the existing summary is left as it was.
pub async fn handle_generate_summary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SummaryRequest>,
) -> Result<Json<SummaryResponse>, AppError> {
    let handle = state.session(id).await?;
    let generator = state.generator()?;
    let mut session = handle.lock().await;

    let summary = enrich_summary(generator, &request.prompt).await?;
    session.record.summary = summary.clone();

    Ok(Json(SummaryResponse {
        summary,
        record: session.record.clone(),
    }))
}

/// POST /api/v1/sessions/:id/documents/resume
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DocumentResponse>, AppError> {
    let handle = state.session(id).await?;
    let mut session = handle.lock().await;

    let artifact = build_resume(session.record.clone(), state.layout.clone()).await?;
    let response = DocumentResponse::new(id, &artifact);
    session.artifacts.store(artifact);

    info!(session_id = %id, "Resume PDF stored");
    Ok(Json(response))
}

/// POST /api/v1/sessions/:id/documents/cover-letter
///
/// Body: `{ "job_description": "...", "mode": "template" | "generative" }`.
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CoverLetterRequest>,
) -> Result<Json<DocumentResponse>, AppError> {
    let handle = state.session(id).await?;
    let mut session = handle.lock().await;

    let artifact = build_cover_letter(
        session.record.clone(),
        &request,
        state.generator(),
        state.clock.today(),
        state.layout.clone(),
    )
    .await?;
    let response = DocumentResponse::new(id, &artifact);
    session.artifacts.store(artifact);

    info!(session_id = %id, mode = ?request.mode, "Cover letter PDF stored");
    Ok(Json(response))
}

/// POST /api/v1/sessions/:id/documents/portfolio
pub async fn handle_generate_portfolio(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DocumentResponse>, AppError> {
    let handle = state.session(id).await?;
    let mut session = handle.lock().await;

    let artifact = build_portfolio(&session.record)?;
    let response = DocumentResponse::new(id, &artifact);
    session.artifacts.store(artifact);

    info!(session_id = %id, "Portfolio stored");
    Ok(Json(response))
}

//! Axum route handlers for the Session API: record editing and downloads.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::artifacts::ArtifactKind;
use crate::models::drafts::{EducationDraft, ExperienceDraft, ProjectDraft};
use crate::models::resume::{remove_at, ProfileUpdate, ResumeRecord};
use crate::session::store::Session;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub record: ResumeRecord,
    pub artifacts: Vec<ArtifactKind>,
}

impl SessionResponse {
    pub fn new(session_id: Uuid, session: &Session) -> Self {
        Self {
            session_id,
            record: session.record.clone(),
            artifacts: session.artifacts.kinds(),
        }
    }
}

/// Which ordered list of the record an entry route addresses.
#[derive(Debug, Clone, Copy)]
enum EntryList {
    Education,
    Experience,
    Projects,
}

impl EntryList {
    fn name(self) -> &'static str {
        match self {
            EntryList::Education => "Education entry",
            EntryList::Experience => "Experience entry",
            EntryList::Projects => "Project",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Session lifecycle
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionResponse>) {
    let (id, handle) = state.sessions.create().await;
    let session = handle.lock().await;
    (StatusCode::CREATED, Json(SessionResponse::new(id, &session)))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let handle = state.session(id).await?;
    let session = handle.lock().await;
    Ok(Json(SessionResponse::new(id, &session)))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Session {id} not found")))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Record editing
// ────────────────────────────────────────────────────────────────────────────

/// PATCH /api/v1/sessions/:id/profile
///
/// Sets any subset of the scalar fields; omitted fields keep their value.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<SessionResponse>, AppError> {
    let handle = state.session(id).await?;
    let mut session = handle.lock().await;
    session.record.apply_profile(update);
    Ok(Json(SessionResponse::new(id, &session)))
}

/// POST /api/v1/sessions/:id/education
pub async fn handle_add_education(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(draft): Json<EducationDraft>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    let entry = draft.validate()?;
    let handle = state.session(id).await?;
    let mut session = handle.lock().await;
    session.record.education.push(entry);
    info!(session_id = %id, count = session.record.education.len(), "Education entry added");
    Ok((StatusCode::CREATED, Json(SessionResponse::new(id, &session))))
}

/// POST /api/v1/sessions/:id/experience
pub async fn handle_add_experience(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(draft): Json<ExperienceDraft>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    let entry = draft.validate()?;
    let handle = state.session(id).await?;
    let mut session = handle.lock().await;
    session.record.experience.push(entry);
    info!(session_id = %id, count = session.record.experience.len(), "Experience entry added");
    Ok((StatusCode::CREATED, Json(SessionResponse::new(id, &session))))
}

/// POST /api/v1/sessions/:id/projects
pub async fn handle_add_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(draft): Json<ProjectDraft>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    let entry = draft.validate()?;
    let handle = state.session(id).await?;
    let mut session = handle.lock().await;
    session.record.projects.push(entry);
    info!(session_id = %id, count = session.record.projects.len(), "Project added");
    Ok((StatusCode::CREATED, Json(SessionResponse::new(id, &session))))
}

async fn remove_entry(
    state: &AppState,
    id: Uuid,
    list: EntryList,
    index: usize,
) -> Result<Json<SessionResponse>, AppError> {
    let handle = state.session(id).await?;
    let mut session = handle.lock().await;
    let record = &mut session.record;
    let removed = match list {
        EntryList::Education => remove_at(&mut record.education, index).is_some(),
        EntryList::Experience => remove_at(&mut record.experience, index).is_some(),
        EntryList::Projects => remove_at(&mut record.projects, index).is_some(),
    };
    if !removed {
        return Err(AppError::NotFound(format!(
            "{} {index} not found",
            list.name()
        )));
    }
    Ok(Json(SessionResponse::new(id, &session)))
}

/// DELETE /api/v1/sessions/:id/education/:index
pub async fn handle_remove_education(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Result<Json<SessionResponse>, AppError> {
    remove_entry(&state, id, EntryList::Education, index).await
}

/// DELETE /api/v1/sessions/:id/experience/:index
pub async fn handle_remove_experience(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Result<Json<SessionResponse>, AppError> {
    remove_entry(&state, id, EntryList::Experience, index).await
}

/// DELETE /api/v1/sessions/:id/projects/:index
pub async fn handle_remove_project(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Result<Json<SessionResponse>, AppError> {
    remove_entry(&state, id, EntryList::Projects, index).await
}

// ────────────────────────────────────────────────────────────────────────────
// Downloads
// ────────────────────────────────────────────────────────────────────────────

/// `Content-Disposition` value.
///
/// `filename` is an ASCII fallback: quotes, control and non-ASCII characters
/// become `_`. Non-ASCII names also get an RFC 5987 `filename*` parameter.
fn attachment(file_name: &str) -> String {
    let fallback: String = file_name
        .chars()
        .map(|c| {
            if c == '"' || c == '\\' || c.is_control() || !c.is_ascii() {
                '_'
            } else {
                c
            }
        })
        .collect();
    if file_name.is_ascii() {
        format!("attachment; filename=\"{fallback}\"")
    } else {
        format!(
            "attachment; filename=\"{fallback}\"; filename*=UTF-8''{}",
            urlencoding::encode(file_name)
        )
    }
}

/// GET /api/v1/sessions/:id/downloads/:kind
///
/// Serves the stored artifact with its MIME type and an attachment file name.
pub async fn handle_download(
    State(state): State<AppState>,
    Path((id, kind)): Path<(Uuid, String)>,
) -> Result<Response, AppError> {
    let kind: ArtifactKind = kind.parse().map_err(AppError::NotFound)?;
    let handle = state.session(id).await?;
    let session = handle.lock().await;
    let artifact = session
        .artifacts
        .get(kind)
        .ok_or_else(|| AppError::NotFound(format!("No {kind} has been generated yet")))?;

    Ok((
        [
            (header::CONTENT_TYPE, artifact.mime_type().to_string()),
            (header::CONTENT_DISPOSITION, attachment(&artifact.file_name)),
        ],
        artifact.content.clone(),
    )
        .into_response())
}

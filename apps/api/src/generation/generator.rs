//! Document generation: turns a record snapshot into finished artifacts.
//!
//! Flow per document: personal-info gate → body text (cover letter only) →
//! emitter (PDF layout on a blocking thread) → `Artifact`.
//!
//! Nothing here touches session state. Callers store the returned artifact,
//! so a failure at any step leaves the previous artifact in place.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use crate::config::ConfigurationError;
use crate::content::cover_letter::{template_body, CoverLetterBody, CoverLetterMode};
use crate::content::prompts::{build_cover_letter_prompt, build_summary_prompt};
use crate::emit::{render_cover_letter, render_portfolio, render_resume};
use crate::errors::AppError;
use crate::layout::{LayoutBackend, RenderError};
use crate::llm_client::GenerativeTextAdapter;
use crate::models::artifacts::{Artifact, ArtifactKind};
use crate::models::resume::{present, ResumeRecord};

const PERSONAL_INFO_REQUIRED: &str =
    "Please fill in your personal information first: full name is required";

#[derive(Debug, Clone, Deserialize)]
pub struct CoverLetterRequest {
    pub job_description: String,
    #[serde(default)]
    pub mode: CoverLetterMode,
}

/// Documents can only be generated once the record carries a name.
pub fn require_personal_info(record: &ResumeRecord) -> Result<(), AppError> {
    match present(&record.full_name) {
        Some(_) => Ok(()),
        None => Err(AppError::Validation(PERSONAL_INFO_REQUIRED.to_string())),
    }
}

/// Runs a layout job on the blocking pool.
async fn layout_blocking<F>(job: F) -> Result<Vec<u8>, RenderError>
where
    F: FnOnce() -> Result<Vec<u8>, RenderError> + Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| RenderError::Task(e.to_string()))?
}

// ────────────────────────────────────────────────────────────────────────────
// Summary enrichment
// ────────────────────────────────────────────────────────────────────────────

/// Produces a professional summary from a free-text background description.
pub async fn enrich_summary(
    generator: &GenerativeTextAdapter,
    background: &str,
) -> Result<String, AppError> {
    if background.trim().is_empty() {
        return Err(AppError::Validation(
            "Describe your background to generate a summary".to_string(),
        ));
    }
    let summary = generator.generate(&build_summary_prompt(background)).await?;
    info!(chars = summary.len(), "Summary generated");
    Ok(summary)
}

// ────────────────────────────────────────────────────────────────────────────
// Documents
// ────────────────────────────────────────────────────────────────────────────

pub async fn build_resume(
    record: ResumeRecord,
    layout: Arc<dyn LayoutBackend>,
) -> Result<Artifact, AppError> {
    require_personal_info(&record)?;
    let stem = record.file_stem();
    let bytes = layout_blocking(move || render_resume(&record, layout.as_ref())).await?;
    info!(bytes = bytes.len(), "Resume rendered");
    Ok(Artifact::new(ArtifactKind::ResumePdf, &stem, bytes))
}

/// Produces the cover-letter body with the requested strategy.
///
/// Generative mode never falls back to the template: a missing credential or
/// exhausted retries are reported as errors.
pub async fn cover_letter_body(
    record: &ResumeRecord,
    request: &CoverLetterRequest,
    generator: Result<&GenerativeTextAdapter, ConfigurationError>,
) -> Result<CoverLetterBody, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Please provide a job description".to_string(),
        ));
    }

    match request.mode {
        CoverLetterMode::Template => Ok(template_body(record, &request.job_description)),
        CoverLetterMode::Generative => {
            let generator = generator?;
            let prompt = build_cover_letter_prompt(record, &request.job_description)
                .map_err(anyhow::Error::from)?;
            let text = generator.generate(&prompt).await?;
            Ok(CoverLetterBody::from_text(&text))
        }
    }
}

pub async fn build_cover_letter(
    record: ResumeRecord,
    request: &CoverLetterRequest,
    generator: Result<&GenerativeTextAdapter, ConfigurationError>,
    date: NaiveDate,
    layout: Arc<dyn LayoutBackend>,
) -> Result<Artifact, AppError> {
    require_personal_info(&record)?;
    let body = cover_letter_body(&record, request, generator).await?;
    let stem = record.file_stem();
    let bytes =
        layout_blocking(move || render_cover_letter(&record, &body, date, layout.as_ref())).await?;
    info!(bytes = bytes.len(), mode = ?request.mode, "Cover letter rendered");
    Ok(Artifact::new(ArtifactKind::CoverLetterPdf, &stem, bytes))
}

pub fn build_portfolio(record: &ResumeRecord) -> Result<Artifact, AppError> {
    require_personal_info(record)?;
    let html = render_portfolio(record)?;
    info!(bytes = html.len(), "Portfolio rendered");
    Ok(Artifact::new(
        ArtifactKind::Portfolio,
        &record.file_stem(),
        html.into_bytes(),
    ))
}

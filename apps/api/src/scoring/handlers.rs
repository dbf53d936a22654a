use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::interview::{InterviewAnalysis, InterviewSessionMetrics};
use crate::models::resume::{ResumeAnalysis, ResumeInput};
use crate::models::role::{Role, RoleProfile, ROLE_PROFILES};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeResumeRequest {
    /// `null` or missing means no file was uploaded.
    #[serde(default)]
    pub resume: Option<ResumeInput>,
}

/// GET /api/v1/roles
pub async fn handle_list_roles() -> Json<&'static [RoleProfile]> {
    Json(ROLE_PROFILES.as_slice())
}

/// POST /api/v1/resume/analyze
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeResumeRequest>,
) -> Json<ResumeAnalysis> {
    let analysis = state.resume_scorer.score(req.resume.as_ref());
    info!(ats_score = analysis.ats_score, "resume analyzed");
    Json(analysis)
}

/// POST /api/v1/resume/upload
///
/// Multipart fields: `file` (the resume; only its name and size are read), `role`, and an
/// optional `extracted_text`. A request without a `file` part scores as "no resume uploaded".
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeAnalysis>, AppError> {
    let mut file: Option<(String, u64)> = None;
    let mut role = String::new();
    let mut extracted_text = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or_default().trim().to_string();
                if file_name.is_empty() {
                    return Err(AppError::Validation(
                        "the file part must carry a file name".to_string(),
                    ));
                }
                let bytes = field.bytes().await?;
                file = Some((file_name, bytes.len() as u64));
            }
            Some("role") => role = field.text().await?,
            Some("extracted_text") => {
                let raw = field.bytes().await?;
                extracted_text = match String::from_utf8(raw.to_vec()) {
                    Ok(text) => Some(text),
                    Err(e) => {
                        warn!("Ignoring extracted_text that is not valid UTF-8: {e}");
                        None
                    }
                };
            }
            other => warn!("Ignoring unexpected multipart field {other:?}"),
        }
    }

    let resume = file.map(|(file_name, file_size_bytes)| ResumeInput {
        file_name,
        file_size_bytes,
        file_extension: String::new(),
        extracted_text,
        selected_role: Role::parse(&role),
    });

    let analysis = state.resume_scorer.score(resume.as_ref());
    info!(
        ats_score = analysis.ats_score,
        uploaded = resume.is_some(),
        "resume upload analyzed"
    );
    Ok(Json(analysis))
}

/// POST /api/v1/interview/analyze
pub async fn handle_analyze_interview(
    State(state): State<AppState>,
    Json(session): Json<InterviewSessionMetrics>,
) -> Json<InterviewAnalysis> {
    let analysis = state.interview_scorer.score(&session);
    info!(
        overall_score = analysis.overall_score,
        role = %session.selected_role,
        "interview analyzed"
    );
    Json(analysis)
}

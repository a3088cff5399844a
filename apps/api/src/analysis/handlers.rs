//! Axum route handler for the Analysis API.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::analysis::prompts::build_prompt;
use crate::analysis::validation::{read_upload_form, validate_upload, AnalysisRequest, UploadForm};
use crate::errors::AppError;
use crate::extraction::normalize_extracted_text;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: String,
}

/// POST /analyze
///
/// Multipart upload: `resume` (PDF file), `jobDescription`, `analysisOption`.
/// A body that is not multipart at all is treated as carrying no file.
#[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let form = match multipart {
        Ok(multipart) => read_upload_form(multipart).await?,
        Err(rejection) => {
            debug!("Request is not a multipart upload: {rejection}");
            UploadForm::default()
        }
    };
    let request = validate_upload(form)?;

    let analysis = run_analysis(&state, request).await?;
    Ok(Json(AnalyzeResponse { analysis }))
}

/// Extract → prompt → generate. Extraction failure short-circuits before any
/// generation call.
pub async fn run_analysis(state: &AppState, request: AnalysisRequest) -> Result<String, AppError> {
    info!(
        "Analyzing resume: mode={}, upload_bytes={}",
        request.mode.as_str(),
        request.resume.len()
    );

    let raw_text = state.extractor.extract(request.resume).await?;
    let resume_text = normalize_extracted_text(&raw_text);
    debug!(
        "Resume text chars={}, job description chars={}",
        resume_text.chars().count(),
        request.job_description.chars().count()
    );

    let prompt = build_prompt(
        resume_text,
        &request.job_description,
        request.mode,
        &state.prompt_policy,
    );

    let analysis = state.generator.generate(&prompt).await?;
    info!("Analysis complete: response_chars={}", analysis.chars().count());

    Ok(analysis)
}

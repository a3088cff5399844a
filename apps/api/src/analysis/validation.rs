//! Upload parsing and validation for `POST /analyze`.

use axum::extract::Multipart;
use bytes::Bytes;

use crate::analysis::prompts::AnalysisMode;
use crate::errors::AppError;

pub const RESUME_FIELD: &str = "resume";
pub const JOB_DESCRIPTION_FIELD: &str = "jobDescription";
pub const ANALYSIS_OPTION_FIELD: &str = "analysisOption";

/// A file part from the multipart body.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub data: Bytes,
}

/// Raw multipart contents, before validation.
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    /// Every file part named `resume`, in arrival order.
    pub resumes: Vec<UploadedFile>,
    pub job_description: Option<String>,
    pub analysis_option: Option<String>,
}

/// A validated analysis request.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub resume: Bytes,
    pub job_description: String,
    pub mode: AnalysisMode,
}

/// Drains the multipart stream into an `UploadForm`.
///
/// A `resume` part only counts as the upload when it carries a filename.
/// Unknown fields are skipped.
pub async fn read_upload_form(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            RESUME_FIELD => {
                let Some(file_name) = field.file_name().map(str::to_string) else {
                    continue;
                };
                let data = field.bytes().await?;
                form.resumes.push(UploadedFile { file_name, data });
            }
            JOB_DESCRIPTION_FIELD => form.job_description = Some(field.text().await?),
            ANALYSIS_OPTION_FIELD => form.analysis_option = Some(field.text().await?),
            _ => {}
        }
    }

    Ok(form)
}

/// File-type gate for uploads: a literal, case-sensitive `.pdf` suffix.
/// Content is not inspected.
pub fn is_allowed_resume_file(file_name: &str) -> bool {
    file_name.ends_with(".pdf")
}

/// Exactly one `resume` file is accepted; the outcome never depends on part order.
pub fn validate_upload(mut form: UploadForm) -> Result<AnalysisRequest, AppError> {
    if form.resumes.len() > 1 {
        return Err(AppError::MultipleFiles);
    }
    let resume = form.resumes.pop().ok_or(AppError::MissingFile)?;
    if !is_allowed_resume_file(&resume.file_name) {
        return Err(AppError::UnsupportedFileType);
    }

    // Missing or empty option means Quick Scan; other values go through mode matching.
    let mode = match form.analysis_option.as_deref() {
        None | Some("") => AnalysisMode::QuickScan,
        Some(option) => AnalysisMode::from_option(option),
    };

    Ok(AnalysisRequest {
        resume: resume.data,
        job_description: form.job_description.unwrap_or_default(),
        mode,
    })
}

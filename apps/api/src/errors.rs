use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::ExtractionError;
use crate::llm_client::GenerationError;

/// Generic message returned for any downstream (extraction or generation) failure.
pub const ANALYSIS_FAILURE_MESSAGE: &str = "An error occurred during resume analysis";

/// Message returned when the multipart stream itself cannot be read.
pub const UPLOAD_REJECTED_MESSAGE: &str = "Invalid resume upload";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No resume file uploaded")]
    MissingFile,

    #[error("Only PDF files are allowed")]
    UnsupportedFileType,

    #[error("Only one resume file is allowed")]
    MultipleFiles,

    #[error("Upload rejected: {0}")]
    UploadRejected(#[from] MultipartError),

    #[error("Extraction failure: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Generation failure: {0}")]
    Generation(#[from] GenerationError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingFile | AppError::UnsupportedFileType | AppError::MultipleFiles => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::UploadRejected(e) => {
                tracing::warn!("Multipart upload rejected: {e}");
                (e.status(), UPLOAD_REJECTED_MESSAGE.to_string())
            }
            // Extraction and generation collapse into one opaque failure.
            AppError::Extraction(e) => {
                tracing::error!("Resume text extraction failed: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ANALYSIS_FAILURE_MESSAGE.to_string(),
                )
            }
            AppError::Generation(e) => {
                tracing::error!("Resume analysis generation failed: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ANALYSIS_FAILURE_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_missing_file_is_bad_request() {
        let response = AppError::MissingFile.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "No resume file uploaded" })
        );
    }

    #[tokio::test]
    async fn test_unsupported_file_type_is_bad_request() {
        let response = AppError::UnsupportedFileType.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Only PDF files are allowed" })
        );
    }

    #[tokio::test]
    async fn test_multiple_files_is_bad_request() {
        let response = AppError::MultipleFiles.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Only one resume file is allowed" })
        );
    }

    #[tokio::test]
    async fn test_generation_error_detail_is_not_exposed() {
        let err = AppError::Generation(GenerationError::Api {
            status: 429,
            message: "quota exhausted for project secret-project".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body, json!({ "error": ANALYSIS_FAILURE_MESSAGE }));
        assert!(!body.to_string().contains("secret-project"));
    }

    #[tokio::test]
    async fn test_extraction_error_is_generic_server_error() {
        let err = AppError::Extraction(ExtractionError::Parse("bad xref table".to_string()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": ANALYSIS_FAILURE_MESSAGE })
        );
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::types::ErrorBody;

/// Every way a single `analyze` request can fail
#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("Invalid prompt_id. Please use one of: {valid_ids}.")]
    InvalidPromptId { prompt_id: String, valid_ids: String },
    #[error("Could not extract a YouTube video id from url: {url}")]
    VideoIdNotFound { url: String },
    #[error("{0}")]
    MalformedBody(String),
    #[error("{0}")]
    Backend(String),
}

impl AnalyzeError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AnalyzeError::InvalidPromptId { .. } | AnalyzeError::VideoIdNotFound { .. } => {
                StatusCode::BAD_REQUEST
            }
            AnalyzeError::MalformedBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AnalyzeError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AnalyzeError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

use serde::{Deserialize, Serialize};

/// Body of `POST /analyze-video`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VideoRequest {
    pub url: String,
    pub prompt_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResponse {
    pub response: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

//! # HTTP surface
//!
//! `POST /analyze-video` plus the CORS policy for the hosted frontend.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header::InvalidHeaderValue, HeaderValue},
    routing::post,
    Json, Router,
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    dispatcher::Dispatcher,
    error::AnalyzeError,
    llm::generator::Generator,
    types::{AnalysisResponse, VideoRequest},
};

pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://youtubesummariser.netlify.app";

/// CORS policy admitting a single origin with credentials.
///
/// Wildcard methods and headers cannot be combined with credentials, so the
/// requested ones are mirrored back instead.
pub fn cors_layer(allowed_origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    let origin = HeaderValue::from_str(allowed_origin)?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

pub fn router<G>(dispatcher: Dispatcher<G>, cors: CorsLayer) -> Router
where
    G: Generator + Send + Sync + 'static,
{
    Router::new()
        .route("/analyze-video", post(analyze_video::<G>))
        .with_state(Arc::new(dispatcher))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn analyze_video<G>(
    State(dispatcher): State<Arc<Dispatcher<G>>>,
    payload: Result<Json<VideoRequest>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, AnalyzeError>
where
    G: Generator + Send + Sync + 'static,
{
    let Json(request) = payload.map_err(|e| {
        tracing::warn!(error = %e, "Rejected request body");
        AnalyzeError::MalformedBody(e.body_text())
    })?;

    dispatcher.analyze(&request).await.map(Json)
}

use crate::{
    error::AnalyzeError,
    llm::generator::Generator,
    prompts::PromptRegistry,
    types::{AnalysisResponse, VideoRequest},
    yt::extract_video_id,
};

// Resolves a request to (instruction, video id) and hands it to the generation backend
#[derive(Debug)]
pub struct Dispatcher<G>
where
    G: Generator + Send + Sync + 'static,
{
    registry: PromptRegistry,
    generator: G,
}

impl<G> Dispatcher<G>
where
    G: Generator + Send + Sync + 'static,
{
    pub fn new(registry: PromptRegistry, generator: G) -> Self {
        Dispatcher {
            registry,
            generator,
        }
    }

    /// Runs one request through the pipeline.
    ///
    /// The prompt id and the video id are both validated before the backend is called,
    /// so a rejected request never costs a backend round trip.
    #[tracing::instrument(skip_all, fields(url = %request.url, prompt_id = %request.prompt_id))]
    pub async fn analyze(&self, request: &VideoRequest) -> Result<AnalysisResponse, AnalyzeError> {
        let template = self.registry.get(&request.prompt_id).ok_or_else(|| {
            tracing::warn!("Unknown prompt_id");
            AnalyzeError::InvalidPromptId {
                prompt_id: request.prompt_id.clone(),
                valid_ids: self.registry.quoted_ids(),
            }
        })?;

        let video_id = extract_video_id(&request.url).ok_or_else(|| {
            tracing::warn!("No video id found in url");
            AnalyzeError::VideoIdNotFound {
                url: request.url.clone(),
            }
        })?;

        let response = self
            .generator
            .generate(template.instruction, &video_id)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, %video_id, "Failed to generate analysis");
                AnalyzeError::Backend(e.to_string())
            })?;

        tracing::info!(%video_id, chars = response.len(), "Analysis generated");

        Ok(AnalysisResponse { response })
    }
}

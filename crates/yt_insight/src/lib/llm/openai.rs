use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{llm::generator::Generator, yt::VideoId};

#[derive(Debug, Clone)]
pub struct OpenAIClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

#[derive(Debug, thiserror::Error)]
pub enum OpenAIError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("No content in completion response")]
    EmptyResponse,
}

impl OpenAIClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com/v1";
    pub const DEFAULT_MODEL: &'static str = "gpt-4o-search-preview";

    /// A missing `api_key` is not rejected here; the API answers with 401 on first use.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: Self::DEFAULT_BASE_URL.into(),
            model: Self::DEFAULT_MODEL.into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn completion_request<'a>(&'a self, instruction: &'a str, video_id: &VideoId) -> CompletionRequest<'a> {
        CompletionRequest {
            model: &self.model,
            web_search_options: WebSearchOptions {
                search_context_size: "medium",
            },
            messages: vec![
                CompletionMessage {
                    role: "system",
                    content: instruction.to_string(),
                },
                CompletionMessage {
                    role: "system",
                    content: format!("YouTube video: {}", video_id.watch_url()),
                },
                CompletionMessage {
                    role: "user",
                    content: String::new(),
                },
            ],
        }
    }

    pub async fn send_completion_request(
        &self,
        body: &CompletionRequest<'_>,
    ) -> Result<CompletionResponse, OpenAIError> {
        let mut request = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .json(body);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let resp = request
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(OpenAIError::Api { status, message });
        }

        Ok(resp.json::<CompletionResponse>().await?)
    }
}

#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub web_search_options: WebSearchOptions,
    pub messages: Vec<CompletionMessage>,
}

#[derive(Debug, Serialize)]
pub struct WebSearchOptions {
    pub search_context_size: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CompletionMessage {
    pub role: &'static str,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub id: String,
    pub choices: Vec<CompletionChoice>,
}

impl CompletionResponse {
    /// Text of the first choice, if it carries any
    pub fn into_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
    }
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub index: u32,
    pub message: ResponseMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub role: String,
    pub content: Option<String>,
}

impl Generator for OpenAIClient {
    type Error = OpenAIError;

    #[tracing::instrument(skip(self, instruction), fields(model = %self.model))]
    async fn generate(&self, instruction: &str, video_id: &VideoId) -> Result<String, Self::Error> {
        let body = self.completion_request(instruction, video_id);

        self.send_completion_request(&body)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to generate completion"))?
            .into_text()
            .ok_or(OpenAIError::EmptyResponse)
    }
}

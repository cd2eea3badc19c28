mod dispatcher;
mod error;
pub mod llm;
pub mod prompts;
pub mod server;
pub mod tracing;
pub mod types;
pub mod yt;

pub use dispatcher::Dispatcher;
pub use error::AnalyzeError;
pub use llm::{
    generator::Generator,
    openai::{OpenAIClient, OpenAIError},
};
pub use prompts::{PromptRegistry, PromptTemplate};
pub use types::{AnalysisResponse, ErrorBody, VideoRequest};

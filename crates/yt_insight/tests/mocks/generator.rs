use std::sync::{Arc, Mutex};
use yt_insight::{yt::VideoId, Generator};

#[derive(Clone)]
pub struct MockGenerator {
    pub response_text: String,
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
    pub fail_with: Option<String>,
}

impl MockGenerator {
    pub fn new(response_text: &str) -> Self {
        Self {
            response_text: response_text.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            response_text: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl Generator for MockGenerator {
    type Error = anyhow::Error;

    async fn generate(&self, instruction: &str, video_id: &VideoId) -> Result<String, Self::Error> {
        self.calls
            .lock()
            .unwrap()
            .push((instruction.to_string(), video_id.to_string()));
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.response_text.clone())
    }
}

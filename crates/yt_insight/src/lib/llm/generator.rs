use std::{fmt::Display, future::Future};

use crate::yt::VideoId;

/// A backend that produces text about a video, steered by an instruction.
///
/// Implementations run a single-turn generation: `instruction` is the controlling
/// system prompt, the video is the only context and the user turn is empty.
pub trait Generator {
    type Error: Display + Send;

    fn generate(
        &self,
        instruction: &str,
        video_id: &VideoId,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}

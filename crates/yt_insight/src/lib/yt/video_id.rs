//! # Video id extraction
//!
//! Pulls the 11-character YouTube video id out of the URL shapes users paste:
//! short links, `watch?v=`, `/embed/`, `/v/` and any other path carrying a `?v=` query.

use std::{fmt, ops::Deref, sync::LazyLock};

static VIDEO_ID_RE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"(?:youtu\.be/|youtube\.com/(?:watch\?v=|embed/|v/|.+\?v=))([A-Za-z0-9_-]{11})")
        .unwrap()
});

/// An 11-character YouTube video identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    pub const LEN: usize = 11;
    const WATCH_URL: &'static str = "https://www.youtube.com/watch";

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical watch URL for this id
    pub fn watch_url(&self) -> String {
        format!("{}?v={}", Self::WATCH_URL, self.0)
    }
}

impl Deref for VideoId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns the first video id found in `url`, or `None` when no known URL shape matches.
///
/// The id is not checked against YouTube; any 11 ASCII alphanumerics, hyphens or
/// underscores after a recognised marker are accepted.
pub fn extract_video_id(url: &str) -> Option<VideoId> {
    VIDEO_ID_RE
        .captures(url)
        .and_then(|cap| cap.get(1))
        .map(|m| VideoId(m.as_str().to_string()))
}

pub mod video_id;

pub use video_id::{extract_video_id, VideoId};

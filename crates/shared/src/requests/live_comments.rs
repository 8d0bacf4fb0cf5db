use serde::{Deserialize, Serialize};

/// Configuration for a live-video comment overlay view, including the
/// initial display state the view is created with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentViewConfig {
    pub video_id: String,
    pub initially_visible: bool,
}

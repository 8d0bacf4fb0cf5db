//! Live-video comment overlay records.

use serde::{Deserialize, Serialize};

/// Handle for a comment overlay view created over a live video. The
/// platform owns rendering; this record only identifies the view and its
/// display state at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentView {
    pub id: String,
    pub visible: bool,
}

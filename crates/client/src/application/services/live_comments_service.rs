//! Live-video comment overlay service.

use std::sync::Arc;

use playpark_domain::CommentView;
use playpark_shared::CommentViewConfig;

use crate::application::error::CallError;
use crate::application::relay::relay;
use crate::ports::outbound::LiveCommentsPort;

const NAMESPACE: &str = "live_comments";

/// Adapted comment overlay operations.
#[derive(Clone)]
pub struct LiveCommentsService {
    port: Arc<dyn LiveCommentsPort>,
}

impl LiveCommentsService {
    pub fn new(port: Arc<dyn LiveCommentsPort>) -> Self {
        Self { port }
    }

    /// Create a comment overlay view with the display state given in the
    /// config.
    pub async fn create_view(&self, config: CommentViewConfig) -> Result<CommentView, CallError> {
        relay(NAMESPACE, "create_view", self.port.create_view(config)).await
    }
}

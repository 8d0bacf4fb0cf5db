//! Community service - official-surface eligibility checks and dialogs.

use std::sync::Arc;

use crate::application::error::CallError;
use crate::application::relay::relay;
use crate::ports::outbound::CommunityPort;

const NAMESPACE: &str = "community";

/// Adapted community operations. Every trigger opens a platform-owned
/// dialog; this layer neither displays nor suppresses it.
#[derive(Clone)]
pub struct CommunityService {
    port: Arc<dyn CommunityPort>,
}

impl CommunityService {
    pub fn new(port: Arc<dyn CommunityPort>) -> Self {
        Self { port }
    }

    pub async fn can_follow_official_page(&self) -> Result<bool, CallError> {
        relay(
            NAMESPACE,
            "can_follow_official_page",
            self.port.can_follow_official_page(),
        )
        .await
    }

    pub async fn follow_official_page(&self) -> Result<(), CallError> {
        relay(
            NAMESPACE,
            "follow_official_page",
            self.port.follow_official_page(),
        )
        .await
    }

    pub async fn can_join_official_group(&self) -> Result<bool, CallError> {
        relay(
            NAMESPACE,
            "can_join_official_group",
            self.port.can_join_official_group(),
        )
        .await
    }

    pub async fn join_official_group(&self) -> Result<(), CallError> {
        relay(
            NAMESPACE,
            "join_official_group",
            self.port.join_official_group(),
        )
        .await
    }

    pub async fn can_subscribe_live_video(&self) -> Result<bool, CallError> {
        relay(
            NAMESPACE,
            "can_subscribe_live_video",
            self.port.can_subscribe_live_video(),
        )
        .await
    }

    pub async fn subscribe_live_video(&self) -> Result<(), CallError> {
        relay(
            NAMESPACE,
            "subscribe_live_video",
            self.port.subscribe_live_video(),
        )
        .await
    }
}

//! Community ports: official-surface follow/join dialogs and live-video
//! comment overlays.

use async_trait::async_trait;
use playpark_domain::CommentView;
use playpark_shared::CommentViewConfig;

use super::ProviderError;

/// Eligibility checks and overlay triggers for the game's official
/// community surfaces. Each trigger opens a platform-owned dialog; this
/// layer neither displays nor suppresses it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommunityPort: Send + Sync {
    async fn can_follow_official_page(&self) -> Result<bool, ProviderError>;

    async fn follow_official_page(&self) -> Result<(), ProviderError>;

    async fn can_join_official_group(&self) -> Result<bool, ProviderError>;

    async fn join_official_group(&self) -> Result<(), ProviderError>;

    async fn can_subscribe_live_video(&self) -> Result<bool, ProviderError>;

    async fn subscribe_live_video(&self) -> Result<(), ProviderError>;
}

/// Live-video comment overlay operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LiveCommentsPort: Send + Sync {
    /// Create a comment overlay view with its initial display state.
    async fn create_view(&self, config: CommentViewConfig) -> Result<CommentView, ProviderError>;
}

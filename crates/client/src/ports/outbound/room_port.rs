//! Room port: AR and camera effects plus the current live match.

use async_trait::async_trait;
use playpark_domain::LiveMatch;
use playpark_shared::{ArEffectConfig, CameraEffectConfig};

use super::ProviderError;

/// Operations on the live room the game is running in.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomPort: Send + Sync {
    async fn show_ar_effect(&self, config: ArEffectConfig) -> Result<(), ProviderError>;

    /// The live match currently running in this room.
    async fn current_match(&self) -> Result<LiveMatch, ProviderError>;

    async fn load_camera_effect(&self, config: CameraEffectConfig) -> Result<(), ProviderError>;

    async fn clear_camera_effect(&self) -> Result<(), ProviderError>;
}

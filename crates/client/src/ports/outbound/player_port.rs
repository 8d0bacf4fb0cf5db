//! Player port: identity accessors, cloud key-value data, connected
//! players, and bot subscription.

use std::collections::HashMap;

use async_trait::async_trait;
use playpark_domain::{ConnectedPlayer, PlayerId, SignedPlayerInfo};
use url::Url;

use super::ProviderError;

/// Operations on the current player.
///
/// The synchronous accessors mirror the platform's own split: they are
/// plain lookups, not deferred calls. They must not be invoked before the
/// platform session has started; earlier invocation observes `None`,
/// never a failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlayerPort: Send + Sync {
    /// Unique identifier of the current player.
    fn id(&self) -> Option<PlayerId>;

    /// Display name of the current player.
    fn name(&self) -> Option<String>;

    /// Profile photo of the current player.
    fn photo(&self) -> Option<Url>;

    /// The player's identifier with a platform signature for server-side
    /// verification. An optional request payload is folded into the
    /// signature by the platform.
    async fn signed_info(
        &self,
        payload: Option<String>,
    ) -> Result<SignedPlayerInfo, ProviderError>;

    /// Fetch cloud key-value data for the given keys.
    async fn cloud_data(
        &self,
        keys: Vec<String>,
    ) -> Result<HashMap<String, serde_json::Value>, ProviderError>;

    /// Store cloud key-value data. The platform may buffer writes until
    /// [`PlayerPort::flush_cloud_data`].
    async fn set_cloud_data(
        &self,
        data: HashMap<String, serde_json::Value>,
    ) -> Result<(), ProviderError>;

    /// Force any buffered cloud writes to the platform backend.
    async fn flush_cloud_data(&self) -> Result<(), ProviderError>;

    /// Players connected to the current player who also play this game.
    async fn connected_players(&self) -> Result<Vec<ConnectedPlayer>, ProviderError>;

    /// Whether the platform would show the bot subscription dialog.
    async fn can_subscribe_bot(&self) -> Result<bool, ProviderError>;

    /// Open the bot subscription dialog.
    async fn subscribe_bot(&self) -> Result<(), ProviderError>;
}

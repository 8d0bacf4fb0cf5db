//! Player service - identity accessors and cloud key-value data.

use std::collections::HashMap;
use std::sync::Arc;

use playpark_domain::{ConnectedPlayer, PlayerId, SignedPlayerInfo};
use url::Url;

use crate::application::error::CallError;
use crate::application::relay::relay;
use crate::ports::outbound::PlayerPort;

const NAMESPACE: &str = "player";

/// Adapted operations on the current player.
#[derive(Clone)]
pub struct PlayerService {
    port: Arc<dyn PlayerPort>,
}

impl PlayerService {
    pub fn new(port: Arc<dyn PlayerPort>) -> Self {
        Self { port }
    }

    /// Unique identifier of the current player.
    ///
    /// Synchronous passthrough. Must not be called before the platform
    /// session has started; earlier calls observe `None` rather than a
    /// failure.
    pub fn id(&self) -> Option<PlayerId> {
        self.port.id()
    }

    /// Display name of the current player. Same precondition as
    /// [`PlayerService::id`].
    pub fn name(&self) -> Option<String> {
        self.port.name()
    }

    /// Profile photo of the current player. Same precondition as
    /// [`PlayerService::id`].
    pub fn photo(&self) -> Option<Url> {
        self.port.photo()
    }

    /// The player's identifier with a platform signature, for server-side
    /// verification.
    pub async fn signed_info(
        &self,
        payload: Option<String>,
    ) -> Result<SignedPlayerInfo, CallError> {
        relay(NAMESPACE, "signed_info", self.port.signed_info(payload)).await
    }

    /// Fetch cloud key-value data for the given keys.
    pub async fn cloud_data(
        &self,
        keys: Vec<String>,
    ) -> Result<HashMap<String, serde_json::Value>, CallError> {
        relay(NAMESPACE, "cloud_data", self.port.cloud_data(keys)).await
    }

    /// Store cloud key-value data.
    pub async fn set_cloud_data(
        &self,
        data: HashMap<String, serde_json::Value>,
    ) -> Result<(), CallError> {
        relay(NAMESPACE, "set_cloud_data", self.port.set_cloud_data(data)).await
    }

    /// Force buffered cloud writes to the platform backend.
    pub async fn flush_cloud_data(&self) -> Result<(), CallError> {
        relay(NAMESPACE, "flush_cloud_data", self.port.flush_cloud_data()).await
    }

    /// Connected players who also play this game.
    pub async fn connected_players(&self) -> Result<Vec<ConnectedPlayer>, CallError> {
        relay(
            NAMESPACE,
            "connected_players",
            self.port.connected_players(),
        )
        .await
    }

    pub async fn can_subscribe_bot(&self) -> Result<bool, CallError> {
        relay(NAMESPACE, "can_subscribe_bot", self.port.can_subscribe_bot()).await
    }

    pub async fn subscribe_bot(&self) -> Result<(), CallError> {
        relay(NAMESPACE, "subscribe_bot", self.port.subscribe_bot()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{MockPlayerPort, ProviderError};
    use mockall::predicate::*;
    use serde_json::json;

    #[tokio::test]
    async fn sync_accessors_observe_none_before_session_start() {
        let mut port = MockPlayerPort::new();
        port.expect_id().returning(|| None);
        port.expect_name().returning(|| None);
        port.expect_photo().returning(|| None);

        let service = PlayerService::new(Arc::new(port));

        assert_eq!(service.id(), None);
        assert_eq!(service.name(), None);
        assert_eq!(service.photo(), None);
    }

    #[tokio::test]
    async fn cloud_data_resolves_with_exactly_the_provider_map() {
        let mut port = MockPlayerPort::new();
        let mut data = HashMap::new();
        data.insert("best_score".to_string(), json!(320));
        data.insert("chapter".to_string(), json!("swamp-3"));
        let returned = data.clone();

        port.expect_cloud_data()
            .with(eq(vec!["best_score".to_string(), "chapter".to_string()]))
            .returning(move |_| Ok(returned.clone()));

        let service = PlayerService::new(Arc::new(port));
        let result = service
            .cloud_data(vec!["best_score".to_string(), "chapter".to_string()])
            .await;

        assert_eq!(result, Ok(data));
    }

    #[tokio::test]
    async fn set_cloud_data_failure_is_collapsed() {
        let mut port = MockPlayerPort::new();
        port.expect_set_cloud_data()
            .returning(|_| Err(ProviderError::network("backend unreachable")));

        let service = PlayerService::new(Arc::new(port));
        let result = service.set_cloud_data(HashMap::new()).await;

        assert_eq!(result, Err(CallError));
    }
}

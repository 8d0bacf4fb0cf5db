//! Context service - the messaging context the game runs in.

use std::sync::Arc;

use playpark_domain::{ContextId, ContextPlayer, ContextSizeResponse, ContextType};
use playpark_shared::{ChooseContextOptions, ContextCreationTarget};

use crate::application::error::CallError;
use crate::application::relay::relay;
use crate::ports::outbound::ContextPort;

const NAMESPACE: &str = "context";

/// Adapted operations on the current context.
#[derive(Clone)]
pub struct ContextService {
    port: Arc<dyn ContextPort>,
}

impl ContextService {
    pub fn new(port: Arc<dyn ContextPort>) -> Self {
        Self { port }
    }

    /// Identifier of the current context.
    ///
    /// Synchronous passthrough. `None` before session start and in solo
    /// play.
    pub fn id(&self) -> Option<ContextId> {
        self.port.id()
    }

    /// Kind of the current context. `None` before session start.
    pub fn kind(&self) -> Option<ContextType> {
        self.port.kind()
    }

    /// Whether the current context's member count lies within the given
    /// bounds. `None` before session start.
    pub fn size_between(
        &self,
        min: Option<u32>,
        max: Option<u32>,
    ) -> Option<ContextSizeResponse> {
        self.port.size_between(min, max)
    }

    /// Request a switch into the given context.
    pub async fn switch(&self, id: ContextId) -> Result<(), CallError> {
        relay(NAMESPACE, "switch", self.port.switch(id)).await
    }

    /// Open the context chooser dialog.
    pub async fn choose(&self, options: ChooseContextOptions) -> Result<(), CallError> {
        relay(NAMESPACE, "choose", self.port.choose(options)).await
    }

    /// Create a context with a single player or a collection of players.
    /// The union is forwarded exactly as given.
    pub async fn create(&self, target: impl Into<ContextCreationTarget>) -> Result<(), CallError> {
        relay(NAMESPACE, "create", self.port.create(target.into())).await
    }

    /// Members of the current context playing this game.
    pub async fn players(&self) -> Result<Vec<ContextPlayer>, CallError> {
        relay(NAMESPACE, "players", self.port.players()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{MockContextPort, ProviderError};
    use mockall::predicate::*;
    use playpark_domain::PlayerId;

    #[tokio::test]
    async fn single_player_target_passes_through_as_given() {
        let mut port = MockContextPort::new();
        port.expect_create()
            .with(eq(ContextCreationTarget::Single(PlayerId::new("p-1"))))
            .returning(|_| Ok(()));

        let service = ContextService::new(Arc::new(port));

        assert_eq!(service.create(PlayerId::new("p-1")).await, Ok(()));
    }

    #[tokio::test]
    async fn many_player_target_passes_through_as_given() {
        let mut port = MockContextPort::new();
        let ids = vec![PlayerId::new("p-1"), PlayerId::new("p-2")];
        port.expect_create()
            .with(eq(ContextCreationTarget::Many(ids.clone())))
            .returning(|_| Ok(()));

        let service = ContextService::new(Arc::new(port));

        assert_eq!(service.create(ids).await, Ok(()));
    }

    #[tokio::test]
    async fn dismissed_chooser_is_collapsed_to_the_uniform_failure() {
        let mut port = MockContextPort::new();
        port.expect_choose()
            .returning(|_| Err(ProviderError::UserCancelled));

        let service = ContextService::new(Arc::new(port));
        let result = service.choose(ChooseContextOptions::default()).await;

        assert_eq!(result, Err(CallError));
    }
}

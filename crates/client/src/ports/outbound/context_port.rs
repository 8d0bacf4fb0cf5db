//! Context port: the messaging context the game currently runs in.

use async_trait::async_trait;
use playpark_domain::{ContextId, ContextPlayer, ContextSizeResponse, ContextType};
use playpark_shared::{ChooseContextOptions, ContextCreationTarget};

use super::ProviderError;

/// Operations on the current context.
///
/// The synchronous accessors share the player port's precondition: before
/// the platform session has started they observe `None`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContextPort: Send + Sync {
    /// Identifier of the current context. `None` in solo play even after
    /// session start.
    fn id(&self) -> Option<ContextId>;

    /// Kind of the current context.
    fn kind(&self) -> Option<ContextType>;

    /// Whether the current context's member count lies within the given
    /// bounds.
    fn size_between(&self, min: Option<u32>, max: Option<u32>) -> Option<ContextSizeResponse>;

    /// Request a switch into the given context.
    async fn switch(&self, id: ContextId) -> Result<(), ProviderError>;

    /// Open the context chooser dialog.
    async fn choose(&self, options: ChooseContextOptions) -> Result<(), ProviderError>;

    /// Create a context with a single player or a collection of players.
    /// The union is forwarded undisambiguated.
    async fn create(&self, target: ContextCreationTarget) -> Result<(), ProviderError>;

    /// Members of the current context playing this game.
    async fn players(&self) -> Result<Vec<ContextPlayer>, ProviderError>;
}

//! Payments port: catalog, purchases, and subscriptions.

use async_trait::async_trait;
use playpark_domain::{
    Product, ProductId, Purchase, PurchaseToken, SubscribableProduct, Subscription,
};
use playpark_shared::PurchaseConfig;

use super::ProviderError;

/// Commerce operations. All members are reachable through the platform's
/// documented top-level payments path.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentsPort: Send + Sync {
    /// The game's product catalog.
    async fn catalog(&self) -> Result<Vec<Product>, ProviderError>;

    /// Open the purchase dialog for a product.
    async fn purchase(&self, config: PurchaseConfig) -> Result<Purchase, ProviderError>;

    /// Unconsumed purchases held by the player.
    async fn purchases(&self) -> Result<Vec<Purchase>, ProviderError>;

    /// Consume a purchase, granting its effect and removing it from the
    /// purchases list.
    async fn consume(&self, token: PurchaseToken) -> Result<(), ProviderError>;

    /// The game's subscribable product catalog.
    async fn subscribable_catalog(&self) -> Result<Vec<SubscribableProduct>, ProviderError>;

    /// Open the subscription purchase dialog for a product.
    async fn purchase_subscription(
        &self,
        product_id: ProductId,
    ) -> Result<Subscription, ProviderError>;

    /// Subscriptions the player holds for this game.
    async fn subscriptions(&self) -> Result<Vec<Subscription>, ProviderError>;

    /// Open the platform's cancellation flow for a subscription.
    async fn cancel_subscription(&self, token: PurchaseToken) -> Result<(), ProviderError>;
}

//! Payments service - catalog, purchases, and subscriptions.

use std::sync::Arc;

use playpark_domain::{
    Product, ProductId, Purchase, PurchaseToken, SubscribableProduct, Subscription,
};
use playpark_shared::PurchaseConfig;

use crate::application::error::CallError;
use crate::application::relay::relay;
use crate::ports::outbound::PaymentsPort;

const NAMESPACE: &str = "payments";

/// Adapted commerce operations.
#[derive(Clone)]
pub struct PaymentsService {
    port: Arc<dyn PaymentsPort>,
}

impl PaymentsService {
    pub fn new(port: Arc<dyn PaymentsPort>) -> Self {
        Self { port }
    }

    /// The game's product catalog.
    pub async fn catalog(&self) -> Result<Vec<Product>, CallError> {
        relay(NAMESPACE, "catalog", self.port.catalog()).await
    }

    /// Open the purchase dialog for a product.
    pub async fn purchase(&self, config: PurchaseConfig) -> Result<Purchase, CallError> {
        relay(NAMESPACE, "purchase", self.port.purchase(config)).await
    }

    /// Unconsumed purchases held by the player.
    pub async fn purchases(&self) -> Result<Vec<Purchase>, CallError> {
        relay(NAMESPACE, "purchases", self.port.purchases()).await
    }

    /// Consume a purchase, granting its effect.
    pub async fn consume(&self, token: PurchaseToken) -> Result<(), CallError> {
        relay(NAMESPACE, "consume", self.port.consume(token)).await
    }

    /// The game's subscribable product catalog.
    pub async fn subscribable_catalog(&self) -> Result<Vec<SubscribableProduct>, CallError> {
        relay(
            NAMESPACE,
            "subscribable_catalog",
            self.port.subscribable_catalog(),
        )
        .await
    }

    /// Open the subscription purchase dialog for a product.
    pub async fn purchase_subscription(
        &self,
        product_id: ProductId,
    ) -> Result<Subscription, CallError> {
        relay(
            NAMESPACE,
            "purchase_subscription",
            self.port.purchase_subscription(product_id),
        )
        .await
    }

    /// Subscriptions the player holds for this game.
    pub async fn subscriptions(&self) -> Result<Vec<Subscription>, CallError> {
        relay(NAMESPACE, "subscriptions", self.port.subscriptions()).await
    }

    /// Open the platform's cancellation flow for a subscription.
    pub async fn cancel_subscription(&self, token: PurchaseToken) -> Result<(), CallError> {
        relay(
            NAMESPACE,
            "cancel_subscription",
            self.port.cancel_subscription(token),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{MockPaymentsPort, ProviderError};
    use mockall::predicate::*;

    #[tokio::test]
    async fn every_failure_category_collapses_to_the_same_rejection() {
        let failures = [
            ProviderError::PermissionDenied,
            ProviderError::RateLimited,
            ProviderError::network("offline"),
            ProviderError::UserCancelled,
            ProviderError::platform("PAYMENTS_NOT_INITIALIZED", "payments not ready"),
        ];

        for failure in failures {
            let mut port = MockPaymentsPort::new();
            let returned = failure.clone();
            port.expect_catalog().returning(move || Err(returned.clone()));

            let service = PaymentsService::new(Arc::new(port));

            assert_eq!(service.catalog().await, Err(CallError));
        }
    }

    #[tokio::test]
    async fn cancel_subscription_forwards_the_token() {
        let mut port = MockPaymentsPort::new();
        port.expect_cancel_subscription()
            .with(eq(PurchaseToken::new("tok-77")))
            .returning(|_| Ok(()));

        let service = PaymentsService::new(Arc::new(port));

        assert_eq!(
            service.cancel_subscription(PurchaseToken::new("tok-77")).await,
            Ok(())
        );
    }
}

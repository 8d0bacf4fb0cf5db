//! Inventory service. The underlying platform surface is experimental.

use std::sync::Arc;

use playpark_domain::UnlockedItemStat;
use playpark_shared::UnlockableItemConfig;

use crate::application::error::CallError;
use crate::application::relay::relay;
use crate::ports::outbound::InventoryPort;

const NAMESPACE: &str = "inventory";

/// Adapted inventory operations.
#[derive(Clone)]
pub struct InventoryService {
    port: Arc<dyn InventoryPort>,
}

impl InventoryService {
    pub fn new(port: Arc<dyn InventoryPort>) -> Self {
        Self { port }
    }

    /// Unlock an item for the player.
    pub async fn unlock_item(
        &self,
        config: UnlockableItemConfig,
    ) -> Result<UnlockedItemStat, CallError> {
        relay(NAMESPACE, "unlock_item", self.port.unlock_item(config)).await
    }
}

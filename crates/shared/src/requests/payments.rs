use playpark_domain::ProductId;
use serde::{Deserialize, Serialize};

/// Payload for a one-time purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseConfig {
    pub product_id: ProductId,
    /// Echoed back on the resulting purchase record, opaque to the
    /// platform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_payload: Option<String>,
}

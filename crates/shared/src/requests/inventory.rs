use serde::{Deserialize, Serialize};

/// Configuration for an unlockable item. The platform's unlockable-item
/// surface is experimental; the config shape is owned by the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnlockableItemConfig {
    pub item_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

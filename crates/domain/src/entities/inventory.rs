//! Inventory records. The unlockable-item surface is experimental on the
//! platform side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of unlocking an item for the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnlockedItemStat {
    pub item_id: String,
    pub unlocked: bool,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub unlocked_at: Option<DateTime<Utc>>,
}

//! Arena records.

use serde::{Deserialize, Serialize};

use crate::ids::{ArenaId, ContextId};

/// A scheduled competitive event the player can enter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub id: ArenaId,
    pub context_id: ContextId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub player_count: u32,
}

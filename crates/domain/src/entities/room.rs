//! Live room records.

use serde::{Deserialize, Serialize};

use crate::ids::ContextId;

/// Lifecycle of a live match as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LiveMatchStatus {
    Pending,
    Active,
    Ended,
    /// Forward compatibility: unrecognized status values deserialize here
    /// instead of failing.
    #[serde(other)]
    Unknown,
}

/// The live match the current room is running, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveMatch {
    pub id: String,
    pub context_id: ContextId,
    pub status: LiveMatchStatus,
}

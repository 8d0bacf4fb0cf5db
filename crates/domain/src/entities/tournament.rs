//! Instant tournament records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{ContextId, TournamentId};

/// A tournament the player created, participates in, or can see through
/// connected players.
///
/// Exactly one context is associated with a tournament and it does not
/// change for the tournament's lifetime. A tournament is expired once its
/// end time is in the past.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub context_id: ContextId,
    /// Title chosen at creation time, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Opaque blob attached when the tournament was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub end_time: DateTime<Utc>,
}

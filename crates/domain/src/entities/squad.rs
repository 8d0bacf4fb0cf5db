//! Squad records.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::ids::{ContextId, SquadId};

/// A persistent player group with its own messaging context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Squad {
    pub id: SquadId,
    pub context_id: ContextId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Url>,
}

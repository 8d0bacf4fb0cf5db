//! Player-facing records: connected players, context members, and the
//! signed identity blob.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::ids::PlayerId;

/// A player connected to the current player through the platform graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectedPlayer {
    pub id: PlayerId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<Url>,
}

/// A member of the current context. Same shape family as
/// [`ConnectedPlayer`], kept distinct because the provider distinguishes
/// the two lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextPlayer {
    pub id: PlayerId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<Url>,
}

/// The player's identifier together with a platform signature, suitable
/// for server-side verification. The signature is opaque to this layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignedPlayerInfo {
    pub player_id: PlayerId,
    pub signature: String,
}

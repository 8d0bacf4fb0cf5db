//! Context vocabulary.

use serde::{Deserialize, Serialize};

/// The kind of messaging context the game is currently running in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContextType {
    /// No shared context; the player is alone.
    Solo,
    /// A one-on-one or group message thread.
    Thread,
    /// A platform group.
    Group,
    /// A feed post.
    Post,
    /// Forward compatibility for context kinds added by the platform.
    #[serde(other)]
    Unknown,
}

/// Answer to a context size query.
///
/// The platform answers whether the current context's member count lies
/// within the queried bounds, echoing the bounds back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextSizeResponse {
    pub answer: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size: Option<u32>,
}

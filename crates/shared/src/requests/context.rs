use playpark_domain::PlayerId;
use serde::{Deserialize, Serialize};

/// Filters for the context chooser dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContextFilter {
    NewContextOnly,
    IncludeExistingChallenges,
    NewPlayersOnly,
}

/// Options for the context chooser dialog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChooseContextOptions {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<ContextFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size: Option<u32>,
}

/// Target for context creation: the platform accepts a single player or a
/// collection of players. The union is passed through undisambiguated;
/// which members end up in the created context is the platform's call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContextCreationTarget {
    Single(PlayerId),
    Many(Vec<PlayerId>),
}

impl From<PlayerId> for ContextCreationTarget {
    fn from(value: PlayerId) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<PlayerId>> for ContextCreationTarget {
    fn from(value: Vec<PlayerId>) -> Self {
        Self::Many(value)
    }
}

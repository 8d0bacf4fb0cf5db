use serde::{Deserialize, Serialize};

/// Payload for the squad creation dialog. All fields are suggestions; the
/// player can edit them in the platform's dialog before the squad is
/// created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateSquadConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

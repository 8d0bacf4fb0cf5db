use serde::{Deserialize, Serialize};

/// Configuration for showing an AR effect in the current room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArEffectConfig {
    pub effect_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

/// Configuration for loading a camera effect in the current room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraEffectConfig {
    pub effect_id: String,
}

//! Room service - AR/camera effects and the current live match.

use std::sync::Arc;

use playpark_domain::LiveMatch;
use playpark_shared::{ArEffectConfig, CameraEffectConfig};

use crate::application::error::CallError;
use crate::application::relay::relay;
use crate::ports::outbound::RoomPort;

const NAMESPACE: &str = "room";

/// Adapted room operations.
#[derive(Clone)]
pub struct RoomService {
    port: Arc<dyn RoomPort>,
}

impl RoomService {
    pub fn new(port: Arc<dyn RoomPort>) -> Self {
        Self { port }
    }

    /// Show an AR effect in the current room.
    pub async fn show_ar_effect(&self, config: ArEffectConfig) -> Result<(), CallError> {
        relay(NAMESPACE, "show_ar_effect", self.port.show_ar_effect(config)).await
    }

    /// The live match currently running in this room.
    pub async fn current_match(&self) -> Result<LiveMatch, CallError> {
        relay(NAMESPACE, "current_match", self.port.current_match()).await
    }

    /// Load a camera effect for the current room.
    pub async fn load_camera_effect(&self, config: CameraEffectConfig) -> Result<(), CallError> {
        relay(
            NAMESPACE,
            "load_camera_effect",
            self.port.load_camera_effect(config),
        )
        .await
    }

    /// Clear the active camera effect.
    pub async fn clear_camera_effect(&self) -> Result<(), CallError> {
        relay(
            NAMESPACE,
            "clear_camera_effect",
            self.port.clear_camera_effect(),
        )
        .await
    }
}

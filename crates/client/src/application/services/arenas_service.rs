//! Arenas service.

use std::sync::Arc;

use playpark_domain::Arena;

use crate::application::error::CallError;
use crate::application::relay::relay;
use crate::ports::outbound::ArenasPort;

const NAMESPACE: &str = "arenas";

/// Adapted arena operations.
#[derive(Clone)]
pub struct ArenasService {
    port: Arc<dyn ArenasPort>,
}

impl ArenasService {
    pub fn new(port: Arc<dyn ArenasPort>) -> Self {
        Self { port }
    }

    /// Arenas currently visible to the player.
    pub async fn list(&self) -> Result<Vec<Arena>, CallError> {
        relay(NAMESPACE, "list", self.port.list()).await
    }
}

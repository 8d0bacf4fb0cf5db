//! Squads service.

use std::sync::Arc;

use playpark_domain::{Squad, SquadId};
use playpark_shared::CreateSquadConfig;

use crate::application::error::CallError;
use crate::application::relay::relay;
use crate::ports::outbound::SquadsPort;

const NAMESPACE: &str = "squads";

/// Adapted squad operations.
#[derive(Clone)]
pub struct SquadsService {
    port: Arc<dyn SquadsPort>,
}

impl SquadsService {
    pub fn new(port: Arc<dyn SquadsPort>) -> Self {
        Self { port }
    }

    /// Open the squad creation dialog.
    pub async fn create(&self, config: CreateSquadConfig) -> Result<Squad, CallError> {
        relay(NAMESPACE, "create", self.port.create(config)).await
    }

    /// Fetch a squad by its identifier.
    pub async fn get(&self, id: SquadId) -> Result<Squad, CallError> {
        relay(NAMESPACE, "get", self.port.get(id)).await
    }

    /// Squads the player belongs to.
    pub async fn list(&self) -> Result<Vec<Squad>, CallError> {
        relay(NAMESPACE, "list", self.port.list()).await
    }

    /// Whether the squads surface is available to this player.
    pub async fn can_use_squads(&self) -> Result<bool, CallError> {
        relay(NAMESPACE, "can_use_squads", self.port.can_use_squads()).await
    }
}

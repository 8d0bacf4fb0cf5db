//! Competition ports: tournaments, squads, arenas, and the experimental
//! unlockable-item inventory.

use async_trait::async_trait;
use playpark_domain::{Arena, Squad, SquadId, Tournament, TournamentId, UnlockedItemStat};
use playpark_shared::{
    CreateSquadConfig, CreateTournamentConfig, ShareTournamentPayload, UnlockableItemConfig,
};

use super::ProviderError;

/// Instant tournament operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TournamentPort: Send + Sync {
    /// Post the player's end-of-activity score. Rate-limited by the
    /// platform when called too frequently.
    async fn post_score(&self, score: i64) -> Result<(), ProviderError>;

    /// Open the tournament creation dialog.
    async fn create(&self, config: CreateTournamentConfig) -> Result<Tournament, ProviderError>;

    /// Open the tournament reshare dialog.
    async fn share(&self, payload: ShareTournamentPayload) -> Result<(), ProviderError>;

    /// Switch into a specific tournament context. Rejects when the player
    /// is not a participant and no connected player is either.
    async fn join(&self, id: TournamentId) -> Result<(), ProviderError>;

    /// Tournaments visible to the player: created, joined, or surfaced
    /// through connected players.
    async fn list(&self) -> Result<Vec<Tournament>, ProviderError>;
}

/// Squad operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SquadsPort: Send + Sync {
    async fn create(&self, config: CreateSquadConfig) -> Result<Squad, ProviderError>;

    async fn get(&self, id: SquadId) -> Result<Squad, ProviderError>;

    async fn list(&self) -> Result<Vec<Squad>, ProviderError>;

    /// Whether the squads surface is available to this player.
    async fn can_use_squads(&self) -> Result<bool, ProviderError>;
}

/// Arena operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArenasPort: Send + Sync {
    async fn list(&self) -> Result<Vec<Arena>, ProviderError>;
}

/// Inventory operations. The platform marks this surface experimental.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InventoryPort: Send + Sync {
    async fn unlock_item(
        &self,
        config: UnlockableItemConfig,
    ) -> Result<UnlockedItemStat, ProviderError>;
}

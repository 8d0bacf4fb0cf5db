//! Tournaments service - adapted instant tournament calls.

use std::sync::Arc;

use playpark_domain::{Tournament, TournamentId};
use playpark_shared::{CreateTournamentConfig, ShareTournamentPayload};

use crate::application::error::CallError;
use crate::application::relay::relay;
use crate::ports::outbound::TournamentPort;

const NAMESPACE: &str = "tournament";

/// Adapted tournament operations.
#[derive(Clone)]
pub struct TournamentsService {
    port: Arc<dyn TournamentPort>,
}

impl TournamentsService {
    pub fn new(port: Arc<dyn TournamentPort>) -> Self {
        Self { port }
    }

    /// Post the player's score at the end of an activity.
    ///
    /// Should only be called within a tournament context. Scores must be
    /// consistent and comparable across game sessions; the platform
    /// rate-limits frequent posts.
    pub async fn post_score(&self, score: i64) -> Result<(), CallError> {
        relay(NAMESPACE, "post_score", self.port.post_score(score)).await
    }

    /// Open the tournament creation dialog if the player is not currently
    /// in a tournament session.
    pub async fn create(&self, config: CreateTournamentConfig) -> Result<Tournament, CallError> {
        relay(NAMESPACE, "create", self.port.create(config)).await
    }

    /// Open the reshare dialog if the player is currently in a tournament
    /// session.
    pub async fn share(&self, payload: ShareTournamentPayload) -> Result<(), CallError> {
        relay(NAMESPACE, "share", self.port.share(payload)).await
    }

    /// Switch into the given tournament's context.
    pub async fn join(&self, id: TournamentId) -> Result<(), CallError> {
        relay(NAMESPACE, "join", self.port.join(id)).await
    }

    /// Tournaments the player created, participates in, or can see through
    /// connected players.
    pub async fn list(&self) -> Result<Vec<Tournament>, CallError> {
        relay(NAMESPACE, "list", self.port.list()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{MockTournamentPort, ProviderError};
    use mockall::predicate::*;

    #[tokio::test]
    async fn post_score_resolves_with_no_value() {
        let mut port = MockTournamentPort::new();
        port.expect_post_score().with(eq(250)).returning(|_| Ok(()));

        let service = TournamentsService::new(Arc::new(port));

        assert_eq!(service.post_score(250).await, Ok(()));
    }

    #[tokio::test]
    async fn post_score_rejects_with_no_value() {
        let mut port = MockTournamentPort::new();
        port.expect_post_score()
            .with(eq(250))
            .returning(|_| Err(ProviderError::RateLimited));

        let service = TournamentsService::new(Arc::new(port));

        assert_eq!(service.post_score(250).await, Err(CallError));
    }

    #[tokio::test]
    async fn empty_tournament_list_resolves_empty_not_missing() {
        let mut port = MockTournamentPort::new();
        port.expect_list().returning(|| Ok(Vec::new()));

        let service = TournamentsService::new(Arc::new(port));

        assert_eq!(service.list().await, Ok(Vec::new()));
    }
}

//! Outbound ports - the capability provider boundary
//!
//! One trait per platform namespace. Application services interact with
//! the platform runtime only through these contracts, so any provider
//! binding (or a test stub) can be injected at composition time.

pub mod community_port;
pub mod competition_port;
pub mod context_port;
pub mod error;
pub mod graph_port;
pub mod payments_port;
pub mod player_port;
pub mod room_port;

pub use community_port::{CommunityPort, LiveCommentsPort};
pub use competition_port::{ArenasPort, InventoryPort, SquadsPort, TournamentPort};
pub use context_port::ContextPort;
pub use error::ProviderError;
pub use graph_port::GraphPort;
pub use payments_port::PaymentsPort;
pub use player_port::PlayerPort;
pub use room_port::RoomPort;

#[cfg(test)]
pub use community_port::{MockCommunityPort, MockLiveCommentsPort};
#[cfg(test)]
pub use competition_port::{MockArenasPort, MockInventoryPort, MockSquadsPort, MockTournamentPort};
#[cfg(test)]
pub use context_port::MockContextPort;
#[cfg(test)]
pub use graph_port::MockGraphPort;
#[cfg(test)]
pub use payments_port::MockPaymentsPort;
#[cfg(test)]
pub use player_port::MockPlayerPort;
#[cfg(test)]
pub use room_port::MockRoomPort;

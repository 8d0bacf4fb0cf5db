//! One adapted service per platform namespace.

pub mod arenas_service;
pub mod community_service;
pub mod context_service;
pub mod graph_service;
pub mod inventory_service;
pub mod live_comments_service;
pub mod payments_service;
pub mod player_service;
pub mod room_service;
pub mod squads_service;
pub mod tournaments_service;

pub use arenas_service::ArenasService;
pub use community_service::CommunityService;
pub use context_service::ContextService;
pub use graph_service::GraphService;
pub use inventory_service::InventoryService;
pub use live_comments_service::LiveCommentsService;
pub use payments_service::PaymentsService;
pub use player_service::PlayerService;
pub use room_service::RoomService;
pub use squads_service::SquadsService;
pub use tournaments_service::TournamentsService;

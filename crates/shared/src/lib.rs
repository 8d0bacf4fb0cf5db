//! Request payloads for the PlayPark platform client.
//!
//! Everything here is forwarded to the platform runtime exactly as given.
//! The client performs no validation, no defaulting, and no
//! disambiguation; a payload's meaning is whatever the platform documents
//! for the corresponding operation.

pub mod requests;

pub use requests::context::{ChooseContextOptions, ContextCreationTarget, ContextFilter};
pub use requests::graph::HttpMethod;
pub use requests::inventory::UnlockableItemConfig;
pub use requests::live_comments::CommentViewConfig;
pub use requests::payments::PurchaseConfig;
pub use requests::room::{ArEffectConfig, CameraEffectConfig};
pub use requests::squad::CreateSquadConfig;
pub use requests::tournament::{
    CreateTournamentConfig, ScoreFormat, ShareTournamentPayload, SortOrder,
};

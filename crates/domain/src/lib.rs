//! Domain records for the PlayPark platform client.
//!
//! Every type here mirrors a shape the platform runtime resolves with. The
//! client layer forwards these records untouched; no field is validated,
//! defaulted, or derived locally. Identifiers are opaque strings minted by
//! the platform.

pub mod entities;
pub mod ids;
pub mod value_objects;

pub use entities::{
    Arena, CommentView, ConnectedPlayer, ContextPlayer, LiveMatch, LiveMatchStatus, Product,
    Purchase, SignedPlayerInfo, Squad, SubscribableProduct, Subscription, Tournament,
    UnlockedItemStat,
};

pub use ids::{
    ArenaId, ContextId, PaymentId, PlayerId, ProductId, PurchaseToken, SquadId, TournamentId,
};

pub use value_objects::{ContextSizeResponse, ContextType, SubscriptionTerm};

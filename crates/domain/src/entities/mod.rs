//! Provider-owned entity records, grouped by feature area.

pub mod arena;
pub mod commerce;
pub mod inventory;
pub mod live_comments;
pub mod player;
pub mod room;
pub mod squad;
pub mod tournament;

pub use arena::Arena;
pub use commerce::{Product, Purchase, SubscribableProduct, Subscription};
pub use inventory::UnlockedItemStat;
pub use live_comments::CommentView;
pub use player::{ConnectedPlayer, ContextPlayer, SignedPlayerInfo};
pub use room::{LiveMatch, LiveMatchStatus};
pub use squad::Squad;
pub use tournament::Tournament;

//! Api aggregate and the Provider container.
//!
//! The composition root builds a [`Provider`] (from a real runtime
//! binding, or from the scripted test provider) and hands it to
//! [`Api::new`]. Application code then reaches every namespace through
//! the aggregate's accessors.

use std::sync::Arc;

use crate::application::services::{
    ArenasService, CommunityService, ContextService, GraphService, InventoryService,
    LiveCommentsService, PaymentsService, PlayerService, RoomService, SquadsService,
    TournamentsService,
};
use crate::ports::outbound::{
    ArenasPort, CommunityPort, ContextPort, GraphPort, InventoryPort, LiveCommentsPort,
    PaymentsPort, PlayerPort, RoomPort, SquadsPort, TournamentPort,
};

/// The injected capability provider: one port handle per platform
/// namespace. Adaptation code never reaches for ambient global state;
/// everything the platform can do arrives through this bundle.
#[derive(Clone)]
pub struct Provider {
    pub graph: Arc<dyn GraphPort>,
    pub tournaments: Arc<dyn TournamentPort>,
    pub inventory: Arc<dyn InventoryPort>,
    pub player: Arc<dyn PlayerPort>,
    pub context: Arc<dyn ContextPort>,
    pub squads: Arc<dyn SquadsPort>,
    pub arenas: Arc<dyn ArenasPort>,
    pub community: Arc<dyn CommunityPort>,
    pub live_comments: Arc<dyn LiveCommentsPort>,
    pub room: Arc<dyn RoomPort>,
    pub payments: Arc<dyn PaymentsPort>,
}

/// The adapted platform surface, one service per namespace.
///
/// Holds no state of its own beyond the injected port handles; every
/// method on every service is an independent forward-and-relay.
#[derive(Clone)]
pub struct Api {
    graph: GraphService,
    tournaments: TournamentsService,
    inventory: InventoryService,
    player: PlayerService,
    context: ContextService,
    squads: SquadsService,
    arenas: ArenasService,
    community: CommunityService,
    live_comments: LiveCommentsService,
    room: RoomService,
    payments: PaymentsService,
}

impl Api {
    pub fn new(provider: Provider) -> Self {
        Self {
            graph: GraphService::new(provider.graph),
            tournaments: TournamentsService::new(provider.tournaments),
            inventory: InventoryService::new(provider.inventory),
            player: PlayerService::new(provider.player),
            context: ContextService::new(provider.context),
            squads: SquadsService::new(provider.squads),
            arenas: ArenasService::new(provider.arenas),
            community: CommunityService::new(provider.community),
            live_comments: LiveCommentsService::new(provider.live_comments),
            room: RoomService::new(provider.room),
            payments: PaymentsService::new(provider.payments),
        }
    }

    pub fn graph(&self) -> &GraphService {
        &self.graph
    }

    pub fn tournaments(&self) -> &TournamentsService {
        &self.tournaments
    }

    pub fn inventory(&self) -> &InventoryService {
        &self.inventory
    }

    pub fn player(&self) -> &PlayerService {
        &self.player
    }

    pub fn context(&self) -> &ContextService {
        &self.context
    }

    pub fn squads(&self) -> &SquadsService {
        &self.squads
    }

    pub fn arenas(&self) -> &ArenasService {
        &self.arenas
    }

    pub fn community(&self) -> &CommunityService {
        &self.community
    }

    pub fn live_comments(&self) -> &LiveCommentsService {
        &self.live_comments
    }

    pub fn room(&self) -> &RoomService {
        &self.room
    }

    pub fn payments(&self) -> &PaymentsService {
        &self.payments
    }
}

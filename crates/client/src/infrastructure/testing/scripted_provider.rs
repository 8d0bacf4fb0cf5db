//! Scripted in-memory implementation of every capability port.
//!
//! Lets tests stock canned results, flip the provider into a failing
//! mode, drive the session-start gate for the synchronous accessors, and
//! assert that request payloads arrived verbatim.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Duration;
use playpark_domain::{
    Arena, CommentView, ConnectedPlayer, ContextId, ContextPlayer, ContextSizeResponse,
    ContextType, LiveMatch, PaymentId, PlayerId, Product, ProductId, Purchase, PurchaseToken,
    SignedPlayerInfo, Squad, SquadId, SubscribableProduct, Subscription, Tournament, TournamentId,
    UnlockedItemStat,
};
use playpark_shared::{
    ArEffectConfig, CameraEffectConfig, ChooseContextOptions, CommentViewConfig,
    ContextCreationTarget, CreateSquadConfig, CreateTournamentConfig, HttpMethod, PurchaseConfig,
    ShareTournamentPayload, UnlockableItemConfig,
};
use url::Url;

use super::fixtures;
use crate::application::Provider;
use crate::ports::outbound::{
    ArenasPort, CommunityPort, ContextPort, GraphPort, InventoryPort, LiveCommentsPort,
    PaymentsPort, PlayerPort, ProviderError, RoomPort, SquadsPort, TournamentPort,
};

/// One request as the provider received it, recorded for verbatim
/// passthrough assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardedRequest {
    pub namespace: &'static str,
    pub operation: &'static str,
    pub payload: serde_json::Value,
}

struct State {
    session_started: bool,
    failure: Option<ProviderError>,

    player_id: Option<PlayerId>,
    player_name: Option<String>,
    player_photo: Option<Url>,
    context: Option<(ContextId, ContextType)>,

    cloud: HashMap<String, serde_json::Value>,
    graph_response: serde_json::Value,

    tournaments: Vec<Tournament>,
    connected_players: Vec<ConnectedPlayer>,
    context_players: Vec<ContextPlayer>,
    squads: Vec<Squad>,
    arenas: Vec<Arena>,
    live_match: Option<LiveMatch>,

    catalog: Vec<Product>,
    purchases: Vec<Purchase>,
    subscribable_catalog: Vec<SubscribableProduct>,
    subscriptions: Vec<Subscription>,

    forwarded: Vec<ForwardedRequest>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            session_started: false,
            failure: None,
            player_id: None,
            player_name: None,
            player_photo: None,
            context: None,
            cloud: HashMap::new(),
            graph_response: serde_json::Value::Null,
            tournaments: Vec::new(),
            connected_players: Vec::new(),
            context_players: Vec::new(),
            squads: Vec::new(),
            arenas: Vec::new(),
            live_match: None,
            catalog: Vec::new(),
            purchases: Vec::new(),
            subscribable_catalog: Vec::new(),
            subscriptions: Vec::new(),
            forwarded: Vec::new(),
        }
    }
}

/// Scripted provider for tests.
///
/// All eleven ports resolve against shared in-memory state. Cloning the
/// provider shares the script.
#[derive(Clone, Default)]
pub struct ScriptedProvider {
    state: Arc<Mutex<State>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bundle this provider into the injectable [`Provider`] container,
    /// one shared handle per namespace.
    pub fn provider(&self) -> Provider {
        let handle = Arc::new(self.clone());
        Provider {
            graph: handle.clone(),
            tournaments: handle.clone(),
            inventory: handle.clone(),
            player: handle.clone(),
            context: handle.clone(),
            squads: handle.clone(),
            arenas: handle.clone(),
            community: handle.clone(),
            live_comments: handle.clone(),
            room: handle.clone(),
            payments: handle,
        }
    }

    /// Mark the platform session as started and give the current player
    /// an identity. Before this, the synchronous accessors observe `None`.
    pub fn start_session(&self, id: &str, name: &str) {
        let mut s = self.state.lock().unwrap();
        s.session_started = true;
        s.player_id = Some(PlayerId::new(id));
        s.player_name = Some(name.to_string());
    }

    pub fn set_player_photo(&self, photo: Url) {
        self.state.lock().unwrap().player_photo = Some(photo);
    }

    pub fn set_context(&self, id: &str, kind: ContextType) {
        self.state.lock().unwrap().context = Some((ContextId::new(id), kind));
    }

    /// Make every asynchronous operation reject with a clone of `error`.
    pub fn fail_with(&self, error: ProviderError) {
        self.state.lock().unwrap().failure = Some(error);
    }

    /// Return to resolving normally after [`ScriptedProvider::fail_with`].
    pub fn succeed(&self) {
        self.state.lock().unwrap().failure = None;
    }

    pub fn stock_tournaments(&self, tournaments: Vec<Tournament>) {
        self.state.lock().unwrap().tournaments = tournaments;
    }

    pub fn stock_connected_players(&self, players: Vec<ConnectedPlayer>) {
        self.state.lock().unwrap().connected_players = players;
    }

    pub fn stock_context_players(&self, players: Vec<ContextPlayer>) {
        self.state.lock().unwrap().context_players = players;
    }

    pub fn stock_squads(&self, squads: Vec<Squad>) {
        self.state.lock().unwrap().squads = squads;
    }

    pub fn stock_arenas(&self, arenas: Vec<Arena>) {
        self.state.lock().unwrap().arenas = arenas;
    }

    pub fn set_live_match(&self, live_match: LiveMatch) {
        self.state.lock().unwrap().live_match = Some(live_match);
    }

    pub fn stock_catalog(&self, catalog: Vec<Product>) {
        self.state.lock().unwrap().catalog = catalog;
    }

    pub fn stock_purchases(&self, purchases: Vec<Purchase>) {
        self.state.lock().unwrap().purchases = purchases;
    }

    pub fn stock_subscribable_catalog(&self, catalog: Vec<SubscribableProduct>) {
        self.state.lock().unwrap().subscribable_catalog = catalog;
    }

    pub fn stock_subscriptions(&self, subscriptions: Vec<Subscription>) {
        self.state.lock().unwrap().subscriptions = subscriptions;
    }

    pub fn set_graph_response(&self, response: serde_json::Value) {
        self.state.lock().unwrap().graph_response = response;
    }

    /// Everything the provider has received so far, in call order.
    pub fn forwarded(&self) -> Vec<ForwardedRequest> {
        self.state.lock().unwrap().forwarded.clone()
    }

    /// Cloud data as the provider currently holds it.
    pub fn cloud_snapshot(&self) -> HashMap<String, serde_json::Value> {
        self.state.lock().unwrap().cloud.clone()
    }

    /// Record the request, then either fail (scripted failure) or run
    /// `respond` against the state.
    fn answer<T>(
        &self,
        namespace: &'static str,
        operation: &'static str,
        payload: serde_json::Value,
        respond: impl FnOnce(&mut State) -> Result<T, ProviderError>,
    ) -> Result<T, ProviderError> {
        let mut s = self.state.lock().unwrap();
        s.forwarded.push(ForwardedRequest {
            namespace,
            operation,
            payload,
        });
        if let Some(error) = s.failure.clone() {
            return Err(error);
        }
        respond(&mut s)
    }

    fn scripted_player_id(s: &State) -> PlayerId {
        s.player_id.clone().unwrap_or_else(|| PlayerId::new("p-script"))
    }
}

fn record_payload<T: serde::Serialize>(payload: &T) -> serde_json::Value {
    serde_json::to_value(payload).unwrap_or(serde_json::Value::Null)
}

#[async_trait]
impl GraphPort for ScriptedProvider {
    async fn request(
        &self,
        path: String,
        method: Option<HttpMethod>,
        params: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, ProviderError> {
        let payload = serde_json::json!({
            "path": path,
            "method": record_payload(&method),
            "params": params,
        });
        self.answer("graph", "request", payload, |s| Ok(s.graph_response.clone()))
    }
}

#[async_trait]
impl TournamentPort for ScriptedProvider {
    async fn post_score(&self, score: i64) -> Result<(), ProviderError> {
        self.answer(
            "tournament",
            "post_score",
            serde_json::json!({ "score": score }),
            |_| Ok(()),
        )
    }

    async fn create(&self, config: CreateTournamentConfig) -> Result<Tournament, ProviderError> {
        let payload = record_payload(&config);
        self.answer("tournament", "create", payload, move |s| {
            let context_id = s
                .context
                .as_ref()
                .map(|(id, _)| id.clone())
                .unwrap_or_else(|| ContextId::new("ctx-script"));
            Ok(Tournament {
                id: TournamentId::new("t-script"),
                context_id,
                title: config.title,
                payload: config.payload,
                end_time: config
                    .end_time
                    .unwrap_or_else(|| fixtures::fixed_time() + Duration::days(7)),
            })
        })
    }

    async fn share(&self, payload: ShareTournamentPayload) -> Result<(), ProviderError> {
        let payload = record_payload(&payload);
        self.answer("tournament", "share", payload, |_| Ok(()))
    }

    async fn join(&self, id: TournamentId) -> Result<(), ProviderError> {
        let payload = record_payload(&id);
        self.answer("tournament", "join", payload, |_| Ok(()))
    }

    async fn list(&self) -> Result<Vec<Tournament>, ProviderError> {
        self.answer("tournament", "list", serde_json::Value::Null, |s| {
            Ok(s.tournaments.clone())
        })
    }
}

#[async_trait]
impl InventoryPort for ScriptedProvider {
    async fn unlock_item(
        &self,
        config: UnlockableItemConfig,
    ) -> Result<UnlockedItemStat, ProviderError> {
        let payload = record_payload(&config);
        self.answer("inventory", "unlock_item", payload, move |_| {
            Ok(UnlockedItemStat {
                item_id: config.item_id,
                unlocked: true,
                unlocked_at: Some(fixtures::fixed_time()),
            })
        })
    }
}

#[async_trait]
impl PlayerPort for ScriptedProvider {
    fn id(&self) -> Option<PlayerId> {
        let s = self.state.lock().unwrap();
        if s.session_started {
            s.player_id.clone()
        } else {
            None
        }
    }

    fn name(&self) -> Option<String> {
        let s = self.state.lock().unwrap();
        if s.session_started {
            s.player_name.clone()
        } else {
            None
        }
    }

    fn photo(&self) -> Option<Url> {
        let s = self.state.lock().unwrap();
        if s.session_started {
            s.player_photo.clone()
        } else {
            None
        }
    }

    async fn signed_info(
        &self,
        payload: Option<String>,
    ) -> Result<SignedPlayerInfo, ProviderError> {
        self.answer(
            "player",
            "signed_info",
            serde_json::json!({ "payload": payload }),
            |s| {
                Ok(SignedPlayerInfo {
                    player_id: Self::scripted_player_id(s),
                    signature: "header.payload.sig".to_string(),
                })
            },
        )
    }

    async fn cloud_data(
        &self,
        keys: Vec<String>,
    ) -> Result<HashMap<String, serde_json::Value>, ProviderError> {
        let payload = record_payload(&keys);
        self.answer("player", "cloud_data", payload, move |s| {
            Ok(keys
                .into_iter()
                .filter_map(|key| s.cloud.get(&key).map(|value| (key, value.clone())))
                .collect())
        })
    }

    async fn set_cloud_data(
        &self,
        data: HashMap<String, serde_json::Value>,
    ) -> Result<(), ProviderError> {
        let payload = record_payload(&data);
        self.answer("player", "set_cloud_data", payload, move |s| {
            s.cloud.extend(data);
            Ok(())
        })
    }

    async fn flush_cloud_data(&self) -> Result<(), ProviderError> {
        self.answer("player", "flush_cloud_data", serde_json::Value::Null, |_| {
            Ok(())
        })
    }

    async fn connected_players(&self) -> Result<Vec<ConnectedPlayer>, ProviderError> {
        self.answer("player", "connected_players", serde_json::Value::Null, |s| {
            Ok(s.connected_players.clone())
        })
    }

    async fn can_subscribe_bot(&self) -> Result<bool, ProviderError> {
        self.answer("player", "can_subscribe_bot", serde_json::Value::Null, |_| {
            Ok(true)
        })
    }

    async fn subscribe_bot(&self) -> Result<(), ProviderError> {
        self.answer("player", "subscribe_bot", serde_json::Value::Null, |_| {
            Ok(())
        })
    }
}

#[async_trait]
impl ContextPort for ScriptedProvider {
    fn id(&self) -> Option<ContextId> {
        let s = self.state.lock().unwrap();
        if s.session_started {
            s.context.as_ref().map(|(id, _)| id.clone())
        } else {
            None
        }
    }

    fn kind(&self) -> Option<ContextType> {
        let s = self.state.lock().unwrap();
        if s.session_started {
            Some(s.context.as_ref().map_or(ContextType::Solo, |(_, kind)| *kind))
        } else {
            None
        }
    }

    fn size_between(&self, min: Option<u32>, max: Option<u32>) -> Option<ContextSizeResponse> {
        let s = self.state.lock().unwrap();
        if !s.session_started {
            return None;
        }
        let members = s.context_players.len() as u32;
        let answer =
            min.map_or(true, |lo| members >= lo) && max.map_or(true, |hi| members <= hi);
        Some(ContextSizeResponse {
            answer,
            min_size: min,
            max_size: max,
        })
    }

    async fn switch(&self, id: ContextId) -> Result<(), ProviderError> {
        let payload = record_payload(&id);
        self.answer("context", "switch", payload, move |s| {
            s.context = Some((id, ContextType::Thread));
            Ok(())
        })
    }

    async fn choose(&self, options: ChooseContextOptions) -> Result<(), ProviderError> {
        let payload = record_payload(&options);
        self.answer("context", "choose", payload, |s| {
            s.context = Some((ContextId::new("ctx-chosen"), ContextType::Thread));
            Ok(())
        })
    }

    async fn create(&self, target: ContextCreationTarget) -> Result<(), ProviderError> {
        let payload = record_payload(&target);
        self.answer("context", "create", payload, |s| {
            s.context = Some((ContextId::new("ctx-created"), ContextType::Thread));
            Ok(())
        })
    }

    async fn players(&self) -> Result<Vec<ContextPlayer>, ProviderError> {
        self.answer("context", "players", serde_json::Value::Null, |s| {
            Ok(s.context_players.clone())
        })
    }
}

#[async_trait]
impl SquadsPort for ScriptedProvider {
    async fn create(&self, config: CreateSquadConfig) -> Result<Squad, ProviderError> {
        let payload = record_payload(&config);
        self.answer("squads", "create", payload, move |_| {
            Ok(Squad {
                id: SquadId::new("sq-script"),
                context_id: ContextId::new("ctx-script"),
                name: config.name,
                image: None,
            })
        })
    }

    async fn get(&self, id: SquadId) -> Result<Squad, ProviderError> {
        let payload = record_payload(&id);
        self.answer("squads", "get", payload, move |s| {
            s.squads
                .iter()
                .find(|squad| squad.id == id)
                .cloned()
                .ok_or_else(|| ProviderError::platform("SQUAD_NOT_FOUND", "no such squad"))
        })
    }

    async fn list(&self) -> Result<Vec<Squad>, ProviderError> {
        self.answer("squads", "list", serde_json::Value::Null, |s| {
            Ok(s.squads.clone())
        })
    }

    async fn can_use_squads(&self) -> Result<bool, ProviderError> {
        self.answer("squads", "can_use_squads", serde_json::Value::Null, |_| {
            Ok(true)
        })
    }
}

#[async_trait]
impl ArenasPort for ScriptedProvider {
    async fn list(&self) -> Result<Vec<Arena>, ProviderError> {
        self.answer("arenas", "list", serde_json::Value::Null, |s| {
            Ok(s.arenas.clone())
        })
    }
}

#[async_trait]
impl CommunityPort for ScriptedProvider {
    async fn can_follow_official_page(&self) -> Result<bool, ProviderError> {
        self.answer(
            "community",
            "can_follow_official_page",
            serde_json::Value::Null,
            |_| Ok(true),
        )
    }

    async fn follow_official_page(&self) -> Result<(), ProviderError> {
        self.answer(
            "community",
            "follow_official_page",
            serde_json::Value::Null,
            |_| Ok(()),
        )
    }

    async fn can_join_official_group(&self) -> Result<bool, ProviderError> {
        self.answer(
            "community",
            "can_join_official_group",
            serde_json::Value::Null,
            |_| Ok(true),
        )
    }

    async fn join_official_group(&self) -> Result<(), ProviderError> {
        self.answer(
            "community",
            "join_official_group",
            serde_json::Value::Null,
            |_| Ok(()),
        )
    }

    async fn can_subscribe_live_video(&self) -> Result<bool, ProviderError> {
        self.answer(
            "community",
            "can_subscribe_live_video",
            serde_json::Value::Null,
            |_| Ok(true),
        )
    }

    async fn subscribe_live_video(&self) -> Result<(), ProviderError> {
        self.answer(
            "community",
            "subscribe_live_video",
            serde_json::Value::Null,
            |_| Ok(()),
        )
    }
}

#[async_trait]
impl LiveCommentsPort for ScriptedProvider {
    async fn create_view(&self, config: CommentViewConfig) -> Result<CommentView, ProviderError> {
        let payload = record_payload(&config);
        self.answer("live_comments", "create_view", payload, move |_| {
            Ok(CommentView {
                id: "view-script".to_string(),
                visible: config.initially_visible,
            })
        })
    }
}

#[async_trait]
impl RoomPort for ScriptedProvider {
    async fn show_ar_effect(&self, config: ArEffectConfig) -> Result<(), ProviderError> {
        let payload = record_payload(&config);
        self.answer("room", "show_ar_effect", payload, |_| Ok(()))
    }

    async fn current_match(&self) -> Result<LiveMatch, ProviderError> {
        self.answer("room", "current_match", serde_json::Value::Null, |s| {
            s.live_match
                .clone()
                .ok_or_else(|| ProviderError::platform("INVALID_OPERATION", "no live match"))
        })
    }

    async fn load_camera_effect(&self, config: CameraEffectConfig) -> Result<(), ProviderError> {
        let payload = record_payload(&config);
        self.answer("room", "load_camera_effect", payload, |_| Ok(()))
    }

    async fn clear_camera_effect(&self) -> Result<(), ProviderError> {
        self.answer("room", "clear_camera_effect", serde_json::Value::Null, |_| {
            Ok(())
        })
    }
}

#[async_trait]
impl PaymentsPort for ScriptedProvider {
    async fn catalog(&self) -> Result<Vec<Product>, ProviderError> {
        self.answer("payments", "catalog", serde_json::Value::Null, |s| {
            Ok(s.catalog.clone())
        })
    }

    async fn purchase(&self, config: PurchaseConfig) -> Result<Purchase, ProviderError> {
        let payload = record_payload(&config);
        self.answer("payments", "purchase", payload, move |s| {
            let purchase = Purchase {
                payment_id: PaymentId::new("pay-script"),
                product_id: config.product_id,
                purchase_token: PurchaseToken::new("tok-script"),
                purchase_time: fixtures::fixed_time(),
                signed_request: "header.payload.sig".to_string(),
                developer_payload: config.developer_payload,
            };
            s.purchases.push(purchase.clone());
            Ok(purchase)
        })
    }

    async fn purchases(&self) -> Result<Vec<Purchase>, ProviderError> {
        self.answer("payments", "purchases", serde_json::Value::Null, |s| {
            Ok(s.purchases.clone())
        })
    }

    async fn consume(&self, token: PurchaseToken) -> Result<(), ProviderError> {
        let payload = record_payload(&token);
        self.answer("payments", "consume", payload, move |s| {
            s.purchases.retain(|purchase| purchase.purchase_token != token);
            Ok(())
        })
    }

    async fn subscribable_catalog(&self) -> Result<Vec<SubscribableProduct>, ProviderError> {
        self.answer(
            "payments",
            "subscribable_catalog",
            serde_json::Value::Null,
            |s| Ok(s.subscribable_catalog.clone()),
        )
    }

    async fn purchase_subscription(
        &self,
        product_id: ProductId,
    ) -> Result<Subscription, ProviderError> {
        let payload = record_payload(&product_id);
        self.answer("payments", "purchase_subscription", payload, move |s| {
            let subscription = Subscription {
                subscription_id: "sub-script".to_string(),
                product_id,
                purchase_token: PurchaseToken::new("tok-sub-script"),
                purchase_time: fixtures::fixed_time(),
                deactivation_time: None,
                is_entitlement_active: true,
                signed_request: "header.payload.sig".to_string(),
            };
            s.subscriptions.push(subscription.clone());
            Ok(subscription)
        })
    }

    async fn subscriptions(&self) -> Result<Vec<Subscription>, ProviderError> {
        self.answer("payments", "subscriptions", serde_json::Value::Null, |s| {
            Ok(s.subscriptions.clone())
        })
    }

    async fn cancel_subscription(&self, token: PurchaseToken) -> Result<(), ProviderError> {
        let payload = record_payload(&token);
        self.answer("payments", "cancel_subscription", payload, move |s| {
            match s
                .subscriptions
                .iter_mut()
                .find(|subscription| subscription.purchase_token == token)
            {
                Some(subscription) => {
                    subscription.is_entitlement_active = false;
                    subscription.deactivation_time = Some(fixtures::fixed_time());
                    Ok(())
                }
                None => Err(ProviderError::platform(
                    "SUBSCRIPTION_NOT_FOUND",
                    "no such subscription",
                )),
            }
        })
    }
}

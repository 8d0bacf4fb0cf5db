//! Contract tests for the adaptation layer, driven end to end through
//! [`Api`] against the scripted provider.

use std::collections::HashMap;

use playpark_client::infrastructure::testing::{fixtures, ScriptedProvider};
use playpark_client::ports::outbound::ProviderError;
use playpark_client::{Api, CallError};
use playpark_domain::{ContextType, PlayerId, PurchaseToken};
use playpark_shared::{CommentViewConfig, PurchaseConfig};
use serde_json::json;

fn scripted_api() -> (Api, ScriptedProvider) {
    // Opt-in log output for debugging test runs; repeated installs are
    // ignored.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let provider = ScriptedProvider::new();
    (Api::new(provider.provider()), provider)
}

#[tokio::test]
async fn resolves_with_exactly_the_provider_records() {
    let (api, provider) = scripted_api();
    let stocked = vec![fixtures::tournament("t-1"), fixtures::tournament("t-2")];
    provider.stock_tournaments(stocked.clone());

    let listed = api.tournaments().list().await.expect("list tournaments");

    assert_eq!(listed, stocked);
}

#[tokio::test]
async fn empty_collections_resolve_empty_not_missing() {
    let (api, _provider) = scripted_api();

    assert_eq!(api.tournaments().list().await, Ok(Vec::new()));
    assert_eq!(api.arenas().list().await, Ok(Vec::new()));
    assert_eq!(api.payments().purchases().await, Ok(Vec::new()));
}

#[tokio::test]
async fn post_score_resolves_with_no_value_and_rejects_with_no_value() {
    let (api, provider) = scripted_api();

    assert_eq!(api.tournaments().post_score(250).await, Ok(()));

    provider.fail_with(ProviderError::RateLimited);
    assert_eq!(api.tournaments().post_score(250).await, Err(CallError));
}

#[tokio::test]
async fn every_namespace_rejects_uniformly_when_the_provider_fails() {
    let (api, provider) = scripted_api();
    provider.fail_with(ProviderError::platform("CLIENT_UNSUPPORTED_OPERATION", "nope"));

    assert_eq!(api.graph().request("me", None, None).await, Err(CallError));
    assert_eq!(api.tournaments().list().await, Err(CallError));
    assert_eq!(api.player().connected_players().await, Err(CallError));
    assert_eq!(api.context().players().await, Err(CallError));
    assert_eq!(api.squads().list().await, Err(CallError));
    assert_eq!(api.community().follow_official_page().await, Err(CallError));
    assert_eq!(api.room().clear_camera_effect().await, Err(CallError));
    assert_eq!(api.payments().catalog().await, Err(CallError));
}

#[tokio::test]
async fn sync_accessors_observe_none_before_session_start() {
    let (api, provider) = scripted_api();

    assert_eq!(api.player().id(), None);
    assert_eq!(api.player().name(), None);
    assert_eq!(api.player().photo(), None);
    assert_eq!(api.context().id(), None);
    assert_eq!(api.context().kind(), None);
    assert_eq!(api.context().size_between(Some(2), None), None);

    provider.start_session("p-1", "Ada");
    provider.set_context("ctx-9", ContextType::Thread);

    assert_eq!(api.player().id(), Some(PlayerId::new("p-1")));
    assert_eq!(api.player().name(), Some("Ada".to_string()));
    assert_eq!(api.context().id(), Some("ctx-9".into()));
    assert_eq!(api.context().kind(), Some(ContextType::Thread));
}

#[tokio::test]
async fn concurrent_unrelated_calls_do_not_affect_each_other() {
    let (api, provider) = scripted_api();
    provider.stock_catalog(vec![fixtures::product("gems.small")]);
    provider.stock_connected_players(vec![fixtures::connected_player("p-2")]);
    // No live match stocked: current_match rejects while the others
    // resolve.

    let (catalog, players, live_match) = futures_util::join!(
        api.payments().catalog(),
        api.player().connected_players(),
        api.room().current_match(),
    );

    assert_eq!(catalog, Ok(vec![fixtures::product("gems.small")]));
    assert_eq!(players, Ok(vec![fixtures::connected_player("p-2")]));
    assert_eq!(live_match, Err(CallError));
}

#[tokio::test]
async fn request_payloads_arrive_at_the_provider_verbatim() {
    let (api, provider) = scripted_api();

    api.context()
        .create(vec![PlayerId::new("p-1"), PlayerId::new("p-2")])
        .await
        .expect("create context");

    let config = PurchaseConfig {
        product_id: "gems.small".into(),
        developer_payload: Some("order-42".to_string()),
    };
    api.payments()
        .purchase(config.clone())
        .await
        .expect("purchase");

    let forwarded = provider.forwarded();
    assert_eq!(forwarded.len(), 2);

    assert_eq!(forwarded[0].namespace, "context");
    assert_eq!(forwarded[0].operation, "create");
    assert_eq!(forwarded[0].payload, json!(["p-1", "p-2"]));

    assert_eq!(forwarded[1].namespace, "payments");
    assert_eq!(forwarded[1].operation, "purchase");
    assert_eq!(
        forwarded[1].payload,
        serde_json::to_value(&config).expect("serialize config")
    );
}

#[tokio::test]
async fn purchase_resolves_with_the_provider_record_and_consume_removes_it() {
    let (api, _provider) = scripted_api();

    let purchase = api
        .payments()
        .purchase(PurchaseConfig {
            product_id: "gems.small".into(),
            developer_payload: None,
        })
        .await
        .expect("purchase");

    assert_eq!(api.payments().purchases().await, Ok(vec![purchase.clone()]));

    api.payments()
        .consume(purchase.purchase_token.clone())
        .await
        .expect("consume");

    assert_eq!(api.payments().purchases().await, Ok(Vec::new()));
}

#[tokio::test]
async fn subscription_cancellation_reaches_the_provider_by_token() {
    let (api, _provider) = scripted_api();

    let subscription = api
        .payments()
        .purchase_subscription("season.pass".into())
        .await
        .expect("subscribe");

    api.payments()
        .cancel_subscription(subscription.purchase_token.clone())
        .await
        .expect("cancel");

    let after = api.payments().subscriptions().await.expect("list");
    assert_eq!(after.len(), 1);
    assert!(!after[0].is_entitlement_active);
    assert!(after[0].deactivation_time.is_some());

    // Cancelling a token the provider does not know is a provider-side
    // failure, surfaced uniformly.
    assert_eq!(
        api.payments()
            .cancel_subscription(PurchaseToken::new("tok-unknown"))
            .await,
        Err(CallError)
    );
}

#[tokio::test]
async fn cloud_data_round_trips_through_the_provider() {
    let (api, provider) = scripted_api();

    let mut data = HashMap::new();
    data.insert("best_score".to_string(), json!(320));
    api.player().set_cloud_data(data).await.expect("set");
    api.player().flush_cloud_data().await.expect("flush");

    assert_eq!(
        api.player()
            .cloud_data(vec!["best_score".to_string(), "missing".to_string()])
            .await,
        Ok(HashMap::from([("best_score".to_string(), json!(320))]))
    );
    assert_eq!(provider.cloud_snapshot().len(), 1);
}

#[tokio::test]
async fn comment_view_is_created_with_its_initial_display_state() {
    let (api, _provider) = scripted_api();

    let view = api
        .live_comments()
        .create_view(CommentViewConfig {
            video_id: "vid-7".to_string(),
            initially_visible: false,
        })
        .await
        .expect("create view");

    assert!(!view.visible);
}

#[tokio::test]
async fn provider_recovers_after_a_scripted_failure() {
    let (api, provider) = scripted_api();

    provider.fail_with(ProviderError::network("backend unreachable"));
    assert_eq!(api.squads().can_use_squads().await, Err(CallError));

    provider.succeed();
    assert_eq!(api.squads().can_use_squads().await, Ok(true));
}

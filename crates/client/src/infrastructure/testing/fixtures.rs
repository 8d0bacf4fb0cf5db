//! Simple record fixtures used across unit and integration tests.

use chrono::{DateTime, Duration, Utc};
use playpark_domain::{
    Arena, ConnectedPlayer, ContextPlayer, LiveMatch, LiveMatchStatus, Product, Purchase, Squad,
    SubscribableProduct, Subscription, SubscriptionTerm, Tournament,
};

/// A fixed instant so fixture records compare stably.
pub fn fixed_time() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH + Duration::days(20_000)
}

pub fn tournament(id: &str) -> Tournament {
    Tournament {
        id: id.into(),
        context_id: "ctx-fixture".into(),
        title: Some("Weekend Cup".to_string()),
        payload: None,
        end_time: fixed_time() + Duration::days(7),
    }
}

pub fn connected_player(id: &str) -> ConnectedPlayer {
    ConnectedPlayer {
        id: id.into(),
        name: Some("Ada".to_string()),
        photo: None,
    }
}

pub fn context_player(id: &str) -> ContextPlayer {
    ContextPlayer {
        id: id.into(),
        name: Some("Grace".to_string()),
        photo: None,
    }
}

pub fn squad(id: &str) -> Squad {
    Squad {
        id: id.into(),
        context_id: "ctx-fixture".into(),
        name: Some("Night Shift".to_string()),
        image: None,
    }
}

pub fn arena(id: &str) -> Arena {
    Arena {
        id: id.into(),
        context_id: "ctx-fixture".into(),
        title: Some("Friday Clash".to_string()),
        player_count: 8,
    }
}

pub fn live_match(id: &str) -> LiveMatch {
    LiveMatch {
        id: id.to_string(),
        context_id: "ctx-fixture".into(),
        status: LiveMatchStatus::Active,
    }
}

pub fn product(id: &str) -> Product {
    Product {
        product_id: id.into(),
        title: "Gem Pack".to_string(),
        description: Some("A handful of gems".to_string()),
        image: None,
        price: "$0.99".to_string(),
        price_currency_code: "USD".to_string(),
    }
}

pub fn purchase(payment_id: &str, product_id: &str) -> Purchase {
    Purchase {
        payment_id: payment_id.into(),
        product_id: product_id.into(),
        purchase_token: format!("tok-{payment_id}").into(),
        purchase_time: fixed_time(),
        signed_request: "header.payload.sig".to_string(),
        developer_payload: None,
    }
}

pub fn subscribable_product(id: &str) -> SubscribableProduct {
    SubscribableProduct {
        product_id: id.into(),
        title: "Season Pass".to_string(),
        description: None,
        image: None,
        price: "$4.99".to_string(),
        price_currency_code: "USD".to_string(),
        subscription_term: SubscriptionTerm::Monthly,
    }
}

pub fn subscription(id: &str, product_id: &str) -> Subscription {
    Subscription {
        subscription_id: id.to_string(),
        product_id: product_id.into(),
        purchase_token: format!("tok-{id}").into(),
        purchase_time: fixed_time(),
        deactivation_time: None,
        is_entitlement_active: true,
        signed_request: "header.payload.sig".to_string(),
    }
}

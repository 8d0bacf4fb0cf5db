//! Commerce records: catalog products, purchases, and subscriptions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::ids::{PaymentId, ProductId, PurchaseToken};
use crate::value_objects::SubscriptionTerm;

/// A one-time purchasable product from the game's catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: ProductId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Url>,
    /// Localized price string, e.g. "$0.99". Formatting is the platform's.
    pub price: String,
    pub price_currency_code: String,
}

/// A completed purchase of a [`Product`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    pub payment_id: PaymentId,
    pub product_id: ProductId,
    pub purchase_token: PurchaseToken,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub purchase_time: DateTime<Utc>,
    /// Signed blob for server-side verification, opaque to this layer.
    pub signed_request: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_payload: Option<String>,
}

/// A product purchasable on a recurring schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscribableProduct {
    pub product_id: ProductId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Url>,
    pub price: String,
    pub price_currency_code: String,
    pub subscription_term: SubscriptionTerm,
}

/// An active or deactivated subscription held by the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub subscription_id: String,
    pub product_id: ProductId,
    pub purchase_token: PurchaseToken,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub purchase_time: DateTime<Utc>,
    /// Set once the platform has scheduled or performed deactivation.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub deactivation_time: Option<DateTime<Utc>>,
    pub is_entitlement_active: bool,
    pub signed_request: String,
}

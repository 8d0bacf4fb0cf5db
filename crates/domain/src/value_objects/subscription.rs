//! Subscription vocabulary.

use serde::{Deserialize, Serialize};

/// Billing cadence of a subscribable product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionTerm {
    Weekly,
    Biweekly,
    Monthly,
    Quarterly,
    Semiannual,
    Annual,
    #[serde(other)]
    Unknown,
}

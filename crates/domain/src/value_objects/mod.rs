//! Shared vocabulary types used across namespaces.

pub mod context;
pub mod subscription;

pub use context::{ContextSizeResponse, ContextType};
pub use subscription::SubscriptionTerm;

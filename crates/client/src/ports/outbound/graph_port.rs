//! Graph API port.

use async_trait::async_trait;
use playpark_shared::HttpMethod;

use super::ProviderError;

/// Generic path-based access to the platform's graph API.
///
/// The platform applies GET and no parameters when `method` or `params`
/// are absent; this layer forwards whatever it is given.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GraphPort: Send + Sync {
    async fn request(
        &self,
        path: String,
        method: Option<HttpMethod>,
        params: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, ProviderError>;
}

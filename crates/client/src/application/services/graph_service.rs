//! Graph service - adapted graph API access.

use std::sync::Arc;

use playpark_shared::HttpMethod;

use crate::application::error::CallError;
use crate::application::relay::relay;
use crate::ports::outbound::GraphPort;

const NAMESPACE: &str = "graph";

/// Adapted generic graph API requests.
#[derive(Clone)]
pub struct GraphService {
    port: Arc<dyn GraphPort>,
}

impl GraphService {
    pub fn new(port: Arc<dyn GraphPort>) -> Self {
        Self { port }
    }

    /// Perform a graph API call against the given path and resolve with
    /// whatever JSON the platform returned. Method defaults to GET and
    /// params to empty on the platform side.
    pub async fn request(
        &self,
        path: &str,
        method: Option<HttpMethod>,
        params: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, CallError> {
        relay(
            NAMESPACE,
            "request",
            self.port.request(path.to_string(), method, params),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{MockGraphPort, ProviderError};
    use mockall::predicate::*;
    use serde_json::json;

    #[tokio::test]
    async fn resolves_with_exactly_the_provider_value() {
        let mut port = MockGraphPort::new();
        let body = json!({"name": "Ada", "scores": [250, 320]});
        let returned = body.clone();

        port.expect_request()
            .with(
                eq("me".to_string()),
                eq(None::<HttpMethod>),
                eq(None::<serde_json::Value>),
            )
            .returning(move |_, _, _| Ok(returned.clone()));

        let service = GraphService::new(Arc::new(port));
        let result = service.request("me", None, None).await;

        assert_eq!(result, Ok(body));
    }

    #[tokio::test]
    async fn rejects_with_no_detail() {
        let mut port = MockGraphPort::new();
        port.expect_request()
            .returning(|_, _, _| Err(ProviderError::PermissionDenied));

        let service = GraphService::new(Arc::new(port));
        let result = service.request("me/friends", None, None).await;

        assert_eq!(result, Err(CallError));
    }
}

//! The single adaptation rule every adapted call goes through.

use std::future::Future;

use super::error::CallError;
use crate::ports::outbound::ProviderError;

/// Await one provider operation and normalize its outcome.
///
/// A success value passes through untouched. Failure detail is recorded
/// on the debug channel and then dropped; callers observe only
/// [`CallError`]. One forward, one relay - no retry, no timeout, no
/// caching, no state kept between calls.
pub(crate) async fn relay<T>(
    namespace: &'static str,
    operation: &'static str,
    call: impl Future<Output = Result<T, ProviderError>>,
) -> Result<T, CallError> {
    match call.await {
        Ok(value) => Ok(value),
        Err(error) => {
            tracing::debug!(namespace, operation, %error, "platform call failed");
            Err(CallError)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn passes_success_value_through_untouched() {
        let result = relay("test", "op", async { Ok::<_, ProviderError>(vec![1, 2, 3]) }).await;
        assert_eq!(result, Ok(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn empty_collection_stays_an_empty_collection() {
        let result = relay("test", "op", async { Ok::<_, ProviderError>(Vec::<u8>::new()) }).await;
        assert_eq!(result, Ok(Vec::new()));
    }

    #[tokio::test]
    async fn collapses_every_failure_category() {
        let failures = vec![
            ProviderError::PermissionDenied,
            ProviderError::RateLimited,
            ProviderError::network("socket closed"),
            ProviderError::UserCancelled,
            ProviderError::platform("PENDING_REQUEST", "dialog already open"),
        ];

        for failure in failures {
            let result = relay("test", "op", async { Err::<(), _>(failure) }).await;
            assert_eq!(result, Err(CallError));
        }
    }
}

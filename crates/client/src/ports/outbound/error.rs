//! Failure taxonomy of the platform runtime.

/// Failure categories the platform runtime reports for an operation.
///
/// Adaptation code collapses every variant into the payload-free
/// `CallError` before surfacing it; the detail here exists so provider
/// bindings and test stubs can express realistic failures, and so the
/// relay has something to log before dropping it.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    /// The player or app lacks permission for the operation.
    #[error("permission denied")]
    PermissionDenied,

    /// The operation was called too frequently.
    #[error("rate limited")]
    RateLimited,

    /// The platform could not reach its backend.
    #[error("network failure: {0}")]
    Network(String),

    /// The player dismissed a platform dialog.
    #[error("cancelled by user")]
    UserCancelled,

    /// Any other platform-reported failure, carried with its code.
    #[error("platform error {code}: {message}")]
    Platform { code: String, message: String },
}

impl ProviderError {
    /// Create a Network error with transport context.
    pub fn network(message: impl ToString) -> Self {
        Self::Network(message.to_string())
    }

    /// Create a Platform error from a platform code and message.
    pub fn platform(code: impl ToString, message: impl ToString) -> Self {
        Self::Platform {
            code: code.to_string(),
            message: message.to_string(),
        }
    }
}

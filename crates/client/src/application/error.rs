//! The adapted surface's failure signal.

/// Failure of an adapted call.
///
/// Exactly one shape, no payload. The provider's failure categories
/// (permission denial, rate limiting, network failure, user cancellation,
/// platform codes) are deliberately collapsed into this value: callers
/// only ever observe "succeeded with a value" or "failed". The discarded
/// detail is logged by the relay before it is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("platform call failed")]
pub struct CallError;

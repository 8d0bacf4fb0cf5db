use serde::{Deserialize, Serialize};

/// HTTP method for a graph request. The platform defaults to GET when no
/// method is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

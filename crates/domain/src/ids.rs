use std::fmt;

use serde::{Deserialize, Serialize};

/// Platform identifiers are opaque strings assigned by the runtime. The
/// newtypes keep namespaces from being mixed up; they never parse or
/// inspect the underlying value.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

// Identity and social graph IDs
define_id!(PlayerId);
define_id!(ContextId);

// Competition IDs
define_id!(TournamentId);
define_id!(SquadId);
define_id!(ArenaId);

// Commerce IDs
define_id!(ProductId);
define_id!(PaymentId);
define_id!(PurchaseToken);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_preserves_platform_value() {
        let id = PlayerId::new("1000234");
        assert_eq!(id.as_str(), "1000234");
        assert_eq!(id.to_string(), "1000234");
        assert_eq!(String::from(id), "1000234");
    }

    #[test]
    fn id_serializes_as_bare_string() {
        let id = TournamentId::new("t-991");
        let json = serde_json::to_string(&id).expect("serialize id");
        assert_eq!(json, r#""t-991""#);
    }
}

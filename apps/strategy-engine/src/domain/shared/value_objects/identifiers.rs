//! Strongly-typed identifiers for domain entities.
//!
//! These prevent mixing up IDs from different contexts.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier from a string.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Generate a new unique identifier using UUID v4.
            #[must_use]
            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            /// Get the inner string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
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
    };
}

define_id!(
    StrategyId,
    "Identifier assigned to a strategy by the strategy store."
);
define_id!(OwnerId, "Identifier of the staff member who owns a strategy.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_id_new_and_display() {
        let id = StrategyId::new("strat-123");
        assert_eq!(id.as_str(), "strat-123");
        assert_eq!(format!("{id}"), "strat-123");
    }

    #[test]
    fn strategy_id_generate_is_unique() {
        let id1 = StrategyId::generate();
        let id2 = StrategyId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn owner_id_from_conversions() {
        let id: OwnerId = "desk-7".into();
        assert_eq!(id.as_str(), "desk-7");

        let id: OwnerId = String::from("desk-8").into();
        assert_eq!(id.into_inner(), "desk-8");
    }

    #[test]
    fn serde_is_transparent() {
        let id = StrategyId::new("strat-123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"strat-123\"");

        let parsed: StrategyId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}

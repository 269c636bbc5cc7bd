//! Strategy Store Port (Driven Port)
//!
//! Interface to the remote store that persists strategies. Field-level
//! rejections use the store's validation format: `{loc, msg, type}` where
//! `loc` is a path of keys and list indices.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::shared::StrategyId;
use crate::domain::strategy_definition::{
    StoredStrategy, StrategyError, StrategyPayload, ViolationKind,
};

/// One segment of a field error location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocSegment {
    /// List index.
    Index(usize),
    /// Object key.
    Key(String),
}

impl From<&str> for LocSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<usize> for LocSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// A single field-level rejection from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Path to the offending value, e.g. `["body", "legs", 2, "quantity"]`.
    pub loc: Vec<LocSegment>,
    /// Human-readable message.
    pub msg: String,
    /// Machine-readable error type, e.g. `literal_error`.
    #[serde(rename = "type")]
    pub kind: String,
}

// Request-part prefixes that never name a strategy field.
const LOC_PREFIXES: [&str; 3] = ["body", "query", "path"];

impl FieldError {
    /// Create a field error.
    pub fn new(loc: Vec<LocSegment>, msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            loc,
            msg: msg.into(),
            kind: kind.into(),
        }
    }

    /// Innermost field name in `loc`.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        self.loc.iter().rev().find_map(|segment| match segment {
            LocSegment::Key(key) if !LOC_PREFIXES.contains(&key.as_str()) => Some(key.as_str()),
            _ => None,
        })
    }

    /// Leg position, when `loc` points into the leg list.
    #[must_use]
    pub fn leg(&self) -> Option<usize> {
        self.loc
            .windows(2)
            .find_map(|pair| match (&pair[0], &pair[1]) {
                (LocSegment::Key(key), LocSegment::Index(i)) if key == "legs" => Some(*i),
                _ => None,
            })
    }

    /// Classify the store's error type.
    #[must_use]
    pub fn violation_kind(&self) -> ViolationKind {
        let kind = self.kind.as_str();
        match kind {
            "missing" | "value_error.missing" => ViolationKind::Missing,
            "literal_error" | "enum" | "value_error.const" | "type_error.enum" => {
                ViolationKind::InvalidEnum
            }
            _ if kind.starts_with("value_error")
                || kind.starts_with("type_error")
                || kind.starts_with("greater_than")
                || kind.starts_with("less_than")
                || kind.ends_with("_parsing")
                || kind.ends_with("_type") =>
            {
                ViolationKind::InvalidValue
            }
            _ => ViolationKind::Other,
        }
    }

    /// Map into the local error vocabulary.
    #[must_use]
    pub fn to_strategy_error(&self) -> StrategyError {
        StrategyError::RemoteRejected {
            field: self.field().map(str::to_string),
            leg: self.leg(),
            kind: self.violation_kind(),
            message: self.msg.clone(),
        }
    }
}

fn error_count(errors: &[FieldError]) -> usize {
    errors.len()
}

/// Strategy store port error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store refused the payload.
    #[error("strategy rejected with {n} field error(s)", n = error_count(.0))]
    Rejected(Vec<FieldError>),

    /// No strategy with this id.
    #[error("strategy not found: {id}")]
    NotFound {
        /// The missing strategy ID.
        id: String,
    },

    /// The store could not be reached or failed internally.
    #[error("strategy store unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },
}

impl From<StoreError> for StrategyError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Rejected(errors) => errors.first().map_or_else(
                || Self::RemoteRejected {
                    field: None,
                    leg: None,
                    kind: ViolationKind::Other,
                    message: "strategy rejected by store".to_string(),
                },
                FieldError::to_strategy_error,
            ),
            StoreError::NotFound { id } => Self::NotFound { id },
            StoreError::Unavailable { message } => Self::StoreUnavailable { message },
        }
    }
}

/// Port for the strategy store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StrategyStorePort: Send + Sync {
    /// Persist a new strategy and return it with its assigned identity.
    async fn create(&self, payload: &StrategyPayload) -> Result<StoredStrategy, StoreError>;

    /// List stored strategies visible to the caller.
    async fn list(&self) -> Result<Vec<StoredStrategy>, StoreError>;

    /// Replace the definition of an existing strategy.
    async fn update(&self, id: &StrategyId, payload: &StrategyPayload) -> Result<(), StoreError>;

    /// Delete a strategy.
    async fn delete(&self, id: &StrategyId) -> Result<(), StoreError>;
}

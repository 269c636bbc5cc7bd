//! Error codes and presentation error bodies.
//!
//! Every [`StrategyError`] maps to a stable error code. The presentation
//! layer renders failures from the [`ErrorResponse`] body.
//!
//! # HTTP Status Codes
//!
//! | Status | Codes | Usage |
//! |--------|-------|-------|
//! | `400` | `MISSING_FIELD`, `INVALID_ENUM`, `INVALID_VALUE`, `OUT_OF_RANGE` | Bad edit or draft |
//! | `404` | `STRATEGY_NOT_FOUND` | Unknown strategy id |
//! | `422` | `TOO_MANY_LEGS`, `REMOTE_REJECTED` | Structurally invalid strategy |
//! | `503` | `STORE_UNAVAILABLE` | Store temporarily unavailable |

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::strategy_definition::StrategyError;

/// Error codes for the strategy engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Local validation errors
    /// Required field absent.
    MissingField,
    /// Value is not a recognized option.
    InvalidEnum,
    /// Value has the wrong type or violates a bound.
    InvalidValue,
    /// Leg position outside the leg list.
    OutOfRange,
    /// More legs than allowed.
    TooManyLegs,

    // Store errors
    /// Store refused the strategy.
    RemoteRejected,
    /// Strategy not found.
    StrategyNotFound,
    /// Store unreachable.
    StoreUnavailable,
}

impl ErrorCode {
    /// HTTP-compatible status code.
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::MissingField | Self::InvalidEnum | Self::InvalidValue | Self::OutOfRange => 400,
            Self::StrategyNotFound => 404,
            Self::TooManyLegs | Self::RemoteRejected => 422,
            Self::StoreUnavailable => 503,
        }
    }

    /// Get the error reason string.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::MissingField => "MISSING_FIELD",
            Self::InvalidEnum => "INVALID_ENUM",
            Self::InvalidValue => "INVALID_VALUE",
            Self::OutOfRange => "OUT_OF_RANGE",
            Self::TooManyLegs => "TOO_MANY_LEGS",
            Self::RemoteRejected => "REMOTE_REJECTED",
            Self::StrategyNotFound => "STRATEGY_NOT_FOUND",
            Self::StoreUnavailable => "STORE_UNAVAILABLE",
        }
    }

    /// Code for a strategy error.
    #[must_use]
    pub const fn of(error: &StrategyError) -> Self {
        match error {
            StrategyError::MissingField { .. } => Self::MissingField,
            StrategyError::InvalidEnum { .. } => Self::InvalidEnum,
            StrategyError::InvalidValue { .. } => Self::InvalidValue,
            StrategyError::OutOfRange { .. } => Self::OutOfRange,
            StrategyError::TooManyLegs { .. } => Self::TooManyLegs,
            StrategyError::RemoteRejected { .. } => Self::RemoteRejected,
            StrategyError::NotFound { .. } => Self::StrategyNotFound,
            StrategyError::StoreUnavailable { .. } => Self::StoreUnavailable,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// Error response body for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code string.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// HTTP-compatible status.
    pub http_status: u16,
    /// Additional details (`field`, `leg`, `violation`, `id`).
    pub details: HashMap<String, String>,
}

impl From<&StrategyError> for ErrorResponse {
    fn from(error: &StrategyError) -> Self {
        let code = ErrorCode::of(error);
        let mut details = HashMap::new();

        if let Some(field) = error.field() {
            details.insert("field".to_string(), field.to_string());
        }
        if let Some(leg) = error.leg() {
            details.insert("leg".to_string(), leg.to_string());
        }
        match error {
            StrategyError::RemoteRejected { kind, .. } => {
                details.insert("violation".to_string(), kind.to_string());
            }
            StrategyError::NotFound { id } => {
                details.insert("id".to_string(), id.clone());
            }
            StrategyError::TooManyLegs { count, max } => {
                details.insert("count".to_string(), count.to_string());
                details.insert("max".to_string(), max.to_string());
            }
            _ => {}
        }

        Self {
            code: code.reason().to_string(),
            message: error.to_string(),
            http_status: code.http_status(),
            details,
        }
    }
}

impl From<StrategyError> for ErrorResponse {
    fn from(error: StrategyError) -> Self {
        Self::from(&error)
    }
}

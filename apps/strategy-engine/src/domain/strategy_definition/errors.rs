//! Strategy Definition Errors

use thiserror::Error;

/// Classification of a violation reported by the persistence boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// A required field was absent.
    Missing,
    /// A value was not one of the allowed literals.
    InvalidEnum,
    /// A value had the wrong type or was outside its bounds.
    InvalidValue,
    /// Anything the boundary did not classify.
    Other,
}

impl ViolationKind {
    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::InvalidEnum => "invalid_enum",
            Self::InvalidValue => "invalid_value",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn at_field(field: &Option<String>) -> String {
    field.as_ref().map(|f| format!(" at {f}")).unwrap_or_default()
}

fn at_leg(leg: &Option<usize>) -> String {
    leg.map(|i| format!(" (leg {i})")).unwrap_or_default()
}

/// Errors raised while editing, validating, or submitting a strategy.
///
/// `leg` positions are 0-based indices into the leg sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    /// A required field is absent or empty.
    #[error("missing required field: {field}")]
    MissingField {
        /// Field name.
        field: String,
    },

    /// A value is not one of the recognized literals.
    #[error("invalid value for {field}{at}: not a recognized option", at = at_leg(.leg))]
    InvalidEnum {
        /// Field name.
        field: String,
        /// Leg position, when the field belongs to a leg.
        leg: Option<usize>,
    },

    /// A value has the wrong type or violates a bound.
    #[error("invalid value for {field}{at}: {message}", at = at_leg(.leg))]
    InvalidValue {
        /// Field name.
        field: String,
        /// Leg position, when the field belongs to a leg.
        leg: Option<usize>,
        /// What was wrong.
        message: String,
    },

    /// A leg position outside the current sequence.
    #[error("leg position {position} out of range (strategy has {len} legs)")]
    OutOfRange {
        /// Requested position.
        position: usize,
        /// Current leg count.
        len: usize,
    },

    /// More legs than a strategy may hold.
    #[error("too many legs: {count} (maximum {max})")]
    TooManyLegs {
        /// Leg count found.
        count: usize,
        /// Allowed maximum.
        max: usize,
    },

    /// The persistence boundary refused the payload.
    #[error("rejected by store{on}{at}: {message}", on = at_field(.field), at = at_leg(.leg))]
    RemoteRejected {
        /// Offending field, if the boundary named one.
        field: Option<String>,
        /// Offending leg position, if the boundary named one.
        leg: Option<usize>,
        /// Violation classification.
        kind: ViolationKind,
        /// Boundary message.
        message: String,
    },

    /// No stored strategy with this id.
    #[error("strategy not found: {id}")]
    NotFound {
        /// Requested id.
        id: String,
    },

    /// The persistence boundary could not be reached.
    #[error("strategy store unavailable: {message}")]
    StoreUnavailable {
        /// Failure detail.
        message: String,
    },
}

impl StrategyError {
    /// Create a missing-field error.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid-enum error.
    pub fn invalid_enum(field: impl Into<String>, leg: Option<usize>) -> Self {
        Self::InvalidEnum {
            field: field.into(),
            leg,
        }
    }

    /// Create an invalid-value error.
    pub fn invalid_value(
        field: impl Into<String>,
        leg: Option<usize>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            leg,
            message: message.into(),
        }
    }

    /// Field the error refers to, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field }
            | Self::InvalidEnum { field, .. }
            | Self::InvalidValue { field, .. } => Some(field),
            Self::RemoteRejected { field, .. } => field.as_deref(),
            Self::OutOfRange { .. }
            | Self::TooManyLegs { .. }
            | Self::NotFound { .. }
            | Self::StoreUnavailable { .. } => None,
        }
    }

    /// Leg position the error refers to, if any.
    #[must_use]
    pub const fn leg(&self) -> Option<usize> {
        match self {
            Self::InvalidEnum { leg, .. }
            | Self::InvalidValue { leg, .. }
            | Self::RemoteRejected { leg, .. } => *leg,
            Self::OutOfRange { position, .. } => Some(*position),
            Self::MissingField { .. }
            | Self::TooManyLegs { .. }
            | Self::NotFound { .. }
            | Self::StoreUnavailable { .. } => None,
        }
    }

    /// Whether the error was raised locally, before any boundary call.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(
            self,
            Self::MissingField { .. }
                | Self::InvalidEnum { .. }
                | Self::InvalidValue { .. }
                | Self::OutOfRange { .. }
                | Self::TooManyLegs { .. }
        )
    }
}

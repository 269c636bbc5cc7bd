//! Strategy Definition Bounded Context
//!
//! Owns the draft model for multi-leg strategies:
//! - Leg collection with contiguous 1-based indices and a 4-leg limit
//! - Instrument-specific leg variants (only option legs carry an option type)
//! - Fail-fast validation before submission
//! - Payload codec for the strategy store

pub mod aggregate;
pub mod errors;
pub mod payload;
pub mod services;
pub mod value_objects;

pub use aggregate::{
    Leg, LegCollection, LegParams, LegUpdate, MAX_LEGS, ReconstitutedStrategyParams, Strategy,
};
pub use errors::{StrategyError, ViolationKind};
pub use payload::{LegPayload, StoredStrategy, StrategyPayload};
pub use services::StrategyValidator;
pub use value_objects::{
    InstrumentType, LegAction, LegDefaults, LegField, LegKind, OptionType, StrikeMode,
    UnknownVariant,
};

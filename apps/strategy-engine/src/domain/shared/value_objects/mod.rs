//! Shared Value Objects
//!
//! Immutable domain types used across bounded contexts.
//! Value objects are compared by value, not identity.

mod identifiers;
mod ticker;

pub use identifiers::{OwnerId, StrategyId};
pub use ticker::Ticker;

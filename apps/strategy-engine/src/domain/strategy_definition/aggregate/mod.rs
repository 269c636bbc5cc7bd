//! Strategy Aggregate

mod leg;
mod leg_collection;
mod leg_update;
mod strategy;

pub use leg::{Leg, LegParams};
pub use leg_collection::{LegCollection, MAX_LEGS};
pub use leg_update::LegUpdate;
pub use strategy::{ReconstitutedStrategyParams, Strategy};

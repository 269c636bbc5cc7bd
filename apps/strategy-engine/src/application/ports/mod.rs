//! Application Ports (Driven)
//!
//! Ports define interfaces for interacting with external systems.
//! - **Driven Ports** (Secondary/Outbound): How our application uses external systems

mod strategy_store_port;

#[cfg(test)]
pub use strategy_store_port::MockStrategyStorePort;
pub use strategy_store_port::{FieldError, LocSegment, StoreError, StrategyStorePort};

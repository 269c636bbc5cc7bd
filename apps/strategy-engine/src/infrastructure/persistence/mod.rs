//! Persistence Adapters
//!
//! Implementations of the strategy store port.

pub mod in_memory;

pub use in_memory::InMemoryStrategyStore;

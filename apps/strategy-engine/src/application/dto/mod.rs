//! Data Transfer Objects (DTOs)
//!
//! DTOs are used for presentation boundaries and use case outputs.

mod strategy_dto;

pub use strategy_dto::{StrategySummary, UNTITLED};

//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod delete_strategy;
mod load_strategies;
mod submit_strategy;
mod update_strategy;

pub use delete_strategy::DeleteStrategyUseCase;
pub use load_strategies::LoadStrategiesUseCase;
pub use submit_strategy::SubmitStrategyUseCase;
pub use update_strategy::UpdateStrategyUseCase;

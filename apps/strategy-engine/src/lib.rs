// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::needless_collect,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Strategy Engine - Strategy Definition Core
//!
//! Model for multi-leg trading strategies: leg bookkeeping, validation and
//! submission to a strategy store.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (aggregates, value objects, services)
//!   - `strategy_definition`: Strategy aggregate, leg collection, validator, payload codec
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: Interfaces for external systems (`StrategyStorePort`)
//!   - `use_cases`: `SubmitStrategy`, `UpdateStrategy`, `LoadStrategies`, `DeleteStrategy`
//!   - `dto`: List rows for presentation
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `persistence`: Strategy store (in-memory)

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Cross-cutting
// =============================================================================

/// Configuration loading and validation.
pub mod config;

/// Error codes and presentation error bodies.
pub mod error;

/// Tracing subscriber setup.
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::shared::{OwnerId, StrategyId, Ticker};
pub use domain::strategy_definition::{
    InstrumentType, Leg, LegAction, LegCollection, LegDefaults, LegKind, LegUpdate, MAX_LEGS,
    OptionType, StoredStrategy, Strategy, StrategyError, StrategyPayload, StrategyValidator,
    StrikeMode,
};

// Application re-exports
pub use application::ports::{FieldError, StoreError, StrategyStorePort};
pub use application::use_cases::{
    DeleteStrategyUseCase, LoadStrategiesUseCase, SubmitStrategyUseCase, UpdateStrategyUseCase,
};

// Infrastructure re-exports
pub use infrastructure::persistence::InMemoryStrategyStore;

// Error re-exports
pub use error::{ErrorCode, ErrorResponse};

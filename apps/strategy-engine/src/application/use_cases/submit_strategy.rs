//! Submit Strategy Use Case

use std::sync::Arc;

use crate::application::ports::StrategyStorePort;
use crate::domain::strategy_definition::{StoredStrategy, Strategy, StrategyError};

/// Use case for creating a strategy in the store.
///
/// The draft is validated first and the store is only called when every
/// rule passes. Failures are reported once and never retried.
pub struct SubmitStrategyUseCase<S>
where
    S: StrategyStorePort,
{
    store: Arc<S>,
}

impl<S> SubmitStrategyUseCase<S>
where
    S: StrategyStorePort,
{
    /// Create a new SubmitStrategyUseCase.
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Execute the use case.
    #[tracing::instrument(skip_all, fields(ticker = %strategy.ticker(), legs = strategy.legs().len()))]
    pub async fn execute(&self, strategy: &Strategy) -> Result<StoredStrategy, StrategyError> {
        if let Err(e) = strategy.validate() {
            tracing::warn!(error = %e, "Strategy failed validation");
            return Err(e);
        }

        let payload = strategy.to_payload();
        match self.store.create(&payload).await {
            Ok(stored) => {
                tracing::info!(strategy_id = %stored.id, "Strategy created");
                Ok(stored)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Strategy store rejected create");
                Err(e.into())
            }
        }
    }
}

//! Delete Strategy Use Case

use std::sync::Arc;

use crate::application::ports::StrategyStorePort;
use crate::domain::shared::StrategyId;
use crate::domain::strategy_definition::StrategyError;

/// Use case for deleting a stored strategy.
pub struct DeleteStrategyUseCase<S>
where
    S: StrategyStorePort,
{
    store: Arc<S>,
}

impl<S> DeleteStrategyUseCase<S>
where
    S: StrategyStorePort,
{
    /// Create a new DeleteStrategyUseCase.
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Execute the use case.
    #[tracing::instrument(skip_all, fields(strategy_id = %id))]
    pub async fn execute(&self, id: &StrategyId) -> Result<(), StrategyError> {
        self.store.delete(id).await?;
        tracing::info!("Strategy deleted");
        Ok(())
    }
}

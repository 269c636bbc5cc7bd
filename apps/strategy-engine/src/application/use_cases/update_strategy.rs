//! Update Strategy Use Case

use std::sync::Arc;

use crate::application::ports::StrategyStorePort;
use crate::domain::strategy_definition::{Strategy, StrategyError};

/// Use case for saving edits to a persisted strategy.
pub struct UpdateStrategyUseCase<S>
where
    S: StrategyStorePort,
{
    store: Arc<S>,
}

impl<S> UpdateStrategyUseCase<S>
where
    S: StrategyStorePort,
{
    /// Create a new UpdateStrategyUseCase.
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Execute the use case.
    ///
    /// The strategy must carry a store id and pass validation.
    #[tracing::instrument(skip_all, fields(strategy_id = ?strategy.id().map(|id| id.as_str())))]
    pub async fn execute(&self, strategy: &Strategy) -> Result<(), StrategyError> {
        let id = strategy.id().ok_or_else(|| StrategyError::missing("id"))?;

        if let Err(e) = strategy.validate() {
            tracing::warn!(error = %e, "Strategy failed validation");
            return Err(e);
        }

        self.store
            .update(id, &strategy.to_payload())
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Strategy store rejected update");
                StrategyError::from(e)
            })?;

        tracing::info!("Strategy updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockStrategyStorePort, StoreError};
    use crate::domain::shared::{OwnerId, StrategyId};
    use crate::domain::strategy_definition::{LegUpdate, StoredStrategy, StrategyPayload};
    use chrono::Utc;

    fn persisted() -> Strategy {
        let mut draft = Strategy::draft();
        draft.set_ticker("IWM");
        draft.add_leg();
        StoredStrategy {
            id: StrategyId::new("s-9"),
            user_id: OwnerId::new("desk"),
            is_active: true,
            created_at: Utc::now(),
            strategy: StrategyPayload::from(&draft),
        }
        .to_draft()
        .unwrap()
    }

    #[tokio::test]
    async fn update_sends_id_and_payload() {
        let mut store = MockStrategyStorePort::new();
        store
            .expect_update()
            .withf(|id, payload| id.as_str() == "s-9" && payload.legs[0].quantity == 3)
            .times(1)
            .returning(|_, _| Ok(()));

        let mut strategy = persisted();
        strategy.update_leg(0, LegUpdate::Quantity(3)).unwrap();

        let use_case = UpdateStrategyUseCase::new(Arc::new(store));
        use_case.execute(&strategy).await.unwrap();
    }

    #[tokio::test]
    async fn unsaved_draft_needs_id() {
        let mut store = MockStrategyStorePort::new();
        store.expect_update().times(0);

        let mut draft = Strategy::draft();
        draft.set_ticker("IWM");

        let use_case = UpdateStrategyUseCase::new(Arc::new(store));
        let err = use_case.execute(&draft).await.unwrap_err();
        assert_eq!(err, StrategyError::missing("id"));
    }

    #[tokio::test]
    async fn invalid_edit_is_not_sent() {
        let mut store = MockStrategyStorePort::new();
        store.expect_update().times(0);

        let mut strategy = persisted();
        strategy.update_leg(0, LegUpdate::ExpirationDays(-1)).unwrap();

        let use_case = UpdateStrategyUseCase::new(Arc::new(store));
        let err = use_case.execute(&strategy).await.unwrap_err();
        assert_eq!(err.field(), Some("expiration_days"));
    }

    #[tokio::test]
    async fn missing_remote_strategy_is_not_found() {
        let mut store = MockStrategyStorePort::new();
        store
            .expect_update()
            .returning(|id, _| Err(StoreError::NotFound { id: id.to_string() }));

        let use_case = UpdateStrategyUseCase::new(Arc::new(store));
        let err = use_case.execute(&persisted()).await.unwrap_err();
        assert_eq!(err, StrategyError::NotFound { id: "s-9".to_string() });
    }
}

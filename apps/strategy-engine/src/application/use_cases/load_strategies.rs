//! Load Strategies Use Case
//!
//! Lists stored strategies and re-hydrates them into editable drafts.

use std::sync::Arc;

use crate::application::dto::StrategySummary;
use crate::application::ports::StrategyStorePort;
use crate::domain::shared::StrategyId;
use crate::domain::strategy_definition::{LegDefaults, StoredStrategy, Strategy, StrategyError};

/// Use case for listing strategies and opening them for editing.
pub struct LoadStrategiesUseCase<S>
where
    S: StrategyStorePort,
{
    store: Arc<S>,
    leg_defaults: LegDefaults,
}

impl<S> LoadStrategiesUseCase<S>
where
    S: StrategyStorePort,
{
    /// Create a new LoadStrategiesUseCase.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            leg_defaults: LegDefaults::default(),
        }
    }

    /// Use `leg_defaults` for legs added to loaded drafts.
    #[must_use]
    pub fn with_leg_defaults(mut self, leg_defaults: LegDefaults) -> Self {
        self.leg_defaults = leg_defaults;
        self
    }

    /// All stored strategies.
    pub async fn list(&self) -> Result<Vec<StoredStrategy>, StrategyError> {
        let strategies = self.store.list().await?;
        tracing::debug!(count = strategies.len(), "Listed strategies");
        Ok(strategies)
    }

    /// List rows for display.
    pub async fn summaries(&self) -> Result<Vec<StrategySummary>, StrategyError> {
        Ok(self.list().await?.iter().map(StrategySummary::from).collect())
    }

    /// Open a stored strategy for editing, keeping its identity.
    #[tracing::instrument(skip_all, fields(strategy_id = %id))]
    pub async fn load_for_edit(&self, id: &StrategyId) -> Result<Strategy, StrategyError> {
        self.find(id).await?.to_draft_with(self.leg_defaults.clone())
    }

    /// Open a copy of a stored strategy as a new, unsaved draft.
    #[tracing::instrument(skip_all, fields(strategy_id = %id))]
    pub async fn clone_for_edit(&self, id: &StrategyId) -> Result<Strategy, StrategyError> {
        let stored = self.find(id).await?;
        Ok(stored
            .to_draft_with(self.leg_defaults.clone())?
            .clone_as_draft())
    }

    async fn find(&self, id: &StrategyId) -> Result<StoredStrategy, StrategyError> {
        self.store
            .list()
            .await?
            .into_iter()
            .find(|stored| &stored.id == id)
            .ok_or_else(|| {
                tracing::warn!("Strategy not found");
                StrategyError::NotFound { id: id.to_string() }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockStrategyStorePort, StoreError};
    use crate::domain::shared::OwnerId;
    use crate::domain::strategy_definition::{LegAction, StrategyPayload};
    use chrono::Utc;

    fn stored(id: &str, name: Option<&str>) -> StoredStrategy {
        let mut draft = Strategy::draft();
        draft.set_ticker("TLT");
        draft.add_leg();
        draft.add_leg();
        draft.remove_leg(0).unwrap();
        let mut payload = StrategyPayload::from(&draft);
        payload.name = name.map(str::to_string);
        StoredStrategy {
            id: StrategyId::new(id),
            user_id: OwnerId::new("desk"),
            is_active: false,
            created_at: Utc::now(),
            strategy: payload,
        }
    }

    fn store_with(strategies: Vec<StoredStrategy>) -> MockStrategyStorePort {
        let mut store = MockStrategyStorePort::new();
        store
            .expect_list()
            .returning(move || Ok(strategies.clone()));
        store
    }

    #[tokio::test]
    async fn summaries_show_untitled() {
        let store = store_with(vec![stored("a", None), stored("b", Some("Hedge"))]);
        let use_case = LoadStrategiesUseCase::new(Arc::new(store));

        let names: Vec<_> = use_case
            .summaries()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.display_name)
            .collect();
        assert_eq!(names, vec!["Untitled", "Hedge"]);
    }

    #[tokio::test]
    async fn load_for_edit_keeps_identity() {
        let store = store_with(vec![stored("a", Some("Hedge"))]);
        let use_case = LoadStrategiesUseCase::new(Arc::new(store));

        let draft = use_case.load_for_edit(&StrategyId::new("a")).await.unwrap();
        assert_eq!(draft.id().map(StrategyId::as_str), Some("a"));
        assert!(!draft.is_active());
        assert_eq!(draft.legs().len(), 1);
        assert_eq!(draft.legs().get(0).unwrap().leg_index(), 1);
    }

    #[tokio::test]
    async fn clone_for_edit_is_fresh_draft() {
        let store = store_with(vec![stored("a", Some("Hedge"))]);
        let defaults = LegDefaults {
            action: LegAction::Sell,
            ..LegDefaults::default()
        };
        let use_case = LoadStrategiesUseCase::new(Arc::new(store)).with_leg_defaults(defaults);

        let mut draft = use_case.clone_for_edit(&StrategyId::new("a")).await.unwrap();
        assert!(!draft.is_persisted());
        assert!(draft.is_active());
        assert_eq!(draft.name(), Some("Hedge"));
        assert_eq!(draft.add_leg().unwrap().action(), LegAction::Sell);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let store = store_with(vec![stored("a", None)]);
        let use_case = LoadStrategiesUseCase::new(Arc::new(store));

        let err = use_case
            .load_for_edit(&StrategyId::new("zzz"))
            .await
            .unwrap_err();
        assert_eq!(err, StrategyError::NotFound { id: "zzz".to_string() });
    }

    #[tokio::test]
    async fn list_failure_propagates() {
        let mut store = MockStrategyStorePort::new();
        store.expect_list().returning(|| {
            Err(StoreError::Unavailable {
                message: "down".to_string(),
            })
        });
        let use_case = LoadStrategiesUseCase::new(Arc::new(store));

        assert!(matches!(
            use_case.list().await,
            Err(StrategyError::StoreUnavailable { .. })
        ));
    }
}

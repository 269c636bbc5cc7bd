//! In-memory strategy store for testing and local runs.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::application::ports::{FieldError, LocSegment, StoreError, StrategyStorePort};
use crate::domain::shared::{OwnerId, StrategyId};
use crate::domain::strategy_definition::{LegPayload, MAX_LEGS, StoredStrategy, StrategyPayload};

const INSTRUMENT_TYPES: [&str; 3] = ["equity", "option", "future"];
const ACTIONS: [&str; 2] = ["buy", "sell"];
const OPTION_TYPES: [&str; 2] = ["call", "put"];
const STRIKE_MODES: [&str; 2] = ["fixed", "delta"];

/// In-memory implementation of `StrategyStorePort`.
///
/// Applies the same schema checks as the remote store and reports them as
/// field errors. Strategies are kept in insertion order.
/// Suitable for testing and development. Not for production use.
#[derive(Debug)]
pub struct InMemoryStrategyStore {
    owner_id: OwnerId,
    strategies: RwLock<Vec<StoredStrategy>>,
}

impl Default for InMemoryStrategyStore {
    fn default() -> Self {
        Self::new(OwnerId::new("local"))
    }
}

impl InMemoryStrategyStore {
    /// Create an empty store that assigns `owner_id` to created strategies.
    #[must_use]
    pub fn new(owner_id: OwnerId) -> Self {
        Self {
            owner_id,
            strategies: RwLock::new(Vec::new()),
        }
    }

    /// Owner assigned to created strategies.
    #[must_use]
    pub const fn owner_id(&self) -> &OwnerId {
        &self.owner_id
    }

    /// Get the number of stored strategies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().map_or(0, |s| s.len())
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all strategies.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.write()?.clear();
        Ok(())
    }

    /// Add a stored strategy as-is (for test setup).
    pub fn insert(&self, stored: StoredStrategy) -> Result<(), StoreError> {
        self.write()?.push(stored);
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<StoredStrategy>>, StoreError> {
        self.strategies.read().map_err(|e| StoreError::Unavailable {
            message: format!("store lock poisoned: {e}"),
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<StoredStrategy>>, StoreError> {
        self.strategies.write().map_err(|e| StoreError::Unavailable {
            message: format!("store lock poisoned: {e}"),
        })
    }
}

fn loc(path: &[LocSegment]) -> Vec<LocSegment> {
    let mut loc = vec![LocSegment::from("body")];
    loc.extend_from_slice(path);
    loc
}

fn literal_error(path: &[LocSegment], allowed: &[&str]) -> FieldError {
    let quoted: Vec<String> = allowed.iter().map(|v| format!("'{v}'")).collect();
    let msg = match quoted.split_last() {
        Some((last, rest)) if !rest.is_empty() => {
            format!("Input should be {} or {last}", rest.join(", "))
        }
        _ => format!("Input should be {}", quoted.join("")),
    };
    FieldError::new(loc(path), msg, "literal_error")
}

fn check_leg(i: usize, leg: &LegPayload, errors: &mut Vec<FieldError>) {
    let at = |field: &str| [LocSegment::from("legs"), LocSegment::from(i), LocSegment::from(field)];

    if leg.leg_index < 1 {
        errors.push(FieldError::new(
            loc(&at("leg_index")),
            "Input should be greater than or equal to 1",
            "greater_than_equal",
        ));
    } else if leg.leg_index > MAX_LEGS {
        errors.push(FieldError::new(
            loc(&at("leg_index")),
            format!("Input should be less than or equal to {MAX_LEGS}"),
            "less_than_equal",
        ));
    }
    if !ACTIONS.contains(&leg.action.as_str()) {
        errors.push(literal_error(&at("action"), &ACTIONS));
    }
    if let Some(option_type) = &leg.option_type
        && !OPTION_TYPES.contains(&option_type.as_str())
    {
        errors.push(literal_error(&at("option_type"), &OPTION_TYPES));
    }
    if !STRIKE_MODES.contains(&leg.strike_mode.as_str()) {
        errors.push(literal_error(&at("strike_mode"), &STRIKE_MODES));
    }
}

/// Schema checks of the remote store. All violations are collected.
fn check_payload(payload: &StrategyPayload) -> Result<(), StoreError> {
    let mut errors = Vec::new();

    if !INSTRUMENT_TYPES.contains(&payload.instrument_type.as_str()) {
        errors.push(literal_error(
            &[LocSegment::from("instrument_type")],
            &INSTRUMENT_TYPES,
        ));
    }

    let leg_errors_before = errors.len();
    for (i, leg) in payload.legs.iter().enumerate() {
        check_leg(i, leg, &mut errors);
    }
    // the leg-count rule only runs once every leg parsed
    if errors.len() == leg_errors_before && payload.legs.len() > MAX_LEGS {
        errors.push(FieldError::new(
            loc(&[LocSegment::from("legs")]),
            format!("Value error, Maximum of {MAX_LEGS} legs allowed"),
            "value_error",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(StoreError::Rejected(errors))
    }
}

#[async_trait]
impl StrategyStorePort for InMemoryStrategyStore {
    async fn create(&self, payload: &StrategyPayload) -> Result<StoredStrategy, StoreError> {
        check_payload(payload)?;
        let stored = StoredStrategy {
            id: StrategyId::generate(),
            user_id: self.owner_id.clone(),
            is_active: true,
            created_at: Utc::now(),
            strategy: payload.clone(),
        };
        self.write()?.push(stored.clone());
        tracing::debug!(strategy_id = %stored.id, "Stored strategy");
        Ok(stored)
    }

    async fn list(&self) -> Result<Vec<StoredStrategy>, StoreError> {
        Ok(self.read()?.clone())
    }

    async fn update(&self, id: &StrategyId, payload: &StrategyPayload) -> Result<(), StoreError> {
        let mut strategies = self.write()?;
        let stored = strategies
            .iter_mut()
            .find(|s| &s.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;
        check_payload(payload)?;
        stored.strategy = payload.clone();
        Ok(())
    }

    async fn delete(&self, id: &StrategyId) -> Result<(), StoreError> {
        let mut strategies = self.write()?;
        let position = strategies
            .iter()
            .position(|s| &s.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;
        strategies.remove(position);
        Ok(())
    }
}

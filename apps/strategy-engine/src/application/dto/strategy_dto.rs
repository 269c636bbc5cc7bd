//! Strategy DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::strategy_definition::StoredStrategy;

/// Label shown for strategies saved without a name.
pub const UNTITLED: &str = "Untitled";

/// One row of the strategy list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategySummary {
    /// Strategy ID.
    pub id: String,
    /// Name, or "Untitled".
    pub display_name: String,
    /// Ticker.
    pub ticker: String,
    /// Instrument type as stored.
    pub instrument_type: String,
    /// Number of legs.
    pub leg_count: usize,
    /// Active flag.
    pub is_active: bool,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl StrategySummary {
    /// Create from a stored strategy.
    #[must_use]
    pub fn from_stored(stored: &StoredStrategy) -> Self {
        let display_name = stored
            .strategy
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(UNTITLED)
            .to_string();

        Self {
            id: stored.id.to_string(),
            display_name,
            ticker: stored.strategy.ticker.clone(),
            instrument_type: stored.strategy.instrument_type.clone(),
            leg_count: stored.strategy.legs.len(),
            is_active: stored.is_active,
            created_at: stored.created_at,
        }
    }

    /// Leg count label, e.g. "3 Legs".
    #[must_use]
    pub fn legs_label(&self) -> String {
        match self.leg_count {
            1 => "1 Leg".to_string(),
            n => format!("{n} Legs"),
        }
    }
}

impl From<&StoredStrategy> for StrategySummary {
    fn from(stored: &StoredStrategy) -> Self {
        Self::from_stored(stored)
    }
}

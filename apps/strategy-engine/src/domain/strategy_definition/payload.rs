//! Strategy store payloads.
//!
//! The store exchanges strategies as
//! `{name, ticker, instrument_type, legs: [{leg_index, action, option_type,
//! quantity, strike_value, strike_mode, expiration_days}]}`. Enumerated
//! attributes are kept as text here so that hydration can report unknown
//! values with the leg position instead of failing the whole decode.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::aggregate::{Leg, LegParams, MAX_LEGS, ReconstitutedStrategyParams, Strategy};
use super::errors::StrategyError;
use super::value_objects::{InstrumentType, LegDefaults, LegKind, OptionType, StrikeMode};
use crate::domain::shared::{OwnerId, StrategyId, Ticker};

/// One leg as exchanged with the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegPayload {
    /// 1-based position.
    pub leg_index: usize,
    /// `buy` or `sell`.
    pub action: String,
    /// `call` or `put`; null for non-option strategies.
    #[serde(default)]
    pub option_type: Option<String>,
    /// Contract quantity.
    #[serde(default = "default_quantity", deserialize_with = "deserialize_integer")]
    pub quantity: i64,
    /// Strike value, interpreted per `strike_mode`.
    ///
    /// Written as exact decimal text. Numeric JSON is accepted on read.
    #[serde(default)]
    pub strike_value: Option<Decimal>,
    /// `fixed` or `delta`.
    #[serde(default = "default_strike_mode")]
    pub strike_mode: String,
    /// Days to expiration.
    #[serde(default)]
    pub expiration_days: Option<i64>,
}

/// Strategy body sent on create/update and echoed back by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyPayload {
    /// Optional label.
    #[serde(default)]
    pub name: Option<String>,
    /// Underlying ticker.
    pub ticker: String,
    /// `option`, `equity` or `future`.
    pub instrument_type: String,
    /// Legs in index order.
    #[serde(default)]
    pub legs: Vec<LegPayload>,
}

/// A strategy as returned by the store, with server-assigned metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredStrategy {
    /// Store-assigned id.
    pub id: StrategyId,
    /// Owner.
    pub user_id: OwnerId,
    /// Active flag.
    pub is_active: bool,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Strategy definition.
    #[serde(flatten)]
    pub strategy: StrategyPayload,
}

fn default_quantity() -> i64 {
    1
}

fn default_strike_mode() -> String {
    StrikeMode::Fixed.as_str().to_string()
}

// Stored quantities may come back as floats (`1.0`).
fn deserialize_integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(n) = number.as_i64() {
        return Ok(n);
    }
    match number.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 9.0e15 => Ok(f as i64),
        _ => Err(D::Error::custom(format!("expected an integer, got {number}"))),
    }
}

impl From<&Strategy> for StrategyPayload {
    fn from(strategy: &Strategy) -> Self {
        let carries_option_type = strategy.instrument_type().has_option_type();
        Self {
            name: strategy.name().map(str::to_string),
            ticker: strategy.ticker().to_string(),
            instrument_type: strategy.instrument_type().to_string(),
            legs: strategy
                .legs()
                .iter()
                .map(|leg| LegPayload {
                    leg_index: leg.leg_index(),
                    action: leg.action().to_string(),
                    option_type: leg
                        .option_type()
                        .filter(|_| carries_option_type)
                        .map(|t| t.to_string()),
                    quantity: leg.quantity(),
                    strike_value: Some(leg.strike_value()),
                    strike_mode: leg.strike_mode().to_string(),
                    expiration_days: Some(leg.expiration_days()),
                })
                .collect(),
        }
    }
}

impl StrategyPayload {
    /// Decode a payload from JSON text.
    ///
    /// Malformed JSON and wrongly shaped fields are reported as
    /// `InvalidValue("payload")` carrying the decoder message.
    pub fn from_json(json: &str) -> Result<Self, StrategyError> {
        serde_json::from_str(json)
            .map_err(|e| StrategyError::invalid_value("payload", None, e.to_string()))
    }

    /// Hydrate into an editable draft using built-in leg defaults.
    pub fn to_draft(&self) -> Result<Strategy, StrategyError> {
        self.to_draft_with(LegDefaults::default())
    }

    /// Hydrate into an editable draft.
    ///
    /// Legs are ordered by their stored `leg_index` and renumbered 1..N.
    /// Absent strike or expiration values take the corresponding default.
    pub fn to_draft_with(&self, defaults: LegDefaults) -> Result<Strategy, StrategyError> {
        let (instrument_type, legs) = self.hydrate_legs(&defaults)?;
        Ok(Strategy::reconstitute(ReconstitutedStrategyParams {
            id: None,
            owner_id: None,
            name: self.name.clone(),
            ticker: Ticker::new(&self.ticker),
            instrument_type,
            legs,
            is_active: true,
            created_at: None,
        })
        .with_leg_defaults(defaults))
    }

    fn hydrate_legs(
        &self,
        defaults: &LegDefaults,
    ) -> Result<(InstrumentType, Vec<Leg>), StrategyError> {
        let instrument_type: InstrumentType = self
            .instrument_type
            .parse()
            .map_err(|_| StrategyError::invalid_enum("instrument_type", None))?;

        if self.legs.len() > MAX_LEGS {
            return Err(StrategyError::TooManyLegs {
                count: self.legs.len(),
                max: MAX_LEGS,
            });
        }

        let mut ordered: Vec<&LegPayload> = self.legs.iter().collect();
        ordered.sort_by_key(|leg| leg.leg_index);

        let legs = ordered
            .into_iter()
            .enumerate()
            .map(|(i, leg)| leg.hydrate(instrument_type, defaults, i))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((instrument_type, legs))
    }
}

impl LegPayload {
    fn hydrate(
        &self,
        instrument_type: InstrumentType,
        defaults: &LegDefaults,
        position: usize,
    ) -> Result<Leg, StrategyError> {
        let invalid = |field: &str| StrategyError::invalid_enum(field, Some(position));

        let action = self.action.parse().map_err(|_| invalid("action"))?;
        let strike_mode = self.strike_mode.parse().map_err(|_| invalid("strike_mode"))?;

        let kind = if instrument_type.has_option_type() {
            let option_type: OptionType = self
                .option_type
                .as_deref()
                .ok_or_else(|| invalid("option_type"))?
                .parse()
                .map_err(|_| invalid("option_type"))?;
            LegKind::Option { option_type }
        } else {
            LegKind::for_instrument(instrument_type, defaults.option_type)
        };

        Ok(Leg::new(LegParams {
            action,
            kind,
            quantity: self.quantity,
            strike_value: self.strike_value.unwrap_or(defaults.strike_value),
            strike_mode,
            expiration_days: self.expiration_days.unwrap_or(defaults.expiration_days),
        }))
    }
}

impl StoredStrategy {
    /// Hydrate into an editable strategy that keeps its store identity.
    pub fn to_draft(&self) -> Result<Strategy, StrategyError> {
        self.to_draft_with(LegDefaults::default())
    }

    /// Like [`StoredStrategy::to_draft`] with custom leg defaults.
    pub fn to_draft_with(&self, defaults: LegDefaults) -> Result<Strategy, StrategyError> {
        let (instrument_type, legs) = self.strategy.hydrate_legs(&defaults)?;
        Ok(Strategy::reconstitute(ReconstitutedStrategyParams {
            id: Some(self.id.clone()),
            owner_id: Some(self.user_id.clone()),
            name: self.strategy.name.clone(),
            ticker: Ticker::new(&self.strategy.ticker),
            instrument_type,
            legs,
            is_active: self.is_active,
            created_at: Some(self.created_at),
        })
        .with_leg_defaults(defaults))
    }
}

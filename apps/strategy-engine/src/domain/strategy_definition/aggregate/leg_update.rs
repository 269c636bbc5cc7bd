//! Typed single-attribute leg edits.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::domain::strategy_definition::errors::StrategyError;
use crate::domain::strategy_definition::value_objects::{
    LegAction, LegField, OptionType, StrikeMode,
};

/// One attribute change for one leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegUpdate {
    /// Set `action`.
    Action(LegAction),
    /// Set `option_type` (option legs only).
    OptionType(OptionType),
    /// Set `quantity`.
    Quantity(i64),
    /// Set `strike_value`.
    StrikeValue(Decimal),
    /// Set `strike_mode`.
    StrikeMode(StrikeMode),
    /// Set `expiration_days`.
    ExpirationDays(i64),
}

impl LegUpdate {
    /// Parse a raw `(field, value)` edit for the leg at `position`.
    ///
    /// Numeric fields must parse as numbers and enumerated fields must name a
    /// known variant. Raw text is never stored.
    pub fn parse(field: &str, value: &str, position: usize) -> Result<Self, StrategyError> {
        let leg_field = LegField::from_str(field).map_err(|_| {
            let message = if field == "leg_index" {
                "leg_index is derived from position and cannot be set"
            } else {
                "not an editable leg attribute"
            };
            StrategyError::invalid_value(field, Some(position), message)
        })?;

        let raw = value.trim();
        let reject = || {
            if leg_field.is_numeric() {
                StrategyError::invalid_value(
                    leg_field.as_str(),
                    Some(position),
                    format!("{leg_field} must be a number, got '{raw}'"),
                )
            } else {
                StrategyError::invalid_enum(leg_field.as_str(), Some(position))
            }
        };

        Ok(match leg_field {
            LegField::Action => Self::Action(raw.parse().map_err(|_| reject())?),
            LegField::OptionType => Self::OptionType(raw.parse().map_err(|_| reject())?),
            LegField::StrikeMode => Self::StrikeMode(raw.parse().map_err(|_| reject())?),
            LegField::Quantity => Self::Quantity(raw.parse().map_err(|_| reject())?),
            LegField::ExpirationDays => Self::ExpirationDays(raw.parse().map_err(|_| reject())?),
            LegField::StrikeValue => Self::StrikeValue(
                Decimal::from_str(raw)
                    .or_else(|_| Decimal::from_scientific(raw))
                    .map_err(|_| reject())?,
            ),
        })
    }

    /// The attribute this update targets.
    #[must_use]
    pub const fn field(&self) -> LegField {
        match self {
            Self::Action(_) => LegField::Action,
            Self::OptionType(_) => LegField::OptionType,
            Self::Quantity(_) => LegField::Quantity,
            Self::StrikeValue(_) => LegField::StrikeValue,
            Self::StrikeMode(_) => LegField::StrikeMode,
            Self::ExpirationDays(_) => LegField::ExpirationDays,
        }
    }
}

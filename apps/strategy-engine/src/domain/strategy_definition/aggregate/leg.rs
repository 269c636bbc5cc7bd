//! Strategy Leg

use rust_decimal::Decimal;

use super::leg_update::LegUpdate;
use crate::domain::strategy_definition::errors::StrategyError;
use crate::domain::strategy_definition::value_objects::{
    InstrumentType, LegAction, LegDefaults, LegKind, OptionType, StrikeMode,
};

/// Parameters for building a leg.
#[derive(Debug, Clone)]
pub struct LegParams {
    /// Buy or sell.
    pub action: LegAction,
    /// Instrument variant (carries the option type for option legs).
    pub kind: LegKind,
    /// Contract quantity.
    pub quantity: i64,
    /// Strike value, interpreted per `strike_mode`.
    pub strike_value: Decimal,
    /// Strike targeting mode.
    pub strike_mode: StrikeMode,
    /// Days to expiration.
    pub expiration_days: i64,
}

/// A single leg of a multi-leg strategy.
///
/// `leg_index` is owned by the enclosing collection and is only meaningful
/// once the leg has been placed in one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg {
    leg_index: usize,
    action: LegAction,
    kind: LegKind,
    quantity: i64,
    strike_value: Decimal,
    strike_mode: StrikeMode,
    expiration_days: i64,
}

impl Leg {
    /// Create an unplaced leg.
    #[must_use]
    pub fn new(params: LegParams) -> Self {
        Self {
            leg_index: 0,
            action: params.action,
            kind: params.kind,
            quantity: params.quantity,
            strike_value: params.strike_value,
            strike_mode: params.strike_mode,
            expiration_days: params.expiration_days,
        }
    }

    /// Create a leg with default attributes for `instrument`.
    #[must_use]
    pub fn from_defaults(instrument: InstrumentType, defaults: &LegDefaults) -> Self {
        Self::new(LegParams {
            action: defaults.action,
            kind: LegKind::for_instrument(instrument, defaults.option_type),
            quantity: defaults.quantity,
            strike_value: defaults.strike_value,
            strike_mode: defaults.strike_mode,
            expiration_days: defaults.expiration_days,
        })
    }

    // Getters

    /// 1-based position within the strategy.
    #[must_use]
    pub const fn leg_index(&self) -> usize {
        self.leg_index
    }

    #[must_use]
    pub const fn action(&self) -> LegAction {
        self.action
    }

    #[must_use]
    pub const fn kind(&self) -> LegKind {
        self.kind
    }

    /// Option type, present only on option legs.
    #[must_use]
    pub const fn option_type(&self) -> Option<OptionType> {
        self.kind.option_type()
    }

    #[must_use]
    pub const fn quantity(&self) -> i64 {
        self.quantity
    }

    #[must_use]
    pub const fn strike_value(&self) -> Decimal {
        self.strike_value
    }

    #[must_use]
    pub const fn strike_mode(&self) -> StrikeMode {
        self.strike_mode
    }

    #[must_use]
    pub const fn expiration_days(&self) -> i64 {
        self.expiration_days
    }

    // Mutations

    pub(crate) fn set_index(&mut self, leg_index: usize) {
        self.leg_index = leg_index;
    }

    /// Apply a single attribute change.
    ///
    /// Setting an option type on a non-option leg fails and leaves the leg
    /// unchanged.
    pub fn apply(&mut self, update: LegUpdate, position: usize) -> Result<(), StrategyError> {
        match update {
            LegUpdate::Action(action) => self.action = action,
            LegUpdate::OptionType(option_type) => match &mut self.kind {
                LegKind::Option { option_type: current } => *current = option_type,
                LegKind::Equity | LegKind::Future => {
                    return Err(StrategyError::invalid_value(
                        update.field().as_str(),
                        Some(position),
                        format!(
                            "{} legs do not carry an option type",
                            self.kind.instrument_type()
                        ),
                    ));
                }
            },
            LegUpdate::Quantity(quantity) => self.quantity = quantity,
            LegUpdate::StrikeValue(strike_value) => self.strike_value = strike_value,
            LegUpdate::StrikeMode(strike_mode) => self.strike_mode = strike_mode,
            LegUpdate::ExpirationDays(days) => self.expiration_days = days,
        }
        Ok(())
    }

    /// Convert the leg to the variant for `instrument`.
    ///
    /// An existing option type is kept when staying on options. Otherwise
    /// `default_option_type` is used when converting to options, and the
    /// option type is dropped when converting away.
    pub(crate) fn convert_kind(
        &mut self,
        instrument: InstrumentType,
        default_option_type: OptionType,
    ) {
        let option_type = self.kind.option_type().unwrap_or(default_option_type);
        self.kind = LegKind::for_instrument(instrument, option_type);
    }
}

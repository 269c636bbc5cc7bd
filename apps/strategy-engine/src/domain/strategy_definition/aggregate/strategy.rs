//! Strategy Aggregate Root
//!
//! A strategy is edited as an owned draft value. Leg mutations are
//! synchronous and keep the leg indices contiguous. Validation runs before
//! the draft is handed to the store.

use chrono::{DateTime, Utc};

use super::leg::Leg;
use super::leg_collection::LegCollection;
use super::leg_update::LegUpdate;
use crate::domain::shared::{OwnerId, StrategyId, Ticker};
use crate::domain::strategy_definition::errors::StrategyError;
use crate::domain::strategy_definition::payload::StrategyPayload;
use crate::domain::strategy_definition::services::StrategyValidator;
use crate::domain::strategy_definition::value_objects::{InstrumentType, LegDefaults};

/// Parameters for reconstituting a strategy from storage.
#[derive(Debug, Clone)]
pub struct ReconstitutedStrategyParams {
    /// Store id.
    pub id: Option<StrategyId>,
    /// Owner.
    pub owner_id: Option<OwnerId>,
    /// Label (blank is treated as absent).
    pub name: Option<String>,
    /// Ticker.
    pub ticker: Ticker,
    /// Instrument type.
    pub instrument_type: InstrumentType,
    /// Legs in order; renumbered on reconstitution.
    pub legs: Vec<Leg>,
    /// Active flag.
    pub is_active: bool,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
}

/// Multi-leg strategy aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strategy {
    id: Option<StrategyId>,
    owner_id: Option<OwnerId>,
    name: Option<String>,
    ticker: Ticker,
    instrument_type: InstrumentType,
    legs: LegCollection,
    is_active: bool,
    created_at: Option<DateTime<Utc>>,
    leg_defaults: LegDefaults,
}

impl Default for Strategy {
    fn default() -> Self {
        Self::draft()
    }
}

impl Strategy {
    /// Create an empty draft: no legs, no id, option instrument.
    #[must_use]
    pub fn draft() -> Self {
        Self::draft_with_defaults(LegDefaults::default())
    }

    /// Create an empty draft whose added legs use `leg_defaults`.
    #[must_use]
    pub fn draft_with_defaults(leg_defaults: LegDefaults) -> Self {
        Self {
            id: None,
            owner_id: None,
            name: None,
            ticker: Ticker::default(),
            instrument_type: InstrumentType::default(),
            legs: LegCollection::new(),
            is_active: true,
            created_at: None,
            leg_defaults,
        }
    }

    /// Reconstitute from stored state (bypasses invariants).
    ///
    /// Legs are renumbered by position but the leg limit and attribute rules
    /// are left to [`Strategy::validate`].
    #[must_use]
    pub fn reconstitute(params: ReconstitutedStrategyParams) -> Self {
        Self {
            id: params.id,
            owner_id: params.owner_id,
            name: params.name.filter(|n| !n.trim().is_empty()),
            ticker: params.ticker,
            instrument_type: params.instrument_type,
            legs: LegCollection::from_legs(params.legs),
            is_active: params.is_active,
            created_at: params.created_at,
            leg_defaults: LegDefaults::default(),
        }
    }

    /// Use `leg_defaults` for legs added from now on.
    #[must_use]
    pub fn with_leg_defaults(mut self, leg_defaults: LegDefaults) -> Self {
        self.leg_defaults = leg_defaults;
        self
    }

    /// Fresh draft with the same definition but no identity.
    #[must_use]
    pub fn clone_as_draft(&self) -> Self {
        Self {
            id: None,
            owner_id: None,
            name: self.name.clone(),
            ticker: self.ticker.clone(),
            instrument_type: self.instrument_type,
            legs: self.legs.clone(),
            is_active: true,
            created_at: None,
            leg_defaults: self.leg_defaults.clone(),
        }
    }

    // Getters

    #[must_use]
    pub const fn id(&self) -> Option<&StrategyId> {
        self.id.as_ref()
    }

    #[must_use]
    pub const fn owner_id(&self) -> Option<&OwnerId> {
        self.owner_id.as_ref()
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub const fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    #[must_use]
    pub const fn instrument_type(&self) -> InstrumentType {
        self.instrument_type
    }

    #[must_use]
    pub const fn legs(&self) -> &LegCollection {
        &self.legs
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    #[must_use]
    pub const fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    #[must_use]
    pub const fn leg_defaults(&self) -> &LegDefaults {
        &self.leg_defaults
    }

    /// Whether the store has assigned an id.
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Whether "add leg" is currently enabled.
    #[must_use]
    pub fn can_add_leg(&self) -> bool {
        self.legs.can_add_leg()
    }

    // Header edits

    /// Set the label. Blank input clears it.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.name = if name.trim().is_empty() {
            None
        } else {
            Some(name.trim().to_string())
        };
    }

    /// Set the ticker (trimmed, uppercased).
    pub fn set_ticker(&mut self, ticker: impl AsRef<str>) {
        self.ticker = Ticker::new(ticker);
    }

    /// Switch instrument, converting every leg to the matching variant.
    pub fn set_instrument_type(&mut self, instrument_type: InstrumentType) {
        self.instrument_type = instrument_type;
        self.legs
            .convert_to(instrument_type, self.leg_defaults.option_type);
    }

    /// Switch instrument from text input.
    pub fn set_instrument_type_str(&mut self, value: &str) -> Result<(), StrategyError> {
        let instrument_type = value
            .parse()
            .map_err(|_| StrategyError::invalid_enum("instrument_type", None))?;
        self.set_instrument_type(instrument_type);
        Ok(())
    }

    // Leg edits

    /// Append a default leg. Returns `None` when the strategy already has
    /// the maximum number of legs.
    pub fn add_leg(&mut self) -> Option<&Leg> {
        self.legs.add(self.instrument_type, &self.leg_defaults)
    }

    /// Remove the leg at `position` and renumber the rest.
    pub fn remove_leg(&mut self, position: usize) -> Result<Leg, StrategyError> {
        self.legs.remove(position)
    }

    /// Apply a typed edit to the leg at `position`.
    pub fn update_leg(&mut self, position: usize, update: LegUpdate) -> Result<&Leg, StrategyError> {
        self.legs.update(position, update)
    }

    /// Apply a raw `(field, value)` edit to the leg at `position`.
    ///
    /// The position is checked before the input is parsed.
    pub fn update_leg_field(
        &mut self,
        position: usize,
        field: &str,
        value: &str,
    ) -> Result<&Leg, StrategyError> {
        self.legs.check_position(position)?;
        let update = LegUpdate::parse(field, value, position)?;
        self.legs.update(position, update)
    }

    // Submission

    /// Run the fail-fast submission rules.
    pub fn validate(&self) -> Result<(), StrategyError> {
        StrategyValidator::validate(self)
    }

    /// Payload shape accepted by the store.
    #[must_use]
    pub fn to_payload(&self) -> StrategyPayload {
        StrategyPayload::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::strategy_definition::aggregate::MAX_LEGS;
    use crate::domain::strategy_definition::value_objects::{
        LegAction, LegKind, OptionType, StrikeMode,
    };
    use rust_decimal_macros::dec;

    #[test]
    fn draft_is_empty_option_strategy() {
        let draft = Strategy::draft();
        assert!(draft.legs().is_empty());
        assert!(!draft.is_persisted());
        assert!(draft.is_active());
        assert_eq!(draft.instrument_type(), InstrumentType::Option);
        assert!(draft.ticker().is_empty());
        assert_eq!(draft.name(), None);
    }

    #[test]
    fn blank_name_is_absent() {
        let mut draft = Strategy::draft();
        draft.set_name("  ");
        assert_eq!(draft.name(), None);
        draft.set_name(" Iron Condor ");
        assert_eq!(draft.name(), Some("Iron Condor"));
    }

    #[test]
    fn ticker_is_normalized() {
        let mut draft = Strategy::draft();
        draft.set_ticker(" spy ");
        assert_eq!(draft.ticker().as_str(), "SPY");
    }

    #[test]
    fn add_leg_stops_at_max() {
        let mut draft = Strategy::draft();
        for i in 1..=MAX_LEGS {
            assert_eq!(draft.add_leg().unwrap().leg_index(), i);
        }
        assert!(!draft.can_add_leg());
        assert!(draft.add_leg().is_none());
        assert_eq!(draft.legs().len(), MAX_LEGS);
    }

    #[test]
    fn update_leg_field_parses_input() {
        let mut draft = Strategy::draft();
        draft.add_leg();
        draft.add_leg();

        let leg = draft.update_leg_field(1, "strike_value", "450").unwrap();
        assert_eq!(leg.strike_value(), dec!(450));
        assert_eq!(leg.leg_index(), 2);

        draft.update_leg_field(0, "action", "sell").unwrap();
        draft.update_leg_field(0, "strike_mode", "delta").unwrap();
        let first = draft.legs().get(0).unwrap();
        assert_eq!(first.action(), LegAction::Sell);
        assert_eq!(first.strike_mode(), StrikeMode::Delta);
    }

    #[test]
    fn update_leg_field_checks_position_first() {
        let mut draft = Strategy::draft();
        draft.add_leg();
        let err = draft.update_leg_field(4, "leg_index", "x").unwrap_err();
        assert_eq!(err, StrategyError::OutOfRange { position: 4, len: 1 });
    }

    #[test]
    fn update_leg_field_rejects_text_in_numeric_field() {
        let mut draft = Strategy::draft();
        draft.add_leg();
        let err = draft.update_leg_field(0, "quantity", "two").unwrap_err();
        assert!(matches!(err, StrategyError::InvalidValue { leg: Some(0), .. }));
        assert_eq!(draft.legs().get(0).unwrap().quantity(), 1);
    }

    #[test]
    fn option_type_on_equity_strategy_is_invalid_value() {
        let mut draft = Strategy::draft();
        draft.set_instrument_type(InstrumentType::Equity);
        draft.add_leg();
        let err = draft.update_leg_field(0, "option_type", "put").unwrap_err();
        assert_eq!(err.field(), Some("option_type"));
        assert!(matches!(err, StrategyError::InvalidValue { leg: Some(0), .. }));
    }

    #[test]
    fn switching_instrument_converts_legs() {
        let mut draft = Strategy::draft();
        draft.add_leg();
        draft
            .update_leg(0, LegUpdate::OptionType(OptionType::Put))
            .unwrap();

        draft.set_instrument_type(InstrumentType::Future);
        assert_eq!(draft.legs().get(0).unwrap().kind(), LegKind::Future);

        draft.set_instrument_type(InstrumentType::Option);
        assert_eq!(
            draft.legs().get(0).unwrap().option_type(),
            Some(OptionType::Call)
        );
    }

    #[test]
    fn set_instrument_type_str_rejects_unknown() {
        let mut draft = Strategy::draft();
        let err = draft.set_instrument_type_str("crypto").unwrap_err();
        assert_eq!(err, StrategyError::invalid_enum("instrument_type", None));
        assert_eq!(draft.instrument_type(), InstrumentType::Option);

        draft.set_instrument_type_str("Equity").unwrap();
        assert_eq!(draft.instrument_type(), InstrumentType::Equity);
    }

    #[test]
    fn custom_leg_defaults_apply_to_added_legs() {
        let defaults = LegDefaults {
            action: LegAction::Sell,
            option_type: OptionType::Put,
            expiration_days: 45,
            ..LegDefaults::default()
        };
        let mut draft = Strategy::draft_with_defaults(defaults);
        let leg = draft.add_leg().unwrap();
        assert_eq!(leg.action(), LegAction::Sell);
        assert_eq!(leg.option_type(), Some(OptionType::Put));
        assert_eq!(leg.expiration_days(), 45);
    }

    #[test]
    fn clone_as_draft_drops_identity() {
        let stored = Strategy::reconstitute(ReconstitutedStrategyParams {
            id: Some(StrategyId::new("abc")),
            owner_id: Some(OwnerId::new("desk-1")),
            name: Some("Covered Call".to_string()),
            ticker: Ticker::new("qqq"),
            instrument_type: InstrumentType::Option,
            legs: vec![Leg::from_defaults(InstrumentType::Option, &LegDefaults::default())],
            is_active: false,
            created_at: Some(Utc::now()),
        });
        assert!(stored.is_persisted());

        let clone = stored.clone_as_draft();
        assert!(!clone.is_persisted());
        assert_eq!(clone.owner_id(), None);
        assert_eq!(clone.created_at(), None);
        assert!(clone.is_active());
        assert_eq!(clone.name(), Some("Covered Call"));
        assert_eq!(clone.ticker().as_str(), "QQQ");
        assert_eq!(clone.legs(), stored.legs());
    }
}

//! Strategy Validator
//!
//! Decides whether a draft may be submitted. Rules run in a fixed order and
//! the first failure is returned.

use crate::domain::strategy_definition::aggregate::{MAX_LEGS, Strategy};
use crate::domain::strategy_definition::errors::StrategyError;
use crate::domain::strategy_definition::value_objects::InstrumentType;

/// Stateless validator for draft strategies.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrategyValidator;

impl StrategyValidator {
    /// Validate `strategy`, returning the first violated rule.
    ///
    /// 1. ticker is non-empty
    /// 2. every leg matches the strategy instrument
    /// 3. at most [`MAX_LEGS`] legs
    /// 4. every quantity is positive
    /// 5. every option leg has an option type
    /// 6. every expiration is non-negative
    pub fn validate(strategy: &Strategy) -> Result<(), StrategyError> {
        if strategy.ticker().is_empty() {
            return Err(StrategyError::missing("ticker"));
        }

        Self::check_instrument(strategy)?;

        let count = strategy.legs().len();
        if count > MAX_LEGS {
            return Err(StrategyError::TooManyLegs {
                count,
                max: MAX_LEGS,
            });
        }

        let legs = strategy.legs().as_slice();

        if let Some(i) = legs.iter().position(|leg| leg.quantity() <= 0) {
            return Err(StrategyError::invalid_value(
                "quantity",
                Some(i),
                "must be a positive integer",
            ));
        }

        if strategy.instrument_type().has_option_type()
            && let Some(i) = legs.iter().position(|leg| leg.option_type().is_none())
        {
            return Err(StrategyError::invalid_enum("option_type", Some(i)));
        }

        if let Some(i) = legs.iter().position(|leg| leg.expiration_days() < 0) {
            return Err(StrategyError::invalid_value(
                "expiration_days",
                Some(i),
                "must not be negative",
            ));
        }

        Ok(())
    }

    // Option strategies with non-option legs are reported as a missing
    // option type further down.
    fn check_instrument(strategy: &Strategy) -> Result<(), StrategyError> {
        let instrument = strategy.instrument_type();
        if instrument == InstrumentType::Option {
            return Ok(());
        }
        match strategy
            .legs()
            .iter()
            .position(|leg| leg.kind().instrument_type() != instrument)
        {
            Some(i) => Err(StrategyError::invalid_enum("instrument_type", Some(i))),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::Ticker;
    use crate::domain::strategy_definition::aggregate::{
        Leg, LegParams, LegUpdate, ReconstitutedStrategyParams,
    };
    use crate::domain::strategy_definition::value_objects::{
        LegAction, LegDefaults, LegKind, OptionType, StrikeMode,
    };
    use rust_decimal_macros::dec;
    use test_case::test_case;

    fn spy_call() -> Strategy {
        let mut strategy = Strategy::draft();
        strategy.set_ticker("SPY");
        strategy.add_leg();
        strategy
            .update_leg(0, LegUpdate::StrikeValue(dec!(450)))
            .unwrap();
        strategy
    }

    fn with_legs(instrument_type: InstrumentType, legs: Vec<Leg>) -> Strategy {
        Strategy::reconstitute(ReconstitutedStrategyParams {
            id: None,
            owner_id: None,
            name: None,
            ticker: Ticker::new("SPY"),
            instrument_type,
            legs,
            is_active: true,
            created_at: None,
        })
    }

    fn leg(kind: LegKind, quantity: i64, expiration_days: i64) -> Leg {
        Leg::new(LegParams {
            action: LegAction::Buy,
            kind,
            quantity,
            strike_value: dec!(450),
            strike_mode: StrikeMode::Fixed,
            expiration_days,
        })
    }

    const CALL: LegKind = LegKind::Option {
        option_type: OptionType::Call,
    };

    #[test]
    fn accepts_single_spy_call() {
        let strategy = spy_call();
        let leg = strategy.legs().get(0).unwrap();
        assert_eq!(leg.action(), LegAction::Buy);
        assert_eq!(leg.option_type(), Some(OptionType::Call));
        assert_eq!(leg.quantity(), 1);
        assert_eq!(leg.strike_mode(), StrikeMode::Fixed);
        assert_eq!(leg.expiration_days(), 30);
        assert_eq!(StrategyValidator::validate(&strategy), Ok(()));
    }

    #[test]
    fn accepts_zero_legs() {
        assert_eq!(
            StrategyValidator::validate(&with_legs(InstrumentType::Equity, vec![])),
            Ok(())
        );
    }

    #[test]
    fn empty_ticker_is_missing_field() {
        let mut strategy = spy_call();
        strategy.set_ticker("");
        assert_eq!(
            StrategyValidator::validate(&strategy),
            Err(StrategyError::missing("ticker"))
        );
    }

    #[test]
    fn zero_quantity_is_invalid_value() {
        let mut strategy = spy_call();
        strategy.update_leg(0, LegUpdate::Quantity(0)).unwrap();
        let err = StrategyValidator::validate(&strategy).unwrap_err();
        assert_eq!(err.field(), Some("quantity"));
        assert_eq!(err.leg(), Some(0));
        assert!(matches!(err, StrategyError::InvalidValue { .. }));
    }

    #[test]
    fn five_legs_is_too_many() {
        let legs = (0..5).map(|_| leg(CALL, 1, 30)).collect();
        assert_eq!(
            StrategyValidator::validate(&with_legs(InstrumentType::Option, legs)),
            Err(StrategyError::TooManyLegs { count: 5, max: 4 })
        );
    }

    #[test_case(vec![leg(CALL, 1, 30), leg(CALL, -2, 30)], "quantity", 1 ; "negative quantity")]
    #[test_case(vec![leg(CALL, 1, 30), leg(CALL, 1, 30), leg(LegKind::Equity, 1, 30)], "option_type", 2 ; "option leg without option type")]
    #[test_case(vec![leg(CALL, 1, -1)], "expiration_days", 0 ; "negative expiration")]
    fn option_leg_rules(legs: Vec<Leg>, field: &str, position: usize) {
        let err = StrategyValidator::validate(&with_legs(InstrumentType::Option, legs)).unwrap_err();
        assert_eq!(err.field(), Some(field));
        assert_eq!(err.leg(), Some(position));
    }

    #[test]
    fn first_failure_wins() {
        // quantity is checked before expiration
        let legs = vec![leg(CALL, 1, -5), leg(CALL, 0, 30)];
        let err = StrategyValidator::validate(&with_legs(InstrumentType::Option, legs)).unwrap_err();
        assert_eq!(err.field(), Some("quantity"));
        assert_eq!(err.leg(), Some(1));
    }

    #[test]
    fn option_leg_in_equity_strategy_is_rejected() {
        let legs = vec![leg(LegKind::Equity, 1, 30), leg(CALL, 1, 30)];
        assert_eq!(
            StrategyValidator::validate(&with_legs(InstrumentType::Equity, legs)),
            Err(StrategyError::invalid_enum("instrument_type", Some(1)))
        );
    }

    #[test]
    fn future_strategy_needs_no_option_type() {
        let mut strategy = Strategy::draft_with_defaults(LegDefaults::default());
        strategy.set_ticker("ES");
        strategy.set_instrument_type(InstrumentType::Future);
        strategy.add_leg();
        strategy.add_leg();
        assert_eq!(StrategyValidator::validate(&strategy), Ok(()));
    }
}

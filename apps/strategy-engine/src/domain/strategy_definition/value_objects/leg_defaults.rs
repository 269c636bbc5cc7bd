//! Attributes given to a freshly added leg.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{LegAction, OptionType, StrikeMode};

/// Attribute values for a leg created by "add leg".
///
/// `option_type` is only used when the strategy trades options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegDefaults {
    /// Default action.
    pub action: LegAction,
    /// Default option type for option strategies.
    pub option_type: OptionType,
    /// Default contract quantity.
    pub quantity: i64,
    /// Default strike value.
    pub strike_value: Decimal,
    /// Default strike mode.
    pub strike_mode: StrikeMode,
    /// Default days to expiration.
    pub expiration_days: i64,
}

impl Default for LegDefaults {
    fn default() -> Self {
        Self {
            action: LegAction::Buy,
            option_type: OptionType::Call,
            quantity: 1,
            strike_value: Decimal::ZERO,
            strike_mode: StrikeMode::Fixed,
            expiration_days: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_new_leg_form() {
        let d = LegDefaults::default();
        assert_eq!(d.action, LegAction::Buy);
        assert_eq!(d.option_type, OptionType::Call);
        assert_eq!(d.quantity, 1);
        assert_eq!(d.strike_value, Decimal::ZERO);
        assert_eq!(d.strike_mode, StrikeMode::Fixed);
        assert_eq!(d.expiration_days, 30);
    }

    #[test]
    fn partial_yaml_keeps_remaining_defaults() {
        let d: LegDefaults = serde_yaml_bw::from_str("expiration_days: 45\naction: sell\n").unwrap();
        assert_eq!(d.expiration_days, 45);
        assert_eq!(d.action, LegAction::Sell);
        assert_eq!(d.quantity, 1);
    }
}

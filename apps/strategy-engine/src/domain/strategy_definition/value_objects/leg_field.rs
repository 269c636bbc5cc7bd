//! Editable leg attributes.

use std::fmt;
use std::str::FromStr;

use super::UnknownVariant;

/// A leg attribute a caller may edit.
///
/// `leg_index` is deliberately absent: it is derived from position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegField {
    /// `action`
    Action,
    /// `option_type`
    OptionType,
    /// `quantity`
    Quantity,
    /// `strike_value`
    StrikeValue,
    /// `strike_mode`
    StrikeMode,
    /// `expiration_days`
    ExpirationDays,
}

impl LegField {
    /// Payload field name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Action => "action",
            Self::OptionType => "option_type",
            Self::Quantity => "quantity",
            Self::StrikeValue => "strike_value",
            Self::StrikeMode => "strike_mode",
            Self::ExpirationDays => "expiration_days",
        }
    }

    /// Whether input for this field must be parsed as a number.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Quantity | Self::StrikeValue | Self::ExpirationDays
        )
    }
}

impl fmt::Display for LegField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LegField {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "action" => Ok(Self::Action),
            "option_type" => Ok(Self::OptionType),
            "quantity" => Ok(Self::Quantity),
            "strike_value" => Ok(Self::StrikeValue),
            "strike_mode" => Ok(Self::StrikeMode),
            "expiration_days" => Ok(Self::ExpirationDays),
            _ => Err(UnknownVariant::new("leg field", s)),
        }
    }
}

//! Instrument type (asset class a strategy targets).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::UnknownVariant;

/// Asset class a strategy trades.
///
/// Determines which leg attributes apply: only option strategies carry an
/// option type per leg.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstrumentType {
    /// Listed options. Default for new drafts.
    #[default]
    Option,
    /// Equities / ETFs.
    Equity,
    /// Futures contracts.
    Future,
}

impl InstrumentType {
    /// Wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Option => "option",
            Self::Equity => "equity",
            Self::Future => "future",
        }
    }

    /// Whether legs of this instrument carry an option type.
    #[must_use]
    pub const fn has_option_type(&self) -> bool {
        matches!(self, Self::Option)
    }
}

impl fmt::Display for InstrumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstrumentType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "option" => Ok(Self::Option),
            "equity" => Ok(Self::Equity),
            "future" => Ok(Self::Future),
            _ => Err(UnknownVariant::new("instrument_type", s)),
        }
    }
}

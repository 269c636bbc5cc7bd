//! Strike targeting mode.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::UnknownVariant;

/// How a leg's `strike_value` is interpreted.
///
/// New modes can be added without changing the payload schema, so callers
/// matching on this enum must keep a wildcard arm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum StrikeMode {
    /// Absolute strike price.
    #[default]
    Fixed,
    /// Strike selected by target option delta (e.g. 0.30).
    Delta,
}

impl StrikeMode {
    /// Wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Delta => "delta",
        }
    }
}

impl fmt::Display for StrikeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrikeMode {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fixed" => Ok(Self::Fixed),
            "delta" => Ok(Self::Delta),
            _ => Err(UnknownVariant::new("strike_mode", s)),
        }
    }
}

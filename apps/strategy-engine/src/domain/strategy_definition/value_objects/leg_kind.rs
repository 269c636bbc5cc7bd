//! Instrument-specific leg terms.

use super::{InstrumentType, OptionType};

/// The instrument variant of a leg.
///
/// Only the option variant carries an option type, so a non-option leg
/// cannot hold a meaningless call/put value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegKind {
    /// Option leg.
    Option {
        /// Call or put.
        option_type: OptionType,
    },
    /// Equity leg.
    Equity,
    /// Future leg.
    Future,
}

impl LegKind {
    /// Build the variant for `instrument`, using `option_type` when it applies.
    #[must_use]
    pub const fn for_instrument(instrument: InstrumentType, option_type: OptionType) -> Self {
        match instrument {
            InstrumentType::Option => Self::Option { option_type },
            InstrumentType::Equity => Self::Equity,
            InstrumentType::Future => Self::Future,
        }
    }

    /// Instrument type of this variant.
    #[must_use]
    pub const fn instrument_type(&self) -> InstrumentType {
        match self {
            Self::Option { .. } => InstrumentType::Option,
            Self::Equity => InstrumentType::Equity,
            Self::Future => InstrumentType::Future,
        }
    }

    /// Option type, if this is an option leg.
    #[must_use]
    pub const fn option_type(&self) -> Option<OptionType> {
        match self {
            Self::Option { option_type } => Some(*option_type),
            Self::Equity | Self::Future => None,
        }
    }
}

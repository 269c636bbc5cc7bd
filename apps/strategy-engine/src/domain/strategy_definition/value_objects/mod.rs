//! Strategy Definition Value Objects

mod instrument_type;
mod leg_action;
mod leg_defaults;
mod leg_field;
mod leg_kind;
mod option_type;
mod strike_mode;

use thiserror::Error;

pub use instrument_type::InstrumentType;
pub use leg_action::LegAction;
pub use leg_defaults::LegDefaults;
pub use leg_field::LegField;
pub use leg_kind::LegKind;
pub use option_type::OptionType;
pub use strike_mode::StrikeMode;

/// Text that does not name any variant of an enumerated attribute.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {kind} '{value}'")]
pub struct UnknownVariant {
    /// Attribute being parsed (e.g. "action").
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl UnknownVariant {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

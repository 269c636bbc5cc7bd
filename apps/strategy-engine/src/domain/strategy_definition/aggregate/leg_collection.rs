//! Ordered leg sequence with derived indices.

use super::leg::Leg;
use super::leg_update::LegUpdate;
use crate::domain::strategy_definition::errors::StrategyError;
use crate::domain::strategy_definition::value_objects::{InstrumentType, LegDefaults, OptionType};

/// Maximum number of legs in a strategy.
pub const MAX_LEGS: usize = 4;

/// Ordered legs of one strategy.
///
/// After every structural change `legs[i].leg_index() == i + 1`.
/// Collections built through [`LegCollection::add`] never exceed
/// [`MAX_LEGS`]. [`LegCollection::from_legs`] does not enforce the limit, so
/// hydrated data can still be rejected by validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegCollection {
    legs: Vec<Leg>,
}

impl LegCollection {
    /// Create an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { legs: Vec::new() }
    }

    /// Build from existing legs, renumbering them by position.
    #[must_use]
    pub fn from_legs(legs: Vec<Leg>) -> Self {
        let mut collection = Self { legs };
        collection.reindex();
        collection
    }

    /// Append a default leg for `instrument`.
    ///
    /// Returns `None` without changing anything when the collection is full.
    pub fn add(&mut self, instrument: InstrumentType, defaults: &LegDefaults) -> Option<&Leg> {
        if self.is_full() {
            return None;
        }
        let mut leg = Leg::from_defaults(instrument, defaults);
        leg.set_index(self.legs.len() + 1);
        self.legs.push(leg);
        self.legs.last()
    }

    /// Remove and return the leg at `position`, renumbering the rest.
    pub fn remove(&mut self, position: usize) -> Result<Leg, StrategyError> {
        self.check_position(position)?;
        let removed = self.legs.remove(position);
        self.reindex();
        Ok(removed)
    }

    /// Apply `update` to the leg at `position` only.
    pub fn update(&mut self, position: usize, update: LegUpdate) -> Result<&Leg, StrategyError> {
        self.check_position(position)?;
        self.legs[position].apply(update, position)?;
        Ok(&self.legs[position])
    }

    /// Convert every leg to the variant for `instrument`.
    pub(crate) fn convert_to(&mut self, instrument: InstrumentType, default_option_type: OptionType) {
        for leg in &mut self.legs {
            leg.convert_kind(instrument, default_option_type);
        }
    }

    pub(crate) fn check_position(&self, position: usize) -> Result<(), StrategyError> {
        if position < self.legs.len() {
            Ok(())
        } else {
            Err(StrategyError::OutOfRange {
                position,
                len: self.legs.len(),
            })
        }
    }

    fn reindex(&mut self) {
        for (i, leg) in self.legs.iter_mut().enumerate() {
            leg.set_index(i + 1);
        }
    }

    // Queries

    /// Whether another leg may be added.
    #[must_use]
    pub fn can_add_leg(&self) -> bool {
        !self.is_full()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.legs.len() >= MAX_LEGS
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Leg> {
        self.legs.get(position)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Leg] {
        &self.legs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Leg> {
        self.legs.iter()
    }
}

impl<'a> IntoIterator for &'a LegCollection {
    type Item = &'a Leg;
    type IntoIter = std::slice::Iter<'a, Leg>;

    fn into_iter(self) -> Self::IntoIter {
        self.legs.iter()
    }
}

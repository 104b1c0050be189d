//! Filter specifications.
//!
//! A `FilterSpec` is an immutable value: every builder method consumes the
//! spec and returns a new one, so the UI replaces its filter state rather
//! than editing it. `FilterSpec::default()` is the "no filters" value used
//! for reset.
//!
//! Categorical dimensions hold a set of selected values. An empty set means
//! no constraint, one value means equality, several mean membership.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::values::FilterDimension;

/// Inclusive numeric bounds. Either bound may be absent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: Option<i32>,
    pub max: Option<i32>,
}

impl NumericRange {
    /// Range with no bounds (always passes).
    #[must_use]
    pub const fn any() -> Self {
        Self { min: None, max: None }
    }

    #[must_use]
    pub const fn between(min: i32, max: i32) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    #[must_use]
    pub const fn at_least(min: i32) -> Self {
        Self { min: Some(min), max: None }
    }

    #[must_use]
    pub const fn at_most(max: i32) -> Self {
        Self { min: None, max: Some(max) }
    }

    /// Check if either bound is set.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    /// Check a value against the range.
    ///
    /// With no bounds everything passes, including a missing value. With
    /// any bound set, a missing value fails.
    #[must_use]
    pub fn contains(&self, value: Option<i32>) -> bool {
        if !self.is_active() {
            return true;
        }
        let Some(value) = value else {
            return false;
        };
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

/// Every active filter criterion.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    /// Free-text search. Blank means no search.
    pub search: String,
    pub card_types: BTreeSet<String>,
    pub attributes: BTreeSet<String>,
    pub races: BTreeSet<String>,
    pub levels: BTreeSet<u8>,
    pub rarities: BTreeSet<String>,
    pub set_codes: BTreeSet<String>,
    /// Archetype substring, case-insensitive. Blank means no filter.
    pub archetype: String,
    pub atk: NumericRange,
    pub def: NumericRange,
    /// Tags the entry must carry (all of them).
    pub tags: BTreeSet<String>,
}

/// The reset value for filters.
#[must_use]
pub fn default_filter_spec() -> FilterSpec {
    FilterSpec::default()
}

impl FilterSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    #[must_use]
    pub fn with_card_type(mut self, card_type: impl Into<String>) -> Self {
        self.card_types.insert(card_type.into());
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attributes.insert(attribute.into());
        self
    }

    #[must_use]
    pub fn with_race(mut self, race: impl Into<String>) -> Self {
        self.races.insert(race.into());
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: u8) -> Self {
        self.levels.insert(level);
        self
    }

    #[must_use]
    pub fn with_rarity(mut self, rarity: impl Into<String>) -> Self {
        self.rarities.insert(rarity.into());
        self
    }

    #[must_use]
    pub fn with_set_code(mut self, set_code: impl Into<String>) -> Self {
        self.set_codes.insert(set_code.into());
        self
    }

    #[must_use]
    pub fn with_archetype(mut self, archetype: impl Into<String>) -> Self {
        self.archetype = archetype.into();
        self
    }

    #[must_use]
    pub fn with_atk(mut self, range: NumericRange) -> Self {
        self.atk = range;
        self
    }

    #[must_use]
    pub fn with_def(mut self, range: NumericRange) -> Self {
        self.def = range;
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Add or remove one value of a dimension, as a dropdown checkbox does.
    ///
    /// For the archetype dimension the value replaces the current text, or
    /// clears it if equal. Level values that do not parse are ignored.
    #[must_use]
    pub fn toggle(mut self, dimension: FilterDimension, value: &str) -> Self {
        fn flip(set: &mut BTreeSet<String>, value: &str) {
            if !set.remove(value) {
                set.insert(value.to_string());
            }
        }

        match dimension {
            FilterDimension::CardType => flip(&mut self.card_types, value),
            FilterDimension::Attribute => flip(&mut self.attributes, value),
            FilterDimension::Race => flip(&mut self.races, value),
            FilterDimension::Rarity => flip(&mut self.rarities, value),
            FilterDimension::SetCode => flip(&mut self.set_codes, value),
            FilterDimension::Tag => flip(&mut self.tags, value),
            FilterDimension::Level => {
                if let Ok(level) = value.trim().parse::<u8>() {
                    if !self.levels.remove(&level) {
                        self.levels.insert(level);
                    }
                }
            }
            FilterDimension::Archetype => {
                if self.archetype == value {
                    self.archetype.clear();
                } else {
                    self.archetype = value.to_string();
                }
            }
        }
        self
    }

    /// Clear one dimension.
    #[must_use]
    pub fn cleared(mut self, dimension: FilterDimension) -> Self {
        match dimension {
            FilterDimension::CardType => self.card_types.clear(),
            FilterDimension::Attribute => self.attributes.clear(),
            FilterDimension::Race => self.races.clear(),
            FilterDimension::Level => self.levels.clear(),
            FilterDimension::Rarity => self.rarities.clear(),
            FilterDimension::SetCode => self.set_codes.clear(),
            FilterDimension::Archetype => self.archetype.clear(),
            FilterDimension::Tag => self.tags.clear(),
        }
        self
    }

    /// Search text with surrounding whitespace removed, if any.
    #[must_use]
    pub fn search_term(&self) -> Option<&str> {
        let term = self.search.trim();
        (!term.is_empty()).then_some(term)
    }

    /// Archetype text with surrounding whitespace removed, if any.
    #[must_use]
    pub fn archetype_term(&self) -> Option<&str> {
        let term = self.archetype.trim();
        (!term.is_empty()).then_some(term)
    }

    /// Check whether any filter that reads card data is active.
    ///
    /// Rarity, set code, and tag filters read the binder entry instead.
    #[must_use]
    pub fn has_card_filters(&self) -> bool {
        self.search_term().is_some()
            || !self.card_types.is_empty()
            || !self.attributes.is_empty()
            || !self.races.is_empty()
            || !self.levels.is_empty()
            || self.archetype_term().is_some()
            || self.atk.is_active()
            || self.def.is_active()
    }

    /// Check whether this spec filters nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        count_active_filters(self) == 0
    }
}

/// Number of filter dimensions that differ from the default.
///
/// Each dimension counts once no matter how many values are selected in
/// it. Used for the active-filter badge.
#[must_use]
pub fn count_active_filters(spec: &FilterSpec) -> usize {
    [
        spec.search_term().is_some(),
        !spec.card_types.is_empty(),
        !spec.attributes.is_empty(),
        !spec.races.is_empty(),
        !spec.levels.is_empty(),
        !spec.rarities.is_empty(),
        !spec.set_codes.is_empty(),
        spec.archetype_term().is_some(),
        spec.atk.is_active(),
        spec.def.is_active(),
        !spec.tags.is_empty(),
    ]
    .into_iter()
    .filter(|active| *active)
    .count()
}

//! Filter dimensions and their dropdown values.
//!
//! Each dimension has one explicit accessor that pulls its values out of
//! an entry, so the dropdown contents and the filter agree on what a
//! "type" or "rarity" is.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::binder::EntryView;

/// A filter dimension with selectable values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterDimension {
    CardType,
    Attribute,
    Race,
    Level,
    Rarity,
    SetCode,
    Archetype,
    Tag,
}

impl FilterDimension {
    pub const ALL: [FilterDimension; 8] = [
        FilterDimension::CardType,
        FilterDimension::Attribute,
        FilterDimension::Race,
        FilterDimension::Level,
        FilterDimension::Rarity,
        FilterDimension::SetCode,
        FilterDimension::Archetype,
        FilterDimension::Tag,
    ];
}

/// Values an entry has for a text dimension. Level is handled separately
/// so it can sort numerically.
fn text_values<'a>(view: &EntryView<'a>, dimension: FilterDimension) -> SmallVec<[&'a str; 4]> {
    let card = view.card;
    let mut values = SmallVec::new();
    match dimension {
        FilterDimension::CardType => values.extend(card.map(|c| c.card_type.as_str())),
        FilterDimension::Attribute => values.extend(card.and_then(|c| c.attribute.as_deref())),
        FilterDimension::Race => values.extend(card.and_then(|c| c.race.as_deref())),
        FilterDimension::Archetype => values.extend(card.and_then(|c| c.archetype.as_deref())),
        FilterDimension::Rarity => values.extend(view.rarity()),
        FilterDimension::SetCode => values.extend(view.entry.set_code.as_deref()),
        FilterDimension::Tag => values.extend(view.entry.tags.iter().map(String::as_str)),
        FilterDimension::Level => {}
    }
    values
}

/// Distinct values present for a dimension, sorted.
///
/// Levels sort numerically; everything else sorts as text. Blank values
/// are skipped.
#[must_use]
pub fn unique_values(views: &[EntryView<'_>], dimension: FilterDimension) -> Vec<String> {
    if dimension == FilterDimension::Level {
        let levels: BTreeSet<u8> = views
            .iter()
            .filter_map(|v| v.card.and_then(|c| c.level))
            .collect();
        return levels.into_iter().map(|l| l.to_string()).collect();
    }

    let values: BTreeSet<&str> = views
        .iter()
        .flat_map(|v| text_values(v, dimension))
        .filter(|s| !s.trim().is_empty())
        .collect();
    values.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::BinderEntry;
    use crate::cards::{Card, CardId};

    #[test]
    fn test_unique_values() {
        let cards = [
            Card::new(CardId::new(1), "A", "Effect Monster").with_attribute("DARK").with_level(10),
            Card::new(CardId::new(2), "B", "Effect Monster").with_attribute("LIGHT").with_level(4),
            Card::new(CardId::new(3), "C", "Spell Card"),
        ];
        let entries = [
            BinderEntry::new(CardId::new(1), 1).with_tag("trade").with_set_code("LOB-001"),
            BinderEntry::new(CardId::new(2), 1).with_tag("deck").with_tag("trade"),
            BinderEntry::new(CardId::new(3), 1).with_set_code(""),
        ];
        let views: Vec<_> = entries
            .iter()
            .zip(cards.iter())
            .map(|(e, c)| EntryView::new(e, Some(c)))
            .collect();

        assert_eq!(
            unique_values(&views, FilterDimension::CardType),
            vec!["Effect Monster", "Spell Card"]
        );
        assert_eq!(unique_values(&views, FilterDimension::Attribute), vec!["DARK", "LIGHT"]);
        assert_eq!(unique_values(&views, FilterDimension::Level), vec!["4", "10"]);
        assert_eq!(unique_values(&views, FilterDimension::Tag), vec!["deck", "trade"]);
        assert_eq!(unique_values(&views, FilterDimension::SetCode), vec!["LOB-001"]);
        assert!(unique_values(&views, FilterDimension::Archetype).is_empty());
    }

    #[test]
    fn test_unresolved_entries_contribute_entry_values() {
        let entry = BinderEntry::new(CardId::new(1), 1).with_rarity("Rare");
        let views = vec![EntryView::new(&entry, None)];

        assert_eq!(unique_values(&views, FilterDimension::Rarity), vec!["Rare"]);
        assert!(unique_values(&views, FilterDimension::CardType).is_empty());
    }
}

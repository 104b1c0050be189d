//! Filter evaluation.
//!
//! `matches` is a short-circuiting AND across dimensions. Inside a
//! dimension, selected values are OR'd (membership), except tags, which
//! require every selected tag (see `FilterMatcher::tags_match`).
//!
//! An entry whose card data did not resolve fails any card-data filter
//! (search, type, attribute, race, level, archetype, atk, def). Entry-level
//! filters (rarity, set code, tags) still judge it on its own fields, and
//! with no filters at all it passes.

use crate::binder::EntryView;

use super::spec::FilterSpec;

/// A `FilterSpec` with its text criteria lowercased once.
///
/// Build one per filter pass, then call `matches` per entry.
#[derive(Clone, Debug)]
pub struct FilterMatcher<'s> {
    spec: &'s FilterSpec,
    search: Option<String>,
    archetype: Option<String>,
    tags: Vec<String>,
    card_filters: bool,
}

impl<'s> FilterMatcher<'s> {
    #[must_use]
    pub fn new(spec: &'s FilterSpec) -> Self {
        Self {
            spec,
            search: spec.search_term().map(str::to_lowercase),
            archetype: spec.archetype_term().map(str::to_lowercase),
            tags: spec.tags.iter().map(|t| t.to_lowercase()).collect(),
            card_filters: spec.has_card_filters(),
        }
    }

    /// Evaluate one entry.
    #[must_use]
    pub fn matches(&self, view: &EntryView<'_>) -> bool {
        let spec = self.spec;

        if self.card_filters && view.card.is_none() {
            log::trace!("{} excluded: no card data", view.card_id());
            return false;
        }

        if !spec.rarities.is_empty() && !view.rarity().is_some_and(|r| spec.rarities.contains(r)) {
            return false;
        }

        if !spec.set_codes.is_empty()
            && !view
                .entry
                .set_code
                .as_deref()
                .is_some_and(|code| spec.set_codes.contains(code))
        {
            return false;
        }

        if !self.tags_match(view) {
            return false;
        }

        let Some(card) = view.card else {
            // Only entry-level filters can be active here.
            return true;
        };

        if let Some(term) = &self.search {
            if !self.search_matches(view, term) {
                return false;
            }
        }

        if !spec.card_types.is_empty() && !spec.card_types.contains(&card.card_type) {
            return false;
        }

        if !spec.attributes.is_empty()
            && !card.attribute.as_ref().is_some_and(|a| spec.attributes.contains(a))
        {
            return false;
        }

        if !spec.races.is_empty() && !card.race.as_ref().is_some_and(|r| spec.races.contains(r)) {
            return false;
        }

        if !spec.levels.is_empty() && !card.level.is_some_and(|l| spec.levels.contains(&l)) {
            return false;
        }

        if let Some(term) = &self.archetype {
            let found = card
                .archetype
                .as_ref()
                .is_some_and(|a| a.to_lowercase().contains(term.as_str()));
            if !found {
                return false;
            }
        }

        spec.atk.contains(card.atk) && spec.def.contains(card.def)
    }

    /// Every selected tag must be on the entry (case-insensitive).
    fn tags_match(&self, view: &EntryView<'_>) -> bool {
        if self.tags.is_empty() {
            return true;
        }
        let owned: Vec<String> = view.entry.tags.iter().map(|t| t.to_lowercase()).collect();
        self.tags.iter().all(|wanted| owned.contains(wanted))
    }

    /// Substring match against any searchable field.
    fn search_matches(&self, view: &EntryView<'_>, term: &str) -> bool {
        let card = view.card;
        let fields = [
            card.map(|c| c.name.as_str()),
            card.map(|c| c.card_type.as_str()),
            card.and_then(|c| c.race.as_deref()),
            card.and_then(|c| c.attribute.as_deref()),
            card.and_then(|c| c.archetype.as_deref()),
            view.entry.set_code.as_deref(),
            view.rarity(),
        ];
        fields
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(term))
    }
}

/// Check whether an entry passes a filter spec.
///
/// Tag filters use all-of semantics: the entry must carry every selected
/// tag. Never panics; missing optional data fails active filters on that
/// data and passes inactive ones.
#[must_use]
pub fn matches(view: &EntryView<'_>, spec: &FilterSpec) -> bool {
    FilterMatcher::new(spec).matches(view)
}

/// Keep the entries that pass, preserving their order.
#[must_use]
pub fn filter_entries<'a>(views: &[EntryView<'a>], spec: &FilterSpec) -> Vec<EntryView<'a>> {
    let matcher = FilterMatcher::new(spec);
    let kept: Vec<_> = views.iter().filter(|v| matcher.matches(v)).copied().collect();
    log::debug!("filter kept {} of {} entries", kept.len(), views.len());
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::BinderEntry;
    use crate::cards::{Card, CardId};
    use crate::filter::spec::NumericRange;

    fn dark_magician() -> Card {
        Card::new(CardId::new(46986414), "Dark Magician", "Normal Monster")
            .with_attribute("DARK")
            .with_race("Spellcaster")
            .with_level(7)
            .with_atk(2500)
            .with_def(2100)
            .with_archetype("Dark Magician")
    }

    fn entry() -> BinderEntry {
        BinderEntry::new(CardId::new(46986414), 1)
            .with_set_code("LOB-005")
            .with_rarity("Ultra Rare")
            .with_tag("Deck")
            .with_tag("Favorite")
    }

    #[test]
    fn test_empty_spec_matches() {
        let card = dark_magician();
        let entry = entry();
        assert!(matches(&EntryView::new(&entry, Some(&card)), &FilterSpec::default()));
        assert!(matches(&EntryView::new(&entry, None), &FilterSpec::default()));
    }

    #[test]
    fn test_search_any_field() {
        let card = dark_magician();
        let entry = entry();
        let view = EntryView::new(&entry, Some(&card));

        for term in ["dark mag", "NORMAL", "spellcaster", "dark", "lob-0", "ultra"] {
            assert!(matches(&view, &FilterSpec::new().with_search(term)), "{term}");
        }
        assert!(!matches(&view, &FilterSpec::new().with_search("dragon")));
    }

    #[test]
    fn test_categorical() {
        let card = dark_magician();
        let entry = entry();
        let view = EntryView::new(&entry, Some(&card));

        assert!(matches(&view, &FilterSpec::new().with_attribute("DARK")));
        assert!(!matches(&view, &FilterSpec::new().with_attribute("LIGHT")));
        assert!(matches(&view, &FilterSpec::new().with_attribute("LIGHT").with_attribute("DARK")));
        assert!(matches(&view, &FilterSpec::new().with_level(7)));
        assert!(!matches(&view, &FilterSpec::new().with_level(8)));
        assert!(!matches(&view, &FilterSpec::new().with_race("Dragon")));
        assert!(matches(&view, &FilterSpec::new().with_rarity("Ultra Rare")));
        assert!(!matches(&view, &FilterSpec::new().with_set_code("SDY-006")));
    }

    #[test]
    fn test_conjunction() {
        let card = dark_magician();
        let entry = entry();
        let view = EntryView::new(&entry, Some(&card));

        let spec = FilterSpec::new().with_attribute("DARK").with_level(7);
        assert!(matches(&view, &spec));
        assert!(!matches(&view, &spec.with_race("Dragon")));
    }

    #[test]
    fn test_archetype_substring() {
        let card = dark_magician();
        let entry = entry();
        let view = EntryView::new(&entry, Some(&card));

        assert!(matches(&view, &FilterSpec::new().with_archetype("magician")));
        assert!(!matches(&view, &FilterSpec::new().with_archetype("HERO")));

        let no_archetype = Card::new(CardId::new(1), "Sangan", "Effect Monster");
        let view = EntryView::new(&entry, Some(&no_archetype));
        assert!(!matches(&view, &FilterSpec::new().with_archetype("magician")));
    }

    #[test]
    fn test_ranges() {
        let card = dark_magician();
        let entry = entry();
        let view = EntryView::new(&entry, Some(&card));

        assert!(matches(&view, &FilterSpec::new().with_atk(NumericRange::between(2500, 2500))));
        assert!(!matches(&view, &FilterSpec::new().with_atk(NumericRange::at_least(2501))));
        assert!(matches(&view, &FilterSpec::new().with_def(NumericRange::at_most(2100))));

        let spell = Card::new(CardId::new(2), "Dark Hole", "Spell Card");
        let view = EntryView::new(&entry, Some(&spell));
        assert!(!matches(&view, &FilterSpec::new().with_atk(NumericRange::at_least(0))));
        assert!(matches(&view, &FilterSpec::new().with_card_type("Spell Card")));
    }

    #[test]
    fn test_tags_all_of() {
        let card = dark_magician();
        let entry = entry();
        let view = EntryView::new(&entry, Some(&card));

        assert!(matches(&view, &FilterSpec::new().with_tag("deck")));
        assert!(matches(&view, &FilterSpec::new().with_tag("Deck").with_tag("favorite")));
        assert!(!matches(&view, &FilterSpec::new().with_tag("Deck").with_tag("Trade")));
    }

    #[test]
    fn test_missing_card_data() {
        let entry = entry();
        let view = EntryView::new(&entry, None);

        assert!(!matches(&view, &FilterSpec::new().with_search("lob")));
        assert!(!matches(&view, &FilterSpec::new().with_atk(NumericRange::at_most(5000))));
        assert!(!matches(&view, &FilterSpec::new().with_card_type("Normal Monster")));

        // Entry-level filters still apply.
        assert!(matches(&view, &FilterSpec::new().with_tag("Deck")));
        assert!(matches(&view, &FilterSpec::new().with_set_code("LOB-005")));
        assert!(!matches(&view, &FilterSpec::new().with_set_code("LOB-006")));
    }

    #[test]
    fn test_filter_entries_keeps_order() {
        let spell = Card::new(CardId::new(1), "Raigeki", "Spell Card");
        let trap = Card::new(CardId::new(2), "Mirror Force", "Trap Card");
        let spell2 = Card::new(CardId::new(3), "Dark Hole", "Spell Card");
        let entries = [
            BinderEntry::new(CardId::new(1), 1),
            BinderEntry::new(CardId::new(2), 1),
            BinderEntry::new(CardId::new(3), 1),
        ];
        let views = vec![
            EntryView::new(&entries[0], Some(&spell)),
            EntryView::new(&entries[1], Some(&trap)),
            EntryView::new(&entries[2], Some(&spell2)),
        ];

        let kept = filter_entries(&views, &FilterSpec::new().with_card_type("Spell Card"));
        let ids: Vec<_> = kept.iter().map(|v| v.card_id()).collect();
        assert_eq!(ids, vec![CardId::new(1), CardId::new(3)]);
    }
}

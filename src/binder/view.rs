//! Resolved binder entries.
//!
//! An `EntryView` pairs a binder entry with its card reference data, if the
//! lookup had it. Filter and sort code works on views so the card lookup
//! happens once per entry rather than once per comparison.

use crate::cards::{Card, CardId, CardLookup};

use super::entry::BinderEntry;

/// A binder entry with its card data resolved.
#[derive(Clone, Copy, Debug)]
pub struct EntryView<'a> {
    pub entry: &'a BinderEntry,
    /// `None` when the card lookup has no data for this entry.
    pub card: Option<&'a Card>,
}

impl<'a> EntryView<'a> {
    #[must_use]
    pub fn new(entry: &'a BinderEntry, card: Option<&'a Card>) -> Self {
        Self { entry, card }
    }

    /// Resolve an entry against a card lookup.
    #[must_use]
    pub fn resolve<L: CardLookup + ?Sized>(entry: &'a BinderEntry, cards: &'a L) -> Self {
        Self::new(entry, cards.card(entry.card_id))
    }

    #[must_use]
    pub fn card_id(&self) -> CardId {
        self.entry.card_id
    }

    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.entry.quantity
    }

    #[must_use]
    pub fn has_details(&self) -> bool {
        self.card.is_some()
    }

    /// The entry's rarity, falling back to the card's first printing.
    #[must_use]
    pub fn rarity(&self) -> Option<&'a str> {
        self.entry
            .rarity
            .as_deref()
            .or_else(|| self.card.and_then(Card::first_rarity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardRegistry, CardSet};

    fn registry() -> CardRegistry {
        let mut registry = CardRegistry::new();
        registry.insert(
            Card::new(CardId::new(1), "Kuriboh", "Effect Monster")
                .with_set(CardSet::new("MRD-071", "Common")),
        );
        registry
    }

    #[test]
    fn test_resolve() {
        let cards = registry();
        let known = BinderEntry::new(CardId::new(1), 2);
        let unknown = BinderEntry::new(CardId::new(2), 1);

        let view = EntryView::resolve(&known, &cards);
        assert!(view.has_details());
        assert_eq!(view.quantity(), 2);

        let view = EntryView::resolve(&unknown, &cards);
        assert!(!view.has_details());
        assert_eq!(view.card_id(), CardId::new(2));
    }

    #[test]
    fn test_rarity_fallback() {
        let cards = registry();
        let plain = BinderEntry::new(CardId::new(1), 1);
        let graded = BinderEntry::new(CardId::new(1), 1).with_rarity("Ultra Rare");
        let orphan = BinderEntry::new(CardId::new(9), 1);

        assert_eq!(EntryView::resolve(&plain, &cards).rarity(), Some("Common"));
        assert_eq!(EntryView::resolve(&graded, &cards).rarity(), Some("Ultra Rare"));
        assert_eq!(EntryView::resolve(&orphan, &cards).rarity(), None);
    }
}

//! Deck sections and section eligibility.
//!
//! A deck has three independent sections. Each holds an ordered list of
//! (card, quantity) pairs; adding a card already present grows its
//! quantity in place.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::cards::{Card, CardId};

/// Deck section identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Main,
    Extra,
    Side,
}

impl SectionId {
    /// All sections in deck-list order.
    pub const ALL: [SectionId; 3] = [SectionId::Main, SectionId::Extra, SectionId::Side];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            SectionId::Main => "main",
            SectionId::Extra => "extra",
            SectionId::Side => "side",
        }
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Sections a card may be placed in.
///
/// SmallVec since the answer is never more than two sections.
pub type SectionSet = SmallVec<[SectionId; 2]>;

/// Sections a card may enter.
///
/// Fusion, synchro, xyz, and link monsters go to the extra deck only;
/// every other card goes to main or side.
#[must_use]
pub fn sections_allowed(card: &Card) -> SectionSet {
    if card.is_extra_deck() {
        smallvec![SectionId::Extra]
    } else {
        smallvec![SectionId::Main, SectionId::Side]
    }
}

/// Check a single section against `sections_allowed`.
#[must_use]
pub fn is_allowed(card: &Card, section: SectionId) -> bool {
    sections_allowed(card).contains(&section)
}

/// A card and how many copies of it a section holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckCard {
    pub card_id: CardId,
    pub quantity: u32,
}

/// One section of a deck.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeckSection {
    cards: Vec<DeckCard>,
}

impl DeckSection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add copies of a card. Returns the new quantity in this section.
    pub fn add(&mut self, card_id: CardId, quantity: u32) -> u32 {
        if let Some(existing) = self.cards.iter_mut().find(|c| c.card_id == card_id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
            return existing.quantity;
        }
        if quantity == 0 {
            return 0;
        }
        self.cards.push(DeckCard { card_id, quantity });
        quantity
    }

    /// Remove up to `quantity` copies of a card.
    ///
    /// Returns how many copies were actually removed, or `None` if the card
    /// is not in this section. The card is dropped once it reaches zero.
    pub fn remove(&mut self, card_id: CardId, quantity: u32) -> Option<u32> {
        let index = self.cards.iter().position(|c| c.card_id == card_id)?;
        let existing = &mut self.cards[index];
        let removed = quantity.min(existing.quantity);
        existing.quantity -= removed;
        if existing.quantity == 0 {
            self.cards.remove(index);
        }
        Some(removed)
    }

    /// Copies of a card in this section.
    #[must_use]
    pub fn quantity_of(&self, card_id: CardId) -> u32 {
        self.cards
            .iter()
            .filter(|c| c.card_id == card_id)
            .map(|c| c.quantity)
            .fold(0, u32::saturating_add)
    }

    /// Total copies in this section.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.cards.iter().map(|c| c.quantity).fold(0, u32::saturating_add)
    }

    /// Number of distinct cards.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeckCard> {
        self.cards.iter()
    }
}

impl FromIterator<(CardId, u32)> for DeckSection {
    fn from_iter<I: IntoIterator<Item = (CardId, u32)>>(iter: I) -> Self {
        let mut section = Self::new();
        for (card_id, quantity) in iter {
            section.add(card_id, quantity);
        }
        section
    }
}

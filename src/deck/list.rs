//! Deck under construction.
//!
//! `Deck` owns the three sections and enforces the two placement rules on
//! every edit: section eligibility and the per-card copy limit. Whether the
//! binder actually holds the copies is checked one level up, in
//! `availability::add_from_binder`.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};
use crate::core::{Error, Result};

use super::section::{is_allowed, DeckSection, SectionId};

/// A deck: main, extra, and side sections.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    #[serde(default)]
    pub main: DeckSection,
    #[serde(default)]
    pub extra: DeckSection,
    #[serde(default)]
    pub side: DeckSection,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn section(&self, id: SectionId) -> &DeckSection {
        match id {
            SectionId::Main => &self.main,
            SectionId::Extra => &self.extra,
            SectionId::Side => &self.side,
        }
    }

    pub fn section_mut(&mut self, id: SectionId) -> &mut DeckSection {
        match id {
            SectionId::Main => &mut self.main,
            SectionId::Extra => &mut self.extra,
            SectionId::Side => &mut self.side,
        }
    }

    /// Iterate over `(section, section contents)` in deck-list order.
    pub fn sections(&self) -> impl Iterator<Item = (SectionId, &DeckSection)> {
        SectionId::ALL.into_iter().map(move |id| (id, self.section(id)))
    }

    /// Copies of a card across main, extra, and side.
    #[must_use]
    pub fn usage(&self, card_id: CardId) -> u32 {
        self.sections()
            .map(|(_, s)| s.quantity_of(card_id))
            .fold(0, u32::saturating_add)
    }

    /// Total cards across all sections.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.sections()
            .map(|(_, s)| s.total())
            .fold(0, u32::saturating_add)
    }

    /// Add copies of a card to a section.
    ///
    /// Fails if the card may not enter that section, or if the deck would
    /// hold more than `copy_limit` copies overall. Returns the card's new
    /// quantity in the section.
    pub fn add_card(
        &mut self,
        card: &Card,
        section: SectionId,
        quantity: u32,
        copy_limit: u32,
    ) -> Result<u32> {
        if !is_allowed(card, section) {
            return Err(Error::SectionNotAllowed {
                card: card.id,
                section,
            });
        }

        let used = self.usage(card.id);
        if used.saturating_add(quantity) > copy_limit {
            return Err(Error::CopyLimitExceeded {
                card: card.id,
                limit: copy_limit,
                used,
            });
        }

        log::debug!("adding {} x {} to {} deck", quantity, card.id, section);
        Ok(self.section_mut(section).add(card.id, quantity))
    }

    /// Remove up to `quantity` copies of a card from a section.
    /// Returns how many were removed.
    pub fn remove_card(&mut self, card_id: CardId, section: SectionId, quantity: u32) -> Result<u32> {
        self.section_mut(section)
            .remove(card_id, quantity)
            .ok_or(Error::NotInSection {
                card: card_id,
                section,
            })
    }

    /// Move up to `quantity` copies of a card between sections.
    ///
    /// Total usage is unchanged, so only the destination's eligibility is
    /// checked. Returns how many copies moved.
    pub fn move_card(&mut self, card: &Card, from: SectionId, to: SectionId, quantity: u32) -> Result<u32> {
        if !is_allowed(card, to) {
            return Err(Error::SectionNotAllowed {
                card: card.id,
                section: to,
            });
        }
        let moved = self.remove_card(card.id, from, quantity)?;
        self.section_mut(to).add(card.id, moved);
        Ok(moved)
    }

    /// Empty all three sections.
    pub fn clear(&mut self) {
        self.main = DeckSection::new();
        self.extra = DeckSection::new();
        self.side = DeckSection::new();
    }
}

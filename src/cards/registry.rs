//! Card registry for reference-data lookup.
//!
//! The `CardRegistry` stores every card known to the session, keyed by
//! `CardId`. Binder and deck code only ever reads through the `CardLookup`
//! trait so callers can plug in their own cache.

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::core::{next_revision, Result};

use super::definition::{Card, CardId};

/// Read-only card lookup keyed by card identifier.
pub trait CardLookup {
    /// Get a card by ID, or `None` if it has not been loaded.
    fn card(&self, id: CardId) -> Option<&Card>;

    /// Change stamp for the lookup's contents.
    ///
    /// Cached views compare it to decide whether card data changed. The
    /// default of 0 means "untracked": callers must invalidate caches
    /// themselves after changing such a lookup.
    fn generation(&self) -> u64 {
        0
    }
}

impl CardLookup for FxHashMap<CardId, Card> {
    fn card(&self, id: CardId) -> Option<&Card> {
        self.get(&id)
    }
}

/// Registry of card reference data.
///
/// ## Example
///
/// ```
/// use ygo_binder::cards::{Card, CardId, CardLookup, CardRegistry};
///
/// let mut registry = CardRegistry::new();
/// registry.insert(Card::new(CardId::new(55144522), "Pot of Greed", "Spell Card"));
///
/// let found = registry.card(CardId::new(55144522)).unwrap();
/// assert_eq!(found.name, "Pot of Greed");
/// ```
#[derive(Clone, Debug)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Card>,
    generation: u64,
}

impl Default for CardRegistry {
    fn default() -> Self {
        Self {
            cards: FxHashMap::default(),
            generation: next_revision(),
        }
    }
}

/// Shape of a card database response: `{"data": [card, ...]}`.
#[derive(Deserialize)]
struct CardPayload {
    data: Vec<Card>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a card database response body.
    pub fn from_json(json: &str) -> Result<Self> {
        let payload: CardPayload = serde_json::from_str(json)?;
        log::debug!("loaded {} cards from payload", payload.data.len());
        Ok(payload.data.into_iter().collect())
    }

    /// Insert a card, replacing and returning any card with the same ID.
    pub fn insert(&mut self, card: Card) -> Option<Card> {
        self.generation = next_revision();
        self.cards.insert(card.id, card)
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Card>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }
}

impl CardLookup for CardRegistry {
    fn card(&self, id: CardId) -> Option<&Card> {
        self.get(id)
    }

    fn generation(&self) -> u64 {
        self.generation
    }
}

impl FromIterator<Card> for CardRegistry {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut registry = Self::new();
        for card in iter {
            registry.insert(card);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut registry = CardRegistry::new();
        registry.insert(Card::new(CardId::new(1), "Test Card", "Spell Card"));

        assert_eq!(registry.get(CardId::new(1)).unwrap().name, "Test Card");
        assert!(registry.get(CardId::new(99)).is_none());
        assert!(registry.contains(CardId::new(1)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_insert_replaces() {
        let mut registry = CardRegistry::new();
        assert!(registry.insert(Card::new(CardId::new(1), "Old", "Spell Card")).is_none());
        let previous = registry.insert(Card::new(CardId::new(1), "New", "Spell Card"));

        assert_eq!(previous.unwrap().name, "Old");
        assert_eq!(registry.get(CardId::new(1)).unwrap().name, "New");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_generation_changes_on_insert() {
        let mut registry = CardRegistry::new();
        let other = CardRegistry::new();
        assert_ne!(registry.generation(), other.generation());

        let before = registry.generation();
        registry.insert(Card::new(CardId::new(1), "Raigeki", "Spell Card"));
        assert_ne!(registry.generation(), before);

        // A clone holds the same cards, so it keeps the stamp.
        assert_eq!(registry.clone().generation(), registry.generation());
    }

    #[test]
    fn test_find_with_predicate() {
        let registry: CardRegistry = vec![
            Card::new(CardId::new(1), "Raigeki", "Spell Card"),
            Card::new(CardId::new(2), "Mirror Force", "Trap Card"),
            Card::new(CardId::new(3), "Dark Hole", "Spell Card"),
        ]
        .into_iter()
        .collect();

        let spells: Vec<_> = registry.find(|c| c.is_spell()).collect();
        assert_eq!(spells.len(), 2);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{"data": [
            {"id": 1, "name": "A", "type": "Spell Card"},
            {"id": 2, "name": "B", "type": "Effect Monster", "atk": 1000, "def": 1000, "level": 4}
        ]}"#;

        let registry = CardRegistry::from_json(json).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.card(CardId::new(2)).unwrap().atk, Some(1000));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(CardRegistry::from_json("{\"cards\": []}").is_err());
    }

    #[test]
    fn test_hash_map_lookup() {
        let mut map = FxHashMap::default();
        map.insert(CardId::new(5), Card::new(CardId::new(5), "X", "Trap Card"));
        assert!(CardLookup::card(&map, CardId::new(5)).is_some());
        assert!(CardLookup::card(&map, CardId::new(6)).is_none());
        assert_eq!(map.generation(), 0);
    }
}

//! Binders: ordered collections of holdings.
//!
//! `Binder` keeps its entries in an `im::Vector`, so cloning a binder to
//! hand a snapshot to the UI is O(1). Construction, loading, and every
//! mutation take a fresh process-wide `revision`, which `BinderView` uses
//! to know when its cached projection is stale.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardLookup};
use crate::core::{next_revision, Error, Result};

use super::entry::{BinderEntry, EntryKey};
use super::view::EntryView;

/// A user's card collection.
///
/// ## Example
///
/// ```
/// use ygo_binder::binder::{Binder, BinderEntry};
/// use ygo_binder::cards::CardId;
///
/// let mut binder = Binder::new("Main Collection");
/// binder.add(BinderEntry::new(CardId::new(1), 2));
/// binder.add(BinderEntry::new(CardId::new(1), 1));
///
/// assert_eq!(binder.len(), 1);
/// assert_eq!(binder.owned_total(CardId::new(1)), 3);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Binder {
    pub name: String,

    entries: Vector<BinderEntry>,

    #[serde(skip, default = "next_revision")]
    revision: u64,
}

impl Default for Binder {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl Binder {
    /// Create an empty binder.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vector::new(),
            revision: next_revision(),
        }
    }

    /// Create a binder from already-loaded entries, kept in order.
    #[must_use]
    pub fn from_entries(name: impl Into<String>, entries: impl IntoIterator<Item = BinderEntry>) -> Self {
        Self {
            name: name.into(),
            entries: entries.into_iter().collect(),
            revision: next_revision(),
        }
    }

    /// Change stamp. Two binders with the same revision hold the same
    /// entries; any mutation takes a new one.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get an entry by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&BinderEntry> {
        self.entries.get(index)
    }

    /// Iterate over entries in binder order.
    pub fn iter(&self) -> impl Iterator<Item = &BinderEntry> {
        self.entries.iter()
    }

    /// Find the entry for a holding.
    #[must_use]
    pub fn find(&self, key: &EntryKey) -> Option<&BinderEntry> {
        self.entries.iter().find(|e| e.has_key(key))
    }

    /// Total copies owned of a card across every printing.
    #[must_use]
    pub fn owned_total(&self, card_id: CardId) -> u32 {
        self.entries
            .iter()
            .filter(|e| e.card_id == card_id)
            .map(|e| e.quantity)
            .fold(0, u32::saturating_add)
    }

    /// Resolve every entry against a card lookup, in binder order.
    #[must_use]
    pub fn resolve<'a, L: CardLookup + ?Sized>(&'a self, cards: &'a L) -> Vec<EntryView<'a>> {
        self.entries
            .iter()
            .map(|e| EntryView::resolve(e, cards))
            .collect()
    }

    /// Add a holding.
    ///
    /// If an entry with the same key exists, its quantity grows by the new
    /// entry's quantity (other metadata is kept). Otherwise the entry is
    /// appended. Returns the resulting quantity.
    pub fn add(&mut self, entry: BinderEntry) -> u32 {
        self.revision = next_revision();

        let key = entry.key();
        if let Some(index) = self.entries.iter().position(|e| e.has_key(&key)) {
            let existing = &mut self.entries[index];
            existing.quantity = existing.quantity.saturating_add(entry.quantity);
            log::trace!("merged {} copies of {} into entry {}", entry.quantity, key.card_id, index);
            return existing.quantity;
        }

        let quantity = entry.quantity;
        self.entries.push_back(entry);
        quantity
    }

    /// Remove copies of a holding.
    ///
    /// Removing more copies than are owned empties the entry. Entries that
    /// reach zero are dropped. Returns the remaining quantity.
    pub fn remove_quantity(&mut self, key: &EntryKey, quantity: u32) -> Result<u32> {
        let index = self
            .entries
            .iter()
            .position(|e| e.has_key(key))
            .ok_or(Error::NotInBinder(key.card_id))?;

        self.revision = next_revision();

        let existing = &mut self.entries[index];
        if quantity > existing.quantity {
            log::warn!(
                "removing {} copies of {} but only {} owned",
                quantity,
                key.card_id,
                existing.quantity
            );
        }
        existing.quantity = existing.quantity.saturating_sub(quantity);
        let remaining = existing.quantity;

        if remaining == 0 {
            self.entries.remove(index);
        }
        Ok(remaining)
    }

    /// Replace the metadata of an entry, keeping its position.
    pub fn update(&mut self, key: &EntryKey, entry: BinderEntry) -> Result<()> {
        let index = self
            .entries
            .iter()
            .position(|e| e.has_key(key))
            .ok_or(Error::NotInBinder(key.card_id))?;

        self.revision = next_revision();
        self.entries.set(index, entry);
        Ok(())
    }
}

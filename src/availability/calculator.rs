//! Copies available for deck building.
//!
//! Availability is always derived from the current binder and deck; it is
//! never stored. For a holding with `owned` copies of a card the deck
//! already uses `used` times:
//!
//! ```text
//! available = min(max(0, owned - used), max(0, limit - used))
//! ```

use crate::binder::{Binder, BinderEntry};
use crate::cards::{Card, CardId};
use crate::core::{Error, Result};
use crate::deck::{Banlist, Deck, SectionId};

/// Copies of a card across main, extra, and side.
#[must_use]
pub fn usage_across_sections(deck: &Deck, card_id: CardId) -> u32 {
    deck.usage(card_id)
}

/// Copies of this holding that can still be added to the deck.
///
/// Never negative: over-committed decks (more copies used than owned, or
/// more than the limit) yield zero.
///
/// ```
/// use ygo_binder::availability::available_copies;
/// use ygo_binder::binder::BinderEntry;
/// use ygo_binder::cards::CardId;
/// use ygo_binder::deck::Deck;
///
/// let mut deck = Deck::new("Test");
/// deck.main.add(CardId::new(1), 2);
/// deck.side.add(CardId::new(1), 1);
///
/// let entry = BinderEntry::new(CardId::new(1), 5);
/// assert_eq!(available_copies(&entry, &deck, 3), 0);
/// ```
#[must_use]
pub fn available_copies(entry: &BinderEntry, deck: &Deck, copy_limit: u32) -> u32 {
    remaining(entry.quantity, usage_across_sections(deck, entry.card_id), copy_limit)
}

/// Like `available_copies`, but for every holding of a card together.
#[must_use]
pub fn available_copies_for_card(binder: &Binder, deck: &Deck, card_id: CardId, copy_limit: u32) -> u32 {
    remaining(binder.owned_total(card_id), usage_across_sections(deck, card_id), copy_limit)
}

/// Copy limit for a card after applying a banlist.
///
/// Forbidden cards get 0, limited 1, semi-limited 2; every other card gets
/// the global limit. A banlist never raises the global limit.
#[must_use]
pub fn copy_limit_for(card_id: CardId, banlist: Option<&Banlist>, global_limit: u32) -> u32 {
    banlist
        .and_then(|b| b.restriction(card_id).max_copies())
        .map_or(global_limit, |cap| cap.min(global_limit))
}

/// `available_copies` with the card's banlist limit in place of the global one.
#[must_use]
pub fn available_copies_with_banlist(
    entry: &BinderEntry,
    deck: &Deck,
    banlist: Option<&Banlist>,
    global_limit: u32,
) -> u32 {
    available_copies(entry, deck, copy_limit_for(entry.card_id, banlist, global_limit))
}

/// Add copies to a deck only if the binder has them free.
///
/// Checks binder availability across every holding of the card, then the
/// deck's own section and copy-limit rules. Returns the card's new
/// quantity in the section.
pub fn add_from_binder(
    deck: &mut Deck,
    binder: &Binder,
    card: &Card,
    section: SectionId,
    quantity: u32,
    copy_limit: u32,
) -> Result<u32> {
    let owned = binder.owned_total(card.id);
    if owned == 0 {
        return Err(Error::NotInBinder(card.id));
    }

    let used = usage_across_sections(deck, card.id);
    let free = owned.saturating_sub(used);
    if quantity > free {
        return Err(Error::InsufficientCopies {
            card: card.id,
            requested: quantity,
            available: free,
        });
    }

    deck.add_card(card, section, quantity, copy_limit)
}

fn remaining(owned: u32, used: u32, copy_limit: u32) -> u32 {
    let raw = owned.saturating_sub(used);
    let under_limit = copy_limit.saturating_sub(used);
    let available = raw.min(under_limit);
    log::trace!(
        "availability: owned={} used={} limit={} -> {}",
        owned,
        used,
        copy_limit,
        available
    );
    available
}

//! Deck statistics and legality checks.
//!
//! `validate` reports every problem at once rather than stopping at the
//! first, so the deck editor can list them all. Cards the lookup cannot
//! resolve skip the checks that need card data (section eligibility and
//! the monster/spell/trap breakdown).

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::availability::copy_limit_for;
use crate::cards::{CardId, CardLookup};
use crate::core::CollectionConfig;

use super::banlist::{Banlist, Restriction};
use super::list::Deck;
use super::section::{is_allowed, SectionId};

/// Card counts for a deck.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckStats {
    pub main_count: u32,
    pub extra_count: u32,
    pub side_count: u32,
    pub distinct_cards: usize,
    /// Main deck monsters (resolved cards only).
    pub monsters: u32,
    pub spells: u32,
    pub traps: u32,
    /// Cards the lookup had no data for.
    pub unresolved: u32,
}

/// Compute counts for a deck.
#[must_use]
pub fn deck_stats<L: CardLookup + ?Sized>(deck: &Deck, cards: &L) -> DeckStats {
    let mut stats = DeckStats {
        main_count: deck.main.total(),
        extra_count: deck.extra.total(),
        side_count: deck.side.total(),
        ..DeckStats::default()
    };

    let distinct: FxHashSet<CardId> = deck
        .sections()
        .flat_map(|(_, s)| s.iter().map(|e| e.card_id))
        .collect();
    stats.distinct_cards = distinct.len();

    for entry in deck.main.iter() {
        let slot = match cards.card(entry.card_id) {
            Some(card) if card.is_monster() => &mut stats.monsters,
            Some(card) if card.is_spell() => &mut stats.spells,
            Some(card) if card.is_trap() => &mut stats.traps,
            Some(_) => continue,
            None => &mut stats.unresolved,
        };
        *slot = slot.saturating_add(entry.quantity);
    }
    stats.unresolved = deck
        .extra
        .iter()
        .chain(deck.side.iter())
        .filter(|e| cards.card(e.card_id).is_none())
        .map(|e| e.quantity)
        .fold(stats.unresolved, u32::saturating_add);

    stats
}

/// A rule the deck currently breaks.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum DeckViolation {
    #[error("main deck has {count} cards, needs at least {min}")]
    MainTooSmall { count: u32, min: u32 },

    #[error("main deck has {count} cards, at most {max} allowed")]
    MainTooLarge { count: u32, max: u32 },

    #[error("extra deck has {count} cards, at most {max} allowed")]
    ExtraTooLarge { count: u32, max: u32 },

    #[error("side deck has {count} cards, at most {max} allowed")]
    SideTooLarge { count: u32, max: u32 },

    #[error("{card} is forbidden")]
    Forbidden { card: CardId },

    #[error("{card} appears {count} times, limit is {limit}")]
    OverCopyLimit { card: CardId, count: u32, limit: u32 },

    #[error("{card} cannot be in the {section} deck")]
    WrongSection { card: CardId, section: SectionId },
}

/// Check a deck against the configured limits and an optional banlist.
#[must_use]
pub fn validate<L: CardLookup + ?Sized>(
    deck: &Deck,
    cards: &L,
    banlist: Option<&Banlist>,
    config: &CollectionConfig,
) -> Vec<DeckViolation> {
    let mut violations = Vec::new();

    let main = deck.main.total();
    if main < config.main_min {
        violations.push(DeckViolation::MainTooSmall { count: main, min: config.main_min });
    }
    if main > config.main_max {
        violations.push(DeckViolation::MainTooLarge { count: main, max: config.main_max });
    }
    let extra = deck.extra.total();
    if extra > config.extra_max {
        violations.push(DeckViolation::ExtraTooLarge { count: extra, max: config.extra_max });
    }
    let side = deck.side.total();
    if side > config.side_max {
        violations.push(DeckViolation::SideTooLarge { count: side, max: config.side_max });
    }

    // Copy limits are deck-wide, so check each card once in first-seen order.
    let mut checked: Vec<CardId> = Vec::new();
    for (section_id, section) in deck.sections() {
        for entry in section.iter() {
            if let Some(card) = cards.card(entry.card_id) {
                if !is_allowed(card, section_id) {
                    violations.push(DeckViolation::WrongSection {
                        card: entry.card_id,
                        section: section_id,
                    });
                }
            }

            if checked.contains(&entry.card_id) {
                continue;
            }
            checked.push(entry.card_id);

            let count = deck.usage(entry.card_id);
            let restricted = banlist.map(|b| b.restriction(entry.card_id));
            if restricted == Some(Restriction::Forbidden) {
                violations.push(DeckViolation::Forbidden { card: entry.card_id });
                continue;
            }
            let limit = copy_limit_for(entry.card_id, banlist, config.copy_limit);
            if count > limit {
                violations.push(DeckViolation::OverCopyLimit {
                    card: entry.card_id,
                    count,
                    limit,
                });
            }
        }
    }

    if !violations.is_empty() {
        log::debug!("deck {:?} has {} violations", deck.name, violations.len());
    }
    violations
}

/// Check whether a deck passes `validate` with no violations.
#[must_use]
pub fn is_legal<L: CardLookup + ?Sized>(
    deck: &Deck,
    cards: &L,
    banlist: Option<&Banlist>,
    config: &CollectionConfig,
) -> bool {
    validate(deck, cards, banlist, config).is_empty()
}

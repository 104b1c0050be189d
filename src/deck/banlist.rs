//! Banlists (forbidden and limited lists).
//!
//! A banlist caps how many copies of specific cards a deck may run.
//! Cards not on the list are unlimited, meaning only the global copy
//! limit applies to them.
//!
//! Banlists are exchanged as `.lflist.conf` text:
//!
//! ```text
//! !2005.04 TCG
//! #forbidden
//! 55144522 0 --Pot of Greed
//! #limited
//! 12580477 1 --Raigeki
//! #semi-limited
//! ```

use std::fmt::Write as _;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardLookup};
use crate::core::{Error, Result};

/// How a banlist restricts a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Restriction {
    Forbidden,
    Limited,
    SemiLimited,
    #[default]
    Unlimited,
}

impl Restriction {
    /// Restricted kinds in lflist section order.
    pub const LISTED: [Restriction; 3] = [
        Restriction::Forbidden,
        Restriction::Limited,
        Restriction::SemiLimited,
    ];

    /// Restriction for a copy count, as written on an lflist card line.
    #[must_use]
    pub const fn from_copies(copies: u32) -> Self {
        match copies {
            0 => Restriction::Forbidden,
            1 => Restriction::Limited,
            2 => Restriction::SemiLimited,
            _ => Restriction::Unlimited,
        }
    }

    const fn lflist_header(self) -> &'static str {
        match self {
            Restriction::Forbidden => "#forbidden",
            Restriction::Limited => "#limited",
            Restriction::SemiLimited => "#semi-limited",
            Restriction::Unlimited => "#unlimited",
        }
    }

    /// Copies this restriction allows, or `None` when it adds no cap.
    #[must_use]
    pub const fn max_copies(self) -> Option<u32> {
        match self {
            Restriction::Forbidden => Some(0),
            Restriction::Limited => Some(1),
            Restriction::SemiLimited => Some(2),
            Restriction::Unlimited => None,
        }
    }
}

/// A named forbidden/limited list.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Banlist {
    pub name: String,

    /// Format this list applies to ("TCG", "OCG", "Goat").
    #[serde(default)]
    pub format: Option<String>,

    #[serde(default)]
    restrictions: FxHashMap<CardId, Restriction>,
}

impl Banlist {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Set a card's restriction (builder pattern).
    #[must_use]
    pub fn with(mut self, card_id: CardId, restriction: Restriction) -> Self {
        self.set(card_id, restriction);
        self
    }

    /// Set a card's restriction. `Unlimited` removes the card from the list.
    pub fn set(&mut self, card_id: CardId, restriction: Restriction) {
        if restriction == Restriction::Unlimited {
            self.restrictions.remove(&card_id);
        } else {
            self.restrictions.insert(card_id, restriction);
        }
    }

    /// Restriction for a card. Cards not on the list are `Unlimited`.
    #[must_use]
    pub fn restriction(&self, card_id: CardId) -> Restriction {
        self.restrictions.get(&card_id).copied().unwrap_or_default()
    }

    /// Cards carrying the given restriction, in id order.
    #[must_use]
    pub fn cards_with(&self, restriction: Restriction) -> Vec<CardId> {
        let mut cards: Vec<_> = self
            .restrictions
            .iter()
            .filter(|(_, r)| **r == restriction)
            .map(|(id, _)| *id)
            .collect();
        cards.sort_unstable();
        cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.restrictions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.restrictions.is_empty()
    }

    /// Read a banlist from `.lflist.conf` text.
    ///
    /// The first `!` line names the list; a file holding several lists
    /// yields only the first. Each card line is `id copies [--comment]`
    /// and the copy count decides the restriction. Cards under a
    /// whitelist header are skipped, as are `#` and `--` comment lines.
    pub fn parse_lflist(input: &str) -> Result<Banlist> {
        let mut banlist = Banlist::default();
        let mut named = false;
        let mut whitelist = false;

        for (index, raw) in input.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with("--") {
                continue;
            }

            if let Some(name) = line.strip_prefix('!') {
                if named {
                    log::warn!("lflist holds several lists, keeping {:?}", banlist.name);
                    break;
                }
                banlist.name = name.trim().to_string();
                named = true;
                continue;
            }

            if line.starts_with('#') || line.starts_with('$') {
                whitelist = line.ends_with("whitelist");
                continue;
            }

            let parse_error = || Error::LflistParse {
                line: index + 1,
                content: raw.to_string(),
            };
            let card_part = line.split("--").next().unwrap_or_default();
            let mut fields = card_part.split_whitespace();
            let id: u32 = fields.next().and_then(|f| f.parse().ok()).ok_or_else(parse_error)?;
            let copies: u32 = fields.next().and_then(|f| f.parse().ok()).ok_or_else(parse_error)?;

            if whitelist {
                log::trace!("skipping whitelisted card {}", id);
                continue;
            }
            banlist.set(CardId::new(id), Restriction::from_copies(copies));
        }

        log::debug!("parsed lflist {:?} with {} restricted cards", banlist.name, banlist.len());
        Ok(banlist)
    }

    /// Write the banlist as `.lflist.conf` text, cards in id order.
    #[must_use]
    pub fn to_lflist(&self) -> String {
        self.write_lflist(|_| None)
    }

    /// Like `to_lflist`, with card names as line comments.
    #[must_use]
    pub fn to_lflist_named<L: CardLookup + ?Sized>(&self, cards: &L) -> String {
        self.write_lflist(|id| cards.card(id).map(|c| c.name.clone()))
    }

    fn write_lflist(&self, name_of: impl Fn(CardId) -> Option<String>) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "!{}", self.name.replace(['\r', '\n'], " "));

        for restriction in Restriction::LISTED {
            let cards = self.cards_with(restriction);
            if cards.is_empty() {
                continue;
            }
            let _ = writeln!(out, "{}", restriction.lflist_header());
            let copies = restriction.max_copies().unwrap_or_default();
            for id in cards {
                match name_of(id) {
                    Some(name) => {
                        let _ = writeln!(out, "{} {} --{}", id.raw(), copies, name.replace(['\r', '\n'], " "));
                    }
                    None => {
                        let _ = writeln!(out, "{} {}", id.raw(), copies);
                    }
                }
            }
        }
        out
    }
}

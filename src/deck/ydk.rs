//! YDK deck-list codec.
//!
//! The YDK format is line based: `#main`, `#extra`, and `!side` headers,
//! each followed by one card id per copy. Other `#` lines are comments.
//!
//! ```text
//! #created by ygo-binder
//! #main
//! 89631139
//! 89631139
//! #extra
//! !side
//! ```

use std::fmt::Write as _;

use crate::cards::CardId;
use crate::core::{Error, Result};

use super::list::Deck;
use super::section::SectionId;

const CREATOR_LINE: &str = "#created by ygo-binder";

fn header(section: SectionId) -> &'static str {
    match section {
        SectionId::Main => "#main",
        SectionId::Extra => "#extra",
        SectionId::Side => "!side",
    }
}

/// Write a deck as YDK text.
#[must_use]
pub fn to_ydk(deck: &Deck) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", CREATOR_LINE);
    if !deck.name.is_empty() {
        // The name must stay on its comment line.
        let name = deck.name.replace(['\r', '\n'], " ");
        let _ = writeln!(out, "# Deck: {}", name);
    }

    for (id, section) in deck.sections() {
        let _ = writeln!(out, "{}", header(id));
        for entry in section.iter() {
            for _ in 0..entry.quantity {
                let _ = writeln!(out, "{}", entry.card_id.raw());
            }
        }
    }
    out
}

/// Read a deck from YDK text.
///
/// Card lines before any section header go to the main deck. Unknown
/// `!` headers are skipped along with their cards.
pub fn parse_ydk(input: &str) -> Result<Deck> {
    let mut deck = Deck::default();
    let mut current = Some(SectionId::Main);

    for (index, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        match line {
            "#main" => current = Some(SectionId::Main),
            "#extra" => current = Some(SectionId::Extra),
            "!side" => current = Some(SectionId::Side),
            _ if line.starts_with("# Deck:") => {
                deck.name = line["# Deck:".len()..].trim().to_string();
            }
            _ if line.starts_with('#') => {}
            _ if line.starts_with('!') => {
                log::warn!("skipping unknown YDK section {:?}", line);
                current = None;
            }
            _ => {
                let id: u32 = line.parse().map_err(|_| Error::YdkParse {
                    line: index + 1,
                    content: raw.to_string(),
                })?;
                if let Some(section) = current {
                    deck.section_mut(section).add(CardId::new(id), 1);
                }
            }
        }
    }

    log::debug!("parsed YDK deck with {} cards", deck.total());
    Ok(deck)
}

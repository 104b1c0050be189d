//! Crate error type.
//!
//! The filter, sort, and availability functions never fail. Errors only
//! come from the edges: parsing configuration or card payloads, reading
//! YDK deck lists and lflist banlists, writing CSV exports, and binder/deck
//! edits that break a deck-building rule.

use thiserror::Error;

use crate::cards::CardId;
use crate::deck::SectionId;

/// Our standard result type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors which can be returned by this crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A JSON payload (configuration or card data) could not be parsed.
    #[error("could not parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration parsed but holds values that make no sense together.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// CSV export failed.
    #[error("could not write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Writing an export to its destination failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YDK deck list contained a line that is not a card id.
    #[error("invalid YDK line {line}: {content:?}")]
    YdkParse { line: usize, content: String },

    /// An lflist banlist contained a card line without a valid id and limit.
    #[error("invalid lflist line {line}: {content:?}")]
    LflistParse { line: usize, content: String },

    /// The card may not be placed in the requested deck section.
    #[error("{card} cannot be placed in the {section} deck")]
    SectionNotAllowed { card: CardId, section: SectionId },

    /// Adding the copies would put the deck over the card's copy limit.
    #[error("{card} is limited to {limit} copies, deck already has {used}")]
    CopyLimitExceeded { card: CardId, limit: u32, used: u32 },

    /// The binder does not hold enough unused copies.
    #[error("{card}: requested {requested} copies but only {available} available")]
    InsufficientCopies {
        card: CardId,
        requested: u32,
        available: u32,
    },

    /// No binder entry matches the given key.
    #[error("{0} is not in the binder")]
    NotInBinder(CardId),

    /// The card is not in the given deck section.
    #[error("{card} is not in the {section} deck")]
    NotInSection { card: CardId, section: SectionId },
}

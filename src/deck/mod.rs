//! Deck building: sections, placement rules, banlists, and deck lists.
//!
//! ## Key Types
//!
//! - `SectionId`: Main, extra, or side
//! - `DeckSection`: Ordered (card, quantity) list
//! - `Deck`: Three sections with rule-checked add/remove/move
//! - `Banlist`: Forbidden/limited/semi-limited restrictions
//! - `DeckViolation`: One broken rule reported by `validate`
//!
//! `sections_allowed` classifies cards into the sections they may enter.
//! `to_ydk` / `parse_ydk` read and write the YDK deck-list format.

pub mod banlist;
pub mod list;
pub mod section;
pub mod validation;
pub mod ydk;

pub use banlist::{Banlist, Restriction};
pub use list::Deck;
pub use section::{is_allowed, sections_allowed, DeckCard, DeckSection, SectionId, SectionSet};
pub use validation::{deck_stats, is_legal, validate, DeckStats, DeckViolation};
pub use ydk::{parse_ydk, to_ydk};

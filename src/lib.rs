//! # ygo-binder
//!
//! Client-side logic for a Yu-Gi-Oh collection manager: filtering and
//! sorting a binder, and working out how many copies of a card are still
//! available while building a deck.
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: `matches`, `sort`, `available_copies`, and
//!    `sections_allowed` take immutable snapshots and return values. They
//!    never fail and never keep state.
//!
//! 2. **Values Over Mutation**: `FilterSpec` and `SortSpec` are replaced,
//!    not edited. Each has a default used for reset.
//!
//! 3. **Derived, Not Stored**: Availability is recomputed from the binder
//!    and deck on every call. `BinderView` memoizes filter+sort results
//!    keyed on the binder revision and both specs.
//!
//! ## Modules
//!
//! - `core`: Configuration and errors
//! - `cards`: Card reference data, rarity ladder, card lookup
//! - `binder`: Holdings and binders
//! - `filter`: Filter specs and evaluation
//! - `sort`: Sort specs and stable ordering
//! - `deck`: Sections, placement rules, banlists, validation, YDK
//! - `availability`: Copies still usable for deck building
//! - `view`: Memoized binder projection

pub mod core;
pub mod cards;
pub mod binder;
pub mod filter;
pub mod sort;
pub mod deck;
pub mod availability;
pub mod view;

// Re-export commonly used types
pub use crate::core::{CollectionConfig, Error, Result};

pub use crate::cards::{Card, CardId, CardImage, CardLookup, CardRegistry, CardSet, Rarity};

pub use crate::binder::{
    binder_to_csv, write_binder_csv, Binder, BinderEntry, Condition, EntryKey, EntryView,
};

pub use crate::filter::{
    count_active_filters, default_filter_spec, filter_entries, matches, unique_values,
    FilterDimension, FilterMatcher, FilterSpec, NumericRange,
};

pub use crate::sort::{default_sort_spec, sort, sort_order, SortDirection, SortField, SortSpec};

pub use crate::deck::{
    deck_stats, is_legal, parse_ydk, sections_allowed, to_ydk, validate, Banlist, Deck, DeckCard,
    DeckSection, DeckStats, DeckViolation, Restriction, SectionId, SectionSet,
};

pub use crate::availability::{
    add_from_binder, available_copies, available_copies_for_card, available_copies_with_banlist,
    copy_limit_for, usage_across_sections,
};

pub use crate::view::BinderView;

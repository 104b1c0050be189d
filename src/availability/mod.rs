//! Availability: how many more copies of a card the deck can take.
//!
//! All functions are pure and recompute from the binder and deck passed
//! in, so results can never go stale.

pub mod calculator;

pub use calculator::{
    add_from_binder, available_copies, available_copies_for_card, available_copies_with_banlist,
    copy_limit_for, usage_across_sections,
};

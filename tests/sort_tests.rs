//! Sort engine tests.
//!
//! These tests verify ordering over resolved binders:
//! - Field fallbacks (unset attack, missing attribute)
//! - Stability and idempotence
//! - Direction reversal
//! - Filtering then sorting

use ygo_binder::binder::{Binder, BinderEntry, EntryView};
use ygo_binder::cards::{Card, CardId, CardRegistry};
use ygo_binder::filter::{filter_entries, FilterSpec};
use ygo_binder::sort::{default_sort_spec, sort, SortField, SortSpec};

fn ids(views: &[EntryView<'_>]) -> Vec<u32> {
    views.iter().map(|v| v.card_id().raw()).collect()
}

fn registry() -> CardRegistry {
    vec![
        Card::new(CardId::new(1), "Summoned Skull", "Normal Monster")
            .with_attribute("DARK")
            .with_level(6)
            .with_atk(2500)
            .with_def(1200),
        Card::new(CardId::new(2), "Celtic Guardian", "Normal Monster")
            .with_attribute("EARTH")
            .with_level(4)
            .with_atk(1400)
            .with_def(1200),
        Card::new(CardId::new(3), "Monster Reborn", "Spell Card"),
        Card::new(CardId::new(4), "Gaia The Fierce Knight", "Normal Monster")
            .with_attribute("EARTH")
            .with_level(7)
            .with_atk(2300)
            .with_def(2100),
        Card::new(CardId::new(5), "Trap Hole", "Trap Card"),
    ]
    .into_iter()
    .collect()
}

fn binder() -> Binder {
    Binder::from_entries(
        "Starter",
        vec![
            BinderEntry::new(CardId::new(1), 1),
            BinderEntry::new(CardId::new(2), 3),
            BinderEntry::new(CardId::new(3), 1),
            BinderEntry::new(CardId::new(4), 2),
            BinderEntry::new(CardId::new(5), 2),
        ],
    )
}

/// Attack descending: unset attack (-1) goes last.
#[test]
fn test_atk_desc() {
    let cards: CardRegistry = vec![
        Card::new(CardId::new(10), "A", "Normal Monster").with_atk(1800),
        Card::new(CardId::new(11), "B", "Spell Card"),
        Card::new(CardId::new(12), "C", "Normal Monster").with_atk(2500),
    ]
    .into_iter()
    .collect();
    let binder = Binder::from_entries(
        "Test",
        (10..13).map(|id| BinderEntry::new(CardId::new(id), 1)),
    );

    let sorted = sort(&binder.resolve(&cards), &SortSpec::desc(SortField::Atk));
    assert_eq!(ids(&sorted), vec![12, 10, 11]);
}

/// Missing attribute is the empty string and sorts first.
#[test]
fn test_attribute_missing_first() {
    let cards = registry();
    let binder = binder();

    let sorted = sort(&binder.resolve(&cards), &SortSpec::asc(SortField::Attribute));
    // Spell and trap (no attribute) first, in input order, then DARK, then EARTH in input order.
    assert_eq!(ids(&sorted), vec![3, 5, 1, 2, 4]);
}

/// Level sort treats missing level as 0.
#[test]
fn test_level() {
    let cards = registry();
    let binder = binder();

    let sorted = sort(&binder.resolve(&cards), &SortSpec::asc(SortField::Level));
    assert_eq!(ids(&sorted), vec![3, 5, 2, 1, 4]);
}

/// Equal keys keep input order (stability).
#[test]
fn test_stable_on_ties() {
    let cards = registry();
    let binder = binder();

    // Summoned Skull and Celtic Guardian share def 1200.
    let sorted = sort(&binder.resolve(&cards), &SortSpec::asc(SortField::Def));
    assert_eq!(ids(&sorted), vec![3, 5, 1, 2, 4]);
}

/// Sorting a sorted list changes nothing.
#[test]
fn test_idempotent() {
    let cards = registry();
    let binder = binder();

    for field in [SortField::Name, SortField::Type, SortField::Level, SortField::Quantity] {
        let spec = SortSpec::asc(field);
        let once = sort(&binder.resolve(&cards), &spec);
        let twice = sort(&once, &spec);
        assert_eq!(ids(&once), ids(&twice));
    }
}

/// Reversing direction reverses strictly ordered keys.
#[test]
fn test_reverse_direction() {
    let cards = registry();
    let binder = binder();
    let views = binder.resolve(&cards);

    let asc = sort(&views, &SortSpec::asc(SortField::Name));
    let mut desc = sort(&views, &SortSpec::desc(SortField::Name));
    desc.reverse();
    assert_eq!(ids(&asc), ids(&desc));
}

/// Sorting returns a new list and leaves the input alone.
#[test]
fn test_input_untouched() {
    let cards = registry();
    let binder = binder();
    let views = binder.resolve(&cards);
    let before = ids(&views);

    let _ = sort(&views, &SortSpec::desc(SortField::Quantity));
    assert_eq!(ids(&views), before);
}

/// Default sort is by name ascending.
#[test]
fn test_default_sort() {
    let cards = registry();
    let binder = binder();

    let sorted = sort(&binder.resolve(&cards), &default_sort_spec());
    assert_eq!(ids(&sorted), vec![2, 4, 3, 1, 5]);
}

/// Filter then sort, as the binder grid does.
#[test]
fn test_filter_then_sort() {
    let cards = registry();
    let binder = binder();
    let views = binder.resolve(&cards);

    let monsters = filter_entries(&views, &FilterSpec::new().with_card_type("Normal Monster"));
    let sorted = sort(&monsters, &SortSpec::desc(SortField::Quantity));
    assert_eq!(ids(&sorted), vec![2, 4, 1]);
}

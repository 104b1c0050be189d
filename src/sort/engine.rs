//! Sort evaluation.
//!
//! Keys are computed once per entry, then the entries are stably sorted by
//! key. Missing values fall back per field:
//!
//! | Field     | Key                         | Missing value |
//! |-----------|-----------------------------|---------------|
//! | name      | lowercased name             | -             |
//! | type      | type line                   | -             |
//! | attribute | attribute                   | `""`          |
//! | level     | level                       | 0             |
//! | atk / def | stat                        | -1            |
//! | rarity    | rank on the rarity ladder   | Common        |
//! | quantity  | owned copies                | -             |
//!
//! Entries whose card data did not resolve have no key for card fields.
//! They compare equal to each other and are placed after every keyed
//! entry in both directions, so their input order survives.

use std::cmp::Ordering;

use crate::binder::EntryView;
use crate::cards::Rarity;

use super::spec::{SortDirection, SortField, SortSpec};

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Number(i64),
    Text(String),
}

fn sort_key(view: &EntryView<'_>, field: SortField) -> Option<SortKey> {
    if !field.needs_card() {
        return Some(SortKey::Number(i64::from(view.quantity())));
    }

    let card = view.card?;
    let key = match field {
        SortField::Name => SortKey::Text(card.name.to_lowercase()),
        SortField::Type => SortKey::Text(card.card_type.clone()),
        SortField::Attribute => SortKey::Text(card.attribute.clone().unwrap_or_default()),
        SortField::Level => SortKey::Number(i64::from(card.level.unwrap_or(0))),
        SortField::Atk => SortKey::Number(i64::from(card.atk.unwrap_or(-1))),
        SortField::Def => SortKey::Number(i64::from(card.def.unwrap_or(-1))),
        SortField::Rarity => {
            let rarity = view.rarity().map_or(Rarity::Common, Rarity::from_name);
            SortKey::Number(i64::from(rarity.rank()))
        }
        SortField::Quantity => SortKey::Number(i64::from(view.quantity())),
    };
    Some(key)
}

fn compare(a: &Option<SortKey>, b: &Option<SortKey>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match direction {
            SortDirection::Asc => a.cmp(b),
            SortDirection::Desc => b.cmp(a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Positions of `views` in sorted order.
///
/// `sort_order(views, spec)[i]` is the index into `views` of the entry
/// that belongs at position `i`.
#[must_use]
pub fn sort_order(views: &[EntryView<'_>], spec: &SortSpec) -> Vec<usize> {
    let mut keyed: Vec<(Option<SortKey>, usize)> = views
        .iter()
        .enumerate()
        .map(|(i, v)| (sort_key(v, spec.field), i))
        .collect();

    // sort_by is stable; equal keys keep input order.
    keyed.sort_by(|(a, _), (b, _)| compare(a, b, spec.direction));

    log::debug!(
        "sorted {} entries by {:?} {:?}",
        keyed.len(),
        spec.field,
        spec.direction
    );
    keyed.into_iter().map(|(_, i)| i).collect()
}

/// Return the entries in sorted order. The input is left untouched.
#[must_use]
pub fn sort<'a>(views: &[EntryView<'a>], spec: &SortSpec) -> Vec<EntryView<'a>> {
    sort_order(views, spec).into_iter().map(|i| views[i]).collect()
}

//! Binder export as CSV.
//!
//! One row per holding, with the resolved card's details alongside. The
//! header row is always written, so an empty binder still exports a
//! valid file.

use std::borrow::Cow;
use std::io::Write;

use serde::Serialize;

use crate::binder::{Binder, BinderEntry};
use crate::cards::CardLookup;
use crate::core::Result;

/// Column names, in output order.
pub const HEADERS: [&str; 13] = [
    "Card ID",
    "Card Name",
    "Quantity",
    "Set Code",
    "Rarity",
    "Condition",
    "Notes",
    "Type",
    "Attribute",
    "Race",
    "Level",
    "ATK",
    "DEF",
];

/// One CSV row. Field order must match `HEADERS`.
#[derive(Debug, Serialize)]
struct BinderRow<'a> {
    card_id: u32,
    card_name: Cow<'a, str>,
    quantity: u32,
    set_code: Option<&'a str>,
    rarity: Option<&'a str>,
    condition: &'static str,
    notes: Option<&'a str>,
    card_type: Option<&'a str>,
    attribute: Option<&'a str>,
    race: Option<&'a str>,
    level: Option<u8>,
    atk: Option<i32>,
    def: Option<i32>,
}

impl<'a> BinderRow<'a> {
    fn new<L: CardLookup + ?Sized>(entry: &'a BinderEntry, cards: &'a L) -> Self {
        let card = cards.card(entry.card_id);
        let card_name = match card {
            Some(card) => Cow::Borrowed(card.name.as_str()),
            None => Cow::Owned(format!("Card {}", entry.card_id.raw())),
        };

        Self {
            card_id: entry.card_id.raw(),
            card_name,
            quantity: entry.quantity,
            set_code: entry.set_code.as_deref(),
            rarity: entry.rarity.as_deref(),
            condition: entry.condition.unwrap_or_default().name(),
            notes: entry.notes.as_deref(),
            card_type: card.map(|c| c.card_type.as_str()),
            attribute: card.and_then(|c| c.attribute.as_deref()),
            race: card.and_then(|c| c.race.as_deref()),
            level: card.and_then(|c| c.level),
            atk: card.and_then(|c| c.atk),
            def: card.and_then(|c| c.def),
        }
    }
}

/// Write a binder as CSV to `out`, in binder order.
pub fn write_binder_csv<W, L>(binder: &Binder, cards: &L, out: W) -> Result<()>
where
    W: Write,
    L: CardLookup + ?Sized,
{
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(out);
    wtr.write_record(HEADERS)?;
    for entry in binder.iter() {
        wtr.serialize(BinderRow::new(entry, cards))?;
    }
    wtr.flush()?;

    log::debug!("exported {} binder entries from {:?}", binder.len(), binder.name);
    Ok(())
}

/// Export a binder as a CSV string.
pub fn binder_to_csv<L: CardLookup + ?Sized>(binder: &Binder, cards: &L) -> Result<String> {
    let mut buffer = Vec::<u8>::new();
    write_binder_csv(binder, cards, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

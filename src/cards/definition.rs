//! Card reference data.
//!
//! `Card` holds the immutable properties of a card as served by the card
//! database (name, type line, stats, print sets). It is loaded once per
//! session and never mutated afterwards.
//!
//! Holdings of a card (quantity, condition, rarity owned) live separately
//! in `BinderEntry`.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card (the passcode printed on the card).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// One printing of a card in a set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSet {
    /// Set name ("Legend of Blue Eyes White Dragon").
    #[serde(default)]
    pub set_name: String,
    /// Set code ("LOB-001").
    pub set_code: String,
    /// Rarity of this printing ("Ultra Rare").
    #[serde(rename = "set_rarity")]
    pub rarity: String,
}

impl CardSet {
    /// Create a print-set record.
    pub fn new(set_code: impl Into<String>, rarity: impl Into<String>) -> Self {
        Self {
            set_name: String::new(),
            set_code: set_code.into(),
            rarity: rarity.into(),
        }
    }
}

/// Artwork references for a card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardImage {
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub image_url_small: String,
    #[serde(default)]
    pub image_url_cropped: String,
}

/// Type-line keywords that send a monster to the extra deck.
const EXTRA_DECK_KEYWORDS: [&str; 4] = ["fusion", "synchro", "xyz", "link"];

/// Static card data.
///
/// Field names follow the card database JSON (`type`, `def`, `desc`,
/// `card_sets`, `card_images`) so API payloads deserialize directly.
///
/// ## Example
///
/// ```
/// use ygo_binder::cards::{Card, CardId};
///
/// let dragon = Card::new(CardId::new(89631139), "Blue-Eyes White Dragon", "Normal Monster")
///     .with_attribute("LIGHT")
///     .with_race("Dragon")
///     .with_level(8)
///     .with_atk(3000)
///     .with_def(2500);
///
/// assert!(dragon.is_monster());
/// assert!(!dragon.is_extra_deck());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,

    pub name: String,

    /// Full type line ("Effect Monster", "Spell Card", "XYZ Monster").
    #[serde(rename = "type")]
    pub card_type: String,

    /// Monster attribute (LIGHT, DARK, ...). Absent on spells and traps.
    #[serde(default)]
    pub attribute: Option<String>,

    /// Monster type or spell/trap property ("Dragon", "Quick-Play").
    #[serde(default)]
    pub race: Option<String>,

    /// Level, rank, or link rating.
    #[serde(default)]
    pub level: Option<u8>,

    #[serde(default)]
    pub atk: Option<i32>,

    #[serde(default, rename = "def")]
    pub def: Option<i32>,

    #[serde(default)]
    pub archetype: Option<String>,

    #[serde(default, rename = "desc")]
    pub description: String,

    #[serde(default)]
    pub card_sets: Vec<CardSet>,

    #[serde(default)]
    pub card_images: Vec<CardImage>,
}

impl Card {
    /// Create a card with only its identity and type line set.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, card_type: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            card_type: card_type.into(),
            attribute: None,
            race: None,
            level: None,
            atk: None,
            def: None,
            archetype: None,
            description: String::new(),
            card_sets: Vec::new(),
            card_images: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    #[must_use]
    pub fn with_race(mut self, race: impl Into<String>) -> Self {
        self.race = Some(race.into());
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: u8) -> Self {
        self.level = Some(level);
        self
    }

    #[must_use]
    pub fn with_atk(mut self, atk: i32) -> Self {
        self.atk = Some(atk);
        self
    }

    #[must_use]
    pub fn with_def(mut self, def: i32) -> Self {
        self.def = Some(def);
        self
    }

    #[must_use]
    pub fn with_archetype(mut self, archetype: impl Into<String>) -> Self {
        self.archetype = Some(archetype.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a print set (builder pattern).
    #[must_use]
    pub fn with_set(mut self, set: CardSet) -> Self {
        self.card_sets.push(set);
        self
    }

    /// Check if the type line names a monster.
    #[must_use]
    pub fn is_monster(&self) -> bool {
        self.card_type.contains("Monster")
    }

    #[must_use]
    pub fn is_spell(&self) -> bool {
        self.card_type.contains("Spell")
    }

    #[must_use]
    pub fn is_trap(&self) -> bool {
        self.card_type.contains("Trap")
    }

    /// Check if this card belongs in the extra deck
    /// (fusion, synchro, xyz, and link monsters).
    #[must_use]
    pub fn is_extra_deck(&self) -> bool {
        if !self.is_monster() {
            return false;
        }
        let type_line = self.card_type.to_lowercase();
        EXTRA_DECK_KEYWORDS.iter().any(|k| type_line.contains(k))
    }

    /// Rarity of the first print set, if any.
    #[must_use]
    pub fn first_rarity(&self) -> Option<&str> {
        self.card_sets.first().map(|s| s.rarity.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_card_builder() {
        let card = Card::new(CardId::new(1), "Dark Magician", "Normal Monster")
            .with_attribute("DARK")
            .with_race("Spellcaster")
            .with_level(7)
            .with_atk(2500)
            .with_def(2100)
            .with_archetype("Dark Magician")
            .with_set(CardSet::new("LOB-005", "Ultra Rare"));

        assert_eq!(card.attribute.as_deref(), Some("DARK"));
        assert_eq!(card.level, Some(7));
        assert_eq!(card.atk, Some(2500));
        assert_eq!(card.first_rarity(), Some("Ultra Rare"));
    }

    #[test]
    fn test_card_categories() {
        let spell = Card::new(CardId::new(1), "Pot of Greed", "Spell Card");
        let trap = Card::new(CardId::new(2), "Mirror Force", "Trap Card");
        let xyz = Card::new(CardId::new(3), "Number 39: Utopia", "XYZ Monster");
        let pendulum_fusion = Card::new(CardId::new(4), "Odd-Eyes Vortex", "Pendulum Effect Fusion Monster");
        let effect = Card::new(CardId::new(5), "Ash Blossom", "Tuner Monster");

        assert!(spell.is_spell() && !spell.is_monster());
        assert!(trap.is_trap());
        assert!(xyz.is_extra_deck());
        assert!(pendulum_fusion.is_extra_deck());
        assert!(!effect.is_extra_deck());
        assert!(!spell.is_extra_deck());
    }

    #[test]
    fn test_card_deserializes_api_payload() {
        let json = r#"{
            "id": 89631139,
            "name": "Blue-Eyes White Dragon",
            "type": "Normal Monster",
            "desc": "This legendary dragon is a powerful engine of destruction.",
            "atk": 3000,
            "def": 2500,
            "level": 8,
            "race": "Dragon",
            "attribute": "LIGHT",
            "archetype": "Blue-Eyes",
            "card_sets": [
                {"set_name": "Legend of Blue Eyes White Dragon", "set_code": "LOB-001", "set_rarity": "Ultra Rare"}
            ],
            "card_images": [{"image_url": "https://example.invalid/89631139.jpg"}]
        }"#;

        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.id, CardId::new(89631139));
        assert_eq!(card.card_type, "Normal Monster");
        assert_eq!(card.def, Some(2500));
        assert_eq!(card.card_sets[0].set_code, "LOB-001");
        assert_eq!(card.card_images.len(), 1);
    }

    #[test]
    fn test_spell_payload_without_stats() {
        let json = r#"{"id": 55144522, "name": "Pot of Greed", "type": "Spell Card", "race": "Normal"}"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.atk, None);
        assert_eq!(card.attribute, None);
        assert!(card.card_sets.is_empty());
    }
}

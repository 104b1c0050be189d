//! Binder entries: one holding of a card.
//!
//! A `BinderEntry` records how many copies of a specific printing the user
//! owns, along with optional condition, notes, and free-form tags. Two
//! entries are the same holding when their `EntryKey` matches.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Physical condition of a holding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    #[serde(rename = "Mint")]
    Mint,
    #[default]
    #[serde(rename = "Near Mint")]
    NearMint,
    #[serde(rename = "Lightly Played")]
    LightlyPlayed,
    #[serde(rename = "Moderately Played")]
    ModeratelyPlayed,
    #[serde(rename = "Heavily Played")]
    HeavilyPlayed,
    #[serde(rename = "Damaged")]
    Damaged,
}

impl Condition {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Condition::Mint => "Mint",
            Condition::NearMint => "Near Mint",
            Condition::LightlyPlayed => "Lightly Played",
            Condition::ModeratelyPlayed => "Moderately Played",
            Condition::HeavilyPlayed => "Heavily Played",
            Condition::Damaged => "Damaged",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Identity of a holding: the same card in the same printing and rarity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryKey {
    pub card_id: CardId,
    pub set_code: Option<String>,
    pub rarity: Option<String>,
}

impl EntryKey {
    /// Key for a card with no printing recorded.
    #[must_use]
    pub fn card(card_id: CardId) -> Self {
        Self {
            card_id,
            set_code: None,
            rarity: None,
        }
    }

    /// Key for a specific printing.
    #[must_use]
    pub fn printing(card_id: CardId, set_code: impl Into<String>, rarity: impl Into<String>) -> Self {
        Self {
            card_id,
            set_code: Some(set_code.into()),
            rarity: Some(rarity.into()),
        }
    }
}

/// One holding in a binder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinderEntry {
    pub card_id: CardId,

    /// Copies owned. Unsigned, so never negative.
    pub quantity: u32,

    #[serde(default)]
    pub set_code: Option<String>,

    #[serde(default)]
    pub rarity: Option<String>,

    #[serde(default)]
    pub condition: Option<Condition>,

    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl BinderEntry {
    /// Create an entry with no printing metadata.
    #[must_use]
    pub fn new(card_id: CardId, quantity: u32) -> Self {
        Self {
            card_id,
            quantity,
            set_code: None,
            rarity: None,
            condition: None,
            notes: None,
            tags: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_set_code(mut self, set_code: impl Into<String>) -> Self {
        self.set_code = Some(set_code.into());
        self
    }

    #[must_use]
    pub fn with_rarity(mut self, rarity: impl Into<String>) -> Self {
        self.rarity = Some(rarity.into());
        self
    }

    #[must_use]
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Add a tag (builder pattern).
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// The holding's identity.
    #[must_use]
    pub fn key(&self) -> EntryKey {
        EntryKey {
            card_id: self.card_id,
            set_code: self.set_code.clone(),
            rarity: self.rarity.clone(),
        }
    }

    /// Check whether this entry is the holding named by `key`.
    #[must_use]
    pub fn has_key(&self, key: &EntryKey) -> bool {
        self.card_id == key.card_id && self.set_code == key.set_code && self.rarity == key.rarity
    }

    /// Case-insensitive tag check.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == wanted)
    }
}

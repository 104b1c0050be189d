//! Rarity ranking.
//!
//! Rarities are stored as free text on print sets and binder entries.
//! `Rarity` maps that text onto a fixed ladder used for sorting; anything
//! unrecognised ranks as `Common`.

use serde::{Deserialize, Serialize};

/// Known rarities, ordered from lowest to highest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    #[default]
    Common,
    Rare,
    SuperRare,
    UltraRare,
    SecretRare,
    UltimateRare,
    GhostRare,
    StarlightRare,
    CollectorsRare,
    PrismaticSecretRare,
}

impl Rarity {
    /// All rarities in rank order.
    pub const ALL: [Rarity; 10] = [
        Rarity::Common,
        Rarity::Rare,
        Rarity::SuperRare,
        Rarity::UltraRare,
        Rarity::SecretRare,
        Rarity::UltimateRare,
        Rarity::GhostRare,
        Rarity::StarlightRare,
        Rarity::CollectorsRare,
        Rarity::PrismaticSecretRare,
    ];

    /// Resolve a rarity name. Unknown names resolve to `Common`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let normalized: String = name
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();

        Self::ALL
            .into_iter()
            .find(|r| {
                let canonical: String = r
                    .name()
                    .chars()
                    .filter(|c| c.is_alphanumeric())
                    .flat_map(char::to_lowercase)
                    .collect();
                canonical == normalized
            })
            .unwrap_or_default()
    }

    /// Display name as printed by the card database.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::SuperRare => "Super Rare",
            Rarity::UltraRare => "Ultra Rare",
            Rarity::SecretRare => "Secret Rare",
            Rarity::UltimateRare => "Ultimate Rare",
            Rarity::GhostRare => "Ghost Rare",
            Rarity::StarlightRare => "Starlight Rare",
            Rarity::CollectorsRare => "Collector's Rare",
            Rarity::PrismaticSecretRare => "Prismatic Secret Rare",
        }
    }

    /// Position on the ladder, `Common` = 0.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

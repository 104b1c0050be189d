//! Collection configuration.
//!
//! Deck-building limits are configured once and passed by reference to
//! the availability and validation code. The defaults match the standard
//! TCG rules: 3 copies per card, a 40-60 card main deck, and 15-card
//! extra and side decks.

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};

/// Deck-building limits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionConfig {
    /// Maximum copies of a single card across main, extra, and side.
    pub copy_limit: u32,

    /// Minimum main deck size.
    pub main_min: u32,

    /// Maximum main deck size.
    pub main_max: u32,

    /// Maximum extra deck size.
    pub extra_max: u32,

    /// Maximum side deck size.
    pub side_max: u32,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            copy_limit: 3,
            main_min: 40,
            main_max: 60,
            extra_max: 15,
            side_max: 15,
        }
    }
}

impl CollectionConfig {
    /// Create a configuration with standard limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing fields take defaults.
    ///
    /// ```
    /// use ygo_binder::CollectionConfig;
    ///
    /// let config = CollectionConfig::from_json(r#"{"copy_limit": 1}"#).unwrap();
    /// assert_eq!(config.copy_limit, 1);
    /// assert_eq!(config.main_min, 40);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the limits are usable together.
    pub fn validate(&self) -> Result<()> {
        if self.copy_limit == 0 {
            return Err(Error::InvalidConfig("copy_limit must be at least 1".into()));
        }
        if self.main_min > self.main_max {
            return Err(Error::InvalidConfig(format!(
                "main_min ({}) exceeds main_max ({})",
                self.main_min, self.main_max
            )));
        }
        Ok(())
    }

    /// Set the per-card copy limit.
    #[must_use]
    pub fn with_copy_limit(mut self, limit: u32) -> Self {
        self.copy_limit = limit;
        self
    }

    /// Set the main deck size range.
    #[must_use]
    pub fn with_main_size(mut self, min: u32, max: u32) -> Self {
        self.main_min = min;
        self.main_max = max;
        self
    }

    #[must_use]
    pub fn with_extra_max(mut self, max: u32) -> Self {
        self.extra_max = max;
        self
    }

    #[must_use]
    pub fn with_side_max(mut self, max: u32) -> Self {
        self.side_max = max;
        self
    }
}

//! Sort specifications.

use serde::{Deserialize, Serialize};

/// Field to order binder entries by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Name,
    Type,
    Attribute,
    Level,
    Atk,
    Def,
    Rarity,
    Quantity,
}

impl SortField {
    /// Check whether the field reads card data (every field but quantity).
    #[must_use]
    pub const fn needs_card(self) -> bool {
        !matches!(self, SortField::Quantity)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Field and direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

/// The reset value for sorting: name, ascending.
#[must_use]
pub fn default_sort_spec() -> SortSpec {
    SortSpec::default()
}

impl SortSpec {
    #[must_use]
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    #[must_use]
    pub const fn asc(field: SortField) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    #[must_use]
    pub const fn desc(field: SortField) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    /// Same field, opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.field, self.direction.reversed())
    }

    /// Spec after clicking a column header: same field flips direction,
    /// a new field starts ascending.
    #[must_use]
    pub fn toggled(self, field: SortField) -> Self {
        if self.field == field {
            self.reversed()
        } else {
            Self::asc(field)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let spec = default_sort_spec();
        assert_eq!(spec.field, SortField::Name);
        assert_eq!(spec.direction, SortDirection::Asc);
    }

    #[test]
    fn test_toggled() {
        let spec = SortSpec::asc(SortField::Atk);
        assert_eq!(spec.toggled(SortField::Atk), SortSpec::desc(SortField::Atk));
        assert_eq!(spec.toggled(SortField::Atk).toggled(SortField::Atk), spec);
        assert_eq!(SortSpec::desc(SortField::Atk).toggled(SortField::Name), SortSpec::asc(SortField::Name));
    }

    #[test]
    fn test_needs_card() {
        assert!(SortField::Rarity.needs_card());
        assert!(!SortField::Quantity.needs_card());
    }

    #[test]
    fn test_json() {
        let spec: SortSpec = serde_json::from_str(r#"{"field": "atk", "direction": "desc"}"#).unwrap();
        assert_eq!(spec, SortSpec::desc(SortField::Atk));
    }
}

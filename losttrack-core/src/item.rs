use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::{Result, StoreError};

/// A stored lost-and-found item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Item {
    /// Surrogate identity assigned by the store
    pub id: i64,
    pub name: String,
    pub description: String,
    pub barcode: String,
}

impl Item {
    /// Ordered, labeled fields for rendering.
    ///
    /// Every view that shows an item goes through this contract so the
    /// column order and labels stay consistent across the app.
    pub fn display_fields(&self) -> [(&'static str, &str); 3] {
        [
            ("Name", self.name.as_str()),
            ("Description", self.description.as_str()),
            ("Barcode", self.barcode.as_str()),
        ]
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.name, self.barcode)
    }
}

/// A validated input triple for a new item.
///
/// Construction trims surrounding whitespace and rejects blank fields, so
/// the store never sees an empty name, description, or barcode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemDraft {
    name: String,
    description: String,
    barcode: String,
}

impl ItemDraft {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        barcode: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into().trim().to_string();
        let description = description.into().trim().to_string();
        let barcode = barcode.into().trim().to_string();

        if name.is_empty() {
            return Err(StoreError::empty_field("name"));
        }
        if description.is_empty() {
            return Err(StoreError::empty_field("description"));
        }
        if barcode.is_empty() {
            return Err(StoreError::empty_field("barcode"));
        }

        Ok(Self {
            name,
            description,
            barcode,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn barcode(&self) -> &str {
        &self.barcode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_trims_whitespace() {
        let draft = ItemDraft::new("  Jacket ", " Blue, size M\n", "\tA100 ").unwrap();
        assert_eq!(draft.name(), "Jacket");
        assert_eq!(draft.description(), "Blue, size M");
        assert_eq!(draft.barcode(), "A100");
    }

    #[test]
    fn test_draft_rejects_blank_fields() {
        let err = ItemDraft::new("", "desc", "A100").unwrap_err();
        assert!(matches!(err, StoreError::EmptyField { field: "name" }));

        let err = ItemDraft::new("Jacket", "   ", "A100").unwrap_err();
        assert!(matches!(
            err,
            StoreError::EmptyField {
                field: "description"
            }
        ));

        let err = ItemDraft::new("Jacket", "desc", "\t").unwrap_err();
        assert!(matches!(err, StoreError::EmptyField { field: "barcode" }));
    }

    #[test]
    fn test_display_fields_order() {
        let item = Item {
            id: 1,
            name: "Jacket".into(),
            description: "Blue, size M".into(),
            barcode: "A100".into(),
        };

        let fields = item.display_fields();
        assert_eq!(fields[0], ("Name", "Jacket"));
        assert_eq!(fields[1], ("Description", "Blue, size M"));
        assert_eq!(fields[2], ("Barcode", "A100"));
    }
}

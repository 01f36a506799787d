//! Catalog item model
//!
//! An `Item` is a borrowable catalog entry. The kind (Book, Magazine, DVD)
//! carries the variant-specific field and is serialized as a flat,
//! self-describing record: the `"type"` discriminator and the variant field
//! sit beside the common fields.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{ItemId, UserId};
use crate::error::{CatalogError, CatalogResult};

/// The kind of a catalog item, with its variant-specific field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ItemKind {
    /// A book, categorized by genre
    Book { genre: String },
    /// A magazine issue
    Magazine { issue: u32 },
    /// A DVD with its runtime in minutes
    #[serde(rename = "DVD")]
    Dvd { duration: u32 },
}

impl ItemKind {
    /// The discriminator name as written to the items file
    pub fn name(&self) -> &'static str {
        match self {
            Self::Book { .. } => "Book",
            Self::Magazine { .. } => "Magazine",
            Self::Dvd { .. } => "DVD",
        }
    }

    /// Whether this kind of item can carry a reservation.
    ///
    /// Books and DVDs are reservable; magazines are not.
    pub fn supports_reservation(&self) -> bool {
        matches!(self, Self::Book { .. } | Self::Dvd { .. })
    }

    /// Parse a kind name from user input (case-insensitive)
    pub fn parse_name(s: &str) -> Option<&'static str> {
        match s.to_lowercase().as_str() {
            "book" => Some("Book"),
            "magazine" => Some("Magazine"),
            "dvd" => Some("DVD"),
            _ => None,
        }
    }
}

/// A catalog item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, immutable after creation
    #[serde(rename = "item_id")]
    pub id: ItemId,

    /// Item title
    pub title: String,

    /// Author, editor, or director
    pub author: String,

    /// Whether the item is currently borrowable
    pub available: bool,

    /// User holding a reservation on this item, if any.
    /// Independent of `available`: reserving does not block borrowing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserved_by: Option<UserId>,

    /// Variant tag plus the variant-specific field
    #[serde(flatten)]
    pub kind: ItemKind,
}

impl Item {
    /// Create a new item. Availability defaults to true.
    pub fn new(
        id: impl Into<ItemId>,
        title: impl Into<String>,
        author: impl Into<String>,
        kind: ItemKind,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            available: true,
            reserved_by: None,
            kind,
        }
    }

    /// Check if the item is currently available for borrowing
    pub fn check_availability(&self) -> bool {
        self.available
    }

    /// Record a reservation claim for `user_id`.
    ///
    /// Fails if a claim is already present. The existing claim is unchanged
    /// on failure. Does not touch availability.
    pub fn reserve(&mut self, user_id: UserId) -> CatalogResult<()> {
        if self.reserved_by.is_some() {
            return Err(CatalogError::already_reserved());
        }
        self.reserved_by = Some(user_id);
        Ok(())
    }

    /// Human-readable one-line rendering used by list and search output
    pub fn display_info(&self) -> String {
        match &self.kind {
            ItemKind::Book { genre } => format!(
                "[Book] {} by {} - Genre: {} - Available: {}",
                self.title, self.author, genre, self.available
            ),
            ItemKind::Magazine { issue } => format!(
                "[Magazine] {} Issue {} - Available: {}",
                self.title, issue, self.available
            ),
            ItemKind::Dvd { duration } => format!(
                "[DVD] {} by {} - Duration: {} min - Available: {}",
                self.title, self.author, duration, self.available
            ),
        }
    }

    /// Validate user-supplied fields
    pub fn validate(&self) -> CatalogResult<()> {
        if self.title.trim().is_empty() {
            return Err(CatalogError::Validation("Title cannot be empty".into()));
        }
        if self.author.trim().is_empty() {
            return Err(CatalogError::Validation("Author cannot be empty".into()));
        }
        Ok(())
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_info())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> Item {
        Item::new(
            "b1",
            "Dune",
            "Herbert",
            ItemKind::Book {
                genre: "SciFi".into(),
            },
        )
    }

    #[test]
    fn test_new_item_defaults() {
        let item = book();
        assert!(item.available);
        assert!(item.reserved_by.is_none());
        assert_eq!(item.kind.name(), "Book");
    }

    #[test]
    fn test_display_info_book() {
        assert_eq!(
            book().display_info(),
            "[Book] Dune by Herbert - Genre: SciFi - Available: true"
        );
    }

    #[test]
    fn test_display_info_magazine() {
        let item = Item::new("m1", "Wired", "Conde Nast", ItemKind::Magazine { issue: 42 });
        assert_eq!(
            item.display_info(),
            "[Magazine] Wired Issue 42 - Available: true"
        );
    }

    #[test]
    fn test_display_info_dvd() {
        let item = Item::new("d1", "Alien", "Scott", ItemKind::Dvd { duration: 117 });
        assert_eq!(
            item.display_info(),
            "[DVD] Alien by Scott - Duration: 117 min - Available: true"
        );
    }

    #[test]
    fn test_reservation_support_by_kind() {
        assert!(ItemKind::Book { genre: "X".into() }.supports_reservation());
        assert!(ItemKind::Dvd { duration: 1 }.supports_reservation());
        assert!(!ItemKind::Magazine { issue: 1 }.supports_reservation());
    }

    #[test]
    fn test_reserve_then_reserve_again_fails() {
        let mut item = book();
        item.reserve(UserId::from("u1")).unwrap();
        assert_eq!(item.reserved_by, Some(UserId::from("u1")));

        let err = item.reserve(UserId::from("u2")).unwrap_err();
        assert!(err.is_reservation());
        // The first claim is unchanged
        assert_eq!(item.reserved_by, Some(UserId::from("u1")));
    }

    #[test]
    fn test_reserve_does_not_touch_availability() {
        let mut item = book();
        item.reserve(UserId::from("u1")).unwrap();
        assert!(item.available);
    }

    #[test]
    fn test_serialized_record_is_flat() {
        let item = book();
        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(value["item_id"], "b1");
        assert_eq!(value["type"], "Book");
        assert_eq!(value["genre"], "SciFi");
        assert_eq!(value["available"], true);
        // Unset reservation is omitted entirely
        assert!(value.get("reserved_by").is_none());
    }

    #[test]
    fn test_round_trip_preserves_state() {
        let mut item = Item::new("d1", "Alien", "Scott", ItemKind::Dvd { duration: 117 });
        item.available = false;
        item.reserve(UserId::from("u1")).unwrap();

        let json = serde_json::to_string(&item).unwrap();
        let back: Item = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id, item.id);
        assert_eq!(back.kind, item.kind);
        assert!(!back.available);
        assert_eq!(back.reserved_by, Some(UserId::from("u1")));
    }

    #[test]
    fn test_unknown_type_tag_rejected() {
        let json = r#"{"item_id":"x","title":"T","author":"A","available":true,"type":"Cassette"}"#;
        assert!(serde_json::from_str::<Item>(json).is_err());
    }

    #[test]
    fn test_parse_kind_name() {
        assert_eq!(ItemKind::parse_name("book"), Some("Book"));
        assert_eq!(ItemKind::parse_name("DVD"), Some("DVD"));
        assert_eq!(ItemKind::parse_name("Magazine"), Some("Magazine"));
        assert_eq!(ItemKind::parse_name("cassette"), None);
    }

    #[test]
    fn test_validation() {
        let mut item = book();
        assert!(item.validate().is_ok());

        item.title = "  ".into();
        assert!(item.validate().is_err());
    }
}

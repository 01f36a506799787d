//! Library user model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{ItemId, UserId};

/// A registered library user and the items they currently hold.
///
/// Carries no rule logic of its own; the Catalog enforces all borrowing
/// invariants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    #[serde(rename = "user_id")]
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Identifiers of items currently checked out by this user
    #[serde(default)]
    pub borrowed_items: Vec<ItemId>,
}

impl User {
    /// Create a new user with no borrowed items.
    ///
    /// Always starts from a fresh empty collection per instance.
    pub fn new(id: impl Into<UserId>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            borrowed_items: Vec::new(),
        }
    }

    /// Record that this user checked out `item_id`. No-op if already present.
    pub fn record_borrow(&mut self, item_id: ItemId) {
        if !self.borrowed_items.contains(&item_id) {
            self.borrowed_items.push(item_id);
        }
    }

    /// Remove `item_id` from the borrowed set. No-op if absent.
    pub fn record_return(&mut self, item_id: &ItemId) {
        self.borrowed_items.retain(|id| id != item_id);
    }

    /// Whether this user currently holds `item_id`
    pub fn has_borrowed(&self, item_id: &ItemId) -> bool {
        self.borrowed_items.contains(item_id)
    }

    /// Human-readable one-line rendering
    pub fn display_info(&self) -> String {
        format!("User {} ({}) - ID: {}", self.name, self.email, self.id)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_info())
    }
}

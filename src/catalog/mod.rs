//! The catalog: in-memory item/user maps plus all circulation rules
//!
//! Holds every item and user for the process lifetime. State is loaded once
//! at startup and written back on save; everything in between is volatile.
//! Borrow state is stored redundantly (item availability flag and the user's
//! borrowed list) and the operations here keep the two sides consistent.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{Item, ItemId, User, UserId};
use crate::storage::{read_json_optional, write_json};

/// In-memory catalog of items and users
#[derive(Debug, Default)]
pub struct Catalog {
    items: HashMap<ItemId, Item>,
    users: HashMap<UserId, User>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Loading / saving
    // ------------------------------------------------------------------

    /// Load items and users from their JSON files.
    ///
    /// A missing file is logged and skipped. A failure parsing the items
    /// file (including an unknown `"type"` tag) aborts the rest of the
    /// load; items parsed into memory before a later users failure stay
    /// loaded. Failures are reported to stderr, never returned.
    pub fn load_data(&mut self, items_path: &Path, users_path: &Path) {
        match read_json_optional::<Vec<Item>, _>(items_path) {
            Ok(Some(items)) => {
                for item in items {
                    self.items.insert(item.id.clone(), item);
                }
            }
            Ok(None) => eprintln!("Items file not found!"),
            Err(e) => {
                eprintln!("Error loading data: {}", e);
                return;
            }
        }

        match read_json_optional::<Vec<User>, _>(users_path) {
            Ok(Some(users)) => {
                for user in users {
                    self.users.insert(user.id.clone(), user);
                }
            }
            Ok(None) => eprintln!("Users file not found!"),
            Err(e) => eprintln!("Error loading data: {}", e),
        }
    }

    /// Write current in-memory state to disk, replacing prior file contents.
    ///
    /// Items are written first, then users. A failure is reported to stderr
    /// and not retried; an items failure skips the users write.
    pub fn save_data(&self, items_path: &Path, users_path: &Path) {
        let items: Vec<&Item> = self.items.values().collect();
        if let Err(e) = write_json(items_path, &items) {
            eprintln!("Error saving data: {}", e);
            return;
        }

        let users: Vec<&User> = self.users.values().collect();
        if let Err(e) = write_json(users_path, &users) {
            eprintln!("Error saving data: {}", e);
        }
    }

    // ------------------------------------------------------------------
    // CRUD operations
    // ------------------------------------------------------------------

    /// Insert an item, overwriting any existing entry with the same id.
    ///
    /// No uniqueness check happens here; callers generate fresh identifiers.
    pub fn add_item(&mut self, item: Item) {
        self.items.insert(item.id.clone(), item);
    }

    /// Insert a user, overwriting any existing entry with the same id.
    pub fn add_user(&mut self, user: User) {
        self.users.insert(user.id.clone(), user);
    }

    /// Remove an item. Returns false if the id was unknown.
    ///
    /// No cascade: a user who borrowed the item keeps the stale id in their
    /// borrowed list. Preserved behavior, not a bug to fix here.
    pub fn delete_item(&mut self, item_id: &ItemId) -> bool {
        self.items.remove(item_id).is_some()
    }

    /// Remove a user. Returns false if the id was unknown.
    ///
    /// No cascade: items the user still held stay marked unavailable.
    pub fn delete_user(&mut self, user_id: &UserId) -> bool {
        self.users.remove(user_id).is_some()
    }

    // ------------------------------------------------------------------
    // Circulation
    // ------------------------------------------------------------------

    /// Check an item out to a user.
    ///
    /// Marks the item unavailable and records it in the user's borrowed
    /// list. There is no cap on how many items a user may hold.
    pub fn borrow_item(&mut self, user_id: &UserId, item_id: &ItemId) -> CatalogResult<()> {
        if !self.users.contains_key(user_id) {
            return Err(CatalogError::user_not_found(user_id.as_str()));
        }

        let item = self
            .items
            .get_mut(item_id)
            .ok_or_else(|| CatalogError::item_not_found(item_id.as_str()))?;

        if !item.available {
            return Err(CatalogError::item_not_available(item_id.as_str()));
        }

        item.available = false;
        if let Some(user) = self.users.get_mut(user_id) {
            user.record_borrow(item_id.clone());
        }

        Ok(())
    }

    /// Return an item.
    ///
    /// Sets the item available unconditionally, even if this user never
    /// borrowed it, and drops the id from the user's borrowed list if
    /// present. Returning twice in a row is safe.
    pub fn return_item(&mut self, user_id: &UserId, item_id: &ItemId) -> CatalogResult<()> {
        if !self.users.contains_key(user_id) {
            return Err(CatalogError::user_not_found(user_id.as_str()));
        }

        let item = self
            .items
            .get_mut(item_id)
            .ok_or_else(|| CatalogError::item_not_found(item_id.as_str()))?;

        item.available = true;
        if let Some(user) = self.users.get_mut(user_id) {
            user.record_return(item_id);
        }

        Ok(())
    }

    /// Place a reservation claim on an item for a user.
    ///
    /// Fails if the item kind does not support reservation or the item is
    /// already reserved. Reservation is independent of availability and has
    /// no release operation.
    pub fn reserve_item(&mut self, user_id: &UserId, item_id: &ItemId) -> CatalogResult<()> {
        if !self.users.contains_key(user_id) {
            return Err(CatalogError::user_not_found(user_id.as_str()));
        }

        let item = self
            .items
            .get_mut(item_id)
            .ok_or_else(|| CatalogError::item_not_found(item_id.as_str()))?;

        if !item.kind.supports_reservation() {
            return Err(CatalogError::not_reservable());
        }

        item.reserve(user_id.clone())
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Rendered info for items whose title contains the keyword,
    /// case-insensitively. Map-iteration order, not sorted.
    pub fn search_items(&self, keyword: &str) -> Vec<String> {
        let keyword = keyword.to_lowercase();
        self.items
            .values()
            .filter(|item| item.title.to_lowercase().contains(&keyword))
            .map(Item::display_info)
            .collect()
    }

    /// Rendered info for every item. Map-iteration order, not sorted.
    pub fn get_all_items(&self) -> Vec<String> {
        self.items.values().map(Item::display_info).collect()
    }

    /// Rendered info for every user. Map-iteration order, not sorted.
    pub fn get_all_users(&self) -> Vec<String> {
        self.users.values().map(User::display_info).collect()
    }

    /// Look up an item by id
    pub fn item(&self, item_id: &ItemId) -> Option<&Item> {
        self.items.get(item_id)
    }

    /// Look up a user by id
    pub fn user(&self, user_id: &UserId) -> Option<&User> {
        self.users.get(user_id)
    }

    /// Iterate over all items (read-only)
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Iterate over all users (read-only)
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    /// Number of items in the catalog
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Number of registered users
    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

//! Custom error types for stacks
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// An item identifier was not present in the catalog
    #[error("Item with ID {0} was not found.")]
    ItemNotFound(String),

    /// A user identifier was not present in the catalog
    #[error("User with ID {0} was not found.")]
    UserNotFound(String),

    /// The item is already checked out
    #[error("Item with ID {0} is not available.")]
    ItemNotAvailable(String),

    /// Reservation failures: the item kind does not support reservation,
    /// or the item is already reserved
    #[error("{0}")]
    Reservation(String),

    /// Validation errors for user-supplied input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage errors (file read/write, parse failures)
    #[error("Storage error: {0}")]
    Storage(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    /// Create an "item not found" error
    pub fn item_not_found(id: impl Into<String>) -> Self {
        Self::ItemNotFound(id.into())
    }

    /// Create a "user not found" error
    pub fn user_not_found(id: impl Into<String>) -> Self {
        Self::UserNotFound(id.into())
    }

    /// Create an "item not available" error
    pub fn item_not_available(id: impl Into<String>) -> Self {
        Self::ItemNotAvailable(id.into())
    }

    /// Reservation error for item kinds without reservation support
    pub fn not_reservable() -> Self {
        Self::Reservation("Item does not support reservation.".into())
    }

    /// Reservation error for an item that already carries a claim
    pub fn already_reserved() -> Self {
        Self::Reservation("Item already reserved.".into())
    }

    /// Check if this is a "not found" error (item or user)
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ItemNotFound(_) | Self::UserNotFound(_))
    }

    /// Check if this is a reservation error
    pub fn is_reservation(&self) -> bool {
        matches!(self, Self::Reservation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

//! stacks - command-line catalog and circulation manager for a small library
//!
//! This library provides the core functionality for the stacks CLI. It tracks
//! catalog items (books, magazines, DVDs) and registered users, enforces the
//! borrowing and reservation rules, and persists everything to two flat JSON
//! files between runs.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (items, users, typed identifiers)
//! - `catalog`: The in-memory catalog and all circulation operations
//! - `storage`: JSON flat-file persistence
//! - `audit`: Append-only circulation log
//! - `display`: Terminal output formatting
//! - `cli`: CLI command handlers
//!
//! # Example
//!
//! ```rust
//! use stacks::catalog::Catalog;
//! use stacks::models::{Item, ItemKind, User};
//!
//! let mut catalog = Catalog::new();
//! catalog.add_item(Item::new("b1", "Dune", "Herbert", ItemKind::Book {
//!     genre: "SciFi".into(),
//! }));
//! catalog.add_user(User::new("u1", "Ann", "a@x.com"));
//! catalog.borrow_item(&"u1".into(), &"b1".into()).unwrap();
//! ```

pub mod audit;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod storage;

pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};

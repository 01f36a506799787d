//! Core data models for stacks
//!
//! Items (books, magazines, DVDs), users, and their typed identifiers.

pub mod ids;
pub mod item;
pub mod user;

pub use ids::{ItemId, UserId};
pub use item::{Item, ItemKind};
pub use user::User;

//! Terminal output formatting

pub mod items;
pub mod users;

pub use items::{format_item_details, format_item_list};
pub use users::format_user_list;

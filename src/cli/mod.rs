//! CLI command handlers
//!
//! Bridges clap argument parsing with the catalog. Handlers return whether
//! they mutated the catalog so the caller knows to save.

pub mod circulation;
pub mod item;
pub mod user;

pub use circulation::{handle_borrow, handle_reserve, handle_return};
pub use item::{handle_item_command, ItemCommands};
pub use user::{handle_user_command, UserCommands};

use crate::audit::{AuditEntry, AuditLogger};

/// Append an entry to the circulation log, if logging is enabled.
///
/// Audit failures are reported and swallowed; they never fail the command.
pub(crate) fn record_audit(audit: Option<&AuditLogger>, entry: AuditEntry) {
    if let Some(logger) = audit {
        if let Err(e) = logger.log(&entry) {
            eprintln!("Warning: failed to write audit log: {}", e);
        }
    }
}

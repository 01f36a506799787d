//! Circulation audit log
//!
//! Append-only JSONL record of successful catalog mutations. Never fatal:
//! callers log write failures to stderr and continue.

pub mod entry;
pub mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;

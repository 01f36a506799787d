//! Circulation audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Operations recorded in the circulation log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Borrow,
    Return,
    Reserve,
    AddItem,
    RegisterUser,
    DeleteItem,
    DeleteUser,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Borrow => write!(f, "BORROW"),
            Operation::Return => write!(f, "RETURN"),
            Operation::Reserve => write!(f, "RESERVE"),
            Operation::AddItem => write!(f, "ADD-ITEM"),
            Operation::RegisterUser => write!(f, "REGISTER-USER"),
            Operation::DeleteItem => write!(f, "DELETE-ITEM"),
            Operation::DeleteUser => write!(f, "DELETE-USER"),
        }
    }
}

/// A single circulation log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Operation performed
    pub operation: Operation,

    /// User involved, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Item involved, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
}

impl AuditEntry {
    /// Create an entry timestamped now
    pub fn new(operation: Operation, user_id: Option<String>, item_id: Option<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            user_id,
            item_id,
        }
    }
}

impl std::fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.operation
        )?;
        if let Some(user_id) = &self.user_id {
            write!(f, " user={}", user_id)?;
        }
        if let Some(item_id) = &self.item_id {
            write!(f, " item={}", item_id)?;
        }
        Ok(())
    }
}

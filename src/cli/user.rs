//! User CLI commands

use clap::Subcommand;

use crate::audit::{AuditEntry, AuditLogger, Operation};
use crate::catalog::Catalog;
use crate::display::format_user_list;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{User, UserId};

use super::record_audit;

/// User subcommands
#[derive(Subcommand)]
pub enum UserCommands {
    /// Register a new user
    Register {
        /// Display name
        name: String,
        /// Contact email
        email: String,
    },
    /// List all registered users
    List,
    /// Delete a user
    Delete {
        /// User ID
        id: String,
    },
}

/// Handle a user command. Returns true if the catalog was mutated.
pub fn handle_user_command(
    catalog: &mut Catalog,
    audit: Option<&AuditLogger>,
    cmd: UserCommands,
) -> CatalogResult<bool> {
    match cmd {
        UserCommands::Register { name, email } => {
            let name = name.trim();
            if name.is_empty() {
                return Err(CatalogError::Validation("Name cannot be empty".into()));
            }
            if email.trim().is_empty() {
                return Err(CatalogError::Validation("Email cannot be empty".into()));
            }

            let user = User::new(UserId::new(), name, email.trim());
            let id = user.id.clone();
            catalog.add_user(user);

            record_audit(
                audit,
                AuditEntry::new(Operation::RegisterUser, Some(id.to_string()), None),
            );

            println!("User registered with ID: {}", id);
            Ok(true)
        }

        UserCommands::List => {
            let mut users: Vec<_> = catalog.users().collect();
            users.sort_by(|a, b| a.name.cmp(&b.name));
            print!("{}", format_user_list(&users));
            Ok(false)
        }

        UserCommands::Delete { id } => {
            let user_id = UserId::from(id.as_str());
            if !catalog.delete_user(&user_id) {
                return Err(CatalogError::user_not_found(&id));
            }

            record_audit(
                audit,
                AuditEntry::new(Operation::DeleteUser, Some(id.clone()), None),
            );

            println!("User {} deleted successfully.", id);
            Ok(true)
        }
    }
}

//! Borrow / return / reserve CLI commands

use crate::audit::{AuditEntry, AuditLogger, Operation};
use crate::catalog::Catalog;
use crate::error::CatalogResult;
use crate::models::{ItemId, UserId};

use super::record_audit;

/// Check an item out to a user. Returns true if the catalog was mutated.
pub fn handle_borrow(
    catalog: &mut Catalog,
    audit: Option<&AuditLogger>,
    user_id: &str,
    item_id: &str,
) -> CatalogResult<bool> {
    catalog.borrow_item(&UserId::from(user_id), &ItemId::from(item_id))?;

    record_audit(
        audit,
        AuditEntry::new(
            Operation::Borrow,
            Some(user_id.to_string()),
            Some(item_id.to_string()),
        ),
    );

    println!("Item borrowed successfully.");
    Ok(true)
}

/// Return an item. Returns true if the catalog was mutated.
pub fn handle_return(
    catalog: &mut Catalog,
    audit: Option<&AuditLogger>,
    user_id: &str,
    item_id: &str,
) -> CatalogResult<bool> {
    catalog.return_item(&UserId::from(user_id), &ItemId::from(item_id))?;

    record_audit(
        audit,
        AuditEntry::new(
            Operation::Return,
            Some(user_id.to_string()),
            Some(item_id.to_string()),
        ),
    );

    println!("Item returned successfully.");
    Ok(true)
}

/// Place a reservation. Returns true if the catalog was mutated.
pub fn handle_reserve(
    catalog: &mut Catalog,
    audit: Option<&AuditLogger>,
    user_id: &str,
    item_id: &str,
) -> CatalogResult<bool> {
    catalog.reserve_item(&UserId::from(user_id), &ItemId::from(item_id))?;

    record_audit(
        audit,
        AuditEntry::new(
            Operation::Reserve,
            Some(user_id.to_string()),
            Some(item_id.to_string()),
        ),
    );

    println!("Item reserved successfully.");
    Ok(true)
}

//! Item CLI commands

use clap::Subcommand;

use crate::audit::{AuditEntry, AuditLogger, Operation};
use crate::catalog::Catalog;
use crate::display::format_item_details;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{Item, ItemId, ItemKind};

use super::record_audit;

/// Item subcommands
#[derive(Subcommand)]
pub enum ItemCommands {
    /// Add a new item to the catalog
    Add {
        /// Item kind (book, magazine, dvd)
        kind: String,
        /// Title
        title: String,
        /// Author, editor, or director
        author: String,
        /// Genre (books only)
        #[arg(short, long)]
        genre: Option<String>,
        /// Issue number (magazines only)
        #[arg(short, long)]
        issue: Option<u32>,
        /// Runtime in minutes (DVDs only)
        #[arg(short, long)]
        duration: Option<u32>,
    },
    /// Show full details of an item
    Show {
        /// Item ID
        id: String,
    },
    /// Delete an item from the catalog
    Delete {
        /// Item ID
        id: String,
    },
}

/// Handle an item command. Returns true if the catalog was mutated.
pub fn handle_item_command(
    catalog: &mut Catalog,
    audit: Option<&AuditLogger>,
    cmd: ItemCommands,
) -> CatalogResult<bool> {
    match cmd {
        ItemCommands::Add {
            kind,
            title,
            author,
            genre,
            issue,
            duration,
        } => {
            let kind = build_kind(&kind, genre, issue, duration)?;

            let item = Item::new(ItemId::new(), title, author, kind);
            item.validate()?;

            let id = item.id.clone();
            let kind_name = item.kind.name();
            catalog.add_item(item);

            record_audit(
                audit,
                AuditEntry::new(Operation::AddItem, None, Some(id.to_string())),
            );

            println!("{} added successfully with ID: {}", kind_name, id);
            Ok(true)
        }

        ItemCommands::Show { id } => {
            let item_id = ItemId::from(id.as_str());
            let item = catalog
                .item(&item_id)
                .ok_or_else(|| CatalogError::item_not_found(&id))?;

            print!("{}", format_item_details(item));
            Ok(false)
        }

        ItemCommands::Delete { id } => {
            let item_id = ItemId::from(id.as_str());
            if !catalog.delete_item(&item_id) {
                return Err(CatalogError::item_not_found(&id));
            }

            record_audit(
                audit,
                AuditEntry::new(Operation::DeleteItem, None, Some(id.clone())),
            );

            println!("Item {} deleted successfully.", id);
            Ok(true)
        }
    }
}

/// Build an ItemKind from the CLI arguments, checking that the
/// variant-specific flag matches the requested kind.
fn build_kind(
    kind: &str,
    genre: Option<String>,
    issue: Option<u32>,
    duration: Option<u32>,
) -> CatalogResult<ItemKind> {
    let kind_name = ItemKind::parse_name(kind).ok_or_else(|| {
        CatalogError::Validation(format!(
            "Invalid item kind: '{}'. Valid kinds: book, magazine, dvd",
            kind
        ))
    })?;

    match kind_name {
        "Book" => {
            let genre = genre
                .ok_or_else(|| CatalogError::Validation("Books require --genre".into()))?;
            Ok(ItemKind::Book { genre })
        }
        "Magazine" => {
            let issue = issue
                .ok_or_else(|| CatalogError::Validation("Magazines require --issue".into()))?;
            Ok(ItemKind::Magazine { issue })
        }
        "DVD" => {
            let duration = duration
                .ok_or_else(|| CatalogError::Validation("DVDs require --duration".into()))?;
            Ok(ItemKind::Dvd { duration })
        }
        _ => unreachable!("parse_name returns only known kinds"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_kind_book() {
        let kind = build_kind("book", Some("SciFi".into()), None, None).unwrap();
        assert_eq!(
            kind,
            ItemKind::Book {
                genre: "SciFi".into()
            }
        );
    }

    #[test]
    fn test_build_kind_requires_variant_field() {
        let err = build_kind("book", None, None, None).unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));

        let err = build_kind("magazine", None, None, None).unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));

        let err = build_kind("dvd", None, None, None).unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
    }

    #[test]
    fn test_build_kind_unknown() {
        let err = build_kind("cassette", None, None, None).unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
    }

    #[test]
    fn test_add_and_delete_mutate() {
        let mut catalog = Catalog::new();

        let mutated = handle_item_command(
            &mut catalog,
            None,
            ItemCommands::Add {
                kind: "dvd".into(),
                title: "Alien".into(),
                author: "Scott".into(),
                genre: None,
                issue: None,
                duration: Some(117),
            },
        )
        .unwrap();
        assert!(mutated);
        assert_eq!(catalog.item_count(), 1);

        let id = catalog.items().next().unwrap().id.to_string();
        let mutated =
            handle_item_command(&mut catalog, None, ItemCommands::Delete { id }).unwrap();
        assert!(mutated);
        assert_eq!(catalog.item_count(), 0);
    }

    #[test]
    fn test_delete_unknown_id_fails() {
        let mut catalog = Catalog::new();
        let err = handle_item_command(
            &mut catalog,
            None,
            ItemCommands::Delete { id: "ghost".into() },
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::ItemNotFound(_)));
    }
}

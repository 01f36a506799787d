use anyhow::Result;
use clap::{Parser, Subcommand};

use stacks::audit::AuditLogger;
use stacks::catalog::Catalog;
use stacks::cli::{
    handle_borrow, handle_item_command, handle_reserve, handle_return, handle_user_command,
    ItemCommands, UserCommands,
};
use stacks::config::{StacksPaths, Settings};
use stacks::display::format_item_list;
use stacks::error::CatalogResult;

#[derive(Parser)]
#[command(
    name = "stacks",
    version,
    about = "Command-line catalog and circulation manager for a small library",
    long_about = "stacks tracks a small library's items (books, magazines, DVDs) and \
                  users, handles borrowing, returning, and reserving, and keeps its \
                  state in two flat JSON files between runs."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all items in the catalog
    List {
        /// One line per item instead of a table
        #[arg(long)]
        plain: bool,
    },

    /// Search items by title keyword (case-insensitive substring)
    Search {
        /// Keyword to look for
        keyword: String,
    },

    /// Item management commands
    #[command(subcommand)]
    Item(ItemCommands),

    /// User management commands
    #[command(subcommand)]
    User(UserCommands),

    /// Borrow an item
    Borrow {
        /// User ID
        user_id: String,
        /// Item ID
        item_id: String,
    },

    /// Return an item
    Return {
        /// User ID
        user_id: String,
        /// Item ID
        item_id: String,
    },

    /// Reserve an item
    Reserve {
        /// User ID
        user_id: String,
        /// Item ID
        item_id: String,
    },

    /// Show recent circulation log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = StacksPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let audit_logger = settings
        .audit_enabled
        .then(|| AuditLogger::new(paths.audit_log()));

    let mut catalog = Catalog::new();
    catalog.load_data(&paths.items_file(), &paths.users_file());

    // Command failures are reported to the console and never change the exit
    // code; only startup problems above are fatal.
    match dispatch(&mut catalog, audit_logger.as_ref(), &paths, &settings, cli.command) {
        Ok(true) => catalog.save_data(&paths.items_file(), &paths.users_file()),
        Ok(false) => {}
        Err(e) => eprintln!("Error: {}", e),
    }

    Ok(())
}

/// Run a single command. Returns true if the catalog was mutated and must be
/// saved.
fn dispatch(
    catalog: &mut Catalog,
    audit: Option<&AuditLogger>,
    paths: &StacksPaths,
    settings: &Settings,
    command: Option<Commands>,
) -> CatalogResult<bool> {
    match command {
        Some(Commands::List { plain }) => {
            if plain {
                for info in catalog.get_all_items() {
                    println!("{}", info);
                }
            } else {
                let mut items: Vec<_> = catalog.items().collect();
                items.sort_by(|a, b| a.title.cmp(&b.title));
                print!("{}", format_item_list(&items));
            }
            Ok(false)
        }

        Some(Commands::Search { keyword }) => {
            let results = catalog.search_items(&keyword);
            if results.is_empty() {
                println!("No items matched '{}'.", keyword);
            } else {
                for info in results {
                    println!("{}", info);
                }
            }
            Ok(false)
        }

        Some(Commands::Item(cmd)) => handle_item_command(catalog, audit, cmd),

        Some(Commands::User(cmd)) => handle_user_command(catalog, audit, cmd),

        Some(Commands::Borrow { user_id, item_id }) => {
            handle_borrow(catalog, audit, &user_id, &item_id)
        }

        Some(Commands::Return { user_id, item_id }) => {
            handle_return(catalog, audit, &user_id, &item_id)
        }

        Some(Commands::Reserve { user_id, item_id }) => {
            handle_reserve(catalog, audit, &user_id, &item_id)
        }

        Some(Commands::Audit { limit }) => {
            let logger = AuditLogger::new(paths.audit_log());
            let entries = logger.read_recent(limit)?;
            if entries.is_empty() {
                println!("No circulation log entries.");
            } else {
                for entry in entries {
                    println!("{}", entry);
                }
            }
            Ok(false)
        }

        Some(Commands::Config) => {
            println!("stacks configuration");
            println!("====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Items file:     {}", paths.items_file().display());
            println!("Users file:     {}", paths.users_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Schema version: {}", settings.schema_version);
            println!("  Audit enabled:  {}", settings.audit_enabled);
            Ok(false)
        }

        None => {
            println!("stacks - catalog and circulation manager");
            println!();
            println!("Run 'stacks --help' for usage information.");
            Ok(false)
        }
    }
}

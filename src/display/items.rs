//! Item display formatting
//!
//! Formats items for terminal output in table and detail views.

use crate::models::{Item, ItemKind};

/// Format a list of items as a fixed-width table
pub fn format_item_list(items: &[&Item]) -> String {
    if items.is_empty() {
        return "No items found.\n".to_string();
    }

    let title_width = items
        .iter()
        .map(|i| i.title.len())
        .max()
        .unwrap_or(5)
        .max(5);

    let author_width = items
        .iter()
        .map(|i| i.author.len())
        .max()
        .unwrap_or(6)
        .max(6);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<title_width$}  {:<8}  {:<author_width$}  {:<10}  {}\n",
        "Title",
        "Kind",
        "Author",
        "Status",
        "ID",
        title_width = title_width,
        author_width = author_width,
    ));

    output.push_str(&format!(
        "{:-<title_width$}  {:-<8}  {:-<author_width$}  {:-<10}  {:-<36}\n",
        "",
        "",
        "",
        "",
        "",
        title_width = title_width,
        author_width = author_width,
    ));

    for item in items {
        let status = match (item.available, item.reserved_by.is_some()) {
            (true, false) => "Available".to_string(),
            (true, true) => "Reserved".to_string(),
            (false, false) => "Borrowed".to_string(),
            (false, true) => "Borrowed*".to_string(),
        };

        output.push_str(&format!(
            "{:<title_width$}  {:<8}  {:<author_width$}  {:<10}  {}\n",
            item.title,
            item.kind.name(),
            item.author,
            status,
            item.id,
            title_width = title_width,
            author_width = author_width,
        ));
    }

    output
}

/// Format full details of a single item
pub fn format_item_details(item: &Item) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", item.display_info()));
    output.push_str(&format!("  ID:     {}\n", item.id));
    output.push_str(&format!("  Kind:   {}\n", item.kind.name()));

    match &item.kind {
        ItemKind::Book { genre } => output.push_str(&format!("  Genre:  {}\n", genre)),
        ItemKind::Magazine { issue } => output.push_str(&format!("  Issue:  {}\n", issue)),
        ItemKind::Dvd { duration } => {
            output.push_str(&format!("  Length: {} min\n", duration))
        }
    }

    output.push_str(&format!(
        "  Status: {}\n",
        if item.available { "Available" } else { "Borrowed" }
    ));

    if let Some(reserved_by) = &item.reserved_by {
        output.push_str(&format!("  Reserved by: {}\n", reserved_by));
    }

    output
}

//! User display formatting

use crate::models::User;

/// Format a list of users as a fixed-width table
pub fn format_user_list(users: &[&User]) -> String {
    if users.is_empty() {
        return "No users found.\n".to_string();
    }

    let name_width = users.iter().map(|u| u.name.len()).max().unwrap_or(4).max(4);
    let email_width = users
        .iter()
        .map(|u| u.email.len())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<email_width$}  {:<8}  {}\n",
        "Name",
        "Email",
        "Borrowed",
        "ID",
        name_width = name_width,
        email_width = email_width,
    ));

    output.push_str(&format!(
        "{:-<name_width$}  {:-<email_width$}  {:-<8}  {:-<36}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
        email_width = email_width,
    ));

    for user in users {
        output.push_str(&format!(
            "{:<name_width$}  {:<email_width$}  {:<8}  {}\n",
            user.name,
            user.email,
            user.borrowed_items.len(),
            user.id,
            name_width = name_width,
            email_width = email_width,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemId;

    #[test]
    fn test_empty_list() {
        assert_eq!(format_user_list(&[]), "No users found.\n");
    }

    #[test]
    fn test_list_contains_fields() {
        let mut user = User::new("u1", "Ann", "a@x.com");
        user.record_borrow(ItemId::from("b1"));

        let output = format_user_list(&[&user]);
        assert!(output.contains("Ann"));
        assert!(output.contains("a@x.com"));
        assert!(output.contains("u1"));
    }
}

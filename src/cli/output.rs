//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;
use comfy_table::{presets::UTF8_BORDERS_ONLY, Table};

use crate::domain::Contact;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Aligned table of contacts with a leading row index.
pub fn contacts_table(contacts: &[Contact]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(["#", "ID", "NAME", "EMAIL", "PHONE"]);
    for (index, contact) in contacts.iter().enumerate() {
        table.add_row([
            index.to_string().as_str(),
            contact.id.as_str(),
            contact.name.as_str(),
            contact.email.as_str(),
            contact.phone.as_str(),
        ]);
    }
    table
}

/// Structured dump of a single lookup result: pretty JSON, or `null`.
pub fn contact_dump(contact: Option<&Contact>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&contact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewContact;

    fn ann() -> Contact {
        NewContact::new("Ann", "ann@x.com", "111").into_contact("1".into())
    }

    #[test]
    fn given_none_when_dumping_then_prints_null() {
        assert_eq!(contact_dump(None).unwrap(), "null");
    }

    #[test]
    fn given_contact_when_dumping_then_prints_pretty_object() {
        let dump = contact_dump(Some(&ann())).unwrap();
        assert_eq!(
            dump,
            "{\n  \"id\": \"1\",\n  \"name\": \"Ann\",\n  \"email\": \"ann@x.com\",\n  \"phone\": \"111\"\n}"
        );
    }

    #[test]
    fn given_contacts_when_rendering_table_then_one_row_per_contact() {
        let bo = NewContact::new("Bo", "bo@x.com", "222").into_contact("2".into());
        let table = contacts_table(&[ann(), bo]);
        assert_eq!(table.row_iter().count(), 2);

        let rendered = table.to_string();
        assert!(rendered.contains("EMAIL"));
        assert!(rendered.contains("ann@x.com"));
        assert!(rendered.contains("bo@x.com"));
    }

    #[test]
    fn given_no_contacts_when_rendering_table_then_only_header() {
        let table = contacts_table(&[]);
        assert_eq!(table.row_iter().count(), 0);
        assert!(table.to_string().contains("NAME"));
    }
}

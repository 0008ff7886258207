pub mod command;
pub mod run;

pub use run::run_app;

use crate::domain::Contact;

// OUTPUT FUNCTIONS
pub fn display_contact(contact: &Contact) -> String {
    format!(
        "Name: {}\n\
        Email: {}\n\
        Phone: {}",
        contact.name, contact.email, contact.phone
    )
}

pub fn list_row(position: usize, contact: &Contact) -> String {
    format!(
        "{position:>3}. {:<20} {:^30} {:15}",
        contact.name, contact.email, contact.phone
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_contact_for_terminal() {
        let contact = Contact::new(
            "Seli".to_string(),
            "seli@gmail.com".to_string(),
            "085712345678".to_string(),
        );

        assert_eq!(
            display_contact(&contact),
            "Name: Seli\nEmail: seli@gmail.com\nPhone: 085712345678"
        );
        assert!(list_row(1, &contact).starts_with("  1. Seli "));
    }
}

//! Demo contacts for trying the address book out.
//!
//! Loaded at startup only when `ADDRESS_BOOK_SEED_DEMO` is set; tests use
//! the same data.

use crate::domain::ValidationError;
use crate::models::{AddressBook, ContactRecord};

/// (name, phones, birthday)
const DEMO_CONTACTS: &[(&str, &[&str], Option<&str>)] = &[
    ("John", &["1234567855", "5555555555"], None),
    ("Jane", &["9876543210"], Some("23.07.1989")),
    ("Pane", &["9876543210"], Some("07.08.1989")),
    ("Cane", &["9876543210"], Some("02.08.1989")),
    ("Dane", &["9876543210"], Some("03.08.1989")),
];

/// Build an address book holding the demo contacts, in a fixed order.
pub fn demo_book() -> Result<AddressBook, ValidationError> {
    let mut book = AddressBook::new();

    for (name, phones, birthday) in DEMO_CONTACTS {
        let mut record = ContactRecord::named(name)?;
        for phone in phones.iter() {
            record.add_phone(phone)?;
        }
        if let Some(birthday) = birthday {
            record.add_birthday(birthday)?;
        }
        book.add_record(record);
    }

    Ok(book)
}

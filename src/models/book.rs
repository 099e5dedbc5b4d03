//! The address book: every contact record, keyed by name.

use super::record::ContactRecord;
use std::collections::HashMap;

/// Result of inserting a record into an [`AddressBook`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The record was inserted.
    Added,
    /// A record with the same name was already present and was left as is.
    AlreadyExists,
}

/// In-memory mapping from contact name to record.
///
/// Names are unique. Iteration follows insertion order so listings are
/// stable between runs with the same input.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, ContactRecord>,
    order: Vec<String>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` unless its name is taken. Never overwrites.
    pub fn add_record(&mut self, record: ContactRecord) -> AddOutcome {
        let key = record.name.as_str().to_string();
        if self.records.contains_key(&key) {
            return AddOutcome::AlreadyExists;
        }

        self.order.push(key.clone());
        self.records.insert(key, record);
        AddOutcome::Added
    }

    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.get_mut(name)
    }

    /// Remove the record called `name`, returning it if it existed.
    pub fn delete(&mut self, name: &str) -> Option<ContactRecord> {
        let removed = self.records.remove(name)?;
        self.order.retain(|key| key != name);
        Some(removed)
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

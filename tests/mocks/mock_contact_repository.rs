use address_book::error::{BookError, BookResult};
use address_book::models::{AddOutcome, ContactRecord};
use address_book::repositories::ContactRepository;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that can be
/// easily configured with test data and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    records: Arc<Mutex<Vec<ContactRecord>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    hide_on_get: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            hide_on_get: Arc::new(Mutex::new(false)),
        }
    }

    /// Add a record to the mock repository, bypassing call tracking.
    pub fn add_record(&self, record: ContactRecord) {
        self.records.lock().unwrap().push(record);
    }

    /// Make `get` report every contact as missing while `create` still sees
    /// them, simulating a contact added between lookup and insert.
    pub fn hide_records_on_get(&self) {
        *self.hide_on_get.lock().unwrap() = true;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.lock().unwrap().clear();
    }

    /// Snapshot of the stored records.
    pub fn records(&self) -> Vec<ContactRecord> {
        self.records.lock().unwrap().clone()
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn get(&self, name: &str) -> BookResult<Option<ContactRecord>> {
        self.track_call("get");

        if *self.hide_on_get.lock().unwrap() {
            return Ok(None);
        }

        let records = self.records.lock().unwrap();
        Ok(records.iter().find(|r| r.name.as_str() == name).cloned())
    }

    async fn list(&self) -> BookResult<Vec<ContactRecord>> {
        self.track_call("list");
        Ok(self.records.lock().unwrap().clone())
    }

    async fn create(&self, record: ContactRecord) -> BookResult<AddOutcome> {
        self.track_call("create");

        let mut records = self.records.lock().unwrap();
        if records.iter().any(|r| r.name == record.name) {
            return Ok(AddOutcome::AlreadyExists);
        }

        records.push(record);
        Ok(AddOutcome::Added)
    }

    async fn update(&self, record: ContactRecord) -> BookResult<()> {
        self.track_call("update");

        let mut records = self.records.lock().unwrap();
        let slot = records
            .iter_mut()
            .find(|r| r.name == record.name)
            .ok_or_else(|| BookError::NotFound(record.name.to_string()))?;
        *slot = record;
        Ok(())
    }

    async fn delete(&self, name: &str) -> BookResult<bool> {
        self.track_call("delete");

        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.name.as_str() != name);
        Ok(records.len() != before)
    }

    async fn count(&self) -> BookResult<usize> {
        self.track_call("count");
        Ok(self.records.lock().unwrap().len())
    }
}

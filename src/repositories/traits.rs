use crate::error::BookResult;
use crate::models::{AddOutcome, ContactRecord};
use async_trait::async_trait;

/// Repository for managing contact records.
///
/// Provides abstraction over contact storage, enabling different
/// implementations (in-memory book, mock).
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Retrieve a single record by contact name.
    async fn get(&self, name: &str) -> BookResult<Option<ContactRecord>>;

    /// Retrieve every record in insertion order.
    async fn list(&self) -> BookResult<Vec<ContactRecord>>;

    /// Store a new record. Never overwrites an existing one.
    async fn create(&self, record: ContactRecord) -> BookResult<AddOutcome>;

    /// Replace the stored record that has the same name as `record`.
    ///
    /// Fails with `BookError::NotFound` if there is no such record.
    async fn update(&self, record: ContactRecord) -> BookResult<()>;

    /// Delete a record. Returns whether it existed.
    async fn delete(&self, name: &str) -> BookResult<bool>;

    /// Number of stored records.
    async fn count(&self) -> BookResult<usize>;
}

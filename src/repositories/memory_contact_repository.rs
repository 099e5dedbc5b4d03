use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{BookError, BookResult};
use crate::models::{AddOutcome, AddressBook, ContactRecord};
use crate::repositories::traits::ContactRepository;

/// Contact repository backed by an in-memory [`AddressBook`].
///
/// The book lives for the session only. Cloning the repository shares
/// the same book.
#[derive(Clone, Default)]
pub struct MemoryContactRepository {
    book: Arc<RwLock<AddressBook>>,
}

impl MemoryContactRepository {
    /// Create a repository over an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository over an existing book.
    pub fn with_book(book: AddressBook) -> Self {
        Self {
            book: Arc::new(RwLock::new(book)),
        }
    }
}

#[async_trait]
impl ContactRepository for MemoryContactRepository {
    async fn get(&self, name: &str) -> BookResult<Option<ContactRecord>> {
        let book = self.book.read().await;
        Ok(book.find(name).cloned())
    }

    async fn list(&self) -> BookResult<Vec<ContactRecord>> {
        let book = self.book.read().await;
        Ok(book.iter().cloned().collect())
    }

    async fn create(&self, record: ContactRecord) -> BookResult<AddOutcome> {
        let name = record.name.clone();
        let outcome = self.book.write().await.add_record(record);
        tracing::debug!(name = %name, outcome = ?outcome, "Create contact record");
        Ok(outcome)
    }

    async fn update(&self, record: ContactRecord) -> BookResult<()> {
        let mut book = self.book.write().await;
        let slot = book
            .find_mut(record.name.as_str())
            .ok_or_else(|| BookError::NotFound(record.name.to_string()))?;
        tracing::debug!(name = %record.name, "Update contact record");
        *slot = record;
        Ok(())
    }

    async fn delete(&self, name: &str) -> BookResult<bool> {
        let removed = self.book.write().await.delete(name).is_some();
        tracing::debug!(name, removed, "Delete contact record");
        Ok(removed)
    }

    async fn count(&self) -> BookResult<usize> {
        Ok(self.book.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> ContactRecord {
        ContactRecord::named(name).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = MemoryContactRepository::new();
        assert_eq!(repo.create(record("John")).await.unwrap(), AddOutcome::Added);

        let found = repo.get("John").await.unwrap();
        assert_eq!(found.unwrap().name.as_str(), "John");
        assert!(repo.get("Jane").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_duplicate_reports_conflict() {
        let repo = MemoryContactRepository::new();
        repo.create(record("John")).await.unwrap();

        let outcome = repo.create(record("John")).await.unwrap();

        assert_eq!(outcome, AddOutcome::AlreadyExists);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_replaces_record() {
        let repo = MemoryContactRepository::new();
        repo.create(record("John")).await.unwrap();

        let mut changed = record("John");
        changed.add_phone("1234567855").unwrap();
        repo.update(changed).await.unwrap();

        let found = repo.get("John").await.unwrap().unwrap();
        assert_eq!(found.phones_display(), "1234567855");
    }

    #[tokio::test]
    async fn test_update_missing_fails() {
        let repo = MemoryContactRepository::new();
        let result = repo.update(record("Ghost")).await;
        assert_eq!(result, Err(BookError::NotFound("Ghost".to_string())));
    }

    #[tokio::test]
    async fn test_delete_and_list() {
        let repo = MemoryContactRepository::new();
        repo.create(record("John")).await.unwrap();
        repo.create(record("Jane")).await.unwrap();

        assert!(repo.delete("John").await.unwrap());
        assert!(!repo.delete("John").await.unwrap());

        let names: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name.into_inner())
            .collect();
        assert_eq!(names, vec!["Jane".to_string()]);
    }

    #[tokio::test]
    async fn test_clones_share_book() {
        let repo = MemoryContactRepository::new();
        let other = repo.clone();
        repo.create(record("John")).await.unwrap();
        assert_eq!(other.count().await.unwrap(), 1);
    }
}

//! Contact service layer.
//!
//! Business logic behind every address book command. Validation happens
//! here, before the repository is touched, so a rejected command never
//! leaves a half-updated contact behind.

use crate::domain::ContactName;
use crate::error::{BookError, BookResult};
use crate::models::{AddOutcome, ContactRecord};
use crate::repositories::ContactRepository;
use crate::services::birthdays::{self, BirthdayPolicy, BirthdayReport};
use crate::services::clock::Clock;
use async_trait::async_trait;
use std::sync::Arc;

/// What `add_contact` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactChange {
    /// A new contact was created with the phone.
    Created,
    /// The phone was appended to an existing contact.
    Updated,
}

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Add a phone to `name`, creating the contact if needed.
    async fn add_contact(&self, name: &str, phone: &str) -> BookResult<ContactChange>;

    /// Replace the first phone of `name` matching `old_phone`.
    ///
    /// Returns `Ok(false)` if the contact has no such phone.
    async fn change_phone(&self, name: &str, old_phone: &str, new_phone: &str)
        -> BookResult<bool>;

    /// Get complete details for a contact.
    async fn get_contact(&self, name: &str) -> BookResult<ContactRecord>;

    /// Set or replace the birthday of `name`.
    async fn set_birthday(&self, name: &str, birthday: &str) -> BookResult<()>;

    /// Every contact in insertion order.
    async fn list_contacts(&self) -> BookResult<Vec<ContactRecord>>;

    /// Remove a contact.
    async fn delete_contact(&self, name: &str) -> BookResult<()>;

    /// Birthdays to celebrate within the next week, as of today.
    async fn upcoming_birthdays(&self) -> BookResult<BirthdayReport>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    contact_repo: Arc<dyn ContactRepository>,
    clock: Arc<dyn Clock>,
    policy: BirthdayPolicy,
}

impl ContactServiceImpl {
    /// Create a new contact service.
    pub fn new(
        contact_repo: Arc<dyn ContactRepository>,
        clock: Arc<dyn Clock>,
        policy: BirthdayPolicy,
    ) -> Self {
        Self {
            contact_repo,
            clock,
            policy,
        }
    }

    async fn require(&self, name: &ContactName) -> BookResult<ContactRecord> {
        self.contact_repo
            .get(name.as_str())
            .await?
            .ok_or_else(|| BookError::NotFound(name.to_string()))
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn add_contact(&self, name: &str, phone: &str) -> BookResult<ContactChange> {
        let name = ContactName::new(name)?;

        match self.contact_repo.get(name.as_str()).await? {
            Some(mut record) => {
                record.add_phone(phone)?;
                self.contact_repo.update(record).await?;
                tracing::debug!(name = %name, "Phone added to existing contact");
                Ok(ContactChange::Updated)
            }
            None => {
                let mut record = ContactRecord::new(name.clone());
                record.add_phone(phone)?;
                match self.contact_repo.create(record).await? {
                    AddOutcome::Added => {
                        tracing::info!(name = %name, "Contact created");
                        Ok(ContactChange::Created)
                    }
                    AddOutcome::AlreadyExists => Err(BookError::AlreadyExists(name.into_inner())),
                }
            }
        }
    }

    async fn change_phone(
        &self,
        name: &str,
        old_phone: &str,
        new_phone: &str,
    ) -> BookResult<bool> {
        let name = ContactName::new(name)?;
        let mut record = self.require(&name).await?;

        let replaced = record.edit_phone(old_phone, new_phone)?;
        if replaced {
            self.contact_repo.update(record).await?;
        } else {
            tracing::warn!(name = %name, old_phone, "No matching phone to change");
        }
        Ok(replaced)
    }

    async fn get_contact(&self, name: &str) -> BookResult<ContactRecord> {
        let name = ContactName::new(name)?;
        self.require(&name).await
    }

    async fn set_birthday(&self, name: &str, birthday: &str) -> BookResult<()> {
        let name = ContactName::new(name)?;
        let mut record = self.require(&name).await?;

        record.add_birthday(birthday)?;
        self.contact_repo.update(record).await
    }

    async fn list_contacts(&self) -> BookResult<Vec<ContactRecord>> {
        self.contact_repo.list().await
    }

    async fn delete_contact(&self, name: &str) -> BookResult<()> {
        let name = ContactName::new(name)?;
        if !self.contact_repo.delete(name.as_str()).await? {
            return Err(BookError::NotFound(name.into_inner()));
        }
        tracing::info!(name = %name, "Contact removed");
        Ok(())
    }

    async fn upcoming_birthdays(&self) -> BookResult<BirthdayReport> {
        let today = self.clock.today();
        let records = self.contact_repo.list().await?;
        let report = birthdays::upcoming(today, &records, self.policy);
        tracing::debug!(
            %today,
            policy = ?self.policy,
            found = report.entries().count(),
            "Computed upcoming birthdays"
        );
        Ok(report)
    }
}

//! Contact store service
//!
//! Implements list/get/add/remove over a single JSON document. Every call
//! re-reads the whole document; mutations rewrite the whole document.
//! There is no locking: two processes mutating the same store race with a
//! read-modify-write and the last writer wins.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{next_contact_id, Contact, NewContact};
use crate::infrastructure::traits::{Clock, ContactStorage};

/// Repository interface for contacts.
///
/// `Ok(None)` means "no contact with that id"; a broken store is always `Err`.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// All contacts in insertion order.
    async fn list(&self) -> ApplicationResult<Vec<Contact>>;

    /// First contact whose id equals `id`.
    async fn get_by_id(&self, id: &str) -> ApplicationResult<Option<Contact>>;

    /// Append a new contact and persist the collection.
    async fn add(&self, new: NewContact) -> ApplicationResult<Contact>;

    /// Remove the first contact whose id equals `id` and persist the collection.
    ///
    /// The store is left untouched when nothing matches.
    async fn remove(&self, id: &str) -> ApplicationResult<Option<Contact>>;
}

/// Encode a collection the way it is persisted: pretty JSON, 2-space indent.
pub fn encode_contacts(contacts: &[Contact]) -> ApplicationResult<String> {
    serde_json::to_string_pretty(contacts).map_err(ApplicationError::Encode)
}

/// Contact store backed by a pluggable [`ContactStorage`].
pub struct ContactService {
    storage: Arc<dyn ContactStorage>,
    clock: Arc<dyn Clock>,
}

impl ContactService {
    /// Create a new contact service.
    pub fn new(storage: Arc<dyn ContactStorage>, clock: Arc<dyn Clock>) -> Self {
        Self { storage, clock }
    }

    async fn load(&self) -> ApplicationResult<Vec<Contact>> {
        let location = self.storage.location();
        let document = self.storage.read().await.on_store_read(&location)?;
        let contacts: Vec<Contact> =
            serde_json::from_str(&document).map_err(|e| ApplicationError::StoreParse {
                location: location.clone(),
                source: e,
            })?;
        debug!("load: {} contacts from {}", contacts.len(), location);
        Ok(contacts)
    }

    async fn persist(&self, contacts: &[Contact]) -> ApplicationResult<()> {
        let location = self.storage.location();
        let document = encode_contacts(contacts)?;
        self.storage
            .write(&document)
            .await
            .on_store_write(&location)?;
        debug!("persist: {} contacts to {}", contacts.len(), location);
        Ok(())
    }
}

#[async_trait]
impl ContactRepository for ContactService {
    #[instrument(skip(self))]
    async fn list(&self) -> ApplicationResult<Vec<Contact>> {
        self.load().await
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> ApplicationResult<Option<Contact>> {
        let contacts = self.load().await?;
        Ok(contacts.into_iter().find(|c| c.id == id))
    }

    #[instrument(skip(self))]
    async fn add(&self, new: NewContact) -> ApplicationResult<Contact> {
        let mut contacts = self.load().await?;
        let id = next_contact_id(&contacts, self.clock.now_millis());
        let contact = new.into_contact(id);
        contacts.push(contact.clone());
        self.persist(&contacts).await?;
        debug!("add: created {}", contact.id);
        Ok(contact)
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: &str) -> ApplicationResult<Option<Contact>> {
        let mut contacts = self.load().await?;
        let Some(index) = contacts.iter().position(|c| c.id == id) else {
            debug!("remove: no contact with id {}", id);
            return Ok(None);
        };
        let removed = contacts.remove(index);
        self.persist(&contacts).await?;
        Ok(Some(removed))
    }
}

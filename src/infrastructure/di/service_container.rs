//! Service container for dependency injection
//!
//! Wires up the contact service with its storage and clock.

use std::sync::Arc;

use crate::application::services::ContactService;
use crate::config::Settings;
use crate::infrastructure::traits::{Clock, ContactStorage, JsonFileStorage, SystemClock};

/// Container holding settings and the I/O boundary implementations.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Contact document storage
    pub storage: Arc<dyn ContactStorage>,

    /// Time source for contact ids
    pub clock: Arc<dyn Clock>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        let storage = Arc::new(JsonFileStorage::new(settings.db_path.clone()));
        Self::with_deps(settings, storage, Arc::new(SystemClock))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        storage: Arc<dyn ContactStorage>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            storage,
            clock,
        }
    }

    /// Contact store over the configured storage.
    pub fn contact_service(&self) -> ContactService {
        ContactService::new(Arc::clone(&self.storage), Arc::clone(&self.clock))
    }
}

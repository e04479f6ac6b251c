//! Error conversion helpers for store I/O
//!
//! Provides extension traits for cleaner error handling with location context.

use std::io;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Tag an I/O error as a failed read of the store at `location`.
    ///
    /// # Example
    /// ```ignore
    /// storage.read().await.on_store_read(&storage.location())?;
    /// ```
    fn on_store_read(self, location: &str) -> ApplicationResult<T>;

    /// Tag an I/O error as a failed write of the store at `location`.
    fn on_store_write(self, location: &str) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn on_store_read(self, location: &str) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::StoreRead {
            location: location.to_string(),
            source: e,
        })
    }

    fn on_store_write(self, location: &str) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::StoreWrite {
            location: location.to_string(),
            source: e,
        })
    }
}

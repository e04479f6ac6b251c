//! I/O boundary traits for testability
//!
//! These traits abstract the contact document storage and the wall clock,
//! allowing the contact service to be tested without touching disk.

use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

/// Whole-document storage for the contact collection.
#[async_trait]
pub trait ContactStorage: Send + Sync {
    /// Read the full JSON document.
    async fn read(&self) -> io::Result<String>;

    /// Replace the full JSON document.
    async fn write(&self, document: &str) -> io::Result<()>;

    /// Human-readable location, used in error messages.
    fn location(&self) -> String;
}

/// Source of the current time in milliseconds since the Unix epoch.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Contacts stored as one JSON file on disk.
///
/// Writes overwrite the file in place: no lock, no temp file. A process
/// killed mid-write can leave a truncated document behind.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ContactStorage for JsonFileStorage {
    async fn read(&self) -> io::Result<String> {
        tokio::fs::read_to_string(&self.path).await
    }

    async fn write(&self, document: &str) -> io::Result<()> {
        tokio::fs::write(&self.path, document).await
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Real clock implementation.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

// ============================================================
// IN-MEMORY IMPLEMENTATIONS
// ============================================================

/// Contacts document held in memory.
///
/// `None` models a missing store: reads fail with `NotFound`. A read-only
/// store rejects writes with `PermissionDenied`.
#[derive(Debug)]
pub struct MemoryStorage {
    document: Mutex<Option<String>>,
    writes: AtomicUsize,
    read_only: bool,
}

impl MemoryStorage {
    /// Store holding the given document.
    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: Mutex::new(Some(document.into())),
            writes: AtomicUsize::new(0),
            read_only: false,
        }
    }

    /// Store holding the given document whose writes always fail.
    pub fn read_only(document: impl Into<String>) -> Self {
        Self {
            read_only: true,
            ..Self::with_document(document)
        }
    }

    /// Store that does not exist yet.
    pub fn missing() -> Self {
        Self {
            document: Mutex::new(None),
            writes: AtomicUsize::new(0),
            read_only: false,
        }
    }

    /// Current document, if any.
    pub fn document(&self) -> Option<String> {
        self.document
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of successful writes so far.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::with_document("[]")
    }
}

#[async_trait]
impl ContactStorage for MemoryStorage {
    async fn read(&self) -> io::Result<String> {
        self.document().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "in-memory store has no document")
        })
    }

    async fn write(&self, document: &str) -> io::Result<()> {
        if self.read_only {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "in-memory store is read-only",
            ));
        }
        *self
            .document
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(document.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

/// Clock frozen at a settable instant.
#[derive(Debug)]
pub struct FixedClock(AtomicI64);

impl FixedClock {
    pub fn new(millis: i64) -> Self {
        Self(AtomicI64::new(millis))
    }

    pub fn set(&self, millis: i64) {
        self.0.store(millis, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}

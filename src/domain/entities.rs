//! Domain entities: core data structures

use serde::{Deserialize, Serialize};

/// A single contact record.
///
/// Serialized with exactly the keys `id`, `name`, `email`, `phone`.
/// Keys missing from a stored object read back as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    /// Decimal millisecond timestamp assigned at creation, never reassigned
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Field values for a contact that has not been stored yet.
///
/// Missing values are kept as empty strings; nothing is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl NewContact {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Build a `NewContact` from optional CLI values, defaulting each to `""`.
    pub fn from_optional(
        name: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> Self {
        Self::new(
            name.unwrap_or_default(),
            email.unwrap_or_default(),
            phone.unwrap_or_default(),
        )
    }

    /// Attach an id, producing the stored record.
    pub fn into_contact(self, id: String) -> Contact {
        Contact {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
        }
    }
}

/// Derive the id for a new contact from the current time in milliseconds.
///
/// The id is the decimal timestamp. If a contact in `existing` already uses
/// it, the timestamp is bumped by one millisecond until it is free.
pub fn next_contact_id(existing: &[Contact], now_millis: i64) -> String {
    let mut candidate = now_millis;
    loop {
        let id = candidate.to_string();
        if !existing.iter().any(|c| c.id == id) {
            return id;
        }
        candidate += 1;
    }
}

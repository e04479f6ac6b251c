//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (ContactStorage, Clock)
//! but are themselves concrete structs.

mod contacts;

pub use contacts::{encode_contacts, ContactRepository, ContactService};

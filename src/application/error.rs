//! Application-level errors

use thiserror::Error;

/// Application errors: failures of the contact store and of settings loading.
///
/// "Not found" is never an error; it is `Ok(None)` at the repository level.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("cannot read contacts from {location}: {source}")]
    StoreRead {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid contacts document at {location}: {source}")]
    StoreParse {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot write contacts to {location}: {source}")]
    StoreWrite {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot encode contacts: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

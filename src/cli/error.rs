//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("cannot render result: {0}")]
    Render(#[from] serde_json::Error),

    #[error("cannot write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Application(e) => match e {
                ApplicationError::StoreRead { .. } => crate::exitcode::NOINPUT,
                ApplicationError::StoreParse { .. } => crate::exitcode::DATAERR,
                ApplicationError::StoreWrite { .. } => crate::exitcode::CANTCREAT,
                ApplicationError::Encode(_) => crate::exitcode::SOFTWARE,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
            },
            CliError::Render(_) => crate::exitcode::SOFTWARE,
            CliError::Output(_) => crate::exitcode::IOERR,
        }
    }
}

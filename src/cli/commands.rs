//! Action dispatch
//!
//! Maps the free-form `--action` string to one contact store operation and
//! prints its result.

use std::io::Write;

use tracing::{debug, instrument};

use crate::application::services::ContactRepository;
use crate::cli::args::Cli;
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::Settings;
use crate::domain::NewContact;
use crate::infrastructure::di::ServiceContainer;

/// Operation selected by `--action`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    List,
    Get,
    Add,
    Remove,
    /// Anything else, including a missing `--action`
    Unknown(String),
}

impl Action {
    /// Exact, case-sensitive match on the action name.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("list") => Action::List,
            Some("get") => Action::Get,
            Some("add") => Action::Add,
            Some("remove") => Action::Remove,
            Some(other) => Action::Unknown(other.to_string()),
            None => Action::Unknown(String::new()),
        }
    }
}

/// Load settings, wire the store, and run the selected action against stdout.
pub async fn execute_command(cli: &Cli) -> CliResult<()> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(db) = &cli.db {
        settings = settings.with_db_path(db);
    }
    let container = ServiceContainer::new(settings);
    debug!("settings: {:?}", container.settings);
    let service = container.contact_service();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    dispatch(&service, cli, &mut out).await
}

/// Run exactly one store operation for `cli.action` and write its result to `out`.
///
/// Unknown actions print a warning to stderr and succeed without touching the store.
#[instrument(skip(repo, cli, out), fields(action = ?cli.action))]
pub async fn dispatch(
    repo: &dyn ContactRepository,
    cli: &Cli,
    out: &mut dyn Write,
) -> CliResult<()> {
    match Action::parse(cli.action.as_deref()) {
        Action::List => {
            let contacts = repo.list().await?;
            writeln!(out, "{}", output::contacts_table(&contacts))?;
        }
        Action::Get => {
            let contact = repo.get_by_id(cli.id.as_deref().unwrap_or_default()).await?;
            writeln!(out, "{}", output::contact_dump(contact.as_ref())?)?;
        }
        Action::Add => {
            let new = NewContact::from_optional(
                cli.name.as_deref(),
                cli.email.as_deref(),
                cli.phone.as_deref(),
            );
            let contact = repo.add(new).await?;
            writeln!(out, "{}", output::contact_dump(Some(&contact))?)?;
        }
        Action::Remove => {
            let removed = repo.remove(cli.id.as_deref().unwrap_or_default()).await?;
            writeln!(out, "{}", output::contact_dump(removed.as_ref())?)?;
        }
        Action::Unknown(name) => {
            debug!("unknown action: {:?}", name);
            output::warning("Unknown action type!");
        }
    }
    Ok(())
}

/// Map a failed dispatch to the process exit code, printing the error.
pub fn report(err: &CliError) -> i32 {
    output::error(err);
    err.exit_code()
}

//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Manage contacts stored in a JSON file
///
/// The action is a plain string (list, get, add, remove) dispatched by the
/// application, not a clap subcommand.
#[derive(Parser, Debug, Default)]
#[command(name = "rcontacts")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// choose action
    #[arg(short, long, value_name = "type")]
    pub action: Option<String>,

    /// user id
    #[arg(short, long, value_name = "type")]
    pub id: Option<String>,

    /// user name
    #[arg(short, long, value_name = "type")]
    pub name: Option<String>,

    /// user email
    #[arg(short, long, value_name = "type")]
    pub email: Option<String>,

    /// user phone
    #[arg(short, long, value_name = "type")]
    pub phone: Option<String>,

    /// Contacts file (overrides config and RCONTACTS_DB_PATH)
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub db: Option<PathBuf>,

    /// Additional config file
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn given_short_flags_when_parsing_then_fills_all_fields() {
        let cli = Cli::parse_from([
            "rcontacts", "-a", "add", "-n", "Ann", "-e", "ann@x.com", "-p", "111",
        ]);
        assert_eq!(cli.action.as_deref(), Some("add"));
        assert_eq!(cli.name.as_deref(), Some("Ann"));
        assert_eq!(cli.email.as_deref(), Some("ann@x.com"));
        assert_eq!(cli.phone.as_deref(), Some("111"));
        assert_eq!(cli.id, None);
    }

    #[test]
    fn given_long_flags_when_parsing_then_fills_id_and_action() {
        let cli = Cli::parse_from(["rcontacts", "--action", "get", "--id", "1700000000000"]);
        assert_eq!(cli.action.as_deref(), Some("get"));
        assert_eq!(cli.id.as_deref(), Some("1700000000000"));
    }

    #[test]
    fn given_unrecognized_action_value_when_parsing_then_accepted_verbatim() {
        let cli = Cli::parse_from(["rcontacts", "-a", "update"]);
        assert_eq!(cli.action.as_deref(), Some("update"));
    }

    #[test]
    fn given_repeated_verbose_when_parsing_then_counts() {
        let cli = Cli::parse_from(["rcontacts", "-vv"]);
        assert_eq!(cli.verbose, 2);
    }
}

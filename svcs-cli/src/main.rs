use anyhow::Result;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use svcs_core::Repository;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{add, checkout, commit, config, log};

#[derive(Parser)]
#[command(name = "svcs")]
#[command(version, about = "A minimal file-based version control system", long_about = None)]
#[command(disable_help_flag = true)]
struct Cli {
    /// Print the list of commands
    #[arg(short, long)]
    help: bool,

    /// Storage root (defaults to ./vcs inside the working directory)
    #[arg(long, global = true, env = "SVCS_ROOT")]
    root: Option<PathBuf>,

    /// Working directory tracked paths and checkouts are relative to
    #[arg(long, global = true)]
    work_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Get and set a username
    Config {
        /// New username
        name: Option<String>,
    },

    /// Add a file to the index
    Add {
        /// File to track
        path: Option<PathBuf>,
    },

    /// Save changes
    Commit {
        /// Commit message
        message: Option<String>,
    },

    /// Show commit logs
    Log {
        /// Print the history as JSON
        #[arg(long)]
        json: bool,
    },

    /// Restore a file
    Checkout {
        /// Commit ID to restore
        commit_id: Option<String>,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::InvalidSubcommand => {
            if let Some(ContextValue::String(name)) = e.get(ContextKind::InvalidSubcommand) {
                println!("'{}' is not a SVCS command.", name);
                return Ok(());
            }
            e.exit()
        }
        Err(e) => e.exit(),
    };

    let Some(command) = cli.command.filter(|_| !cli.help) else {
        commands::print_help();
        return Ok(());
    };

    if let Err(e) = dispatch(cli.root, cli.work_dir, command) {
        println!("{} {}", "Error:".red().bold(), e);
    }

    Ok(())
}

fn dispatch(root: Option<PathBuf>, work_dir: Option<PathBuf>, command: Commands) -> Result<()> {
    let repo_config = commands::resolve_config(root, work_dir)?;
    debug!("Using storage root {:?}", repo_config.storage_root());
    let repo = Repository::open(repo_config)?;

    match command {
        Commands::Config { name } => config::run(&repo, name),
        Commands::Add { path } => add::run(&repo, path),
        Commands::Commit { message } => commit::run(&repo, message),
        Commands::Log { json } => log::run(&repo, json),
        Commands::Checkout { commit_id } => checkout::run(&repo, commit_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_flag_is_handled_by_svcs() {
        for args in [["svcs", "--help"], ["svcs", "-h"]] {
            let cli = Cli::try_parse_from(args).unwrap();
            assert!(cli.help);
            assert!(cli.command.is_none());
        }
    }

    #[test]
    fn test_missing_arguments_still_parse() {
        let cli = Cli::try_parse_from(["svcs", "commit"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Commit { message: None })));

        let cli = Cli::try_parse_from(["svcs", "checkout"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Checkout { commit_id: None })));
    }

    #[test]
    fn test_unknown_command_reports_name() {
        let err = Cli::try_parse_from(["svcs", "push"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
        assert!(matches!(
            err.get(ContextKind::InvalidSubcommand),
            Some(ContextValue::String(name)) if name == "push"
        ));
    }
}

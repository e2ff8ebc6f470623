pub mod add;
pub mod checkout;
pub mod commit;
pub mod config;
pub mod log;

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;
use svcs_core::RepoConfig;

const COMMANDS: [(&str, &str); 5] = [
    ("config", "Get and set a username."),
    ("add", "Add a file to the index."),
    ("log", "Show commit logs."),
    ("commit", "Save changes."),
    ("checkout", "Restore a file."),
];

pub fn print_help() {
    println!("These are SVCS commands:");
    for (name, about) in COMMANDS {
        println!("{} {}", format!("{:<10}", name).bold(), about);
    }
}

/// Builds the storage configuration from the optional overrides. Without a
/// working directory the current directory is used; without a root the
/// default `vcs` directory inside the working directory is used.
pub fn resolve_config(root: Option<PathBuf>, work_dir: Option<PathBuf>) -> Result<RepoConfig> {
    let work_dir = match work_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Could not determine the current directory")?,
    };

    Ok(match root {
        Some(root) => RepoConfig::new(root, work_dir),
        None => RepoConfig::for_work_dir(work_dir),
    })
}

use anyhow::Result;
use colored::Colorize;
use svcs_core::{Error, Repository};

pub fn run(repo: &Repository, message: Option<String>) -> Result<()> {
    let Some(message) = message else {
        println!("Message was not passed.");
        return Ok(());
    };

    match repo.commit(&message) {
        Ok(_) => println!("Changes are committed."),
        Err(Error::NothingToCommit) => println!("{}", "Nothing to commit.".yellow()),
        Err(Error::AuthorNotSet) => println!("Please, tell me who you are."),
        Err(Error::NothingTracked) => println!("Add a file to the index."),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

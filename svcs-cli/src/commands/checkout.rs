use anyhow::Result;
use svcs_core::{CommitId, Error, Repository};

pub fn run(repo: &Repository, commit_id: Option<String>) -> Result<()> {
    let Some(commit_id) = commit_id else {
        println!("Commit id was not passed.");
        return Ok(());
    };

    let id = CommitId::new(commit_id);
    match repo.checkout(&id) {
        Ok(_) => println!("Switched to commit {}.", id),
        Err(Error::CommitNotFound(_)) => println!("Commit does not exist."),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

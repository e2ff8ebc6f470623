use anyhow::Result;
use std::path::PathBuf;
use svcs_core::{Error, Repository, TrackOutcome};

pub fn run(repo: &Repository, path: Option<PathBuf>) -> Result<()> {
    let Some(path) = path else {
        let tracked = repo.tracked()?;
        if tracked.is_empty() {
            println!("Add a file to the index.");
        } else {
            println!("Tracked files:");
            for path in tracked {
                println!("{}", path);
            }
        }
        return Ok(());
    };

    match repo.track(&path) {
        Ok(TrackOutcome::Added) => println!("The file '{}' is tracked.", path.display()),
        Ok(TrackOutcome::AlreadyTracked) => {
            println!("The file '{}' is already tracked.", path.display())
        }
        Err(Error::FileNotFound(_)) => println!("Can't find '{}'.", path.display()),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

use anyhow::Result;
use svcs_core::Repository;

pub fn run(repo: &Repository, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&repo.history())?);
        return Ok(());
    }

    let blocks = repo.log();
    if blocks.is_empty() {
        println!("No commits yet.");
        return Ok(());
    }

    println!("{}", blocks.join("\n\n"));
    Ok(())
}

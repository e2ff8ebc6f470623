use anyhow::Result;
use svcs_core::Repository;

pub fn run(repo: &Repository, name: Option<String>) -> Result<()> {
    match name {
        Some(name) => {
            repo.set_author(&name)?;
            println!("The username is {}.", name);
        }
        None => match repo.author()? {
            Some(name) => println!("The username is {}.", name),
            None => println!("Please, tell me who you are."),
        },
    }

    Ok(())
}

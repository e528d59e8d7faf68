//! `eta-cabal show` command

use anyhow::Result;

use crate::cli::ShowArgs;

pub fn execute(args: ShowArgs) -> Result<()> {
    let dir = super::project_dir(args.dir)?;
    let project = super::load_project(&dir)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&project)?);
        return Ok(());
    }

    // package id is present for any non-empty project
    println!("{}", project.package_id().unwrap_or_default());
    for artifact in project.artifacts() {
        let tag = artifact
            .dependency_tag()
            .unwrap_or_else(|| artifact.kind.stanza().to_string());
        match &artifact.main_is {
            Some(main_is) => println!("  {} (main-is: {})", tag, main_is),
            None => println!("  {}", tag),
        }
    }
    Ok(())
}

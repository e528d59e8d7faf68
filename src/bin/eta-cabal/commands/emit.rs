//! `eta-cabal emit` command

use anyhow::Result;

use eta_cabal::descriptor;

use crate::cli::EmitArgs;

pub fn execute(args: EmitArgs) -> Result<()> {
    let dir = super::project_dir(args.dir)?;
    let project = super::load_project(&dir)?;

    match args.output {
        Some(path) => descriptor::write(&project, &path),
        None => {
            print!("{}", descriptor::render(&project)?);
            Ok(())
        }
    }
}

//! Command implementations

use std::path::PathBuf;

use anyhow::{Context, Result};
use eta_cabal::Project;
use eta_cabal::descriptor;

pub mod artifacts;
pub mod emit;
pub mod show;

/// Resolve the project directory argument, defaulting to the cwd.
pub fn project_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(dir) => Ok(dir),
        None => std::env::current_dir().context("failed to get current directory"),
    }
}

/// Load the descriptor from `dir`, failing on the empty-project sentinel.
pub fn load_project(dir: &std::path::Path) -> Result<Project> {
    let project = descriptor::load(dir);
    if project.is_empty() {
        anyhow::bail!(
            "no valid descriptor in {}\n\
             help: the directory must contain exactly one `*.cabal` file \
             declaring a name, a version and at least one unit",
            dir.display()
        );
    }
    Ok(project)
}

//! Descriptor file handling: discovery, parsing and serialization.
//!
//! A project directory holds exactly one `*.cabal` descriptor. Discovery
//! refuses to guess when zero or several candidates exist; parse failures
//! are non-fatal and degrade to the empty project, which callers detect
//! with [`Project::is_empty`]. Only the write path fails hard.

pub mod parse;
pub mod write;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::Project;

pub use parse::parse_str;
pub use write::{render, write};

/// File-name suffix identifying a descriptor.
pub const DESCRIPTOR_SUFFIX: &str = ".cabal";

/// Errors raised while locating, parsing or writing a descriptor.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// No `*.cabal` file in the project directory.
    #[error("no `*{}` descriptor found in {}", DESCRIPTOR_SUFFIX, .dir.display())]
    NotFound { dir: PathBuf },

    /// More than one `*.cabal` file; never resolved by guessing.
    #[error("multiple `*{}` descriptors found in {}: {}", DESCRIPTOR_SUFFIX, .dir.display(), .candidates.join(", "))]
    Ambiguous { dir: PathBuf, candidates: Vec<String> },

    /// The descriptor could not be read.
    #[error("failed to read descriptor: {0}")]
    Io(#[from] std::io::Error),

    /// Parse completed but no `name:` line was ever seen.
    #[error("descriptor declares no project name")]
    MissingName,

    /// Parse completed but no `version:` line was ever seen.
    #[error("descriptor declares no project version")]
    MissingVersion,

    /// The write path was handed an empty/invalid project.
    #[error("refusing to write a descriptor for an empty project")]
    EmptyProject,
}

/// Locate the single descriptor file in `dir`.
///
/// Exactly one file name ending in [`DESCRIPTOR_SUFFIX`] must exist;
/// anything else is an error the caller has to surface.
pub fn find_descriptor(dir: &Path) -> Result<PathBuf, DescriptorError> {
    let mut candidates = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(DESCRIPTOR_SUFFIX) && entry.path().is_file() {
            candidates.push(name);
        }
    }
    candidates.sort();

    match candidates.len() {
        0 => Err(DescriptorError::NotFound {
            dir: dir.to_path_buf(),
        }),
        1 => Ok(dir.join(&candidates[0])),
        _ => Err(DescriptorError::Ambiguous {
            dir: dir.to_path_buf(),
            candidates,
        }),
    }
}

/// The canonical descriptor file name for a project, `<name>.cabal`.
pub fn descriptor_file_name(project: &Project) -> Option<String> {
    project
        .name()
        .map(|name| format!("{}{}", name, DESCRIPTOR_SUFFIX))
}

/// Load the descriptor from `dir`.
///
/// Never fails: discovery and parse errors are reported through tracing
/// and collapse to the empty project. Callers decide how to react via
/// [`Project::is_empty`].
pub fn load(dir: &Path) -> Project {
    match try_load(dir) {
        Ok(project) => project,
        Err(err) => {
            tracing::warn!("{err}");
            Project::new()
        }
    }
}

fn try_load(dir: &Path) -> Result<Project, DescriptorError> {
    let path = find_descriptor(dir)?;
    tracing::info!("parsing descriptor {}", path.display());

    let text = std::fs::read_to_string(&path)?;
    let project = parse_str(&text)?;

    tracing::info!(
        "parsed project {} with {} artifact(s)",
        project.package_id().unwrap_or_default(),
        project.artifacts().len()
    );
    Ok(project)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DEMO: &str = "name: demo\nversion: 1.2\nlibrary\nexecutable app\n";

    #[test]
    fn test_find_descriptor() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("demo.cabal");
        std::fs::write(&path, DEMO).unwrap();

        assert_eq!(find_descriptor(tmp.path()).unwrap(), path);
    }

    #[test]
    fn test_find_descriptor_not_found() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("notes.txt"), "n/a").unwrap();

        let result = find_descriptor(tmp.path());
        assert!(matches!(result, Err(DescriptorError::NotFound { .. })));
    }

    #[test]
    fn test_find_descriptor_ambiguous() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("a.cabal"), DEMO).unwrap();
        std::fs::write(tmp.path().join("b.cabal"), DEMO).unwrap();

        match find_descriptor(tmp.path()) {
            Err(DescriptorError::Ambiguous { candidates, .. }) => {
                assert_eq!(candidates, vec!["a.cabal", "b.cabal"]);
            }
            other => panic!("expected ambiguity, got {:?}", other),
        }
    }

    #[test]
    fn test_load() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("demo.cabal"), DEMO).unwrap();

        let project = load(tmp.path());
        assert!(!project.is_empty());
        assert_eq!(project.name(), Some("demo"));
        assert_eq!(project.executables()[0].name(), Some("app"));
    }

    #[test]
    fn test_load_degrades_to_empty_project() {
        let tmp = TempDir::new().unwrap();

        // No descriptor at all.
        assert!(load(tmp.path()).is_empty());

        // Descriptor missing its version line.
        std::fs::write(tmp.path().join("demo.cabal"), "name: demo\nlibrary\n").unwrap();
        assert!(load(tmp.path()).is_empty());
    }

    #[test]
    fn test_descriptor_file_name() {
        let project = Project::new().with_name("demo");
        assert_eq!(descriptor_file_name(&project).as_deref(), Some("demo.cabal"));
        assert_eq!(descriptor_file_name(&Project::new()), None);
    }
}

//! Versioned build-tool output layout.
//!
//! The Eta build tool places compiled archives under a fixed directory
//! scheme rooted at `<build_root>/build/eta-<version>/<package_id>/`.
//! That scheme is an external contract this module reproduces exactly;
//! nothing outside it knows the shape, so a layout change stays local.

use std::path::{Path, PathBuf};

use crate::core::{Artifact, ArtifactKind, Project};

/// Directory prefix of the versioned dist directory.
pub const TOOL_PREFIX: &str = "eta";

/// The dist directory for a project: `<build_root>/build/eta-<version>/<package_id>/`.
///
/// `None` when the project has no package id (empty/unresolved project).
pub fn dist_dir(build_root: &Path, eta_version: &str, project: &Project) -> Option<PathBuf> {
    let package_id = project.package_id()?;
    Some(
        build_root
            .join("build")
            .join(format!("{}-{}", TOOL_PREFIX, eta_version))
            .join(package_id),
    )
}

/// The expected archive path for one unit, relative to its dist dir.
///
/// - library: `build/<package_id>-inplace.jar`
/// - executable X: `x/X/build/X/X.jar`
/// - test suite X: `t/X/build/X/X.jar`
pub fn archive_path(dist_dir: &Path, project: &Project, artifact: &Artifact) -> Option<PathBuf> {
    match artifact.kind {
        ArtifactKind::Library => {
            let package_id = project.package_id()?;
            Some(
                dist_dir
                    .join("build")
                    .join(format!("{}-inplace.jar", package_id)),
            )
        }
        ArtifactKind::Executable => unit_archive(dist_dir, "x", artifact.name()?),
        ArtifactKind::TestSuite => unit_archive(dist_dir, "t", artifact.name()?),
    }
}

fn unit_archive(dist_dir: &Path, prefix: &str, name: &str) -> Option<PathBuf> {
    Some(
        dist_dir
            .join(prefix)
            .join(name)
            .join("build")
            .join(name)
            .join(format!("{}.jar", name)),
    )
}

/// Expected archive paths for the selected units, in the fixed artifact
/// order. Purely computed; nothing is checked against the filesystem.
pub fn candidate_archives<P>(
    project: &Project,
    build_root: &Path,
    eta_version: &str,
    predicate: P,
) -> Vec<PathBuf>
where
    P: Fn(&Artifact) -> bool,
{
    let Some(dist) = dist_dir(build_root, eta_version, project) else {
        return Vec::new();
    };

    project
        .filter_artifacts(predicate)
        .into_iter()
        .filter_map(|artifact| archive_path(&dist, project, artifact))
        .collect()
}

/// Candidate archives narrowed to the ones that exist on disk.
///
/// Missing candidates are dropped, not errored; callers tolerate a ragged
/// result.
pub fn existing_archives<P>(
    project: &Project,
    build_root: &Path,
    eta_version: &str,
    predicate: P,
) -> Vec<PathBuf>
where
    P: Fn(&Artifact) -> bool,
{
    candidate_archives(project, build_root, eta_version, predicate)
        .into_iter()
        .filter(|path| {
            let present = path.exists();
            if !present {
                tracing::debug!("skipping missing archive {}", path.display());
            }
            present
        })
        .collect()
}

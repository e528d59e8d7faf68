//! The in-memory representation of one descriptor's contents.
//!
//! A Project is built up additively by the parser fold, name-resolved
//! exactly once, and read-only for every consumer after that. The
//! serializer and the dist layout never mutate one.

use serde::Serialize;

use crate::core::artifact::Artifact;

/// A parsed project: name, version and the units it declares.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Project name; `None` until a `name:` line is seen
    name: Option<String>,

    /// Project version; `None` until a `version:` line is seen
    version: Option<String>,

    /// The single optional library slot
    library: Option<Artifact>,

    /// Executables in declaration order
    executables: Vec<Artifact>,

    /// Test suites in declaration order
    test_suites: Vec<Artifact>,
}

impl Project {
    /// Create an empty project.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the project name. Later calls overwrite earlier ones.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the project version. Later calls overwrite earlier ones.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Fill the library slot, replacing any previous occupant.
    ///
    /// The slot is single-valued: a descriptor declaring `library` twice
    /// keeps only the last one, same as repeated `name:` lines.
    pub fn with_library(mut self, library: Artifact) -> Self {
        self.library = Some(library);
        self
    }

    /// Append an executable.
    pub fn with_executable(mut self, executable: Artifact) -> Self {
        self.executables.push(executable);
        self
    }

    /// Append a test suite.
    pub fn with_test_suite(mut self, test_suite: Artifact) -> Self {
        self.test_suites.push(test_suite);
        self
    }

    /// Get the project name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get the project version, if set.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Get the library, if one is declared.
    pub fn library(&self) -> Option<&Artifact> {
        self.library.as_ref()
    }

    /// Get the executables in declaration order.
    pub fn executables(&self) -> &[Artifact] {
        &self.executables
    }

    /// Get the test suites in declaration order.
    pub fn test_suites(&self) -> &[Artifact] {
        &self.test_suites
    }

    /// Check if a library is declared.
    pub fn has_library(&self) -> bool {
        self.library.is_some()
    }

    /// Check if any executable is declared.
    pub fn has_executable(&self) -> bool {
        !self.executables.is_empty()
    }

    /// Check if any test suite is declared.
    pub fn has_test_suite(&self) -> bool {
        !self.test_suites.is_empty()
    }

    /// All declared units in the fixed order: library first, then
    /// executables, then test suites, each in declaration order.
    ///
    /// This order is load-bearing: serialization and archive resolution
    /// both follow it.
    pub fn artifacts(&self) -> Vec<&Artifact> {
        self.library
            .iter()
            .chain(self.executables.iter())
            .chain(self.test_suites.iter())
            .collect()
    }

    /// The units matching `predicate`, preserving the fixed order.
    pub fn filter_artifacts<P>(&self, predicate: P) -> Vec<&Artifact>
    where
        P: Fn(&Artifact) -> bool,
    {
        self.artifacts()
            .into_iter()
            .filter(|&artifact| predicate(artifact))
            .collect()
    }

    /// Substitute the project name into every still-unnamed unit.
    ///
    /// Idempotent: once every unit carries a name, further applications
    /// change nothing. The parser applies this exactly once, after the
    /// fold; nothing downstream should see an unresolved project.
    pub fn resolve_names(mut self) -> Self {
        let Some(project_name) = self.name.clone() else {
            return self;
        };

        let resolve = |artifact: &mut Artifact| {
            if artifact.name.is_none() {
                artifact.name = Some(project_name.clone());
            }
        };

        if let Some(library) = self.library.as_mut() {
            resolve(library);
        }
        self.executables.iter_mut().for_each(resolve);
        self.test_suites.iter_mut().for_each(resolve);
        self
    }

    /// Check if this is the empty/invalid project: missing name or
    /// version, or no units declared at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            || self.version.is_none()
            || (self.library.is_none()
                && self.executables.is_empty()
                && self.test_suites.is_empty())
    }

    /// The `<name>-<version>` package id, once both fields are set.
    pub fn package_id(&self) -> Option<String> {
        match (&self.name, &self.version) {
            (Some(name), Some(version)) => Some(format!("{}-{}", name, version)),
            _ => None,
        }
    }
}

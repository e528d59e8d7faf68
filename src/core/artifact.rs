//! Buildable units declared by a cabal descriptor.
//!
//! An Artifact is one unit a project can build: a library, an executable,
//! or a test suite. All three share the same field set; the kind tag
//! decides stanza naming, dependency tags and archive layout.

use std::fmt;

use serde::Serialize;

/// Default entry point for a fresh executable.
pub const DEFAULT_EXECUTABLE_MAIN: &str = "Main.hs";

/// Default entry point for a fresh test suite.
pub const DEFAULT_TEST_SUITE_MAIN: &str = "Spec.hs";

/// The language standard a unit is compiled under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Language {
    Haskell98,
    #[default]
    Haskell2010,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Haskell98 => write!(f, "Haskell98"),
            Language::Haskell2010 => write!(f, "Haskell2010"),
        }
    }
}

/// The kind of unit being declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    /// Library (at most one per project)
    Library,

    /// Executable binary
    Executable,

    /// Test suite
    TestSuite,
}

impl ArtifactKind {
    /// Get the stanza keyword used in descriptor text.
    pub fn stanza(&self) -> &'static str {
        match self {
            ArtifactKind::Library => "library",
            ArtifactKind::Executable => "executable",
            ArtifactKind::TestSuite => "test-suite",
        }
    }

    /// Get the prefix used in intra-project dependency tags.
    pub fn tag_prefix(&self) -> &'static str {
        match self {
            ArtifactKind::Library => "lib",
            ArtifactKind::Executable => "exe",
            ArtifactKind::TestSuite => "test",
        }
    }

    /// Get the default entry point for a fresh unit of this kind.
    /// Libraries have none.
    pub fn default_main_is(&self) -> Option<&'static str> {
        match self {
            ArtifactKind::Library => None,
            ArtifactKind::Executable => Some(DEFAULT_EXECUTABLE_MAIN),
            ArtifactKind::TestSuite => Some(DEFAULT_TEST_SUITE_MAIN),
        }
    }

    /// Check if this is the library kind.
    pub fn is_library(&self) -> bool {
        matches!(self, ArtifactKind::Library)
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stanza())
    }
}

/// A buildable unit with its declared fields.
///
/// Artifacts are immutable values; the `with_*` methods return updated
/// copies. `name` stays `None` until project-name resolution assigns one,
/// which is a legal state ("inherit the project name"), not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    /// What kind of unit this is
    pub kind: ArtifactKind,

    /// Unit name; `None` inherits the project name at resolution time
    pub name: Option<String>,

    /// Source directories, relative to the project root
    pub source_dirs: Vec<String>,

    /// Modules exposed by this unit
    pub exposed_modules: Vec<String>,

    /// Package dependencies (optionally version-qualified)
    pub build_depends: Vec<String>,

    /// Maven coordinates resolved outside the descriptor
    pub maven_depends: Vec<String>,

    /// Opaque compiler flags
    pub ghc_options: Vec<String>,

    /// Language standard
    pub language: Language,

    /// Entry point source file; always `None` for libraries
    pub main_is: Option<String>,
}

impl Artifact {
    /// Create a new unnamed artifact with the per-kind defaults.
    pub fn new(kind: ArtifactKind) -> Self {
        Artifact {
            kind,
            name: None,
            source_dirs: Vec::new(),
            exposed_modules: Vec::new(),
            build_depends: Vec::new(),
            maven_depends: Vec::new(),
            ghc_options: Vec::new(),
            language: Language::default(),
            main_is: kind.default_main_is().map(String::from),
        }
    }

    /// Create a new unnamed library.
    pub fn library() -> Self {
        Self::new(ArtifactKind::Library)
    }

    /// Create a new unnamed executable.
    pub fn executable() -> Self {
        Self::new(ArtifactKind::Executable)
    }

    /// Create a new unnamed test suite.
    pub fn test_suite() -> Self {
        Self::new(ArtifactKind::TestSuite)
    }

    /// Assign a name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replace the source directories.
    pub fn with_source_dirs(mut self, dirs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.source_dirs = dirs.into_iter().map(|d| d.into()).collect();
        self
    }

    /// Replace the exposed modules.
    pub fn with_exposed_modules(
        mut self,
        modules: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.exposed_modules = modules.into_iter().map(|m| m.into()).collect();
        self
    }

    /// Replace the package dependencies.
    pub fn with_build_depends(
        mut self,
        deps: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.build_depends = deps.into_iter().map(|d| d.into()).collect();
        self
    }

    /// Replace the Maven dependencies.
    pub fn with_maven_depends(
        mut self,
        deps: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.maven_depends = deps.into_iter().map(|d| d.into()).collect();
        self
    }

    /// Replace the compiler flags.
    pub fn with_ghc_options(
        mut self,
        options: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.ghc_options = options.into_iter().map(|o| o.into()).collect();
        self
    }

    /// Set the language standard.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Set the entry point.
    pub fn with_main_is(mut self, main_is: impl Into<String>) -> Self {
        self.main_is = Some(main_is.into());
        self
    }

    /// Prepend the project library as a dependency of this unit.
    ///
    /// No-op for libraries (a library never depends on itself), and when
    /// no library is present or the library is still unnamed.
    pub fn with_library_dependency(mut self, library: Option<&Artifact>) -> Self {
        if self.kind.is_library() {
            return self;
        }
        if let Some(name) = library.and_then(|lib| lib.name.clone()) {
            self.build_depends.insert(0, name);
        }
        self
    }

    /// Get the unit name, if one has been assigned.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get the tag other units use to depend on this one, e.g. `lib:core`.
    /// `None` while the unit is unnamed.
    pub fn dependency_tag(&self) -> Option<String> {
        self.name
            .as_ref()
            .map(|name| format!("{}:{}", self.kind.tag_prefix(), name))
    }
}

//! Composable predicates over artifacts.
//!
//! Selection of units (for filtering and archive resolution) is expressed
//! as plain boolean functions over [`Artifact`], combined with `not`, `and`
//! and `or`. Boxing keeps the combinators nestable without generic
//! explosion at call sites.

use crate::core::artifact::{Artifact, ArtifactKind};

/// A boolean predicate over an artifact.
pub type ArtifactPredicate = Box<dyn Fn(&Artifact) -> bool>;

/// Matches every artifact.
pub fn all() -> ArtifactPredicate {
    Box::new(|_| true)
}

/// Matches libraries.
pub fn is_library() -> ArtifactPredicate {
    of_kind(ArtifactKind::Library)
}

/// Matches executables.
pub fn is_executable() -> ArtifactPredicate {
    of_kind(ArtifactKind::Executable)
}

/// Matches test suites.
pub fn is_test_suite() -> ArtifactPredicate {
    of_kind(ArtifactKind::TestSuite)
}

/// Matches artifacts of the given kind.
pub fn of_kind(kind: ArtifactKind) -> ArtifactPredicate {
    Box::new(move |artifact| artifact.kind == kind)
}

/// Matches artifacts with the given resolved name.
pub fn named(name: impl Into<String>) -> ArtifactPredicate {
    let name = name.into();
    Box::new(move |artifact| artifact.name() == Some(name.as_str()))
}

/// Inverts a predicate.
pub fn not(predicate: ArtifactPredicate) -> ArtifactPredicate {
    Box::new(move |artifact| !predicate(artifact))
}

/// Matches when both predicates match.
pub fn and(left: ArtifactPredicate, right: ArtifactPredicate) -> ArtifactPredicate {
    Box::new(move |artifact| left(artifact) && right(artifact))
}

/// Matches when either predicate matches.
pub fn or(left: ArtifactPredicate, right: ArtifactPredicate) -> ArtifactPredicate {
    Box::new(move |artifact| left(artifact) || right(artifact))
}

//! eta-cabal - Cabal descriptor handling for Eta projects
//!
//! This crate models an Eta package descriptor (project name, version and
//! the library/executable/test-suite units it declares) and provides the
//! operations a build tool needs around that model: parsing a descriptor
//! file, regenerating descriptor text, and resolving the on-disk archive
//! paths of compiled units.

pub mod core;
pub mod descriptor;
pub mod layout;
pub mod util;

pub use crate::core::{Artifact, ArtifactKind, Language, Project};
pub use crate::descriptor::DescriptorError;

//! Line-oriented descriptor parsing.
//!
//! The parser is a single left-to-right fold over the descriptor's lines.
//! Each line is matched against a fixed set of shapes in priority order,
//! first match wins, and anything else is ignored without error. Only unit
//! identity is recovered here: stanza bodies (`hs-source-dirs`,
//! `build-depends`, ...) are populated programmatically, not read back
//! from text.

use crate::core::{Artifact, Project};

use super::DescriptorError;

/// Parse descriptor text into a resolved project.
///
/// Applies name resolution exactly once after the fold, then requires a
/// project name and version to have been seen.
pub fn parse_str(text: &str) -> Result<Project, DescriptorError> {
    let project = text.lines().fold(Project::new(), apply_line).resolve_names();

    if project.name().is_none() {
        return Err(DescriptorError::MissingName);
    }
    if project.version().is_none() {
        return Err(DescriptorError::MissingVersion);
    }
    Ok(project)
}

/// The fold step: thread one line through the accumulated project.
fn apply_line(project: Project, line: &str) -> Project {
    if let Some(name) = field_value(line, "name:") {
        return project.with_name(name);
    }
    if let Some(version) = field_value(line, "version:") {
        return project.with_version(version);
    }
    if let Some(arg) = stanza_header(line, "library") {
        // Bare `library` only; `library foo` is not descriptor grammar.
        if arg.is_none() {
            return project.with_library(Artifact::library());
        }
        return project;
    }
    if let Some(arg) = stanza_header(line, "executable") {
        let executable = match arg {
            Some(name) => Artifact::executable().with_name(name),
            None => Artifact::executable(),
        };
        return project.with_executable(executable);
    }
    if let Some(arg) = stanza_header(line, "test-suite") {
        let test_suite = match arg {
            Some(name) => Artifact::test_suite().with_name(name),
            None => Artifact::test_suite(),
        };
        return project.with_test_suite(test_suite);
    }
    project
}

/// Match `<label> <token>` at the start of a line, returning the token.
///
/// Lines carrying the label but no token do not match. Indented stanza
/// fields never reach the label since matching is anchored at column 0.
fn field_value<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    line.strip_prefix(label)?.split_whitespace().next()
}

/// Match a stanza keyword at the start of a line.
///
/// Returns `Some(None)` for the bare keyword, `Some(Some(name))` when a
/// name token follows, and `None` when the line is something else
/// entirely (including longer words sharing the keyword as a prefix).
fn stanza_header<'a>(line: &'a str, keyword: &str) -> Option<Option<&'a str>> {
    let rest = line.strip_prefix(keyword)?;
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(rest.split_whitespace().next())
}

//! Descriptor text rendering.
//!
//! The serializer regenerates descriptor text from a project: four header
//! lines, then one stanza per unit in the fixed order, each separated by a
//! blank line. Field labels are padded to a fixed column; list fields put
//! their first item on the directive line and every further item on a
//! comma-led continuation line. Output is always syntactically valid
//! descriptor text, though the parser deliberately reads back only the
//! identity lines.

use std::path::Path;

use anyhow::Result;

use crate::core::{Artifact, ArtifactKind, Project};
use crate::util;

use super::DescriptorError;

/// Fixed cabal format constraint emitted in the header.
const CABAL_VERSION: &str = ">=1.10";

/// Fixed build type emitted in the header.
const BUILD_TYPE: &str = "Simple";

/// Column width labels are padded to.
const LABEL_WIDTH: usize = 20;

/// Render a project as descriptor text.
///
/// Fails with [`DescriptorError::EmptyProject`] rather than producing a
/// header-only descriptor for an empty/invalid project.
pub fn render(project: &Project) -> Result<String, DescriptorError> {
    if project.is_empty() {
        return Err(DescriptorError::EmptyProject);
    }

    // is_empty() guarantees name and version are present.
    let name = project.name().unwrap_or_default();
    let version = project.version().unwrap_or_default();

    let mut lines = Vec::new();
    push_field(&mut lines, "", "name:", name);
    push_field(&mut lines, "", "version:", version);
    push_field(&mut lines, "", "cabal-version:", CABAL_VERSION);
    push_field(&mut lines, "", "build-type:", BUILD_TYPE);

    for artifact in project.artifacts() {
        lines.push(String::new());
        lines.push(stanza_line(artifact));

        let body = artifact
            .clone()
            .with_library_dependency(project.library());
        push_body(&mut lines, &body);
    }

    let mut text = lines.join("\n");
    text.push('\n');
    Ok(text)
}

/// Write a project's descriptor to `path`.
///
/// Rendering happens before any filesystem access, so an empty project
/// never creates or truncates the target file.
pub fn write(project: &Project, path: &Path) -> Result<()> {
    let text = render(project)?;
    util::fs::write_string(path, &text)?;
    tracing::info!("wrote descriptor {}", path.display());
    Ok(())
}

fn stanza_line(artifact: &Artifact) -> String {
    match (artifact.kind, artifact.name()) {
        (ArtifactKind::Library, _) | (_, None) => artifact.kind.stanza().to_string(),
        (kind, Some(name)) => format!("{} {}", kind.stanza(), name),
    }
}

fn push_body(lines: &mut Vec<String>, artifact: &Artifact) {
    push_list(lines, "hs-source-dirs:", &artifact.source_dirs);
    push_list(lines, "exposed-modules:", &artifact.exposed_modules);
    push_list(lines, "build-depends:", &artifact.build_depends);
    push_list(lines, "maven-depends:", &artifact.maven_depends);
    if let Some(main_is) = &artifact.main_is {
        push_field(lines, "  ", "main-is:", main_is);
    }
    push_field(lines, "  ", "ghc-options:", &artifact.ghc_options.join(" "));
    push_field(
        lines,
        "  ",
        "default-language:",
        &artifact.language.to_string(),
    );
}

/// Emit a list directive: first item on the label line, the rest on
/// comma-led continuation lines aligned under the value column.
fn push_list(lines: &mut Vec<String>, label: &str, items: &[String]) {
    match items.split_first() {
        None => push_field(lines, "  ", label, ""),
        Some((first, rest)) => {
            push_field(lines, "  ", label, first);
            for item in rest {
                push_field(lines, "  ", "", &format!(", {}", item));
            }
        }
    }
}

fn push_field(lines: &mut Vec<String>, indent: &str, label: &str, value: &str) {
    let line = format!("{}{:<LABEL_WIDTH$}{}", indent, label, value);
    lines.push(line.trim_end().to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::parse_str;
    use tempfile::TempDir;

    fn demo_project() -> Project {
        Project::new()
            .with_name("demo")
            .with_version("1.2")
            .with_library(
                Artifact::library()
                    .with_name("demo")
                    .with_source_dirs(["src"])
                    .with_exposed_modules(["Demo", "Demo.Internal"])
                    .with_build_depends(["base"]),
            )
            .with_executable(
                Artifact::executable()
                    .with_name("app")
                    .with_source_dirs(["app"])
                    .with_build_depends(["base"])
                    .with_ghc_options(["-O2", "-Wall"]),
            )
            .with_test_suite(Artifact::test_suite().with_name("spec"))
    }

    fn rendered_lines(project: &Project) -> Vec<String> {
        render(project).unwrap().lines().map(String::from).collect()
    }

    #[test]
    fn test_render_refuses_empty_project() {
        let result = render(&Project::new());
        assert!(matches!(result, Err(DescriptorError::EmptyProject)));
    }

    #[test]
    fn test_render_header() {
        let lines = rendered_lines(&demo_project());

        assert!(lines[0].starts_with("name:") && lines[0].ends_with("demo"));
        assert!(lines[1].starts_with("version:") && lines[1].ends_with("1.2"));
        assert!(lines[2].starts_with("cabal-version:") && lines[2].ends_with(">=1.10"));
        assert!(lines[3].starts_with("build-type:") && lines[3].ends_with("Simple"));

        // Exactly one name: and one version: line in the whole output.
        assert_eq!(lines.iter().filter(|l| l.starts_with("name:")).count(), 1);
        assert_eq!(lines.iter().filter(|l| l.starts_with("version:")).count(), 1);
    }

    #[test]
    fn test_render_stanza_order_and_headers() {
        let project = demo_project()
            .with_executable(Artifact::executable().with_name("tool"));
        let text = render(&project).unwrap();

        let library = text.find("\nlibrary\n").unwrap();
        let app = text.find("\nexecutable app\n").unwrap();
        let tool = text.find("\nexecutable tool\n").unwrap();
        let spec = text.find("\ntest-suite spec\n").unwrap();
        assert!(library < app && app < tool && tool < spec);
    }

    #[test]
    fn test_render_source_dir_continuations() {
        let project = Project::new()
            .with_name("demo")
            .with_version("1.0")
            .with_executable(
                Artifact::executable()
                    .with_name("app")
                    .with_source_dirs(["src", "app"]),
            );
        let lines = rendered_lines(&project);

        let directive = lines
            .iter()
            .position(|l| l.trim_start().starts_with("hs-source-dirs:"))
            .unwrap();
        assert!(lines[directive].ends_with("src"));
        assert_eq!(lines[directive + 1].trim_start(), ", app");

        // One directive, entries neither dropped nor duplicated.
        let count = lines
            .iter()
            .filter(|l| l.trim_start().starts_with("hs-source-dirs:"))
            .count();
        assert_eq!(count, 1);
        assert_eq!(lines.iter().filter(|l| l.contains("app")).count(), 2); // header + continuation
    }

    #[test]
    fn test_render_injects_library_dependency() {
        let text = render(&demo_project()).unwrap();

        let exe_stanza = &text[text.find("executable app").unwrap()..];
        let depends = exe_stanza
            .lines()
            .find(|l| l.trim_start().starts_with("build-depends:"))
            .unwrap();
        assert!(depends.ends_with("demo"));
        assert!(exe_stanza.contains(", base"));

        // The library's own build-depends is untouched.
        let lib_stanza = &text[text.find("\nlibrary\n").unwrap()..text.find("executable").unwrap()];
        let lib_depends = lib_stanza
            .lines()
            .find(|l| l.trim_start().starts_with("build-depends:"))
            .unwrap();
        assert!(lib_depends.ends_with("base"));
    }

    #[test]
    fn test_render_fixed_body_fields() {
        let text = render(&demo_project()).unwrap();
        let lib_stanza = &text[text.find("\nlibrary\n").unwrap()..text.find("executable").unwrap()];

        // Libraries have no entry point; ghc-options and default-language
        // appear even when empty.
        assert!(!lib_stanza.contains("main-is:"));
        assert!(lib_stanza.contains("ghc-options:"));
        assert!(lib_stanza.contains("default-language:   Haskell2010"));

        let exe_stanza = &text[text.find("executable app").unwrap()..];
        assert!(exe_stanza.contains("main-is:            Main.hs"));
        assert!(exe_stanza.contains("ghc-options:        -O2 -Wall"));
    }

    #[test]
    fn test_render_output_reparses() {
        let text = render(&demo_project()).unwrap();
        let reparsed = parse_str(&text).unwrap();

        assert_eq!(reparsed.name(), Some("demo"));
        assert_eq!(reparsed.version(), Some("1.2"));
        assert!(reparsed.has_library());
        let names: Vec<_> = reparsed
            .artifacts()
            .iter()
            .filter_map(|a| a.name())
            .collect();
        assert_eq!(names, vec!["demo", "app", "spec"]);
    }

    #[test]
    fn test_write_creates_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("demo.cabal");

        write(&demo_project(), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("name:"));
    }

    #[test]
    fn test_write_empty_project_touches_nothing() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("demo.cabal");
        std::fs::write(&path, "previous contents").unwrap();

        assert!(write(&Project::new(), &path).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "previous contents");

        // And no file materializes where none existed.
        let fresh = tmp.path().join("other.cabal");
        assert!(write(&Project::new(), &fresh).is_err());
        assert!(!fresh.exists());
    }
}

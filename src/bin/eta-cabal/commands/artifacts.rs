//! `eta-cabal artifacts` command

use anyhow::Result;

use eta_cabal::core::predicate::{self, ArtifactPredicate};
use eta_cabal::layout;

use crate::cli::{ArtifactsArgs, KindFilter};

pub fn execute(args: ArtifactsArgs) -> Result<()> {
    let dir = super::project_dir(args.dir)?;
    let project = super::load_project(&dir)?;

    let selected: ArtifactPredicate = match args.kind {
        None => predicate::all(),
        Some(KindFilter::Lib) => predicate::is_library(),
        Some(KindFilter::Exe) => predicate::is_executable(),
        Some(KindFilter::Test) => predicate::is_test_suite(),
    };

    let paths = if args.all {
        layout::candidate_archives(&project, &args.build_root, &args.eta_version, selected)
    } else {
        layout::existing_archives(&project, &args.build_root, &args.eta_version, selected)
    };

    for path in paths {
        println!("{}", path.display());
    }
    Ok(())
}

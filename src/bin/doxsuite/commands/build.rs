//! `doxsuite build` command

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::cli::BuildArgs;
use doxsuite::core::{find_manifest, Suite};
use doxsuite::doxygen::Doxygen;
use doxsuite::ops::{build_docs, plan_docs};
use doxsuite::util::shell::{format_duration, Shell, Status};

pub fn execute(args: BuildArgs, verbose: bool, no_color: bool) -> Result<()> {
    let manifest_path = match args.manifest {
        Some(path) => path,
        None => find_manifest(&std::env::current_dir()?)?,
    };
    let suite = Suite::load(&manifest_path)?;

    if args.plan {
        let plan = plan_docs(&suite);
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    let timeout = (args.timeout != 0).then(|| Duration::from_secs(args.timeout));
    let doxygen = Doxygen::locate()?.with_timeout(timeout);

    let shell = Shell::from_flags(verbose, no_color);
    let start = Instant::now();

    let summary = build_docs(&suite, &doxygen, &shell)?;

    for docs in &summary.packages {
        shell.status(
            Status::Finished,
            format!("`{}` -> {}", docs.name, docs.html_dir.display()),
        );
    }
    shell.status(
        Status::Finished,
        format!(
            "{} package(s), entry page {} in {}",
            summary.packages.len(),
            summary.entry_page.display(),
            format_duration(start.elapsed())
        ),
    );

    Ok(())
}

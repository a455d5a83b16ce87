//! `doxsuite clean` command

use anyhow::Result;

use crate::cli::CleanArgs;
use doxsuite::core::{find_manifest, Suite};
use doxsuite::util::fs::remove_dir_all_if_exists;
use doxsuite::util::shell::{Shell, Status};

pub fn execute(args: CleanArgs, verbose: bool, no_color: bool) -> Result<()> {
    let manifest_path = match args.manifest {
        Some(path) => path,
        None => find_manifest(&std::env::current_dir()?)?,
    };
    let suite = Suite::load(&manifest_path)?;

    remove_dir_all_if_exists(suite.build_dir())?;

    let shell = Shell::from_flags(verbose, no_color);
    shell.status(Status::Removed, suite.build_dir().display());

    Ok(())
}

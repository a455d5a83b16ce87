//! `doxsuite init` command

use anyhow::{anyhow, Result};

use crate::cli::InitArgs;
use doxsuite::ops::init_suite;
use doxsuite::util::shell::{Shell, Status};

pub fn execute(args: InitArgs, verbose: bool, no_color: bool) -> Result<()> {
    let dir = match args.path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    let name = match args.name {
        Some(name) => name,
        None => dir
            .canonicalize()?
            .file_name()
            .and_then(|n| n.to_str().map(String::from))
            .ok_or_else(|| anyhow!("cannot derive a suite name from `{}`", dir.display()))?,
    };

    let manifest = init_suite(&dir, &name)?;

    let shell = Shell::from_flags(verbose, no_color);
    shell.status(Status::Created, manifest.display());

    Ok(())
}

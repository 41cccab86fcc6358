//! `pkgq exists` command

use anyhow::Result;

use crate::cli::ExistsArgs;
use pkgq::PkgConfig;

pub fn execute(client: &PkgConfig, args: ExistsArgs) -> Result<()> {
    // Mirror the underlying tool: no output, exit status carries the
    // answer.
    if !client.package_exists(&args.name)? {
        std::process::exit(1);
    }

    Ok(())
}

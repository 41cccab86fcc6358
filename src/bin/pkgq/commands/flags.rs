//! `pkgq flags` command

use anyhow::{anyhow, Result};

use crate::cli::FlagsArgs;
use pkgq::PkgConfig;

pub fn execute(client: &PkgConfig, args: FlagsArgs) -> Result<()> {
    let package = client
        .describe_package(&args.name)?
        .ok_or_else(|| anyhow!("package `{}` is not registered", args.name))?;

    // With neither filter given, print both.
    let both = !args.cflags && !args.libs;

    if args.cflags || both {
        println!("{}", package.cflags);
    }

    if args.libs || both {
        println!("{}", package.lflags);
    }

    Ok(())
}

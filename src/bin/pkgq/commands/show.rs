//! `pkgq show` command

use anyhow::{anyhow, Result};

use crate::cli::ShowArgs;
use pkgq::PkgConfig;

pub fn execute(client: &PkgConfig, args: ShowArgs) -> Result<()> {
    let package = client
        .describe_package(&args.name)?
        .ok_or_else(|| anyhow!("package `{}` is not registered", args.name))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&package)?);
        return Ok(());
    }

    println!("name: {}", package.name);
    println!("description: {}", package.description);
    println!("cflags: {}", package.cflags);
    println!("lflags: {}", package.lflags);

    if !package.provides.is_empty() {
        println!("provides:");
        for resource in &package.provides {
            println!("  {}", resource);
        }
    }

    if !package.requires.is_empty() {
        println!("requires:");
        for resource in &package.requires {
            println!("  {}", resource);
        }
    }

    Ok(())
}

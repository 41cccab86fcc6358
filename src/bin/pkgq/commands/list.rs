//! `pkgq list` command

use anyhow::Result;

use crate::cli::ListArgs;
use pkgq::PkgConfig;

pub fn execute(client: &PkgConfig, args: ListArgs) -> Result<()> {
    let packages = client.list_available_packages()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&packages)?);
        return Ok(());
    }

    for package in &packages {
        if package.description.is_empty() {
            println!("{}", package.name);
        } else {
            println!("{:<32} {}", package.name, package.description);
        }
    }

    Ok(())
}

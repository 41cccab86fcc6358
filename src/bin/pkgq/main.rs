//! pkgq CLI - query the system pkg-config registry

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use pkgq::{ClientConfig, PkgConfig};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("pkgq=debug")
    } else {
        EnvFilter::new("pkgq=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let client = build_client(&cli);

    // Execute command
    match cli.command {
        Commands::List(args) => commands::list::execute(&client, args),
        Commands::Exists(args) => commands::exists::execute(&client, args),
        Commands::Show(args) => commands::show::execute(&client, args),
        Commands::Flags(args) => commands::flags::execute(&client, args),
    }
}

fn build_client(cli: &Cli) -> PkgConfig {
    PkgConfig::new(ClientConfig {
        path: cli.pkg_config.clone(),
        timeout: cli.timeout.map(Duration::from_secs),
        ..ClientConfig::default()
    })
}

//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// pkgq - query the system pkg-config registry
#[derive(Parser)]
#[command(name = "pkgq")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the pkg-config executable
    #[arg(long, global = true, env = "PKGQ_PKG_CONFIG")]
    pub pkg_config: Option<PathBuf>,

    /// Deadline in seconds for each registry invocation
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every registered package with its description
    List(ListArgs),

    /// Check whether a package is registered (exit status 0/1)
    Exists(ExistsArgs),

    /// Show the full resolved metadata for a package
    Show(ShowArgs),

    /// Print compiler/linker flags for a package
    Flags(FlagsArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Emit machine-readable JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ExistsArgs {
    /// Package name
    pub name: String,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Package name
    pub name: String,

    /// Emit machine-readable JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct FlagsArgs {
    /// Package name
    pub name: String,

    /// Show compile flags only
    #[arg(long)]
    pub cflags: bool,

    /// Show link flags only
    #[arg(long)]
    pub libs: bool,
}

//! # CLI Argument Definitions
//!
//! Command-line structure of `toolwheel`, parsed with `clap`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "toolwheel")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Packages prebuilt compiler tools as platform wheels")]
pub struct Cli {
    /// Log at DEBUG level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write logs to a rolling file in this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build the platform-locked wheel and print its path
    Package(PackageArgs),
    /// List benchmark models of a group (small, large, all)
    Models {
        /// Group name; defaults to every declared group
        group: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the host platform, executable suffix and wheel tag
    Platform {},
}

/// Flags of `toolwheel package`. Each one overrides the configuration file
/// and the `TOOLWHEEL__*` environment.
#[derive(Debug, Args)]
pub struct PackageArgs {
    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding the namespace package tree
    #[arg(long, value_name = "DIR")]
    pub package_dir: Option<PathBuf>,

    /// Directory holding version_info.json (defaults to four levels above the package dir)
    #[arg(long, value_name = "DIR")]
    pub project_root: Option<PathBuf>,

    /// Output directory of the archive
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Target platform as <os>-<arch> (e.g., linux-x86_64, macos-arm64)
    #[arg(long)]
    pub platform: Option<String>,

    /// Explicit wheel platform tag (e.g., manylinux2014_x86_64)
    #[arg(long)]
    pub plat_name: Option<String>,
}

#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(clippy::print_stdout, clippy::print_stderr)]

pub mod handlers;
pub mod models;

use crate::handlers::{models as model_groups, package, platform};
use crate::models::args::{Cli, Commands};

use anyhow::Result;
use clap::Parser;
use tw_logger::{LevelFilter, Logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };
    let builder = Logger::builder().name(env!("CARGO_BIN_NAME")).level(level);
    let _log = match &cli.log_dir {
        Some(dir) => builder.file(dir.clone()).init()?,
        None => builder.init()?,
    };

    match cli.command {
        Commands::Package(args) => package::run(&args)?,
        Commands::Models { group, json } => model_groups::list(group.as_deref(), json)?,
        Commands::Platform {} => platform::show()?,
    }

    Ok(())
}

mod cli;
mod config;
mod convert;
mod dates_cmd;
mod diff_cmd;
mod import_cmd;
mod logging;
mod pipeline;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Import(args) => import_cmd::run(args),
        Command::Diff(args) => diff_cmd::run(args),
        Command::Dates(args) => dates_cmd::run(args),
    }
}

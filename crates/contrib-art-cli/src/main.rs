//! contrib-art CLI - Command-line interface for contribution-graph text art
//!
//! This binary plans, previews, and paints words onto a 52x7 contribution
//! graph by writing backdated git commits.

use clap::Parser;
use std::process::ExitCode;

// Use modules from the library crate
use contrib_art_cli::commands;

mod cli_args;

use cli_args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Plan { placement, json } => commands::plan::run(&placement.into(), json),
        Commands::Preview { placement, json } => commands::preview::run(&placement.into(), json),
        Commands::Paint {
            placement,
            repo,
            json,
        } => commands::paint::run(&placement.into(), &repo.into(), json),
        Commands::Doctor { repo } => commands::doctor::run(&repo),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

//! Car assist CLI - inspect and edit head unit preferences
//!
//! Reads and writes the same key-value layout the head unit persists, so a
//! preference file can be checked or prepared off the vehicle.

mod cli;
mod commands;
mod config;
mod error;

use clap::{CommandFactory, Parser};

use crate::cli::{Cli, Commands};
use crate::commands::completions::run_completions;
use crate::commands::export::run_export;
use crate::commands::get::run_get;
use crate::commands::import::run_import;
use crate::commands::keys::run_keys;
use crate::commands::reset::run_reset;
use crate::commands::set::run_set;
use crate::commands::show::run_show;
use crate::config::resolve_db_path;
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("carassist=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let db_path = resolve_db_path(cli.db_path);
    tracing::debug!(path = %db_path.display(), "Using preference database");

    match cli.command {
        Some(Commands::Show { json }) => run_show(json, &db_path)?,
        Some(Commands::Get { key }) => run_get(&key, &db_path)?,
        Some(Commands::Set { key, value }) => run_set(&key, &value, &db_path)?,
        Some(Commands::Reset) => run_reset(&db_path)?,
        Some(Commands::Keys) => run_keys()?,
        Some(Commands::Export { output }) => run_export(output.as_deref(), &db_path)?,
        Some(Commands::Import { path }) => run_import(&path, &db_path)?,
        Some(Commands::Completions { shell, output }) => {
            run_completions(shell, output.as_deref())?;
        }
        None => {
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}

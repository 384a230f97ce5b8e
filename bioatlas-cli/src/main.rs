//! bioatlas - bulk species import for the campus biodiversity catalogue
//!
//! ```bash
//! # Upload a filled-in sheet
//! bioatlas import birds.xlsx --category birds
//!
//! # Check the mapping without sending anything
//! bioatlas import bats.csv --category bats --dry-run
//!
//! # Blank sheet with the right columns for a category
//! bioatlas template trees --output trees.xlsx
//! ```

mod api;
mod cli;
mod config;
mod import;
mod species;

use clap::Parser;
use colored::*;

use cli::Cli;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = cli::run(cli).await {
        eprintln!("{} {:#}", "Error:".bright_red().bold(), e);
        std::process::exit(1);
    }
}

//! Command-line interface

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use commands::import::ImportCommands;
use commands::template::TemplateCommands;

#[derive(Parser)]
#[command(name = "bioatlas")]
#[command(about = "Bulk-import species spreadsheets into the biodiversity catalogue")]
#[command(version)]
pub struct Cli {
    /// Log progress (info level) unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use instead of ~/.config/bioatlas/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upload a species spreadsheet
    Import(ImportCommands),
    /// Write a blank spreadsheet with a category's columns
    Template(TemplateCommands),
    /// List supported categories
    Categories,
    /// Show the file id and image URLs for a shareable drive link
    Drive {
        /// Shareable link copied from the drive
        link: String,
    },
}

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Import(args) => {
            let config = Config::load(cli.config.as_deref())?;
            commands::import::handler::handle_import_command(args, &config).await
        }
        Commands::Template(args) => commands::template::handler::handle_template_command(args),
        Commands::Categories => {
            commands::categories::handle_categories_command();
            Ok(())
        }
        Commands::Drive { link } => {
            let config = Config::load(cli.config.as_deref())?;
            commands::drive::handle_drive_command(&link, &config)
        }
    }
}

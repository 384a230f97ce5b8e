pub mod handler;

use std::path::PathBuf;

use clap::{Args, ValueEnum};

#[derive(Args)]
pub struct ImportCommands {
    /// Spreadsheet to upload (.xlsx, .xls, .xlsb, .ods or .csv)
    pub file: PathBuf,

    /// Species category of every row in the file
    #[arg(short, long)]
    pub category: String,

    /// Records per insert request (overrides config)
    #[arg(short, long)]
    pub batch_size: Option<usize>,

    /// Target table (overrides config)
    #[arg(short, long)]
    pub table: Option<String>,

    /// Map the sheet and print the records without uploading
    #[arg(long)]
    pub dry_run: bool,

    /// Print the result as JSON
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Json,
    JsonCompact,
}

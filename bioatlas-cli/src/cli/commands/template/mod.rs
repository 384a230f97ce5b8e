pub mod handler;

use std::path::PathBuf;

use clap::Args;

#[derive(Args)]
pub struct TemplateCommands {
    /// Category whose column layout the template follows
    pub category: String,

    /// Where to write the workbook
    #[arg(short, long)]
    pub output: PathBuf,

    /// Overwrite the output file if it exists
    #[arg(long)]
    pub force: bool,
}

//! Write a header-only workbook for a category

use anyhow::{Context, Result, bail};
use colored::*;
use rust_xlsxwriter::{Format, Workbook};

use super::TemplateCommands;
use crate::cli::commands::parse_category;
use crate::species::Category;

const COLUMN_WIDTH: f64 = 22.0;

pub fn handle_template_command(args: TemplateCommands) -> Result<()> {
    let category = parse_category(&args.category)?;

    if args.output.exists() && !args.force {
        bail!(
            "Output file already exists: {} (use --force to overwrite)",
            args.output.display()
        );
    }

    let bytes = build_template(category)?;
    std::fs::write(&args.output, bytes)
        .with_context(|| format!("Failed to write template: {}", args.output.display()))?;

    println!(
        "Wrote {} template to {}",
        category.to_string().bold(),
        args.output.display().to_string().bright_green()
    );
    Ok(())
}

/// Header row at the positions the importer reads for `category`
pub fn build_template(category: Category) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(category.label())?;

    let bold = Format::new().set_bold();
    for (col, header) in category.layout().headers().iter().enumerate() {
        let col = col as u16;
        worksheet.set_column_width(col, COLUMN_WIDTH)?;
        if !header.is_empty() {
            worksheet.write_string_with_format(0, col, *header, &bold)?;
        }
    }
    worksheet.set_freeze_panes(1, 0)?;

    workbook
        .save_to_buffer()
        .context("Failed to build template workbook")
}

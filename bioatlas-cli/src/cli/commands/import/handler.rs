//! Import command handler

use anyhow::{Context, Result, bail};
use colored::*;
use log::info;
use serde::Serialize;
use std::time::{Duration, Instant};

use super::{ImportCommands, OutputFormat};
use crate::api::{PreviewSink, RestClient};
use crate::cli::commands::parse_category;
use crate::config::Config;
use crate::import::{BatchUploadResult, run_import};

pub async fn handle_import_command(args: ImportCommands, config: &Config) -> Result<()> {
    let category = parse_category(&args.category)?;

    if !args.file.exists() {
        bail!("File does not exist: {}", args.file.display());
    }

    let mut batch_config = config.batch_config();
    if let Some(size) = args.batch_size {
        if size == 0 {
            bail!("--batch-size must be greater than 0");
        }
        batch_config.batch_size = size;
    }

    let start = Instant::now();
    let result = if args.dry_run {
        batch_config.delay = Duration::ZERO;
        run_import(&args.file, category.key(), &PreviewSink, &batch_config).await
    } else {
        let mut backend = config.backend.clone();
        if let Some(table) = args.table {
            backend.table = table;
        }
        let client = RestClient::new(&backend)?;
        info!("Uploading {} to {}", args.file.display(), client.endpoint());
        run_import(&args.file, category.key(), &client, &batch_config).await
    }
    .with_context(|| format!("Failed to import {}", args.file.display()))?;
    info!("Import took {:.2}s", start.elapsed().as_secs_f64());

    if args.dry_run && result.success {
        let format = args.format.unwrap_or(OutputFormat::Json);
        println!("{}", preview_output(&result, format)?);
        eprintln!(
            "{}",
            format!(
                "Dry run: {} {} records mapped, nothing was uploaded",
                result.inserted_count, category
            )
            .dimmed()
        );
        return Ok(());
    }

    report(&result, args.format)
}

/// Print the upload outcome; fails the command when anything was not inserted
fn report(result: &BatchUploadResult, format: Option<OutputFormat>) -> Result<()> {
    match format {
        Some(format) => println!("{}", format_output(result, format)?),
        None => {
            if result.success {
                println!(
                    "{} Inserted {} records",
                    "✓".bright_green(),
                    result.inserted_count.to_string().bright_green().bold()
                );
            } else {
                if result.is_partial() {
                    println!(
                        "{} Inserted {} records before errors",
                        "!".yellow(),
                        result.inserted_count.to_string().yellow().bold()
                    );
                }
                for error in &result.errors {
                    println!("{} {}", "✗".bright_red(), error);
                }
            }
        }
    }

    if !result.success {
        bail!(
            "Upload failed with {} error{}",
            result.errors.len(),
            if result.errors.len() == 1 { "" } else { "s" }
        );
    }
    Ok(())
}

/// Mapped rows of a dry run, as JSON only
fn preview_output(result: &BatchUploadResult, format: OutputFormat) -> Result<String> {
    let rows = result.data.as_deref().unwrap_or_default();
    format_output(rows, format)
}

fn format_output<T: Serialize + ?Sized>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(data).context("Failed to format JSON output")
        }
        OutputFormat::JsonCompact => {
            serde_json::to_string(data).context("Failed to format JSON output")
        }
    }
}

//! Inspect a shareable drive link

use anyhow::{Result, bail};
use colored::*;

use crate::config::Config;
use crate::import::drive::{
    direct_download_url, extract_drive_id, is_drive_link, preview_url, thumbnail_url,
};

pub fn handle_drive_command(link: &str, config: &Config) -> Result<()> {
    let Some(id) = extract_drive_id(link) else {
        bail!("No file id found in link: {}", link);
    };

    if !is_drive_link(link) {
        println!(
            "{}",
            "Warning: link is not on drive.google.com, the id may not resolve".yellow()
        );
    }

    println!("{:<10} {}", "File id:".bold(), id.bright_green());
    println!(
        "{:<10} {}",
        "Thumbnail:".bold(),
        thumbnail_url(&id, config.images.thumbnail_width)
    );
    println!("{:<10} {}", "Preview:".bold(), preview_url(&id));
    println!("{:<10} {}", "Download:".bold(), direct_download_url(&id));
    Ok(())
}

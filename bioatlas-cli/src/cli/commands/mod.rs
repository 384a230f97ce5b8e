pub mod categories;
pub mod drive;
pub mod import;
pub mod template;

use anyhow::{Result, anyhow};

use crate::species::Category;

/// Parse a category argument, suggesting the closest name on a typo
pub fn parse_category(input: &str) -> Result<Category> {
    input.parse::<Category>().map_err(|e| match Category::suggest(input) {
        Some(suggestion) => anyhow!("{} (did you mean '{}'?)", e, suggestion.key()),
        None => anyhow!(
            "{} (supported: {})",
            e,
            Category::all_variants()
                .iter()
                .map(|c| c.key())
                .collect::<Vec<_>>()
                .join(", ")
        ),
    })
}

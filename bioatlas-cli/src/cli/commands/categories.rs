//! List supported categories

use colored::*;

use crate::species::Category;

pub fn handle_categories_command() {
    println!("{}", "Supported categories:".bold());
    for category in Category::all_variants() {
        let layout = category.layout();
        println!(
            "  {:<14} {:<20} {} columns, image link in column {}",
            category.key().cyan(),
            category.family().label().dimmed(),
            layout.headers().len(),
            layout.image_link + 1
        );
    }
}

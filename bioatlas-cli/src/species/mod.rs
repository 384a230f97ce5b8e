//! Species domain types: categories, spreadsheet layouts and upload records

pub mod category;
pub mod layout;
pub mod record;

pub use category::Category;
pub use layout::{ColumnLayout, DetailsColumns, NameColumn};
pub use record::{
    EndemicFaunaDetails, FaunaDetails, FloraDetails, SpeciesDetails, SpeciesRow, Taxonomy,
    UploadRecord,
};

//! Species records produced by the bulk-import mapper

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use super::category::Category;

/// Taxonomic ranks, flattened into the record when serialised
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Taxonomy {
    pub kingdom: String,
    pub phylum: String,
    pub class: String,
    pub order: String,
    pub family: String,
    pub genus: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaunaDetails {
    pub diet: String,
    pub distribution: String,
    pub habitats: String,
    pub conservation_status: String,
    pub ecological_importance: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndemicFaunaDetails {
    pub diet: String,
    pub distribution: String,
    pub habitats: String,
    pub conservation_status: String,
    pub ecological_importance: String,
    /// Stored as null when the sheet leaves it blank
    pub endemism: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FloraDetails {
    pub endemism: String,
    pub distribution: String,
    pub conservation_status: String,
    pub economical_importance: String,
}

/// Category-specific `details` object of a species row.
///
/// Untagged: the shape alone identifies the variant in the stored JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SpeciesDetails {
    Fauna(FaunaDetails),
    EndemicFauna(EndemicFaunaDetails),
    Flora(FloraDetails),
    /// Serialises as `{}`
    Unspecified {},
}

/// One species mapped from a spreadsheet row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRecord {
    /// Bare file id of the species photo, if the image link had one
    pub gdriveid: Option<String>,
    pub category: Category,
    pub common_name: String,
    pub scientific_name: String,
    #[serde(flatten)]
    pub taxonomy: Taxonomy,
    pub description: String,
    pub details: SpeciesDetails,
}

/// Record as sent to the species table, with insert timestamps
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeciesRow {
    #[serde(flatten)]
    pub record: UploadRecord,
    pub created_at: String,
    pub updated_at: String,
}

impl SpeciesRow {
    pub fn stamped(record: UploadRecord, at: DateTime<Utc>) -> Self {
        let timestamp = at.to_rfc3339_opts(SecondsFormat::Millis, true);
        Self {
            record,
            created_at: timestamp.clone(),
            updated_at: timestamp,
        }
    }
}

//! Species categories supported by bulk import

use std::fmt;
use std::str::FromStr;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use serde::Serialize;

use super::layout::ColumnLayout;
use crate::import::ImportError;

/// Biological grouping that decides the spreadsheet layout of an upload.
///
/// Serialises to the label stored in the `category` column of the species
/// table, which is what the dashboard's category selector produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Birds,
    Bats,
    Butterfly,
    Damselfly,
    Dragonfly,
    Frogs,
    Trees,
    Mangroves,
    #[serde(rename = "Macro_Inverts")]
    MacroInverts,
}

/// Coarse grouping of categories, mirroring the dashboard's detail forms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Animals,
    Insects,
    Plants,
    MacroInvertebrates,
}

impl Family {
    pub fn label(&self) -> &'static str {
        match self {
            Family::Animals => "Animals",
            Family::Insects => "Insects",
            Family::Plants => "Plants",
            Family::MacroInvertebrates => "Macro-invertebrates",
        }
    }
}

impl Category {
    /// Selector key, compared case-insensitively when parsing
    pub fn key(&self) -> &'static str {
        match self {
            Category::Birds => "birds",
            Category::Bats => "bats",
            Category::Butterfly => "butterfly",
            Category::Damselfly => "damselfly",
            Category::Dragonfly => "dragonfly",
            Category::Frogs => "frogs",
            Category::Trees => "trees",
            Category::Mangroves => "mangroves",
            Category::MacroInverts => "macro_inverts",
        }
    }

    /// Label persisted with every record
    pub fn label(&self) -> &'static str {
        match self {
            Category::Birds => "Birds",
            Category::Bats => "Bats",
            Category::Butterfly => "Butterfly",
            Category::Damselfly => "Damselfly",
            Category::Dragonfly => "Dragonfly",
            Category::Frogs => "Frogs",
            Category::Trees => "Trees",
            Category::Mangroves => "Mangroves",
            Category::MacroInverts => "Macro_Inverts",
        }
    }

    pub fn all_variants() -> &'static [Category] {
        &[
            Category::Birds,
            Category::Bats,
            Category::Butterfly,
            Category::Damselfly,
            Category::Dragonfly,
            Category::Frogs,
            Category::Trees,
            Category::Mangroves,
            Category::MacroInverts,
        ]
    }

    pub fn family(&self) -> Family {
        match self {
            Category::Birds | Category::Frogs | Category::Bats => Family::Animals,
            Category::Butterfly | Category::Damselfly | Category::Dragonfly => Family::Insects,
            Category::Trees | Category::Mangroves => Family::Plants,
            Category::MacroInverts => Family::MacroInvertebrates,
        }
    }

    /// Fixed column layout of this category's spreadsheet
    pub fn layout(&self) -> &'static ColumnLayout {
        ColumnLayout::for_category(*self)
    }

    /// Closest supported category for a mistyped selector, if any is close enough
    pub fn suggest(input: &str) -> Option<Category> {
        let needle = input.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        let matcher = SkimMatcherV2::default();
        Category::all_variants()
            .iter()
            .filter_map(|category| {
                let key = category.key();
                let forward = matcher.fuzzy_match(key, &needle);
                let backward = matcher.fuzzy_match(&needle, key);
                forward.max(backward).map(|score| (score, *category))
            })
            .max_by_key(|(score, _)| *score)
            .map(|(_, category)| category)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::all_variants()
            .iter()
            .copied()
            .find(|category| category.key() == wanted)
            .ok_or_else(|| ImportError::UnsupportedCategory(s.trim().to_string()))
    }
}

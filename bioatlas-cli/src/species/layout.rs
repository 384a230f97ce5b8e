//! Positional column layouts of the bulk-upload spreadsheets
//!
//! Each category ships its own template with columns in a fixed order, and
//! rows are read strictly by position; header text is never consulted.
//! Layouts are not uniform: birds keep the description in column 8 and diet
//! in column 9, while bats move distribution to column 8 and the description
//! to column 12. Indices are 0-based.

use super::category::Category;

/// Where a record's common name comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameColumn {
    /// Read from this column
    At(usize),
    /// Not present in the sheet; every record gets this value
    Fixed(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxonomyColumns {
    pub kingdom: usize,
    pub phylum: usize,
    pub class: usize,
    pub order: usize,
    pub family: usize,
    pub genus: usize,
}

/// Details of birds and frogs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaunaColumns {
    pub diet: usize,
    pub distribution: usize,
    pub habitats: usize,
    pub conservation_status: usize,
    pub ecological_importance: usize,
}

/// Details of bats and the winged insects, which also record endemism
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndemicFaunaColumns {
    pub diet: usize,
    pub distribution: usize,
    pub habitats: usize,
    pub conservation_status: usize,
    pub ecological_importance: usize,
    pub endemism: usize,
}

/// Details of trees and mangroves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloraColumns {
    pub endemism: usize,
    pub distribution: usize,
    pub conservation_status: usize,
    pub economical_importance: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailsColumns {
    Fauna(FaunaColumns),
    EndemicFauna(EndemicFaunaColumns),
    Flora(FloraColumns),
    /// The category records no details
    Unspecified,
}

/// Column positions of one category's spreadsheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub scientific_name: usize,
    pub common_name: NameColumn,
    pub taxonomy: TaxonomyColumns,
    pub description: usize,
    pub details: DetailsColumns,
    /// Shareable image link, reduced to a bare file id during mapping
    pub image_link: usize,
    /// Rows with a blank cell here are skipped
    pub identifying: usize,
}

const RANKS_FROM_2: TaxonomyColumns = TaxonomyColumns {
    kingdom: 2,
    phylum: 3,
    class: 4,
    order: 5,
    family: 6,
    genus: 7,
};

const RANKS_FROM_1: TaxonomyColumns = TaxonomyColumns {
    kingdom: 1,
    phylum: 2,
    class: 3,
    order: 4,
    family: 5,
    genus: 6,
};

const ENDEMIC_FAUNA: EndemicFaunaColumns = EndemicFaunaColumns {
    distribution: 8,
    conservation_status: 9,
    diet: 10,
    endemism: 11,
    habitats: 13,
    ecological_importance: 14,
};

const BIRDS: ColumnLayout = ColumnLayout {
    scientific_name: 0,
    common_name: NameColumn::At(1),
    taxonomy: RANKS_FROM_2,
    description: 8,
    details: DetailsColumns::Fauna(FaunaColumns {
        diet: 9,
        distribution: 10,
        habitats: 11,
        conservation_status: 12,
        ecological_importance: 13,
    }),
    image_link: 14,
    identifying: 1,
};

const BATS: ColumnLayout = ColumnLayout {
    scientific_name: 0,
    common_name: NameColumn::At(1),
    taxonomy: RANKS_FROM_2,
    description: 12,
    details: DetailsColumns::EndemicFauna(ENDEMIC_FAUNA),
    image_link: 15,
    identifying: 1,
};

const BUTTERFLY: ColumnLayout = ColumnLayout {
    image_link: 16,
    ..BATS
};

const DAMSELFLY: ColumnLayout = BATS;

const DRAGONFLY: ColumnLayout = BATS;

const FROGS: ColumnLayout = ColumnLayout {
    scientific_name: 0,
    common_name: NameColumn::At(1),
    taxonomy: RANKS_FROM_2,
    description: 10,
    details: DetailsColumns::Fauna(FaunaColumns {
        distribution: 8,
        conservation_status: 9,
        diet: 11,
        habitats: 12,
        ecological_importance: 13,
    }),
    image_link: 15,
    identifying: 1,
};

// Trees swap the two name columns
const TREES: ColumnLayout = ColumnLayout {
    scientific_name: 1,
    common_name: NameColumn::At(0),
    taxonomy: RANKS_FROM_2,
    description: 11,
    details: DetailsColumns::Flora(FloraColumns {
        conservation_status: 8,
        endemism: 9,
        distribution: 10,
        economical_importance: 12,
    }),
    image_link: 16,
    identifying: 0,
};

const MANGROVES: ColumnLayout = ColumnLayout {
    scientific_name: 0,
    common_name: NameColumn::At(1),
    taxonomy: RANKS_FROM_2,
    description: 11,
    details: DetailsColumns::Flora(FloraColumns {
        distribution: 8,
        conservation_status: 9,
        endemism: 10,
        economical_importance: 12,
    }),
    image_link: 15,
    identifying: 1,
};

const MACRO_INVERTS: ColumnLayout = ColumnLayout {
    scientific_name: 0,
    common_name: NameColumn::Fixed("Macro Inverts"),
    taxonomy: RANKS_FROM_1,
    description: 7,
    details: DetailsColumns::Unspecified,
    image_link: 8,
    identifying: 0,
};

impl ColumnLayout {
    pub fn for_category(category: Category) -> &'static ColumnLayout {
        match category {
            Category::Birds => &BIRDS,
            Category::Bats => &BATS,
            Category::Butterfly => &BUTTERFLY,
            Category::Damselfly => &DAMSELFLY,
            Category::Dragonfly => &DRAGONFLY,
            Category::Frogs => &FROGS,
            Category::Trees => &TREES,
            Category::Mangroves => &MANGROVES,
            Category::MacroInverts => &MACRO_INVERTS,
        }
    }

    /// Every mapped column with its template header, sorted by position
    pub fn columns(&self) -> Vec<(usize, &'static str)> {
        let mut columns = vec![(self.scientific_name, "Scientific Name")];
        if let NameColumn::At(idx) = self.common_name {
            columns.push((idx, "Common Name"));
        }

        let ranks = &self.taxonomy;
        columns.extend([
            (ranks.kingdom, "Kingdom"),
            (ranks.phylum, "Phylum"),
            (ranks.class, "Class"),
            (ranks.order, "Order"),
            (ranks.family, "Family"),
            (ranks.genus, "Genus"),
            (self.description, "Description"),
        ]);

        match self.details {
            DetailsColumns::Fauna(d) => columns.extend([
                (d.diet, "Diet"),
                (d.distribution, "Distribution"),
                (d.habitats, "Habitats"),
                (d.conservation_status, "Conservation Status"),
                (d.ecological_importance, "Ecological Importance"),
            ]),
            DetailsColumns::EndemicFauna(d) => columns.extend([
                (d.diet, "Diet"),
                (d.distribution, "Distribution"),
                (d.habitats, "Habitats"),
                (d.conservation_status, "Conservation Status"),
                (d.ecological_importance, "Ecological Importance"),
                (d.endemism, "Endemism"),
            ]),
            DetailsColumns::Flora(d) => columns.extend([
                (d.endemism, "Endemism"),
                (d.distribution, "Distribution"),
                (d.conservation_status, "Conservation Status"),
                (d.economical_importance, "Economical Importance"),
            ]),
            DetailsColumns::Unspecified => {}
        }

        columns.push((self.image_link, "Image Link"));
        columns.sort_by_key(|(idx, _)| *idx);
        columns
    }

    /// Header row for a blank template; unused positions are left empty
    pub fn headers(&self) -> Vec<&'static str> {
        let columns = self.columns();
        let width = columns.last().map(|(idx, _)| idx + 1).unwrap_or(0);
        let mut headers = vec![""; width];
        for (idx, name) in columns {
            headers[idx] = name;
        }
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_layout_maps_two_fields_to_one_column() {
        for category in Category::all_variants() {
            let columns = category.layout().columns();
            for pair in columns.windows(2) {
                assert_ne!(
                    pair[0].0, pair[1].0,
                    "{} maps '{}' and '{}' to the same column",
                    category, pair[0].1, pair[1].1
                );
            }
        }
    }

    #[test]
    fn test_identifying_column_is_the_common_name_when_read_from_sheet() {
        for category in Category::all_variants() {
            let layout = category.layout();
            match layout.common_name {
                NameColumn::At(idx) => assert_eq!(layout.identifying, idx, "{}", category),
                NameColumn::Fixed(_) => {
                    assert_eq!(layout.identifying, layout.scientific_name, "{}", category)
                }
            }
        }
    }

    #[test]
    fn test_birds_layout() {
        let layout = Category::Birds.layout();
        assert_eq!(layout.description, 8);
        assert_eq!(layout.image_link, 14);
        match layout.details {
            DetailsColumns::Fauna(d) => assert_eq!(d.diet, 9),
            other => panic!("unexpected details layout: {:?}", other),
        }
    }

    #[test]
    fn test_bats_layout() {
        let layout = Category::Bats.layout();
        assert_eq!(layout.description, 12);
        match layout.details {
            DetailsColumns::EndemicFauna(d) => {
                assert_eq!(d.distribution, 8);
                assert_eq!(d.endemism, 11);
            }
            other => panic!("unexpected details layout: {:?}", other),
        }
    }

    #[test]
    fn test_image_columns() {
        let expected = [
            (Category::Birds, 14),
            (Category::Bats, 15),
            (Category::Butterfly, 16),
            (Category::Damselfly, 15),
            (Category::Dragonfly, 15),
            (Category::Frogs, 15),
            (Category::Trees, 16),
            (Category::Mangroves, 15),
            (Category::MacroInverts, 8),
        ];
        for (category, column) in expected {
            assert_eq!(category.layout().image_link, column, "{}", category);
        }
    }

    #[test]
    fn test_headers_fill_gaps() {
        // Butterfly leaves column 15 unused before the image link
        let headers = Category::Butterfly.layout().headers();
        assert_eq!(headers.len(), 17);
        assert_eq!(headers[0], "Scientific Name");
        assert_eq!(headers[15], "");
        assert_eq!(headers[16], "Image Link");

        let headers = Category::MacroInverts.layout().headers();
        assert_eq!(headers.len(), 9);
        assert!(!headers.contains(&"Common Name"));
    }
}

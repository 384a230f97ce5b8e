//! Map raw spreadsheet rows to species records using the category's layout

use super::drive::extract_drive_id;
use super::sheet::RawRow;
use crate::species::{
    Category, ColumnLayout, DetailsColumns, EndemicFaunaDetails, FaunaDetails, FloraDetails,
    NameColumn, SpeciesDetails, Taxonomy, UploadRecord,
};

/// Map data rows (header already removed) to records.
///
/// Rows whose identifying cell is blank are skipped. Output order follows
/// input order.
pub fn map_rows<I>(rows: I, category: Category) -> Vec<UploadRecord>
where
    I: IntoIterator<Item = RawRow>,
{
    rows.into_iter()
        .filter_map(|row| map_row(&row, category))
        .collect()
}

/// Map a single row, or `None` when its identifying cell is blank
pub fn map_row(row: &RawRow, category: Category) -> Option<UploadRecord> {
    let layout = category.layout();
    if row.cell(layout.identifying).is_blank() {
        return None;
    }

    let common_name = match layout.common_name {
        NameColumn::At(idx) => row.text(idx),
        NameColumn::Fixed(name) => name.to_string(),
    };

    Some(UploadRecord {
        gdriveid: extract_drive_id(&row.cell(layout.image_link).to_text()),
        category,
        common_name,
        scientific_name: row.text(layout.scientific_name),
        taxonomy: map_taxonomy(row, layout),
        description: row.text(layout.description),
        details: map_details(row, &layout.details),
    })
}

fn map_taxonomy(row: &RawRow, layout: &ColumnLayout) -> Taxonomy {
    let ranks = &layout.taxonomy;
    Taxonomy {
        kingdom: row.text(ranks.kingdom),
        phylum: row.text(ranks.phylum),
        class: row.text(ranks.class),
        order: row.text(ranks.order),
        family: row.text(ranks.family),
        genus: row.text(ranks.genus),
    }
}

fn map_details(row: &RawRow, columns: &DetailsColumns) -> SpeciesDetails {
    match columns {
        DetailsColumns::Fauna(c) => SpeciesDetails::Fauna(FaunaDetails {
            diet: row.text(c.diet),
            distribution: row.text(c.distribution),
            habitats: row.text(c.habitats),
            conservation_status: row.text(c.conservation_status),
            ecological_importance: row.text(c.ecological_importance),
        }),
        DetailsColumns::EndemicFauna(c) => {
            let endemism = row.text(c.endemism);
            SpeciesDetails::EndemicFauna(EndemicFaunaDetails {
                diet: row.text(c.diet),
                distribution: row.text(c.distribution),
                habitats: row.text(c.habitats),
                conservation_status: row.text(c.conservation_status),
                ecological_importance: row.text(c.ecological_importance),
                endemism: (!endemism.is_empty()).then_some(endemism),
            })
        }
        DetailsColumns::Flora(c) => SpeciesDetails::Flora(FloraDetails {
            endemism: row.text(c.endemism),
            distribution: row.text(c.distribution),
            conservation_status: row.text(c.conservation_status),
            economical_importance: row.text(c.economical_importance),
        }),
        DetailsColumns::Unspecified => SpeciesDetails::Unspecified {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::sheet::cell::Cell;

    /// Row whose cell `i` reads `c<i>`, with a drive link in `link_col`
    fn labelled_row(width: usize, link_col: usize, link: &str) -> RawRow {
        (0..width)
            .map(|i| {
                if i == link_col {
                    link.to_string()
                } else {
                    format!("c{}", i)
                }
            })
            .collect()
    }

    fn with_blank(row: &RawRow, idx: usize, blank: &str) -> RawRow {
        let mut cells: Vec<Cell> = (0..20).map(|i| row.cell(i).clone()).collect();
        cells[idx] = if blank.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(blank.to_string())
        };
        RawRow::new(cells)
    }

    #[test]
    fn test_birds_field_positions() {
        let link = "https://drive.google.com/file/d/BirdPhoto_01/view?usp=sharing";
        let rows: Vec<RawRow> = (0..3).map(|_| labelled_row(15, 14, link)).collect();

        let records = map_rows(rows, Category::Birds);
        assert_eq!(records.len(), 3);
        for record in &records {
            assert_eq!(record.category, Category::Birds);
            assert_eq!(record.scientific_name, "c0");
            assert_eq!(record.common_name, "c1");
            assert_eq!(record.taxonomy.kingdom, "c2");
            assert_eq!(record.taxonomy.genus, "c7");
            assert_eq!(record.description, "c8");
            assert_eq!(record.gdriveid.as_deref(), Some("BirdPhoto_01"));
            match &record.details {
                SpeciesDetails::Fauna(d) => {
                    assert_eq!(d.diet, "c9");
                    assert_eq!(d.distribution, "c10");
                    assert_eq!(d.habitats, "c11");
                    assert_eq!(d.conservation_status, "c12");
                    assert_eq!(d.ecological_importance, "c13");
                }
                other => panic!("unexpected details: {:?}", other),
            }
        }
    }

    #[test]
    fn test_bats_field_positions() {
        let row = labelled_row(16, 15, "https://drive.google.com/open?id=BatPic");
        let record = map_row(&row, Category::Bats).unwrap();
        assert_eq!(record.description, "c12");
        assert_eq!(record.gdriveid.as_deref(), Some("BatPic"));
        match record.details {
            SpeciesDetails::EndemicFauna(d) => {
                assert_eq!(d.distribution, "c8");
                assert_eq!(d.conservation_status, "c9");
                assert_eq!(d.diet, "c10");
                assert_eq!(d.endemism.as_deref(), Some("c11"));
                assert_eq!(d.habitats, "c13");
                assert_eq!(d.ecological_importance, "c14");
            }
            other => panic!("unexpected details: {:?}", other),
        }
    }

    #[test]
    fn test_blank_endemism_is_none() {
        let row = with_blank(&labelled_row(17, 16, ""), 11, "  ");
        let record = map_row(&row, Category::Butterfly).unwrap();
        assert_eq!(record.gdriveid, None);
        match record.details {
            SpeciesDetails::EndemicFauna(d) => assert_eq!(d.endemism, None),
            other => panic!("unexpected details: {:?}", other),
        }
    }

    #[test]
    fn test_frogs_field_positions() {
        let row = labelled_row(16, 15, "");
        let record = map_row(&row, Category::Frogs).unwrap();
        assert_eq!(record.description, "c10");
        match record.details {
            SpeciesDetails::Fauna(d) => {
                assert_eq!(d.distribution, "c8");
                assert_eq!(d.conservation_status, "c9");
                assert_eq!(d.diet, "c11");
                assert_eq!(d.habitats, "c12");
                assert_eq!(d.ecological_importance, "c13");
            }
            other => panic!("unexpected details: {:?}", other),
        }
    }

    #[test]
    fn test_trees_swap_name_columns() {
        let row = labelled_row(17, 16, "https://drive.google.com/uc?id=TreeImg");
        let record = map_row(&row, Category::Trees).unwrap();
        assert_eq!(record.common_name, "c0");
        assert_eq!(record.scientific_name, "c1");
        assert_eq!(record.description, "c11");
        assert_eq!(record.gdriveid.as_deref(), Some("TreeImg"));
        assert_eq!(
            record.details,
            SpeciesDetails::Flora(FloraDetails {
                conservation_status: "c8".to_string(),
                endemism: "c9".to_string(),
                distribution: "c10".to_string(),
                economical_importance: "c12".to_string(),
            })
        );
    }

    #[test]
    fn test_mangroves_field_positions() {
        let row = labelled_row(16, 15, "");
        let record = map_row(&row, Category::Mangroves).unwrap();
        assert_eq!(record.common_name, "c1");
        assert_eq!(
            record.details,
            SpeciesDetails::Flora(FloraDetails {
                distribution: "c8".to_string(),
                conservation_status: "c9".to_string(),
                endemism: "c10".to_string(),
                economical_importance: "c12".to_string(),
            })
        );
    }

    #[test]
    fn test_macro_inverts_use_fixed_common_name() {
        let row = labelled_row(9, 8, "https://drive.google.com/file/d/Inv3rt/view");
        let record = map_row(&row, Category::MacroInverts).unwrap();
        assert_eq!(record.common_name, "Macro Inverts");
        assert_eq!(record.scientific_name, "c0");
        assert_eq!(record.taxonomy.kingdom, "c1");
        assert_eq!(record.taxonomy.genus, "c6");
        assert_eq!(record.description, "c7");
        assert_eq!(record.gdriveid.as_deref(), Some("Inv3rt"));
        assert_eq!(record.details, SpeciesDetails::Unspecified {});
    }

    #[test]
    fn test_rows_with_blank_identifying_cell_are_skipped_for_every_category() {
        for category in Category::all_variants() {
            let layout = category.layout();
            let full = labelled_row(17, layout.image_link, "");
            for blank in ["", "   ", "\t\n"] {
                let row = with_blank(&full, layout.identifying, blank);
                assert!(
                    map_row(&row, *category).is_none(),
                    "{} kept a row with blank identifying cell {:?}",
                    category,
                    blank
                );
            }
            assert!(map_row(&RawRow::empty(), *category).is_none());
            assert!(map_row(&full, *category).is_some());
        }
    }

    #[test]
    fn test_short_rows_default_to_empty_strings() {
        let row: RawRow = ["Pycnonotus goiavier", "Yellow-vented Bulbul"]
            .into_iter()
            .collect();
        let record = map_row(&row, Category::Birds).unwrap();
        assert_eq!(record.common_name, "Yellow-vented Bulbul");
        assert_eq!(record.description, "");
        assert_eq!(record.gdriveid, None);
    }

    #[test]
    fn test_numeric_cells_are_rendered_as_text() {
        let row = RawRow::new(vec![
            Cell::Text("Hoplobatrachus rugulosus".to_string()),
            Cell::Text("Rugose frog".to_string()),
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Number(3.0),
        ]);
        let record = map_row(&row, Category::Frogs).unwrap();
        match record.details {
            SpeciesDetails::Fauna(d) => assert_eq!(d.distribution, "3"),
            other => panic!("unexpected details: {:?}", other),
        }
    }

    #[test]
    fn test_order_is_preserved_and_blank_rows_dropped() {
        let rows: Vec<RawRow> = vec![
            ["sci-a", "A"].into_iter().collect(),
            ["sci-b", ""].into_iter().collect(),
            ["sci-c", "C"].into_iter().collect(),
        ];
        let names: Vec<String> = map_rows(rows, Category::Mangroves)
            .into_iter()
            .map(|r| r.common_name)
            .collect();
        assert_eq!(names, vec!["A", "C"]);
    }
}

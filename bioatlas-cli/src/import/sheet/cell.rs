//! Untyped spreadsheet cells and positional rows

use calamine::Data;

/// A single cell as read from a sheet
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

static EMPTY_CELL: Cell = Cell::Empty;

impl Cell {
    /// Text form of the cell. Whole numbers render without a fraction.
    pub fn to_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
            Cell::Bool(b) => b.to_string(),
        }
    }

    /// Empty, or text that is only whitespace
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) | Cell::Bool(_) => false,
        }
    }
}

impl From<&Data> for Cell {
    fn from(cell: &Data) -> Self {
        match cell {
            Data::Empty => Cell::Empty,
            Data::String(s) if s.is_empty() => Cell::Empty,
            Data::String(s) => Cell::Text(s.clone()),
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Float(f) => Cell::Number(*f),
            Data::Bool(b) => Cell::Bool(*b),
            Data::DateTime(dt) => Cell::Text(format!("{}", dt)),
            Data::DateTimeIso(s) => Cell::Text(s.clone()),
            Data::DurationIso(s) => Cell::Text(s.clone()),
            Data::Error(_) => Cell::Empty,
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(s.to_string())
        }
    }
}

/// One sheet row. Column position is the only way fields are identified.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow(Vec<Cell>);

impl RawRow {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self(cells)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Cell at `idx`; positions past the end of the row read as empty
    pub fn cell(&self, idx: usize) -> &Cell {
        self.0.get(idx).unwrap_or(&EMPTY_CELL)
    }

    /// Trimmed text of the cell at `idx`
    pub fn text(&self, idx: usize) -> String {
        self.cell(idx).to_text().trim().to_string()
    }
}

impl<S: AsRef<str>> FromIterator<S> for RawRow {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(|s| Cell::from(s.as_ref())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_text_drops_integral_fraction() {
        assert_eq!(Cell::Number(1234.0).to_text(), "1234");
        assert_eq!(Cell::Number(1.5).to_text(), "1.5");
        assert_eq!(Cell::from(&Data::Int(42)).to_text(), "42");
    }

    #[test]
    fn test_blank_detection() {
        assert!(Cell::Empty.is_blank());
        assert!(Cell::Text("   \t".to_string()).is_blank());
        assert!(!Cell::Text(" x ".to_string()).is_blank());
        assert!(!Cell::Number(0.0).is_blank());
    }

    #[test]
    fn test_calamine_conversion() {
        assert_eq!(Cell::from(&Data::String(String::new())), Cell::Empty);
        assert_eq!(
            Cell::from(&Data::String("Aves".to_string())),
            Cell::Text("Aves".to_string())
        );
        assert_eq!(Cell::from(&Data::Bool(true)), Cell::Bool(true));
    }

    #[test]
    fn test_out_of_range_cell_is_empty() {
        let row: RawRow = ["a", "b"].into_iter().collect();
        assert_eq!(row.cell(1), &Cell::Text("b".to_string()));
        assert_eq!(row.cell(20), &Cell::Empty);
        assert_eq!(row.text(20), "");
    }

    #[test]
    fn test_text_is_trimmed() {
        let row: RawRow = ["  Oriental Magpie-robin "].into_iter().collect();
        assert_eq!(row.text(0), "Oriental Magpie-robin");
    }
}

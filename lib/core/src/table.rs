use crate::error::{Error, Result};
use crate::record::TableId;

/// An in-memory tabular input: one header row plus string cells
///
/// Rows preserve insertion order. The matchers only interpret the columns
/// they are contracted to read; pass-through columns survive untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    #[must_use]
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Build a table from headers and pre-collected rows
    #[must_use]
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let mut table = Self::new(headers);
        for row in rows {
            table.push_row(row);
        }
        table
    }

    /// Append a row, padding or truncating it to the header width
    /// so positional access stays in bounds
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a named column, if present (exact header match)
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Position of a named column, or the schema error the matchers raise
    pub fn require_column(&self, table: TableId, name: &str) -> Result<usize> {
        self.column(name).ok_or_else(|| Error::MissingColumn {
            table,
            column: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::from_rows(
            vec!["N".into(), "P".into(), "K".into()],
            vec![vec!["10".into(), "5".into(), "20".into()]],
        )
    }

    #[test]
    fn test_column_lookup() {
        let table = sample();
        assert_eq!(table.column("P"), Some(1));
        assert_eq!(table.column("Zn"), None);
    }

    #[test]
    fn test_require_column_carries_table_identity() {
        let table = sample();
        let err = table
            .require_column(TableId::FertilizerDataset, "Nome")
            .unwrap_err();
        match err {
            Error::MissingColumn { table, column } => {
                assert_eq!(table, TableId::FertilizerDataset);
                assert_eq!(column, "Nome");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_push_row_pads_ragged_rows() {
        let mut table = Table::new(vec!["A".into(), "B".into(), "C".into()]);
        table.push_row(vec!["1".into()]);
        assert_eq!(table.rows()[0], vec!["1", "", ""]);
    }
}

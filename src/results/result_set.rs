use std::collections::HashMap;
use std::sync::Arc;

use super::row::CustomDbRow;
use crate::types::RowValues;

/// Rows returned by one statement, sharing a single column list and name index.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    pub results: Vec<CustomDbRow>,
    column_names: Option<Arc<Vec<String>>>,
    column_index: Arc<HashMap<String, usize>>,
}

impl ResultSet {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> ResultSet {
        ResultSet {
            results: Vec::with_capacity(capacity),
            ..ResultSet::default()
        }
    }

    /// Build a result set from column names and row values in one go.
    ///
    /// Handy for fakes and fixtures:
    /// ```rust
    /// use lightbnb_data::{ResultSet, RowValues};
    ///
    /// let rs = ResultSet::from_rows(
    ///     &["id", "name"],
    ///     vec![vec![RowValues::Int(1), RowValues::Text("Ada".into())]],
    /// );
    /// assert_eq!(rs.results[0].get("name").and_then(RowValues::as_text), Some("Ada"));
    /// ```
    #[must_use]
    pub fn from_rows(column_names: &[&str], rows: Vec<Vec<RowValues>>) -> ResultSet {
        let mut result_set = ResultSet::with_capacity(rows.len());
        result_set.set_column_names(Arc::new(
            column_names.iter().map(ToString::to_string).collect(),
        ));
        for row in rows {
            result_set.add_row_values(row);
        }
        result_set
    }

    /// Install the column list every row added afterwards will share.
    ///
    /// When a name repeats (e.g. `SELECT a.*, b.*`), lookups by name resolve
    /// to the last column carrying it.
    pub fn set_column_names(&mut self, column_names: Arc<Vec<String>>) {
        self.column_index = Arc::new(
            column_names
                .iter()
                .enumerate()
                .map(|(i, name)| (name.clone(), i))
                .collect(),
        );
        self.column_names = Some(column_names);
    }

    #[must_use]
    pub fn column_names(&self) -> &[String] {
        self.column_names.as_deref().map_or(&[], Vec::as_slice)
    }

    /// Add a row to the result set. Rows added before column names are set are dropped.
    pub fn add_row_values(&mut self, row_values: Vec<RowValues>) {
        if let Some(column_names) = &self.column_names {
            self.results.push(CustomDbRow::with_index(
                column_names.clone(),
                row_values,
                self.column_index.clone(),
            ));
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// First row, if any.
    #[must_use]
    pub fn first(&self) -> Option<&CustomDbRow> {
        self.results.first()
    }
}

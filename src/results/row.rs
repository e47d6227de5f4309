use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::error::LightbnbDbError;
use crate::types::RowValues;

/// A row from a database query result
///
/// This struct represents a single row from a database query result,
/// with access to both the column names and the values.
#[derive(Debug, Clone)]
pub struct CustomDbRow {
    /// The column names for this row (shared across all rows in a result set)
    pub column_names: Arc<Vec<String>>,
    /// The values for this row
    pub rows: Vec<RowValues>,
    #[doc(hidden)]
    pub(crate) column_index_cache: Arc<HashMap<String, usize>>,
}

impl CustomDbRow {
    /// Create a new database row
    #[must_use]
    pub fn new(column_names: Arc<Vec<String>>, rows: Vec<RowValues>) -> Self {
        let cache = Arc::new(
            column_names
                .iter()
                .enumerate()
                .map(|(i, name)| (name.clone(), i))
                .collect::<HashMap<_, _>>(),
        );
        Self::with_index(column_names, rows, cache)
    }

    pub(crate) fn with_index(
        column_names: Arc<Vec<String>>,
        rows: Vec<RowValues>,
        column_index_cache: Arc<HashMap<String, usize>>,
    ) -> Self {
        Self {
            column_names,
            rows,
            column_index_cache,
        }
    }

    /// Index of a column by name; a repeated name resolves to its last occurrence.
    #[must_use]
    pub fn get_column_index(&self, column_name: &str) -> Option<usize> {
        self.column_index_cache.get(column_name).copied()
    }

    /// Get a value from the row by column name
    #[must_use]
    pub fn get(&self, column_name: &str) -> Option<&RowValues> {
        self.get_column_index(column_name)
            .and_then(|idx| self.rows.get(idx))
    }

    /// Get a value from the row by column index
    #[must_use]
    pub fn get_by_index(&self, index: usize) -> Option<&RowValues> {
        self.rows.get(index)
    }

    fn require(&self, column_name: &str) -> Result<&RowValues, LightbnbDbError> {
        self.get(column_name).ok_or_else(|| {
            LightbnbDbError::ExecutionError(format!("column `{column_name}` missing from row"))
        })
    }

    fn mismatch(column_name: &str, expected: &str, got: &RowValues) -> LightbnbDbError {
        LightbnbDbError::ExecutionError(format!(
            "column `{column_name}`: expected {expected}, got {got:?}"
        ))
    }

    /// Required integer column.
    ///
    /// # Errors
    /// Returns `ExecutionError` if the column is absent, NULL, or not an integer.
    pub fn try_int(&self, column_name: &str) -> Result<i64, LightbnbDbError> {
        let value = self.require(column_name)?;
        value
            .as_int()
            .ok_or_else(|| Self::mismatch(column_name, "integer", value))
    }

    /// Required integer column narrowed to `i32` (the width of `serial`/`integer`).
    ///
    /// # Errors
    /// Returns `ExecutionError` if the column is absent, not an integer, or out of range.
    pub fn try_i32(&self, column_name: &str) -> Result<i32, LightbnbDbError> {
        let wide = self.try_int(column_name)?;
        i32::try_from(wide).map_err(|_| {
            LightbnbDbError::ExecutionError(format!(
                "column `{column_name}`: {wide} does not fit in i32"
            ))
        })
    }

    /// Required text column.
    ///
    /// # Errors
    /// Returns `ExecutionError` if the column is absent, NULL, or not text.
    pub fn try_text(&self, column_name: &str) -> Result<String, LightbnbDbError> {
        let value = self.require(column_name)?;
        value
            .as_text()
            .map(ToString::to_string)
            .ok_or_else(|| Self::mismatch(column_name, "text", value))
    }

    /// Nullable text column; an absent column also reads as `None`.
    ///
    /// # Errors
    /// Returns `ExecutionError` if the value is present but not text.
    pub fn try_opt_text(&self, column_name: &str) -> Result<Option<String>, LightbnbDbError> {
        match self.get(column_name) {
            None | Some(RowValues::Null) => Ok(None),
            Some(RowValues::Text(s)) => Ok(Some(s.clone())),
            Some(other) => Err(Self::mismatch(column_name, "text", other)),
        }
    }

    /// Required float column (integers are widened).
    ///
    /// # Errors
    /// Returns `ExecutionError` if the column is absent, NULL, or not numeric.
    pub fn try_float(&self, column_name: &str) -> Result<f64, LightbnbDbError> {
        let value = self.require(column_name)?;
        value
            .as_float()
            .ok_or_else(|| Self::mismatch(column_name, "float", value))
    }

    /// Required date column.
    ///
    /// # Errors
    /// Returns `ExecutionError` if the column is absent, NULL, or not a date.
    pub fn try_date(&self, column_name: &str) -> Result<NaiveDate, LightbnbDbError> {
        let value = self.require(column_name)?;
        value
            .as_date()
            .ok_or_else(|| Self::mismatch(column_name, "date", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(names: &[&str], values: Vec<RowValues>) -> CustomDbRow {
        CustomDbRow::new(
            Arc::new(names.iter().map(ToString::to_string).collect()),
            values,
        )
    }

    #[test]
    fn duplicate_column_names_resolve_to_last() {
        let r = row(
            &["id", "start_date", "id"],
            vec![
                RowValues::Int(7),
                RowValues::Text("2018-09-11".into()),
                RowValues::Int(42),
            ],
        );
        assert_eq!(r.try_int("id").unwrap(), 42);
        assert_eq!(r.get_column_index("id"), Some(2));
        assert_eq!(r.get_column_index("end_date"), None);
        assert_eq!(
            r.try_date("start_date").unwrap(),
            NaiveDate::from_ymd_opt(2018, 9, 11).unwrap()
        );
    }

    #[test]
    fn typed_getters_report_missing_and_mismatched_columns() {
        let r = row(
            &["name", "description", "rating"],
            vec![
                RowValues::Text("Ada".into()),
                RowValues::Null,
                RowValues::Int(4),
            ],
        );
        assert_eq!(r.try_text("name").unwrap(), "Ada");
        assert_eq!(r.try_opt_text("description").unwrap(), None);
        assert_eq!(r.try_opt_text("not_there").unwrap(), None);
        assert!((r.try_float("rating").unwrap() - 4.0).abs() < f64::EPSILON);

        let err = r.try_int("name").unwrap_err();
        assert!(err.to_string().contains("expected integer"));
        let err = r.try_text("email").unwrap_err();
        assert!(err.to_string().contains("`email` missing"));
    }

    #[test]
    fn narrowing_rejects_out_of_range() {
        let r = row(&["id"], vec![RowValues::Int(i64::from(i32::MAX) + 1)]);
        assert!(r.try_i32("id").is_err());
    }
}

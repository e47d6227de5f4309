use std::fmt::Write as _;

use crate::types::{QueryAndParams, RowValues};

/// Builder for a single-row `INSERT`.
///
/// Columns and values are pushed as pairs, so the column list and the
/// `VALUES ($1, …)` list cannot drift apart.
#[derive(Debug, Clone)]
pub struct InsertBuilder {
    table: String,
    columns: Vec<String>,
    values: Vec<RowValues>,
    returning: Option<String>,
}

impl InsertBuilder {
    #[must_use]
    pub fn into_table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            values: Vec::new(),
            returning: None,
        }
    }

    #[must_use]
    pub fn value(mut self, column: impl Into<String>, value: impl Into<RowValues>) -> Self {
        self.columns.push(column.into());
        self.values.push(value.into());
        self
    }

    #[must_use]
    pub fn returning(mut self, columns: impl Into<String>) -> Self {
        self.returning = Some(columns.into());
        self
    }

    #[must_use]
    pub fn build(&self) -> QueryAndParams {
        let mut sql = format!(
            "INSERT INTO {} ({})\nVALUES (",
            self.table,
            self.columns.join(", ")
        );
        for idx in 1..=self.values.len() {
            if idx > 1 {
                sql.push_str(", ");
            }
            let _ = write!(sql, "${idx}");
        }
        sql.push(')');

        if let Some(returning) = &self.returning {
            sql.push_str("\nRETURNING ");
            sql.push_str(returning);
        }

        QueryAndParams::new(sql, self.values.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_paired_columns_and_placeholders() {
        let q = InsertBuilder::into_table("users")
            .value("name", "Ada")
            .value("email", "ada@example.com")
            .value("password", "hash")
            .returning("*")
            .build();

        assert_eq!(
            q.query,
            "INSERT INTO users (name, email, password)\nVALUES ($1, $2, $3)\nRETURNING *"
        );
        assert_eq!(
            q.params,
            vec![
                RowValues::Text("Ada".into()),
                RowValues::Text("ada@example.com".into()),
                RowValues::Text("hash".into()),
            ]
        );
    }
}

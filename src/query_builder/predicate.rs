use std::fmt::Write as _;

use crate::types::RowValues;

#[derive(Debug, Clone, PartialEq)]
enum Fragment {
    Sql(String),
    Param(RowValues),
}

/// One boolean clause (for `WHERE` or `HAVING`) with its parameters in place.
///
/// ```rust
/// use lightbnb_data::query_builder::{Predicate, SelectBuilder};
///
/// let q = SelectBuilder::new("*", "properties")
///     .filter(Predicate::compare("city", "LIKE", "%Van%"))
///     .filter(Predicate::compare("cost_per_night", "<", 15000_i64))
///     .build();
/// assert_eq!(q.query, "SELECT *\nFROM properties\nWHERE city LIKE $1 AND cost_per_night < $2");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predicate {
    fragments: Vec<Fragment>,
}

impl Predicate {
    /// Start a predicate with raw SQL text.
    #[must_use]
    pub fn sql(text: impl Into<String>) -> Self {
        Self {
            fragments: vec![Fragment::Sql(text.into())],
        }
    }

    /// `column op <value>`, the common single-parameter shape.
    #[must_use]
    pub fn compare(column: &str, op: &str, value: impl Into<RowValues>) -> Self {
        Self::sql(format!("{column} {op} ")).bind(value)
    }

    /// Append raw SQL text.
    #[must_use]
    pub fn push_sql(mut self, text: impl Into<String>) -> Self {
        self.fragments.push(Fragment::Sql(text.into()));
        self
    }

    /// Append a bound value; it renders as the next positional placeholder.
    #[must_use]
    pub fn bind(mut self, value: impl Into<RowValues>) -> Self {
        self.fragments.push(Fragment::Param(value.into()));
        self
    }

    /// Number of values this predicate binds.
    #[must_use]
    pub fn param_count(&self) -> usize {
        self.fragments
            .iter()
            .filter(|f| matches!(f, Fragment::Param(_)))
            .count()
    }

    pub(crate) fn render_into(&self, sql: &mut String, params: &mut Vec<RowValues>) {
        for fragment in &self.fragments {
            match fragment {
                Fragment::Sql(text) => sql.push_str(text),
                Fragment::Param(value) => {
                    params.push(value.clone());
                    let _ = write!(sql, "${}", params.len());
                }
            }
        }
    }
}

/// Render `items` joined by `separator`, numbering placeholders after whatever
/// `params` already holds.
pub(crate) fn render_joined(
    items: &[Predicate],
    separator: &str,
    sql: &mut String,
    params: &mut Vec<RowValues>,
) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            sql.push_str(separator);
        }
        item.render_into(sql, params);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbering_continues_from_existing_params() {
        let mut sql = String::new();
        let mut params = vec![RowValues::Int(1)];
        Predicate::sql("a BETWEEN ")
            .bind(10_i64)
            .push_sql(" AND ")
            .bind(20_i64)
            .render_into(&mut sql, &mut params);
        assert_eq!(sql, "a BETWEEN $2 AND $3");
        assert_eq!(
            params,
            vec![RowValues::Int(1), RowValues::Int(10), RowValues::Int(20)]
        );
    }

    #[test]
    fn counts_params() {
        let p = Predicate::compare("x", "=", 1_i64).push_sql(" OR y = ").bind("z");
        assert_eq!(p.param_count(), 2);
        assert_eq!(Predicate::sql("TRUE").param_count(), 0);
    }
}

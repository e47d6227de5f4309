use super::predicate::{Predicate, render_joined};
use crate::types::{QueryAndParams, RowValues};

/// Builder for a single SELECT statement.
///
/// Clauses may be added in any order; they are always rendered as
/// `WHERE`, `GROUP BY`, `HAVING`, `ORDER BY`, `LIMIT`.
#[derive(Debug, Clone, Default)]
pub struct SelectBuilder {
    columns: String,
    from: String,
    joins: Vec<String>,
    filters: Vec<Predicate>,
    group_by: Vec<String>,
    having: Vec<Predicate>,
    order_by: Vec<String>,
    limit: Option<RowValues>,
}

impl SelectBuilder {
    #[must_use]
    pub fn new(columns: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            columns: columns.into(),
            from: from.into(),
            ..Self::default()
        }
    }

    /// Add a join clause verbatim, e.g. `JOIN b ON a.id = b.a_id`.
    #[must_use]
    pub fn join(mut self, clause: impl Into<String>) -> Self {
        self.joins.push(clause.into());
        self
    }

    /// AND a predicate into the `WHERE` clause.
    #[must_use]
    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.filters.push(predicate);
        self
    }

    /// AND a predicate into the `WHERE` clause when one is given.
    #[must_use]
    pub fn filter_opt(self, predicate: Option<Predicate>) -> Self {
        match predicate {
            Some(p) => self.filter(p),
            None => self,
        }
    }

    #[must_use]
    pub fn group_by(mut self, expr: impl Into<String>) -> Self {
        self.group_by.push(expr.into());
        self
    }

    /// AND a predicate into the `HAVING` clause.
    #[must_use]
    pub fn having(mut self, predicate: Predicate) -> Self {
        self.having.push(predicate);
        self
    }

    #[must_use]
    pub fn having_opt(self, predicate: Option<Predicate>) -> Self {
        match predicate {
            Some(p) => self.having(p),
            None => self,
        }
    }

    #[must_use]
    pub fn order_by(mut self, expr: impl Into<String>) -> Self {
        self.order_by.push(expr.into());
        self
    }

    /// Bound as a parameter, always the last placeholder in the statement.
    #[must_use]
    pub fn limit(mut self, limit: impl Into<RowValues>) -> Self {
        self.limit = Some(limit.into());
        self
    }

    /// Render the statement and its parameter list.
    #[must_use]
    pub fn build(&self) -> QueryAndParams {
        let mut sql = format!("SELECT {}\nFROM {}", self.columns, self.from);
        let mut params = Vec::new();

        for join in &self.joins {
            sql.push('\n');
            sql.push_str(join);
        }

        if !self.filters.is_empty() {
            sql.push_str("\nWHERE ");
            render_joined(&self.filters, " AND ", &mut sql, &mut params);
        }

        if !self.group_by.is_empty() {
            sql.push_str("\nGROUP BY ");
            sql.push_str(&self.group_by.join(", "));
        }

        if !self.having.is_empty() {
            sql.push_str("\nHAVING ");
            render_joined(&self.having, " AND ", &mut sql, &mut params);
        }

        if !self.order_by.is_empty() {
            sql.push_str("\nORDER BY ");
            sql.push_str(&self.order_by.join(", "));
        }

        if let Some(limit) = &self.limit {
            sql.push_str("\nLIMIT ");
            Predicate::default()
                .bind(limit.clone())
                .render_into(&mut sql, &mut params);
        }

        QueryAndParams::new(sql, params)
    }
}

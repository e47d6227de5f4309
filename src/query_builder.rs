//! Composable SQL builders that own their bound values.
//!
//! Clauses never contain placeholder numbers. Each [`Predicate`] carries its
//! values inline, and numbering happens once, when the whole statement is
//! rendered, so `$k` always refers to `params[k - 1]` however the clauses
//! were assembled.

mod dml;
mod predicate;
mod select;

pub use dml::InsertBuilder;
pub use predicate::Predicate;
pub use select::SelectBuilder;

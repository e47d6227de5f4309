/// Test utilities backed by an embedded `PostgreSQL` server
pub mod postgres;

pub use postgres::*;

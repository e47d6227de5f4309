// PostgreSQL module - pool setup, parameter binding and row decoding
//
// - config: connection configuration and pool setup
// - params: parameter conversion between `RowValues` and PostgreSQL types
// - query: statement execution and result-set building

pub mod config;
pub mod params;
pub mod query;

pub use config::ConfigAndPool;
pub use params::{Params, check_bindable};
pub use query::{build_result_set_from_statement, execute_query_on_client, postgres_extract_value};

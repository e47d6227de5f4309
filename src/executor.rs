use async_trait::async_trait;

use crate::error::LightbnbDbError;
use crate::postgres::{ConfigAndPool, execute_query_on_client};
use crate::results::ResultSet;
use crate::types::{QueryAndParams, RowValues};

/// Something that can run a single parameterized statement and hand back its rows.
///
/// Every accessor in this crate takes one of these instead of reaching for a
/// global pool, so callers decide which pool (or fake) a call goes to.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Executes a single statement (a SELECT, or DML with RETURNING) and returns the rows.
    async fn execute_select(
        &self,
        query: &str,
        params: &[RowValues],
    ) -> Result<ResultSet, LightbnbDbError>;

    /// Convenience wrapper over [`QueryExecutor::execute_select`] for a bundled statement.
    async fn run(&self, statement: &QueryAndParams) -> Result<ResultSet, LightbnbDbError> {
        self.execute_select(&statement.query, &statement.params)
            .await
    }
}

#[async_trait]
impl QueryExecutor for ConfigAndPool {
    async fn execute_select(
        &self,
        query: &str,
        params: &[RowValues],
    ) -> Result<ResultSet, LightbnbDbError> {
        let client = self.get_connection().await?;
        execute_query_on_client(&client, query, params).await
    }
}

#[async_trait]
impl QueryExecutor for deadpool_postgres::Pool {
    async fn execute_select(
        &self,
        query: &str,
        params: &[RowValues],
    ) -> Result<ResultSet, LightbnbDbError> {
        let client = self.get().await?;
        execute_query_on_client(&client, query, params).await
    }
}

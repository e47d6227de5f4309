use deadpool_postgres::{Config as PgConfig, Object, Pool, Runtime};
use tokio_postgres::NoTls;

use crate::error::LightbnbDbError;

/// Configuration and connection pool for the LightBnB database
#[derive(Clone, Debug)]
pub struct ConfigAndPool {
    /// The connection pool
    pub pool: Pool,
}

impl ConfigAndPool {
    /// Asynchronous initializer for `ConfigAndPool` with Postgres
    ///
    /// # Errors
    /// Returns `LightbnbDbError::ConfigError` if required config fields are missing or
    /// `LightbnbDbError::ConnectionError` if pool creation fails.
    #[allow(clippy::unused_async)]
    pub async fn new_postgres(pg_config: PgConfig) -> Result<Self, LightbnbDbError> {
        if pg_config.dbname.is_none() {
            return Err(LightbnbDbError::ConfigError(
                "dbname is required".to_string(),
            ));
        }
        if pg_config.host.is_none() {
            return Err(LightbnbDbError::ConfigError("host is required".to_string()));
        }
        if pg_config.port.is_none() {
            return Err(LightbnbDbError::ConfigError("port is required".to_string()));
        }
        if pg_config.user.is_none() {
            return Err(LightbnbDbError::ConfigError("user is required".to_string()));
        }
        if pg_config.password.is_none() {
            return Err(LightbnbDbError::ConfigError(
                "password is required".to_string(),
            ));
        }

        let pg_pool = pg_config
            .create_pool(Some(Runtime::Tokio1), NoTls)
            .map_err(|e| {
                LightbnbDbError::ConnectionError(format!("Failed to create Postgres pool: {e}"))
            })?;

        tracing::debug!(
            host = ?pg_config.host,
            dbname = ?pg_config.dbname,
            "created postgres pool"
        );

        Ok(ConfigAndPool { pool: pg_pool })
    }

    /// Check a client out of the pool.
    ///
    /// # Errors
    /// Returns `LightbnbDbError::Pool` if the pool cannot hand out a connection.
    pub async fn get_connection(&self) -> Result<Object, LightbnbDbError> {
        Ok(self.pool.get().await?)
    }
}

use postgresql_embedded::PostgreSQL;

use crate::error::LightbnbDbError;
use crate::postgres::ConfigAndPool;

/// Represents a running embedded `PostgreSQL` instance.
pub struct EmbeddedPostgres {
    pub postgresql: PostgreSQL,
    pub port: u16,
    pub database_url: String,
    /// The working configuration with the embedded server's credentials
    pub config: deadpool_postgres::Config,
}

/// Set up an embedded `PostgreSQL` instance with an empty database named `dbname`.
///
/// # Errors
/// Returns an error if the embedded server cannot be set up or started, if the
/// database cannot be created, or if the post-start connectivity check fails.
pub async fn setup_postgres_embedded(
    dbname: &str,
) -> Result<EmbeddedPostgres, Box<dyn std::error::Error>> {
    let mut postgresql = PostgreSQL::default();
    postgresql.setup().await?;
    postgresql.start().await?;

    let settings = postgresql.settings();
    let port = settings.port;
    let host = settings.host.clone();
    let user = settings.username.clone();
    let password = settings.password.clone();

    postgresql.create_database(dbname).await?;

    let database_url = format!("postgres://{user}:{password}@{host}:{port}/{dbname}");
    tracing::info!(port, %database_url, "embedded postgres started");

    let mut config = deadpool_postgres::Config::new();
    config.dbname = Some(dbname.to_string());
    config.host = Some(host);
    config.port = Some(port);
    config.user = Some(user);
    config.password = Some(password);

    let cap = ConfigAndPool::new_postgres(config.clone()).await?;
    let client = cap.get_connection().await?;
    client.execute("SELECT 1", &[]).await?;

    Ok(EmbeddedPostgres {
        postgresql,
        port,
        database_url,
        config,
    })
}

/// Run a multi-statement script (schema, seed data) on one pooled client.
///
/// # Errors
/// Returns the pool or driver error if checkout or execution fails.
pub async fn execute_batch(db: &ConfigAndPool, script: &str) -> Result<(), LightbnbDbError> {
    let client = db.get_connection().await?;
    client.batch_execute(script).await?;
    Ok(())
}

/// Stop a previously started embedded `PostgreSQL` instance.
pub async fn stop_postgres_embedded(postgres: EmbeddedPostgres) {
    let EmbeddedPostgres { postgresql, .. } = postgres;
    if let Err(err) = postgresql.stop().await {
        tracing::warn!(error = %err, "failed to stop embedded postgres");
    }
}

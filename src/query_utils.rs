use crate::error::LightbnbDbError;
use crate::executor::QueryExecutor;
use crate::models::FromDbRow;
use crate::results::ResultSet;
use crate::types::QueryAndParams;

/// Run one statement, logging the failure (with the operation name) before handing it back.
pub(crate) async fn run_logged<E>(
    db: &E,
    operation: &'static str,
    statement: &QueryAndParams,
) -> Result<ResultSet, LightbnbDbError>
where
    E: QueryExecutor + ?Sized,
{
    tracing::debug!(
        operation,
        sql = %statement.query,
        params = ?statement.params,
        "executing statement"
    );
    db.run(statement).await.inspect_err(|err| {
        tracing::error!(operation, error = %err, "query failed");
    })
}

fn decode_logged<T: FromDbRow>(
    operation: &'static str,
    result_set: &ResultSet,
) -> Result<Vec<T>, LightbnbDbError> {
    result_set
        .results
        .iter()
        .map(T::from_row)
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|err| {
            tracing::error!(operation, error = %err, "could not decode row");
        })
}

/// All rows, decoded.
pub(crate) async fn fetch_all<E, T>(
    db: &E,
    operation: &'static str,
    statement: &QueryAndParams,
) -> Result<Vec<T>, LightbnbDbError>
where
    E: QueryExecutor + ?Sized,
    T: FromDbRow,
{
    let result_set = run_logged(db, operation, statement).await?;
    decode_logged(operation, &result_set)
}

/// The first row, or `None` when the statement returned nothing.
pub(crate) async fn fetch_optional<E, T>(
    db: &E,
    operation: &'static str,
    statement: &QueryAndParams,
) -> Result<Option<T>, LightbnbDbError>
where
    E: QueryExecutor + ?Sized,
    T: FromDbRow,
{
    let result_set = run_logged(db, operation, statement).await?;
    match result_set.first() {
        Some(row) => T::from_row(row).map(Some).inspect_err(|err| {
            tracing::error!(operation, error = %err, "could not decode row");
        }),
        None => Ok(None),
    }
}
